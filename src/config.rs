//! Which platforms a store is built with.
//!
//! ```json
//! { "platforms": ["facebook", "twitter"] }
//! ```
//!
//! A missing `platforms` key falls back to the defaults in `constants`.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PLATFORMS;
use crate::error::RouterError;
use crate::messages::Action;
use crate::models::SocialPreview;
use crate::reducers::social_preview::router_for;
use crate::router::TaggedRouter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,
}

fn default_platforms() -> Vec<String> {
    DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect()
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            platforms: default_platforms(),
        }
    }
}

impl RouterConfig {
    pub fn from_json(raw: &str) -> Result<Self, RouterError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn router(&self) -> Result<TaggedRouter<SocialPreview, Action>, RouterError> {
        router_for(self.platforms.iter().map(String::as_str))
    }
}
