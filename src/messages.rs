// src/messages.rs
//
// The actions the social preview forms dispatch.  `platform` picks the
// partition, `update` says what to change in it.
//
use serde::Deserialize;

use crate::router::Tagged;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Action {
    /// Partition the action targets.  A missing platform deserializes to the
    /// empty string, which never matches a registered tag.
    #[serde(default)]
    pub platform: String,
    #[serde(flatten)]
    pub update: PreviewUpdate,
}

/// Closed set of updates the shared reducer understands.  Any other `type`
/// on the wire lands in `Unknown` and is ignored by the reducer.  Decode
/// only: `Unknown` drops the original type string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreviewUpdate {
    SetTitle {
        title: String,
    },
    SetDescription {
        description: String,
    },
    SetImageUrl {
        #[serde(rename = "imageUrl")]
        image_url: String,
    },
    SetImageType {
        #[serde(rename = "imageType")]
        image_type: String,
    },
    #[serde(other)]
    Unknown,
}

impl Action {
    pub fn new(platform: impl Into<String>, update: PreviewUpdate) -> Self {
        Self {
            platform: platform.into(),
            update,
        }
    }

    pub fn set_title(platform: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(platform, PreviewUpdate::SetTitle { title: title.into() })
    }

    pub fn set_description(platform: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(
            platform,
            PreviewUpdate::SetDescription {
                description: description.into(),
            },
        )
    }

    pub fn set_image_url(platform: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self::new(
            platform,
            PreviewUpdate::SetImageUrl {
                image_url: image_url.into(),
            },
        )
    }

    pub fn set_image_type(platform: impl Into<String>, image_type: impl Into<String>) -> Self {
        Self::new(
            platform,
            PreviewUpdate::SetImageType {
                image_type: image_type.into(),
            },
        )
    }
}

impl Tagged for Action {
    fn tag(&self) -> &str {
        &self.platform
    }
}
