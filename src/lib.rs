//! Per-platform social preview state behind a tagged state router.
//!
//! A [`TaggedRouter`] multiplexes one shared reducer over named partitions
//! (`facebook`, `twitter`, …).  An action carries a `platform` tag and only
//! the partition with that tag is recomputed; everything else is handed
//! through untouched.
//!
//! ```rust
//! use social_preview_state::{social_previews_router, Action, Store};
//!
//! let mut store = Store::new(social_previews_router()?);
//! store.dispatch(&Action::set_title("twitter", "T1"));
//! assert_eq!(store.state().get("twitter").unwrap().title, "T1");
//! assert_eq!(store.state().get("facebook").unwrap().title, "");
//! # Ok::<(), social_preview_state::RouterError>(())
//! ```

use wasm_bindgen::prelude::*;

mod macros;

pub mod bindings;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod reducers;
pub mod router;
pub mod schema_validation;
pub mod state;


pub use config::RouterConfig;
pub use error::RouterError;
pub use messages::{Action, PreviewUpdate};
pub use models::{PreviewImage, SocialPreview};
pub use reducers::social_preview::{router_for, social_previews_router};
pub use router::{Partition, Reducer, Tagged, TaggedRouter};
pub use state::{CompositeState, PreviewStore, Store};

// Entry point when loaded as a WASM module
#[wasm_bindgen(start)]
pub fn start() {
    // Initialize better panic messages
    console_error_panic_hook::set_once();
}
