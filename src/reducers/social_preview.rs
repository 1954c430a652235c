//! Social preview reducer: title, description and image edits for one platform.

use crate::constants::DEFAULT_PLATFORMS;
use crate::error::RouterError;
use crate::messages::{Action, PreviewUpdate};
use crate::models::SocialPreview;
use crate::router::{Partition, TaggedRouter};

/// Router over the given platforms, each starting from the default preview
/// and sharing [`update`].
pub fn router_for<'a>(
    platforms: impl IntoIterator<Item = &'a str>,
) -> Result<TaggedRouter<SocialPreview, Action>, RouterError> {
    TaggedRouter::new(
        platforms
            .into_iter()
            .map(|platform| Partition::new(platform, SocialPreview::default(), update))
            .collect(),
    )
}

/// The stock Facebook + Twitter router.
pub fn social_previews_router() -> Result<TaggedRouter<SocialPreview, Action>, RouterError> {
    router_for(DEFAULT_PLATFORMS)
}

/// Applies `action` to a single platform's preview. Returns true if the
/// action was handled.
pub fn update(state: &mut SocialPreview, action: &Action) -> bool {
    match &action.update {
        PreviewUpdate::SetTitle { title } => {
            state.title = title.clone();
            true
        }
        PreviewUpdate::SetDescription { description } => {
            state.description = description.clone();
            true
        }
        PreviewUpdate::SetImageUrl { image_url } => {
            state.image.url = image_url.clone();
            true
        }
        PreviewUpdate::SetImageType { image_type } => {
            state.image.image_type = image_type.clone();
            true
        }
        PreviewUpdate::Unknown => false,
    }
}
