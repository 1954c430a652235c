use serde::{Deserialize, Serialize};

/// Image attached to a social preview.  Only `url` and `type` are driven by
/// actions; the remaining fields are filled in by the surrounding app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewImage {
    pub bytes: Option<Vec<u8>>,
    #[serde(rename = "type")]
    pub image_type: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub url: String,
    pub id: Option<String>,
}

/// Form state for a single platform (one partition of the composite state).
///
/// `Default` is the initial state every partition starts from: empty strings,
/// no errors and an image with every optional field unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPreview {
    pub title: String,
    pub description: String,
    pub errors: Vec<String>,
    pub image: PreviewImage,
}
