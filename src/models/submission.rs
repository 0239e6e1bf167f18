use garde::Validate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Beverage category selector on the submission form. `Auto` defers
/// classification to the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BeverageCategory {
    #[default]
    Auto,
    Spirits,
    Wine,
    Beer,
}

/// The label image attached to a submission.
#[derive(Debug, Clone)]
pub struct LabelImage {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// One label-verification submission: the application metadata plus the
/// label image. Built fresh per attempt and discarded once the request
/// completes.
#[derive(Debug, Clone, Default, Validate)]
pub struct Submission {
    #[garde(skip)]
    pub category: BeverageCategory,

    #[garde(length(min = 1, max = 200))]
    pub brand_name: String,

    #[garde(length(min = 1, max = 200))]
    pub product_class: String,

    /// Percent ABV as entered, e.g. "45" or "13.68".
    #[garde(pattern(r"^\d+(\.\d+)?$"))]
    pub alcohol_content: String,

    #[garde(skip)]
    pub net_contents: Option<String>,

    /// Absence is a validation error, caught before any network call.
    #[garde(required, inner(custom(is_label_image)))]
    pub image: Option<LabelImage>,
}

fn is_label_image(image: &LabelImage, _ctx: &()) -> garde::Result {
    if image.content_type.starts_with("image/") {
        Ok(())
    } else {
        Err(garde::Error::new("the uploaded file must be an image"))
    }
}
