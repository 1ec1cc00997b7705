use serde::Deserialize;
use validator::Validate;

/// Payload naming the marketplace listing to import.
#[derive(Debug, Deserialize, Validate)]
pub struct ImportForm {
    #[validate(length(min = 1))]
    pub url: String,
}
