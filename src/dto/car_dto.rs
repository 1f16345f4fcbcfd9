use serde::Deserialize;
use validator::Validate;

// Request para registrar un coche
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    #[validate(length(min = 2, max = 100))]
    pub brand: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2030))]
    pub year: Option<i32>,

    #[validate(length(min = 5, max = 20))]
    pub license_plate: String,
}
