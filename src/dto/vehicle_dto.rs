use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub brand: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1950, max = 2100))]
    pub year: Option<u32>,

    #[validate(length(min = 1, max = 50))]
    pub registration_number: String,

    pub chassis_number: Option<String>,
    pub color: Option<String>,
    pub fuel_type: Option<String>,
    pub mileage: Option<u64>,

    #[validate(range(min = 0.0))]
    pub daily_price: f64,

    /// Omitted on create; a new vehicle starts available.
    pub status: Option<String>,
}
