use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[validate(length(min = 2, max = 100))]
    pub first_name: String,

    #[validate(length(min = 2, max = 100))]
    pub last_name: String,

    pub birth_date: Option<String>,

    #[validate(length(min = 6, max = 20))]
    pub phone: String,

    #[validate(email)]
    pub email: Option<String>,

    pub address: Option<String>,
    pub wilaya: Option<String>,
    pub national_id: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub license_number: String,

    pub license_delivery_date: Option<String>,
    pub license_expiry_date: Option<String>,
}
