use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[validate(length(equal = 24))]
    pub client: String,

    #[validate(length(equal = 24))]
    pub vehicle: String,

    #[validate(length(min = 1))]
    pub start_date: String,

    #[validate(length(min = 1))]
    pub end_date: String,

    #[validate(length(min = 2, max = 50))]
    pub status: Option<String>,

    #[validate(custom(function = not_blank))]
    pub note: Option<String>,
}
