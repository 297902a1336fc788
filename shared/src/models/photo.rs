//! Photo Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Company photo; the image itself lives in external storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Photo {
    pub id: i64,
    pub owner_id: i64,
    pub image_url: String,
    pub caption: Option<String>,
    pub created_at: i64,
}

/// Create photo payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PhotoCreate {
    #[validate(length(min = 1, max = 2048))]
    pub image_url: String,
    #[validate(length(max = 500))]
    pub caption: Option<String>,
}

/// Update photo payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PhotoUpdate {
    #[validate(length(min = 1, max = 2048))]
    pub image_url: Option<String>,
    #[validate(length(max = 500))]
    pub caption: Option<String>,
}
