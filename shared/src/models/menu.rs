//! Menu Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Menu category (全局，由迁移预置)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuCategory {
    pub id: i64,
    pub name: String,
}

/// Menu item owned by a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Menu {
    pub id: i64,
    pub company_id: i64,
    pub category_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    /// Price in cents
    pub price: i64,
    pub created_at: i64,
}

/// Create menu payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuCreate {
    pub category_id: Option<i64>,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    pub price: i64,
}

/// Update menu payload
///
/// Missing fields are left alone. `"category_id": null` removes the
/// category and an empty `description` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MenuUpdate {
    #[serde(
        default,
        deserialize_with = "crate::util::deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<Option<i64>>,
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    pub price: Option<i64>,
}

/// Company menu page: own items plus every category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuListing {
    pub menus: Vec<Menu>,
    pub menu_categories: Vec<MenuCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_tells_null_from_missing() {
        let patch: MenuUpdate = serde_json::from_str(r#"{"price": 900}"#).unwrap();
        assert_eq!(patch.category_id, None);

        let patch: MenuUpdate = serde_json::from_str(r#"{"category_id": null}"#).unwrap();
        assert_eq!(patch.category_id, Some(None));

        let patch: MenuUpdate = serde_json::from_str(r#"{"category_id": 3}"#).unwrap();
        assert_eq!(patch.category_id, Some(Some(3)));
    }
}
