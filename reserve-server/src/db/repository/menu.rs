//! Menu Repository

use super::RepoResult;
use shared::models::{Menu, MenuCategory, MenuCreate, MenuUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, company_id, category_id, name, description, price, created_at";

/// All categories (global, seeded by migration)
pub async fn find_categories(pool: &SqlitePool) -> RepoResult<Vec<MenuCategory>> {
    let categories =
        sqlx::query_as::<_, MenuCategory>("SELECT id, name FROM menu_category ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(categories)
}

pub async fn category_exists(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menu_category WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

pub async fn find_by_company(pool: &SqlitePool, company_id: i64) -> RepoResult<Vec<Menu>> {
    let menus = sqlx::query_as::<_, Menu>(&format!(
        "SELECT {COLUMNS} FROM menu WHERE company_id = ? ORDER BY id"
    ))
    .bind(company_id)
    .fetch_all(pool)
    .await?;
    Ok(menus)
}

pub async fn create(
    pool: &SqlitePool,
    company_id: i64,
    data: &MenuCreate,
    now: i64,
) -> RepoResult<Menu> {
    let menu = sqlx::query_as::<_, Menu>(&format!(
        "INSERT INTO menu (company_id, category_id, name, description, price, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING {COLUMNS}"
    ))
    .bind(company_id)
    .bind(data.category_id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(menu)
}

/// Partial update of an owned item; `None` when it does not exist for this company.
///
/// `category_id: Some(None)` and an empty `description` write NULL.
pub async fn update(
    pool: &SqlitePool,
    company_id: i64,
    id: i64,
    data: &MenuUpdate,
) -> RepoResult<Option<Menu>> {
    let menu = sqlx::query_as::<_, Menu>(&format!(
        "UPDATE menu SET \
         category_id = CASE WHEN ?7 THEN ?1 ELSE category_id END, \
         name = COALESCE(?2, name), \
         description = CASE WHEN ?3 IS NULL THEN description ELSE NULLIF(?3, '') END, \
         price = COALESCE(?4, price) \
         WHERE id = ?5 AND company_id = ?6 RETURNING {COLUMNS}"
    ))
    .bind(data.category_id.flatten())
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price)
    .bind(id)
    .bind(company_id)
    .bind(data.category_id.is_some())
    .fetch_optional(pool)
    .await?;
    Ok(menu)
}

pub async fn delete(pool: &SqlitePool, company_id: i64, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM menu WHERE id = ? AND company_id = ?")
        .bind(id)
        .bind(company_id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support;

    fn soup() -> MenuCreate {
        MenuCreate {
            category_id: Some(1),
            name: "Gazpacho".to_string(),
            description: None,
            price: 650,
        }
    }

    #[tokio::test]
    async fn test_categories_are_seeded() {
        let pool = test_support::pool().await;
        let names: Vec<String> = find_categories(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Starters", "Main Courses", "Desserts", "Drinks"]);
        assert!(category_exists(&pool, 1).await.unwrap());
        assert!(!category_exists(&pool, 99).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let pool = test_support::pool().await;
        let company = test_support::company(&pool, "c@example.com").await;

        let menu = create(&pool, company.id, &soup(), 10).await.unwrap();
        assert_eq!(menu.price, 650);

        let patch = MenuUpdate {
            price: Some(700),
            ..Default::default()
        };
        let updated = update(&pool, company.id, menu.id, &patch).await.unwrap().unwrap();
        assert_eq!(updated.price, 700);
        assert_eq!(updated.name, "Gazpacho");

        assert!(delete(&pool, company.id, menu.id).await.unwrap());
        assert!(find_by_company(&pool, company.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_can_clear_category_and_description() {
        let pool = test_support::pool().await;
        let company = test_support::company(&pool, "c@example.com").await;
        let mut form = soup();
        form.description = Some("Cold tomato soup".to_string());
        let menu = create(&pool, company.id, &form, 0).await.unwrap();

        // untouched fields survive a price change
        let patch = MenuUpdate {
            price: Some(700),
            ..Default::default()
        };
        let kept = update(&pool, company.id, menu.id, &patch).await.unwrap().unwrap();
        assert_eq!(kept.category_id, Some(1));
        assert_eq!(kept.description.as_deref(), Some("Cold tomato soup"));

        let patch = MenuUpdate {
            category_id: Some(None),
            description: Some(String::new()),
            ..Default::default()
        };
        let cleared = update(&pool, company.id, menu.id, &patch).await.unwrap().unwrap();
        assert_eq!(cleared.category_id, None);
        assert_eq!(cleared.description, None);
        assert_eq!(cleared.price, 700);

        let patch = MenuUpdate {
            category_id: Some(Some(3)),
            ..Default::default()
        };
        let moved = update(&pool, company.id, menu.id, &patch).await.unwrap().unwrap();
        assert_eq!(moved.category_id, Some(3));
    }

    #[tokio::test]
    async fn test_other_company_cannot_touch_item() {
        let pool = test_support::pool().await;
        let owner = test_support::company(&pool, "c@example.com").await;
        let other = test_support::company(&pool, "x@example.com").await;
        let menu = create(&pool, owner.id, &soup(), 0).await.unwrap();

        let patch = MenuUpdate {
            name: Some("Stolen".to_string()),
            ..Default::default()
        };
        assert!(update(&pool, other.id, menu.id, &patch).await.unwrap().is_none());
        assert!(!delete(&pool, other.id, menu.id).await.unwrap());
        assert!(find_by_company(&pool, other.id).await.unwrap().is_empty());
    }
}
