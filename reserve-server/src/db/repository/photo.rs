//! Photo Repository

use super::RepoResult;
use shared::models::{Photo, PhotoCreate, PhotoUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, owner_id, image_url, caption, created_at";

pub async fn find_by_owner(pool: &SqlitePool, owner_id: i64) -> RepoResult<Vec<Photo>> {
    let photos = sqlx::query_as::<_, Photo>(&format!(
        "SELECT {COLUMNS} FROM photo WHERE owner_id = ? ORDER BY id"
    ))
    .bind(owner_id)
    .fetch_all(pool)
    .await?;
    Ok(photos)
}

pub async fn create(
    pool: &SqlitePool,
    owner_id: i64,
    data: &PhotoCreate,
    now: i64,
) -> RepoResult<Photo> {
    let photo = sqlx::query_as::<_, Photo>(&format!(
        "INSERT INTO photo (owner_id, image_url, caption, created_at) VALUES (?1, ?2, ?3, ?4) RETURNING {COLUMNS}"
    ))
    .bind(owner_id)
    .bind(&data.image_url)
    .bind(&data.caption)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(photo)
}

pub async fn update(
    pool: &SqlitePool,
    owner_id: i64,
    id: i64,
    data: &PhotoUpdate,
) -> RepoResult<Option<Photo>> {
    let photo = sqlx::query_as::<_, Photo>(&format!(
        "UPDATE photo SET image_url = COALESCE(?1, image_url), caption = COALESCE(?2, caption) \
         WHERE id = ?3 AND owner_id = ?4 RETURNING {COLUMNS}"
    ))
    .bind(&data.image_url)
    .bind(&data.caption)
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;
    Ok(photo)
}

pub async fn delete(pool: &SqlitePool, owner_id: i64, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM photo WHERE id = ? AND owner_id = ?")
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support;

    #[tokio::test]
    async fn test_photo_lifecycle() {
        let pool = test_support::pool().await;
        let company = test_support::company(&pool, "c@example.com").await;
        let data = PhotoCreate {
            image_url: "https://img.example.com/terrace.jpg".to_string(),
            caption: Some("Terrace".to_string()),
        };

        let photo = create(&pool, company.id, &data, 5).await.unwrap();
        assert_eq!(find_by_owner(&pool, company.id).await.unwrap(), vec![photo.clone()]);

        let patch = PhotoUpdate {
            caption: Some("Terrace at night".to_string()),
            ..Default::default()
        };
        let updated = update(&pool, company.id, photo.id, &patch).await.unwrap().unwrap();
        assert_eq!(updated.caption.as_deref(), Some("Terrace at night"));
        assert_eq!(updated.image_url, photo.image_url);

        assert!(delete(&pool, company.id, photo.id).await.unwrap());
        assert!(!delete(&pool, company.id, photo.id).await.unwrap());
    }
}
