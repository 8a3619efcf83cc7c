use crate::database::DbError;
use crate::database::user::{User, UserOrder};
use sqlx::{Executor, Sqlite};

pub struct UserStore;

/// Search and sort key stored next to `name`. SQLite only folds ASCII case, so folding
/// happens here with full Unicode rules.
fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// `LIKE` pattern over `name_key`. `None` and the empty term match every row.
fn name_pattern(name_filter: Option<&str>) -> String {
    format!("%{}%", name_key(name_filter.unwrap_or_default()))
}

impl UserStore {
    //================================================================================
    // Listing
    //================================================================================

    /// Number of users whose name contains `name_filter`.
    pub async fn count(
        executor: impl Executor<'_, Database = Sqlite>,
        name_filter: Option<&str>,
    ) -> Result<i64, DbError> {
        Ok(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE name_key LIKE ?")
                .bind(name_pattern(name_filter))
                .fetch_one(executor)
                .await?,
        )
    }

    /// One page of users whose name contains `name_filter`, in `order`.
    pub async fn list_page(
        executor: impl Executor<'_, Database = Sqlite>,
        name_filter: Option<&str>,
        order: UserOrder,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<User>, DbError> {
        let query = format!(
            r"
            SELECT id, name, age, photo_path
            FROM users
            WHERE name_key LIKE ?
            ORDER BY {}
            LIMIT ? OFFSET ?
            ",
            order.as_sql()
        );
        Ok(sqlx::query_as::<_, User>(&query)
            .bind(name_pattern(name_filter))
            .bind(limit)
            .bind(offset)
            .fetch_all(executor)
            .await?)
    }

    //================================================================================
    // Core User Management (CRUD)
    //================================================================================

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
    ) -> Result<Option<User>, DbError> {
        Ok(sqlx::query_as::<_, User>(
            "SELECT id, name, age, photo_path FROM users WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(executor)
        .await?)
    }

    pub async fn find_photo_path(
        executor: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
    ) -> Result<Option<String>, DbError> {
        Ok(
            sqlx::query_scalar::<_, String>("SELECT photo_path FROM users WHERE id = ?")
                .bind(user_id)
                .fetch_optional(executor)
                .await?,
        )
    }

    /// Creates a new user and returns the generated id.
    pub async fn insert(
        executor: impl Executor<'_, Database = Sqlite>,
        name: &str,
        age: i32,
        photo_path: &str,
    ) -> Result<i64, DbError> {
        Ok(sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (name, name_key, age, photo_path) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(name)
        .bind(name_key(name))
        .bind(age)
        .bind(photo_path)
        .fetch_one(executor)
        .await?)
    }

    /// Overwrites name, age and photo path. Returns the number of rows touched.
    pub async fn update(
        executor: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
        name: &str,
        age: i32,
        photo_path: &str,
    ) -> Result<u64, DbError> {
        let result = sqlx::query(
            "UPDATE users SET name = ?, name_key = ?, age = ?, photo_path = ? WHERE id = ?",
        )
        .bind(name)
        .bind(name_key(name))
        .bind(age)
        .bind(photo_path)
        .bind(user_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    /// Deletes a user by id. Deleting a missing id affects zero rows.
    pub async fn delete(
        executor: impl Executor<'_, Database = Sqlite>,
        user_id: i64,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
