use sqlx::FromRow;

/// A row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i32,
    /// Public URL path of the photo, e.g. `/uploads/<uuid>.jpg`.
    pub photo_path: String,
}

/// Column order used by paged listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserOrder {
    Id,
    Name,
    Age,
}

impl UserOrder {
    /// `ORDER BY` clause body. Ties fall back to `id` so pages never overlap.
    /// Names sort on their lower-cased key, so case does not split the alphabet.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name_key, id",
            Self::Age => "age, id",
        }
    }
}
