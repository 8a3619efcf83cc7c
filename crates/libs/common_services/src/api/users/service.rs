use crate::api::users::error::UsersError;
use crate::api::users::interfaces::{PageRequest, UserForm, total_pages};
use crate::database::user::{User, UserOrder};
use crate::database::user_store::UserStore;
use crate::photo_store::PhotoStore;
use sqlx::SqlitePool;
use tracing::{info, instrument, warn};

/// One page of a listing plus what the pagination controls need.
#[derive(Debug)]
pub struct UserListing {
    pub users: Vec<User>,
    pub current_page: u32,
    pub total_pages: u32,
}

/// Count and fetch one page of users. Pages past the end come back empty.
#[instrument(skip(pool))]
pub async fn list_users(
    pool: &SqlitePool,
    name_filter: Option<&str>,
    order: UserOrder,
    page: PageRequest,
) -> Result<UserListing, UsersError> {
    let total = UserStore::count(pool, name_filter).await?;
    let users =
        UserStore::list_page(pool, name_filter, order, page.offset(), page.limit()).await?;

    Ok(UserListing {
        users,
        current_page: page.number,
        total_pages: total_pages(total, page.size),
    })
}

#[instrument(skip(pool))]
pub async fn get_user(pool: &SqlitePool, user_id: i64) -> Result<User, UsersError> {
    UserStore::find_by_id(pool, user_id)
        .await?
        .ok_or(UsersError::UserNotFound(user_id))
}

/// Store the photo, then insert the row. A form without a photo inserts nothing, and a
/// failed insert removes the photo it just stored.
#[instrument(skip(pool, photos, form), fields(name = %form.name, age = form.age))]
pub async fn create_user(
    pool: &SqlitePool,
    photos: &PhotoStore,
    form: UserForm,
) -> Result<i64, UsersError> {
    let Some(photo) = form.photo else {
        return Err(UsersError::MissingPhoto);
    };

    let photo_path = photos.save(&photo.file_name, &photo.bytes).await?;
    match UserStore::insert(pool, &form.name, form.age, &photo_path).await {
        Ok(user_id) => {
            info!("Created user {} with photo {}", user_id, photo_path);
            Ok(user_id)
        }
        Err(e) => {
            remove_photo(photos, &photo_path).await;
            Err(e.into())
        }
    }
}

/// Apply an edit. A new photo replaces the old file (old file removed first); without one
/// the stored path is kept and the disk is not touched.
///
/// If the row update fails after a new photo was written, the old photo is already gone.
#[instrument(skip(pool, photos, form), fields(name = %form.name, age = form.age))]
pub async fn update_user(
    pool: &SqlitePool,
    photos: &PhotoStore,
    user_id: i64,
    form: UserForm,
) -> Result<(), UsersError> {
    let Some(old_photo_path) = UserStore::find_photo_path(pool, user_id).await? else {
        return Err(UsersError::UserNotFound(user_id));
    };

    let photo_path = match form.photo {
        Some(photo) => {
            remove_photo(photos, &old_photo_path).await;
            photos.save(&photo.file_name, &photo.bytes).await?
        }
        None => old_photo_path,
    };

    let affected = UserStore::update(pool, user_id, &form.name, form.age, &photo_path).await?;
    if affected == 0 {
        warn!("Update of user {} affected no rows", user_id);
    }
    Ok(())
}

/// Delete the row and, best-effort, its photo. Unknown ids are a no-op.
#[instrument(skip(pool, photos))]
pub async fn delete_user(
    pool: &SqlitePool,
    photos: &PhotoStore,
    user_id: i64,
) -> Result<(), UsersError> {
    let photo_path = UserStore::find_photo_path(pool, user_id).await?;
    UserStore::delete(pool, user_id).await?;

    if let Some(photo_path) = photo_path {
        remove_photo(photos, &photo_path).await;
    }
    Ok(())
}

async fn remove_photo(photos: &PhotoStore, photo_path: &str) {
    if let Err(e) = photos.delete(photo_path).await {
        warn!("Could not remove photo {}: {}", photo_path, e);
    }
}
