use crate::api_state::ApiContext;
use crate::users::handlers::{
    add_user, add_user_page, delete_user_handler, edit_user, edit_user_page_handler, list_all,
    list_users_handler, search_users, sort_users, sort_users_form,
};
use axum::{Router, routing::get, routing::post};

pub fn users_router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list_all))
        .route("/users", get(list_users_handler))
        .route("/addUserPage", get(add_user_page))
        .route("/addUser", post(add_user))
        .route("/deleteUser/{user_id}", get(delete_user_handler))
        .route("/sortUsers", get(sort_users).post(sort_users_form))
        .route("/searchUsers", get(search_users))
        .route(
            "/editUser/{user_id}",
            get(edit_user_page_handler).post(edit_user),
        )
}
