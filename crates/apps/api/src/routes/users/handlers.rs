use crate::api_state::ApiContext;
use axum::Form;
use axum::extract::{Multipart, Path, Query, State};
use axum::response::{Html, Redirect};
use common_services::api::users::error::UsersError;
use common_services::api::users::interfaces::{
    PageQuery, PageRequest, SearchQuery, SortForm, SortKey, SortQuery, UserForm,
};
use common_services::api::users::service::{
    create_user, delete_user, get_user, list_users, update_user,
};
use common_services::database::user::UserOrder;
use common_services::pages::{ListingMode, Pagination, add_user_page as render_add_user_page};
use common_services::pages::{edit_user_page, users_page};
use tracing::instrument;

/// Shared tail of every listing route: fetch one page and render it.
async fn render_listing(
    context: &ApiContext,
    title: &str,
    mode: ListingMode,
    raw_page: Option<&str>,
) -> Result<Html<String>, UsersError> {
    let page = PageRequest::new(raw_page, context.settings.users.page_size);
    let (filter, order) = match &mode {
        ListingMode::All => (None, UserOrder::Id),
        ListingMode::Sorted(key) => (None, UserOrder::from(*key)),
        ListingMode::Search(term) => (Some(term.as_str()), UserOrder::Id),
    };

    let listing = list_users(&context.pool, filter, order, page).await?;
    let pagination = Pagination {
        current_page: listing.current_page,
        total_pages: listing.total_pages,
        mode,
    };
    Ok(Html(users_page(title, &listing.users, &pagination)))
}

/// Route ids are numeric; anything else is treated as an unknown page.
fn parse_user_id(raw: &str) -> Result<i64, UsersError> {
    raw.parse().map_err(|_| UsersError::PageNotFound)
}

#[instrument(skip(context))]
pub async fn list_all(
    State(context): State<ApiContext>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, UsersError> {
    render_listing(
        &context,
        "All Users from DataBase",
        ListingMode::All,
        query.page.as_deref(),
    )
    .await
}

#[instrument(skip(context))]
pub async fn list_users_handler(
    State(context): State<ApiContext>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, UsersError> {
    render_listing(
        &context,
        "Users from DataBase",
        ListingMode::All,
        query.page.as_deref(),
    )
    .await
}

#[instrument(skip(context))]
pub async fn sort_users(
    State(context): State<ApiContext>,
    Query(query): Query<SortQuery>,
) -> Result<Html<String>, UsersError> {
    let key = SortKey::parse(query.sort_by.as_deref());
    render_listing(
        &context,
        "Users from DataBase (sorted)",
        ListingMode::Sorted(key),
        query.page.as_deref(),
    )
    .await
}

/// The sort selector posts `sortBy` in the body; the page stays in the query string.
#[instrument(skip(context))]
pub async fn sort_users_form(
    State(context): State<ApiContext>,
    Query(query): Query<PageQuery>,
    Form(form): Form<SortForm>,
) -> Result<Html<String>, UsersError> {
    let key = SortKey::parse(form.sort_by.as_deref());
    render_listing(
        &context,
        "Users from DataBase (sorted)",
        ListingMode::Sorted(key),
        query.page.as_deref(),
    )
    .await
}

#[instrument(skip(context))]
pub async fn search_users(
    State(context): State<ApiContext>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, UsersError> {
    let term = query.name.unwrap_or_default();
    let title = format!("Search Results for '{term}'");
    render_listing(
        &context,
        &title,
        ListingMode::Search(term),
        query.page.as_deref(),
    )
    .await
}

pub async fn add_user_page() -> Html<String> {
    Html(render_add_user_page())
}

#[instrument(skip(context, multipart), err(Debug))]
pub async fn add_user(
    State(context): State<ApiContext>,
    multipart: Multipart,
) -> Result<Redirect, UsersError> {
    let form = UserForm::from_multipart(multipart).await?;
    create_user(&context.pool, &context.photo_store, form).await?;
    Ok(Redirect::to("/"))
}

#[instrument(skip(context), err(Debug))]
pub async fn delete_user_handler(
    State(context): State<ApiContext>,
    Path(user_id): Path<String>,
) -> Result<Redirect, UsersError> {
    let user_id = parse_user_id(&user_id)?;
    delete_user(&context.pool, &context.photo_store, user_id).await?;
    Ok(Redirect::to("/"))
}

#[instrument(skip(context), err(Debug))]
pub async fn edit_user_page_handler(
    State(context): State<ApiContext>,
    Path(user_id): Path<String>,
) -> Result<Html<String>, UsersError> {
    let user_id = parse_user_id(&user_id)?;
    let user = get_user(&context.pool, user_id).await?;
    Ok(Html(edit_user_page(&user)))
}

#[instrument(skip(context, multipart), err(Debug))]
pub async fn edit_user(
    State(context): State<ApiContext>,
    Path(user_id): Path<String>,
    multipart: Multipart,
) -> Result<Redirect, UsersError> {
    let user_id = parse_user_id(&user_id)?;
    let form = UserForm::from_multipart(multipart).await?;
    update_user(&context.pool, &context.photo_store, user_id, form).await?;
    Ok(Redirect::to("/"))
}
