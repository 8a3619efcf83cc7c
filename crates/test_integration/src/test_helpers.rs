use crate::runner::context::test_context::TestContext;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use common_services::database::user::{User, UserOrder};
use common_services::database::user_store::UserStore;
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode, header};

/// Start a test from an empty `users` table.
pub async fn reset_users(context: &TestContext) -> Result<()> {
    sqlx::query("DELETE FROM users")
        .execute(&context.pool)
        .await?;
    Ok(())
}

/// Insert rows directly, bypassing the upload path.
pub async fn seed_users(context: &TestContext, users: &[(&str, i32)]) -> Result<()> {
    for (name, age) in users {
        UserStore::insert(&context.pool, name, *age, "/uploads/seed.jpg").await?;
    }
    Ok(())
}

pub fn user_form(name: &str, age: &str, photo: Option<(&str, &[u8])>) -> Form {
    let form = Form::new()
        .text("name", name.to_owned())
        .text("age", age.to_owned());
    match photo {
        Some((file_name, bytes)) => form.part(
            "photo",
            Part::bytes(bytes.to_vec()).file_name(file_name.to_owned()),
        ),
        None => form,
    }
}

pub async fn post_form(context: &TestContext, path: &str, form: Form) -> Result<Response> {
    Ok(context
        .http_client
        .post(context.url(path))
        .multipart(form)
        .send()
        .await?)
}

/// Add a user through `POST /addUser` and return the stored row.
pub async fn add_user(
    context: &TestContext,
    name: &str,
    age: i32,
    photo: (&str, &[u8]),
) -> Result<User> {
    let response = post_form(
        context,
        "/addUser",
        user_form(name, &age.to_string(), Some(photo)),
    )
    .await?;
    assert_redirects_home(&response);

    find_user_by_name(context, name)
        .await?
        .ok_or_else(|| eyre!("user {name} was not stored"))
}

pub async fn find_user_by_name(context: &TestContext, name: &str) -> Result<Option<User>> {
    let users = UserStore::list_page(&context.pool, None, UserOrder::Id, 0, i64::MAX).await?;
    Ok(users.into_iter().find(|u| u.name == name))
}

pub async fn get_page(context: &TestContext, path: &str) -> Result<(StatusCode, String)> {
    let response = context.http_client.get(context.url(path)).send().await?;
    let status = response.status();
    Ok((status, response.text().await?))
}

pub fn assert_redirects_home(response: &Response) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok());
    assert_eq!(location, Some("/"));
}

pub fn card_count(html: &str) -> usize {
    html.matches("card mb-4").count()
}

/// Card titles in the order they appear on the page.
pub fn card_names(html: &str) -> Vec<String> {
    const OPEN: &str = r#"<h5 class="card-title">"#;
    html.split(OPEN)
        .skip(1)
        .filter_map(|rest| rest.split("</h5>").next())
        .map(str::to_owned)
        .collect()
}
