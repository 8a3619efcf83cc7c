use crate::database::user::User;
use crate::pages::layout::{escape_html, listing_document};
use crate::pages::pagination::{Pagination, render_pagination};
use std::fmt::Write;

/// A listing page: user cards followed by the pagination controls.
#[must_use]
pub fn users_page(title: &str, users: &[User], pagination: &Pagination) -> String {
    let body = format!("{}{}", user_cards(users), render_pagination(pagination));
    listing_document(title, &pagination.mode, &body)
}

#[must_use]
pub fn user_cards(users: &[User]) -> String {
    let mut html = String::from(r#"<div class="row">"#);
    for user in users {
        let _ = write!(
            html,
            r#"
    <div class="col-md-4">
        <div class="card mb-4 shadow-sm">
            <img src="{photo}" class="card-img-top" alt="User Photo" style="height: 200px; object-fit: cover;">
            <div class="card-body">
                <h5 class="card-title">{name}</h5>
                <p class="card-text">Age: {age}</p>
                <div class="d-flex justify-content-between align-items-center">
                    <a href="/editUser/{id}" class="btn btn-warning btn-sm">Edit</a>
                    <a href="/deleteUser/{id}" class="btn btn-danger btn-sm">Delete</a>
                </div>
            </div>
        </div>
    </div>"#,
            photo = escape_html(&user.photo_path),
            name = escape_html(&user.name),
            age = user.age,
            id = user.id,
        );
    }
    html.push_str("</div>");
    html
}
