use crate::api::users::interfaces::SortKey;
use crate::pages::pagination::ListingMode;

const BOOTSTRAP_CSS: &str = r#"<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha3/dist/css/bootstrap.min.css" rel="stylesheet" integrity="sha384-KK94CHFLLe+nY2dmCWGMq91rCGa5gtU4mk92HdvYe+M/SXH301p5ILy+dN9+nJOZ" crossorigin="anonymous">"#;

const BOOTSTRAP_JS: &str = r#"<script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha3/dist/js/bootstrap.bundle.min.js" integrity="sha384-ENjdO4Dr2bkBIFxQpeoTz1HIcje39Wm4jDKdf19U8gI4ddQ3GYNS7NTKfAdVQSZe" crossorigin="anonymous"></script>"#;

/// Escape text for use inside HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Full listing document: heading, search/sort/add toolbar, then `body`.
#[must_use]
pub fn listing_document(title: &str, mode: &ListingMode, body: &str) -> String {
    let title = escape_html(title);
    let toolbar = toolbar(mode);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8" />
    {BOOTSTRAP_CSS}
    <title>{title}</title>
</head>
<body>
<div class="container">
    <h2 class="d-flex justify-content-center">{title}</h2>
    {toolbar}
    {body}
    {BOOTSTRAP_JS}
</div>
</body>
</html>"#
    )
}

/// Bare document used by the add and edit forms.
#[must_use]
pub fn form_document(title: &str, body: &str) -> String {
    let title = escape_html(title);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8" />
    {BOOTSTRAP_CSS}
    <title>{title}</title>
</head>
<body>
<div class="container mt-3">
    <h3>{title}</h3>
    {body}
</div>
</body>
</html>"#
    )
}

fn toolbar(mode: &ListingMode) -> String {
    let search_value = match mode {
        ListingMode::Search(term) => escape_html(term),
        _ => String::new(),
    };
    let selected = |key: SortKey| match mode {
        ListingMode::Sorted(current) if *current == key => " selected",
        _ => "",
    };
    let name_selected = selected(SortKey::Name);
    let age_selected = selected(SortKey::Age);

    format!(
        r#"<div class="mt-5 mb-4 d-flex justify-content-between align-items-center">
        <form action="/searchUsers" method="GET" class="d-flex">
            <input type="text" name="name" class="form-control" placeholder="Search by Name" value="{search_value}" />
            <button type="submit" class="btn btn-secondary ms-2">Search</button>
        </form>
        <form action="/sortUsers" method="POST" class="d-flex ms-3">
            <select name="sortBy" class="form-select">
                <option value="name"{name_selected}>Sort by Name</option>
                <option value="age"{age_selected}>Sort by Age</option>
            </select>
            <button type="submit" class="btn btn-primary ms-2">Sort</button>
        </form>
        <a href="/addUserPage" class="btn btn-success ms-3">Add User</a>
    </div>"#
    )
}
