use crate::database::user::User;
use crate::pages::layout::{escape_html, form_document};

#[must_use]
pub fn add_user_page() -> String {
    form_document(
        "Add New User",
        r#"<form method="post" action="/addUser" enctype="multipart/form-data">
        <div class="mb-3">
            <label for="name" class="form-label">Name:</label>
            <input type="text" id="name" name="name" class="form-control" required>
        </div>
        <div class="mb-3">
            <label for="age" class="form-label">Age:</label>
            <input type="number" id="age" name="age" class="form-control" min="1" required>
        </div>
        <div class="mb-3">
            <label for="photo" class="form-label">Photo:</label>
            <input type="file" id="photo" name="photo" class="form-control" accept="image/*" required>
        </div>
        <button type="submit" class="btn btn-success">Submit</button>
        <a href="/" class="btn btn-secondary">Cancel</a>
    </form>"#,
    )
}

/// Edit form pre-filled with the current values. The photo input is optional here.
#[must_use]
pub fn edit_user_page(user: &User) -> String {
    let id = user.id;
    let name = escape_html(&user.name);
    let age = user.age;
    let photo = escape_html(&user.photo_path);
    let body = format!(
        r#"<form method="post" action="/editUser/{id}" enctype="multipart/form-data">
        <div class="mb-3">
            <label for="name" class="form-label">Name:</label>
            <input type="text" id="name" name="name" class="form-control" value="{name}" required>
        </div>
        <div class="mb-3">
            <label for="age" class="form-label">Age:</label>
            <input type="number" id="age" name="age" class="form-control" min="1" value="{age}" required>
        </div>
        <div class="mb-3">
            <label class="form-label">Current photo:</label>
            <div><img src="{photo}" alt="User Photo" style="height: 150px; object-fit: cover;"></div>
        </div>
        <div class="mb-3">
            <label for="photo" class="form-label">New photo (optional):</label>
            <input type="file" id="photo" name="photo" class="form-control" accept="image/*">
        </div>
        <button type="submit" class="btn btn-primary">Save</button>
        <a href="/" class="btn btn-secondary">Cancel</a>
    </form>"#
    );
    form_document("Edit User", &body)
}
