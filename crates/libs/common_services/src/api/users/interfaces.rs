use crate::api::users::error::UsersError;
use crate::database::user::UserOrder;
use axum::body::Bytes;
use axum::extract::Multipart;
use serde::Deserialize;

/// `?page=` as sent by the browser. Kept as text so a bad value falls back to page 1
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortQuery {
    pub sort_by: Option<String>,
    pub page: Option<String>,
}

/// Body of the sort selector form.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortForm {
    pub sort_by: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub page: Option<String>,
}

/// Parse a page number, falling back to 1 when absent, non-numeric or below 1.
#[must_use]
pub fn parse_page_number(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|&p| p > 0)
        .unwrap_or(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Age,
}

impl SortKey {
    /// `name` selects [`SortKey::Name`]; anything else, including nothing, sorts by age.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("name") => Self::Name,
            _ => Self::Age,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
        }
    }
}

impl From<SortKey> for UserOrder {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Name => Self::Name,
            SortKey::Age => Self::Age,
        }
    }
}

/// A requested page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based.
    pub number: u32,
    pub size: u32,
}

impl PageRequest {
    #[must_use]
    pub fn new(raw_page: Option<&str>, size: u32) -> Self {
        Self {
            number: parse_page_number(raw_page),
            size: size.max(1),
        }
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        (i64::from(self.number) - 1) * i64::from(self.size)
    }

    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

/// Number of pages needed to show `total_items` rows, `page_size` at a time.
#[must_use]
pub fn total_pages(total_items: i64, page_size: u32) -> u32 {
    if total_items <= 0 {
        return 0;
    }
    let page_size = i64::from(page_size.max(1));
    u32::try_from((total_items + page_size - 1) / page_size).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone)]
pub struct UploadedPhoto {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Fields of the add and edit forms.
#[derive(Debug, Clone)]
pub struct UserForm {
    pub name: String,
    pub age: i32,
    /// `None` when no file, or an empty file, was submitted.
    pub photo: Option<UploadedPhoto>,
}

impl UserForm {
    /// Read the `name`, `age` and `photo` fields of a `multipart/form-data` body.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, UsersError> {
        let mut name = None;
        let mut age = None;
        let mut photo = None;

        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().unwrap_or_default().to_owned();
            match field_name.as_str() {
                "name" => name = Some(field.text().await?),
                "age" => age = Some(field.text().await?),
                "photo" => {
                    let file_name = field.file_name().unwrap_or_default().to_owned();
                    let bytes = field.bytes().await?;
                    if !bytes.is_empty() {
                        photo = Some(UploadedPhoto { file_name, bytes });
                    }
                }
                _ => {}
            }
        }

        Ok(Self {
            name: parse_name(name.as_deref())?,
            age: parse_age(age.as_deref())?,
            photo,
        })
    }
}

fn parse_name(raw: Option<&str>) -> Result<String, UsersError> {
    match raw.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_owned()),
        _ => Err(UsersError::InvalidForm("Name is required.".into())),
    }
}

fn parse_age(raw: Option<&str>) -> Result<i32, UsersError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    match raw.parse::<i32>() {
        Ok(age) if age > 0 => Ok(age),
        Ok(_) => Err(UsersError::InvalidForm("Age must be a positive number.".into())),
        Err(_) => Err(UsersError::InvalidForm(format!("Invalid age: '{raw}'"))),
    }
}
