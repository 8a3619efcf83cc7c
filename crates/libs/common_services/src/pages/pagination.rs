use crate::api::users::interfaces::SortKey;
use std::fmt::Write;
use url::form_urlencoded;

/// Which listing produced a page. Paging links stay inside the same listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingMode {
    All,
    Sorted(SortKey),
    Search(String),
}

impl ListingMode {
    #[must_use]
    pub fn page_url(&self, page: u32) -> String {
        match self {
            Self::All => format!("/users?page={page}"),
            Self::Sorted(key) => format!("/sortUsers?page={page}&sortBy={}", key.as_str()),
            Self::Search(term) => {
                let term: String = form_urlencoded::byte_serialize(term.as_bytes()).collect();
                format!("/searchUsers?name={term}&page={page}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub mode: ListingMode,
}

/// Previous link, one link per page (no elision), next link.
#[must_use]
pub fn render_pagination(pagination: &Pagination) -> String {
    let Pagination {
        current_page,
        total_pages,
        mode,
    } = pagination;
    let mut html =
        String::from(r#"<nav aria-label="Page navigation"><ul class="pagination justify-content-center">"#);

    if *current_page > 1 {
        let _ = write!(
            html,
            r#"<li class="page-item"><a class="page-link" href="{}" aria-label="Previous"><span aria-hidden="true">&laquo;</span></a></li>"#,
            escape_attr(&mode.page_url(current_page - 1))
        );
    }

    for page in 1..=*total_pages {
        let active = if page == *current_page { " active" } else { "" };
        let _ = write!(
            html,
            r#"<li class="page-item{active}"><a class="page-link" href="{}">{page}</a></li>"#,
            escape_attr(&mode.page_url(page))
        );
    }

    if current_page < total_pages {
        let _ = write!(
            html,
            r#"<li class="page-item"><a class="page-link" href="{}" aria-label="Next"><span aria-hidden="true">&raquo;</span></a></li>"#,
            escape_attr(&mode.page_url(current_page + 1))
        );
    }

    html.push_str("</ul></nav>");
    html
}

fn escape_attr(url: &str) -> String {
    url.replace('&', "&amp;")
}
