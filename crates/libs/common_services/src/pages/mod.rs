//! Server-rendered HTML. Every function here is a pure function of its inputs.

mod forms;
mod layout;
mod pagination;
mod users;

pub use forms::*;
pub use layout::escape_html;
pub use pagination::*;
pub use users::*;
