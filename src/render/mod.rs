mod netscape;
mod outline;

pub use netscape::{render_bookmarks, BOOKMARKS_HEADER};
pub use outline::{render_outline, INDENT};
