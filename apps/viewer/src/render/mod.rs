// Profile rendering: document tree, HTML serialization, structured data and
// the error panel. Everything here is pure; fetching lives in truth_engine.

pub mod document;
pub mod error_view;
pub mod format;
pub mod html;
pub mod json_ld;
pub mod page;

pub use document::SiteLinks;
pub use page::{full_page, loading_shell, render_view, View, FRAGMENT_PATH};
