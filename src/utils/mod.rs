pub mod html;

pub use html::{escape_html, escape_json_value, sanitize_text};
