pub mod highlight;
pub mod html;
pub mod markdown;

pub use self::highlight::{HighlightedCode, Highlighter};
pub use self::markdown::compile_markdown_to_html;
