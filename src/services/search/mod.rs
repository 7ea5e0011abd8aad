pub mod index;

pub use self::index::{EXCERPT_CONTEXT, SearchEntry, SearchIndex, SearchResult, excerpt};
