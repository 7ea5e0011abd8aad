pub mod loader;
pub mod search;

pub use self::loader::ContentLoader;
pub use self::search::SearchIndex;
