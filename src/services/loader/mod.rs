pub mod generation;
pub mod loader;
pub mod render_cache;

pub use self::generation::RenderGeneration;
pub use self::loader::{ContentLoader, LOADING_PLACEHOLDER, LoadError, RenderOutcome};
pub use self::render_cache::RenderCache;
