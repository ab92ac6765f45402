pub mod environment;

pub use environment::{DEFAULT_INDEX_URL, INDEX_URL_VAR, resolve_index_url};
