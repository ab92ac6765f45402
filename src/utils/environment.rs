use std::env;

/// Default index feed: the public Go module index.
pub const DEFAULT_INDEX_URL: &str = "https://index.golang.org/index";

/// Environment variable that overrides the default index URL.
pub const INDEX_URL_VAR: &str = "MODULE_INDEX_URL";

/// Resolve the index URL: explicit flag, then environment, then default.
pub fn resolve_index_url(flag: Option<&str>) -> String {
    if let Some(url) = flag {
        return url.to_string();
    }
    env::var(INDEX_URL_VAR).unwrap_or_else(|_| DEFAULT_INDEX_URL.to_string())
}
