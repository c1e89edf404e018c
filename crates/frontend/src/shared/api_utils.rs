//! URL helpers for the tender API.

/// Join the configured base URL and an API path
///
/// # Example
/// ```rust
/// let url = frontend::shared::api_utils::api_url("http://localhost:8000/", "/lots/7");
/// assert_eq!(url, "http://localhost:8000/lots/7");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Append an already encoded query string, skipping the `?` when it's empty
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(api_url("http://localhost:8000", "/stats"), "http://localhost:8000/stats");
        assert_eq!(api_url("http://localhost:8000/", "stats"), "http://localhost:8000/stats");
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/lots", ""), "/lots");
        assert_eq!(with_query("/lots", "limit=50"), "/lots?limit=50");
    }
}
