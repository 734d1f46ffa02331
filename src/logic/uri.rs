//! Project URI helpers
//!
//! Projects are addressed as `/api/projects/{id}`; the id is the last URI segment.

const PROJECTS_PREFIX: &str = "/api/projects";

/// Extract the project id from a project URI
///
/// # Examples
/// ```
/// use project_browser::logic::uri::uri_to_id;
///
/// assert_eq!(uri_to_id("/api/projects/42"), Some("42"));
/// assert_eq!(uri_to_id("42"), Some("42"));
/// assert_eq!(uri_to_id(""), None);
/// assert_eq!(uri_to_id("/api/projects/"), None);
/// ```
pub fn uri_to_id(uri: &str) -> Option<&str> {
    uri.rsplit('/').next().filter(|id| !id.is_empty())
}

/// Build the project URI for an id
///
/// # Examples
/// ```
/// use project_browser::logic::uri::id_to_uri;
///
/// assert_eq!(id_to_uri("42"), "/api/projects/42");
/// ```
pub fn id_to_uri(id: &str) -> String {
    format!("{}/{}", PROJECTS_PREFIX, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_to_id_roundtrip_shape() {
        let uri = id_to_uri("abc-123");
        assert_eq!(uri_to_id(&uri), Some("abc-123"));
    }

    #[test]
    fn test_uri_to_id_nested() {
        assert_eq!(uri_to_id("https://host/api/projects/7"), Some("7"));
    }
}
