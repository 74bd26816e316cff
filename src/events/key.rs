//! Composite event keys of the form `<namespace>.<method>.<path>`.
//!
//! Example: `svc.get./users/:id`  =>  method `get`, path `/users/{id}`.
//!
//! Paths are declared with colon-style parameters; OAS takes the brace
//! style, so every `:token` rewrites to `{token}`.

use crate::Result;
use anyhow::bail;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventKey {
    pub method: String,
    pub path: String,
}

impl EventKey {
    /// Split a raw key on dots: index 0 is the namespace (unused), index 1
    /// the HTTP method (taken verbatim), index 2 the URL path. Segments
    /// past index 2 are ignored. Fewer than three segments is an error.
    pub fn parse(raw: &str) -> Result<EventKey> {
        let mut parts = raw.split('.');
        let _namespace = parts.next();

        let method = match parts.next() {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => bail!("event key {:?} has no method segment", raw),
        };

        let path = match parts.next() {
            Some(p) if !p.is_empty() => p,
            _ => bail!("event key {:?} has no path segment", raw),
        };

        let re = Regex::new(r":([^/]+)")?;
        let path = re.replace_all(path, "{$1}").into_owned();

        Ok(EventKey { method, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_method_and_path() {
        let key = EventKey::parse("svc.get./users/:id").unwrap();
        assert_eq!(key.method, "get");
        assert_eq!(key.path, "/users/{id}");
    }

    #[test]
    fn rewrites_every_param() {
        let key = EventKey::parse("svc.put./orgs/:org/users/:user").unwrap();
        assert_eq!(key.path, "/orgs/{org}/users/{user}");
    }

    #[test]
    fn plain_paths_pass_through() {
        let key = EventKey::parse("svc.post./users").unwrap();
        assert_eq!(key.method, "post");
        assert_eq!(key.path, "/users");
    }

    #[test]
    fn ignores_segments_past_the_path() {
        // Dots are key separators, so a dot inside the path truncates it.
        let key = EventKey::parse("svc.get./users.trailing").unwrap();
        assert_eq!(key.path, "/users");
    }

    #[test]
    fn rejects_short_keys() {
        assert!(EventKey::parse("svc").is_err());
        assert!(EventKey::parse("svc.get").is_err());
        assert!(EventKey::parse("").is_err());
    }
}
