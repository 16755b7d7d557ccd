//! Candidate key computation for a request path

/// Document served when a path names a directory
pub const INDEX_DOCUMENT: &str = "index.html";

/// Storage keys tried for one request, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateKeys {
    /// Request path with one leading `/` removed
    pub primary: String,
    /// Index document under the primary key, tried at most once as fallback
    pub secondary: String,
}

impl CandidateKeys {
    /// Computes the candidate keys for `path`
    ///
    /// Only a single leading separator is stripped. `..` segments and percent
    /// escapes pass through untouched.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let primary = path.strip_prefix('/').unwrap_or(path).to_string();
        let secondary = join_key(&primary, INDEX_DOCUMENT);

        Self { primary, secondary }
    }
}

fn join_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else if prefix.ends_with('/') {
        format!("{prefix}{name}")
    } else {
        format!("{prefix}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(path: &str) -> (String, String) {
        let CandidateKeys { primary, secondary } = CandidateKeys::resolve(path);
        (primary, secondary)
    }

    #[test]
    fn test_resolve_file_path() {
        assert_eq!(
            keys("/foo.txt"),
            ("foo.txt".to_string(), "foo.txt/index.html".to_string())
        );
    }

    #[test]
    fn test_resolve_directory_path() {
        assert_eq!(
            keys("/docs/"),
            ("docs/".to_string(), "docs/index.html".to_string())
        );
        assert_eq!(
            keys("/docs/guide"),
            ("docs/guide".to_string(), "docs/guide/index.html".to_string())
        );
    }

    #[test]
    fn test_resolve_root() {
        assert_eq!(keys("/"), (String::new(), "index.html".to_string()));
        assert_eq!(keys(""), (String::new(), "index.html".to_string()));
    }

    #[test]
    fn test_strips_only_one_separator() {
        assert_eq!(
            keys("//double"),
            ("/double".to_string(), "/double/index.html".to_string())
        );
        assert_eq!(
            keys("relative/key"),
            ("relative/key".to_string(), "relative/key/index.html".to_string())
        );
    }

    #[test]
    fn test_no_normalization() {
        assert_eq!(
            keys("/a/../b%20c"),
            ("a/../b%20c".to_string(), "a/../b%20c/index.html".to_string())
        );
    }
}
