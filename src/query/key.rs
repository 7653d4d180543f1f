//! Cache keys

use std::fmt;

/// Ordered tuple of strings identifying a cached query result
///
/// Invalidation matches by prefix: `["documents"]` covers
/// `["documents", "list", "page=2"]` and `["documents", "detail", "d1"]`.
///
/// # Examples
///
/// ```
/// use collabdesk::query::QueryKey;
///
/// let all = QueryKey::new(["documents"]);
/// let page = QueryKey::new(["documents", "list"]).with("page=2");
/// assert!(page.starts_with(&all));
/// assert!(!all.starts_with(&page));
/// assert_eq!(page.to_string(), "[documents, list, page=2]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// Append one segment
    pub fn with(mut self, part: impl Into<String>) -> Self {
        self.0.push(part.into());
        self
    }

    /// Append several segments
    pub fn extend<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(parts.into_iter().map(Into::into));
        self
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// Whether `prefix` is a (non-strict) prefix of this key
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_its_own_prefix() {
        let key = QueryKey::new(["profile"]);
        assert!(key.starts_with(&key));
    }

    #[test]
    fn test_prefix_is_segment_wise() {
        let key = QueryKey::new(["documents-archive"]);
        assert!(!key.starts_with(&QueryKey::new(["documents"])));
    }

    #[test]
    fn test_extend_appends_in_order() {
        let key = QueryKey::new(["activity"]).extend(vec!["type=chat", "page=1"]);
        assert_eq!(key.parts(), &["activity", "type=chat", "page=1"]);
    }
}
