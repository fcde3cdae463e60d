//! Header assembly shared by the dispatcher.

/// Media type of every request and response body.
pub const MEDIA_TYPE: &str = "application/vnd.allegro.public.v1+json";

/// An insertion-ordered header list with override-on-conflict inserts.
///
/// Names compare ASCII-case-insensitively. The final order is
/// deterministic: an overridden entry keeps its position, new names append
/// in insert order.
#[derive(Debug, Clone, Default)]
pub struct HeaderSet {
    entries: Vec<(String, String)>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default set sent with every request: bearer auth, API key, and
    /// the vendor media type for both directions.
    pub fn defaults(access_token: &str, api_key: &str) -> Self {
        let mut headers = Self::new();
        headers.insert("Authorization", &format!("Bearer {access_token}"));
        headers.insert("Api-Key", api_key);
        headers.insert("Content-Type", MEDIA_TYPE);
        headers.insert("Accept", MEDIA_TYPE);
        headers
    }

    /// Insert a header, replacing an existing entry with the same name.
    pub fn insert(&mut self, name: &str, value: &str) {
        match self.position(name) {
            Some(i) => self.entries[i].1 = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].1.as_str())
    }

    /// Merge caller-supplied headers on top of this set; on a name
    /// collision the caller's value wins.
    pub fn merge<'a, I>(&mut self, extra: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in extra {
            self.insert(name, value);
        }
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_auth_and_media_type() {
        let headers = HeaderSet::defaults("token-123", "key-456");
        assert_eq!(headers.get("Authorization"), Some("Bearer token-123"));
        assert_eq!(headers.get("Api-Key"), Some("key-456"));
        assert_eq!(headers.get("Content-Type"), Some(MEDIA_TYPE));
        assert_eq!(headers.get("Accept"), Some(MEDIA_TYPE));
        assert_eq!(headers.len(), 4);
    }

    #[test]
    fn merge_overrides_shared_keys_and_keeps_the_rest() {
        let mut headers = HeaderSet::defaults("t", "k");
        headers.merge([("Api-Key", "X")]);
        assert_eq!(headers.get("Api-Key"), Some("X"));
        assert_eq!(headers.get("Authorization"), Some("Bearer t"));
        assert_eq!(headers.get("Content-Type"), Some(MEDIA_TYPE));
        assert_eq!(headers.len(), 4);
    }

    #[test]
    fn merge_appends_disjoint_keys_in_caller_order() {
        let mut headers = HeaderSet::defaults("t", "k");
        headers.merge([("X-Trace", "abc"), ("X-Span", "def")]);
        let pairs = headers.into_pairs();
        assert_eq!(pairs[4].0, "X-Trace");
        assert_eq!(pairs[5].0, "X-Span");
    }

    #[test]
    fn override_keeps_original_position() {
        let mut headers = HeaderSet::defaults("t", "k");
        headers.merge([("Accept", "application/json")]);
        let pairs = headers.into_pairs();
        assert_eq!(pairs[3], ("Accept".to_string(), "application/json".to_string()));
    }

    #[test]
    fn names_compare_case_insensitively() {
        let mut headers = HeaderSet::new();
        headers.insert("Content-Type", "a");
        headers.insert("content-type", "b");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("CONTENT-TYPE"), Some("b"));
    }
}
