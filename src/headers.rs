use crate::util::normalize_lower;
use indexmap::IndexMap;

/// Outbound request headers owned by the host.
///
/// Names compare case-insensitively and keep the casing of their first
/// insertion. Each name holds a single value, so multi-valued headers such
/// as `Cookie` are carried as one `"; "`-joined string.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderSet {
    entries: IndexMap<String, HeaderEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderEntry {
    name: String,
    value: String,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&normalize_lower(name))
            .map(|entry| entry.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_lower(name))
    }

    /// Sets `name` to `value`, returning the replaced value.
    ///
    /// Replacing keeps the entry at its original position.
    pub fn set<N, V>(&mut self, name: N, value: V) -> Option<String>
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let value = value.into();
        let key = normalize_lower(&name);

        if let Some(entry) = self.entries.get_mut(&key) {
            return Some(std::mem::replace(&mut entry.value, value));
        }

        self.entries.insert(key, HeaderEntry { name, value });
        None
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries
            .shift_remove(&normalize_lower(name))
            .map(|entry| entry.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|entry| (entry.name.as_str(), entry.value.as_str()))
    }
}

impl<N, V> Extend<(N, V)> for HeaderSet
where
    N: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

impl<N, V> FromIterator<(N, V)> for HeaderSet
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = HeaderSet::new();
        headers.extend(iter);
        headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
