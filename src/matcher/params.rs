use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;

use crate::pattern::ParamOffset;

/// Binding key of a wildcard remainder.
pub const WILDCARD_KEY: &str = "*";

/// Parameter bindings of a match, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: SmallVec<[(Box<str>, String); 4]>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    pub(crate) fn push(&mut self, key: &str, value: String) {
        self.entries.push((Box::from(key), value));
    }

    pub fn into_map(self) -> FastHashMap<String, String> {
        self.entries
            .into_iter()
            .map(|(k, v)| (k.into_string(), v))
            .collect()
    }
}

/// Copies captured `(offset, len)` spans out of `path`.
pub(crate) fn captures_to_params<'k>(
    path: &str,
    captures: impl IntoIterator<Item = (&'k str, ParamOffset)>,
) -> Params {
    let mut entries = SmallVec::new();
    for (key, (start, len)) in captures {
        let end = start.saturating_add(len);
        if let Some(value) = path.get(start..end) {
            entries.push((Box::from(key), value.to_string()));
        }
    }
    Params { entries }
}
