//! Form field access, coercion and the payloads assembled from forms.

mod coerce;
mod payloads;

pub use coerce::{coerce_flag, FormNumber};
pub use payloads::{
    ContentCreate, ContentDetails, RatingEvent, RecommendationQuery, UserRegistration, WatchEvent,
};

/// Name/value pairs read from a form, in field order.
///
/// A name may appear more than once; [`FormData::get`] returns the first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value without touching existing entries with the same name.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Replaces all values for `name` with a single one.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.entries.iter().position(|(n, _)| n == name) {
            Some(index) => {
                self.entries[index].1 = value.to_string();
                let mut seen = 0;
                self.entries.retain(|(n, _)| {
                    if n != name {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.append(name, value),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Text field value, forwarded verbatim. Absent fields stay absent.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    pub fn number(&self, name: &str) -> FormNumber {
        FormNumber::coerce(self.get(name))
    }

    pub fn flag(&self, name: &str) -> bool {
        coerce_flag(self.get(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (name, value) in iter {
            data.append(name, value);
        }
        data
    }
}
