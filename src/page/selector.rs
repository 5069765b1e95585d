use super::{ElementKind, ElementRef};

/// The selector subset the page understands: `#id`, `tag` and `tag#id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
}

impl Selector {
    /// Parses a selector, returning `None` for anything outside the subset.
    pub fn parse(selector: &str) -> Option<Self> {
        let selector = selector.trim();
        let (tag, id) = match selector.split_once('#') {
            Some((tag, id)) => (tag, Some(id)),
            None => (selector, None),
        };

        if let Some(id) = id {
            if !is_identifier(id) {
                return None;
            }
        }
        if !tag.is_empty() && !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        if tag.is_empty() && id.is_none() {
            return None;
        }

        Some(Self {
            tag: (!tag.is_empty()).then(|| tag.to_ascii_lowercase()),
            id: id.map(str::to_string),
        })
    }

    pub fn matches(&self, element: &ElementRef) -> bool {
        self.matches_parts(&element.id, element.kind)
    }

    pub(crate) fn matches_parts(&self, id: &str, kind: ElementKind) -> bool {
        let tag_ok = self.tag.as_deref().map_or(true, |tag| tag == kind.tag());
        let id_ok = self.id.as_deref().map_or(true, |wanted| wanted == id);
        tag_ok && id_ok
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
