//! @acp:module "Tag Registry"
//! @acp:summary "Tag usage preferences and parent::child hierarchy helpers"
//! @acp:domain selection
//! @acp:layer model

use std::collections::BTreeMap;

use super::types::TagUsage;

pub const SUBTAG_DELIMITER: &str = "::";

/// True iff the tag contains the `::` delimiter
pub fn has_subtag(tag: &str) -> bool {
    tag.contains(SUBTAG_DELIMITER)
}

/// Substring before the first delimiter
pub fn parent_of(tag: &str) -> Option<&str> {
    tag.find(SUBTAG_DELIMITER).map(|pos| &tag[..pos])
}

/// Substring after the first delimiter
pub fn child_of(tag: &str) -> Option<&str> {
    tag.find(SUBTAG_DELIMITER)
        .map(|pos| &tag[pos + SUBTAG_DELIMITER.len()..])
}

/// Tag name -> usage, kept sorted for listing
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    tags: BTreeMap<String, TagUsage>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every tag (and every hierarchical parent) not yet known as `Some`.
    ///
    /// Usages that were configured before the content arrived are kept.
    pub fn register_catalog_tags<'a, I>(&mut self, tags: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for tag in tags {
            if !self.tags.contains_key(tag) {
                self.tags.insert(tag.clone(), TagUsage::Some);
            }
            if let Some(parent) = parent_of(tag) {
                if !self.tags.contains_key(parent) {
                    self.tags.insert(parent.to_string(), TagUsage::Some);
                }
            }
        }
    }

    pub fn set(&mut self, tag: impl Into<String>, usage: TagUsage) {
        self.tags.insert(tag.into(), usage);
    }

    pub fn get(&self, tag: &str) -> Option<TagUsage> {
        self.tags.get(tag).copied()
    }

    /// Stored usage; an unregistered tag reads as the neutral `Some`
    pub fn usage(&self, tag: &str) -> TagUsage {
        self.get(tag).unwrap_or_default()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TagUsage)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Registered tags whose parent is `parent`
    pub fn children_of<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.tags
            .keys()
            .map(String::as_str)
            .filter(move |tag| parent_of(tag) == Some(parent))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
