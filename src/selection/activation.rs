//! @acp:module "Activation Evaluator"
//! @acp:summary "Decide generator eligibility from hierarchical tag usages"
//! @acp:domain selection
//! @acp:layer logic

use super::tags::{parent_of, TagRegistry};
use super::types::TagUsage;

/// Evaluate whether a generator carrying `tags` is eligible.
///
/// Precedence:
/// 1. Any `All` (on a tag or on a tag's parent) returns `true` immediately.
/// 2. Otherwise any `None` makes the result `false`.
/// 3. Otherwise `true`, including for an empty tag set.
///
/// A `None` only clears the flag and scanning continues, so an `All` that
/// appears later in the tag list still wins.
pub fn is_active(tags: &[String], registry: &TagRegistry) -> bool {
    let mut active = true;

    for tag in tags {
        if let Some(parent) = parent_of(tag) {
            match registry.usage(parent) {
                TagUsage::All => return true,
                TagUsage::None => active = false,
                TagUsage::Some => {}
            }
        }

        match registry.usage(tag) {
            TagUsage::All => return true,
            TagUsage::None => active = false,
            TagUsage::Some => {}
        }
    }

    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    fn registry_for(list: &[String]) -> TagRegistry {
        let mut registry = TagRegistry::new();
        registry.register_catalog_tags(list);
        registry
    }

    #[test]
    fn test_no_tags_is_active() {
        assert!(is_active(&[], &TagRegistry::new()));
    }

    #[test]
    fn test_all_neutral_is_active() {
        let t = tags(&["history", "science::physics"]);
        assert!(is_active(&t, &registry_for(&t)));
    }

    #[test]
    fn test_none_excludes() {
        let t = tags(&["history"]);
        let mut registry = registry_for(&t);
        registry.set("history", TagUsage::None);
        assert!(!is_active(&t, &registry));
    }

    #[test]
    fn test_later_all_overrides_earlier_none() {
        let t = tags(&["history", "science"]);
        let mut registry = registry_for(&t);
        registry.set("history", TagUsage::None);
        registry.set("science", TagUsage::All);
        assert!(is_active(&t, &registry));
    }

    #[test]
    fn test_earlier_all_overrides_later_none() {
        let t = tags(&["science", "history"]);
        let mut registry = registry_for(&t);
        registry.set("history", TagUsage::None);
        registry.set("science", TagUsage::All);
        assert!(is_active(&t, &registry));
    }

    #[test]
    fn test_parent_all_overrides_child_none() {
        let t = tags(&["history::war"]);
        let mut registry = registry_for(&t);
        registry.set("history", TagUsage::All);
        registry.set("history::war", TagUsage::None);
        assert!(is_active(&t, &registry));
    }

    #[test]
    fn test_parent_none_excludes_neutral_child() {
        let t = tags(&["history::war"]);
        let mut registry = registry_for(&t);
        registry.set("history", TagUsage::None);
        assert!(!is_active(&t, &registry));
    }

    #[test]
    fn test_child_all_overrides_parent_none() {
        let t = tags(&["history::war"]);
        let mut registry = registry_for(&t);
        registry.set("history", TagUsage::None);
        registry.set("history::war", TagUsage::All);
        assert!(is_active(&t, &registry));
    }

    #[test]
    fn test_parent_none_on_one_tag_all_on_another_parent() {
        let t = tags(&["history::war", "science::space"]);
        let mut registry = registry_for(&t);
        registry.set("history", TagUsage::None);
        registry.set("science", TagUsage::All);
        assert!(is_active(&t, &registry));
    }
}
