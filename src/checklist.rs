// src/checklist.rs

/// Checklist items surfaced to the author when a new component is detected.
pub const CHECKLIST: &[&str] = &[
    "I have added a story or usage example for the new component.",
    "I have added unit tests covering the new component's rendering and interactions.",
    "The new component is keyboard accessible and exposes appropriate ARIA attributes.",
    "The new component's props are typed and documented.",
    "The new component uses the design system's tokens for spacing and color.",
];

/// Returns the checklist items in display order.
pub fn checklist_items() -> &'static [&'static str] {
    CHECKLIST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_are_non_empty_and_unique() {
        let items = checklist_items();
        assert!(!items.is_empty());
        for (i, item) in items.iter().enumerate() {
            assert!(!item.trim().is_empty());
            assert!(!items[i + 1..].contains(item), "duplicate item: {}", item);
        }
    }
}
