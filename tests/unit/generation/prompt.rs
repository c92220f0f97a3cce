//! Tests for prompt term selection and composition

#[cfg(test)]
mod tests {
    use jigsnap::generation::PromptSelection;
    use jigsnap::generation::prompt::{DEFAULT_PROMPT_TERMS, PROMPT_CATALOG};

    // Tests that toggling twice deselects and order is preserved
    #[test]
    fn test_toggle() {
        let mut selection = PromptSelection::new();

        assert!(selection.toggle("forest"));
        assert!(selection.toggle("sunset"));
        assert!(selection.toggle("ocean"));
        assert!(!selection.toggle("sunset"));

        assert_eq!(selection.selected(), &["forest", "ocean"]);
        assert!(selection.contains("ocean"));
        assert!(!selection.contains("sunset"));
    }

    // Tests whitespace trimming and empty terms
    #[test]
    fn test_toggle_trims() {
        let mut selection = PromptSelection::new();

        assert!(!selection.toggle("   "));
        assert!(selection.toggle(" night "));
        assert!(!selection.toggle("night"));
        assert!(selection.selected().is_empty());
    }

    // Tests that inserting never deselects and ignores blanks
    #[test]
    fn test_insert_keeps_existing() {
        let mut selection = PromptSelection::new();

        assert!(selection.insert("forest"));
        assert!(!selection.insert(" forest "));
        assert!(!selection.insert(""));
        assert!(selection.insert("night"));

        assert_eq!(selection.selected(), &["forest", "night"]);
    }

    // Tests building from terms where repeats are kept once
    #[test]
    fn test_from_terms() {
        let terms = ["ocean", "ocean", "sunset"].map(String::from);
        let selection = PromptSelection::from_terms(&terms);

        assert_eq!(selection.selected(), &["ocean", "sunset"]);
        let collected: PromptSelection = terms.iter().collect();
        assert_eq!(collected.selected(), &["sunset"]);
    }

    // Tests composition of selected terms followed by defaults
    #[test]
    fn test_compose() {
        let selection: PromptSelection = ["mountain", "day"].into_iter().collect();

        assert_eq!(
            selection.compose(),
            "mountain, day, 4k, high-resolution, beautiful, scenic, panoramic, aesthetic, \
             artistic, HD, wallpaper"
        );
        assert_eq!(
            PromptSelection::new().compose(),
            DEFAULT_PROMPT_TERMS.join(", ")
        );
    }

    // Tests catalog contents
    #[test]
    fn test_catalog() {
        assert_eq!(PROMPT_CATALOG.len(), 10);
        assert!(PROMPT_CATALOG.contains(&"forest"));
        assert!(PROMPT_CATALOG.contains(&"landscape"));
    }
}
