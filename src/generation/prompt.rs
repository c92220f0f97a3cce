//! Prompt term selection for image generation

/// Feature terms offered to the player
pub const PROMPT_CATALOG: [&str; 10] = [
    "landscape",
    "forest",
    "mountain",
    "ocean",
    "city",
    "desert",
    "sunset",
    "sunrise",
    "night",
    "day",
];

/// Quality terms appended to every prompt
pub const DEFAULT_PROMPT_TERMS: [&str; 9] = [
    "4k",
    "high-resolution",
    "beautiful",
    "scenic",
    "panoramic",
    "aesthetic",
    "artistic",
    "HD",
    "wallpaper",
];

/// Ordered set of selected prompt terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptSelection {
    selected: Vec<String>,
}

impl PromptSelection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a term, or deselect it if already selected
    ///
    /// Returns true if the term is selected afterwards. Selection order is
    /// preserved for the remaining terms.
    pub fn toggle(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        if let Some(index) = self.selected.iter().position(|t| t == term) {
            self.selected.remove(index);
            false
        } else {
            self.selected.push(term.to_string());
            true
        }
    }

    /// Build a selection from terms given all at once
    ///
    /// Unlike collecting, a repeated term is kept once rather than toggled off.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut selection = Self::new();
        for term in terms {
            selection.insert(term.as_ref());
        }
        selection
    }

    /// Select a term unless it is already selected
    ///
    /// Returns true if the term was added.
    pub fn insert(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() || self.contains(term) {
            return false;
        }
        self.selected.push(term.to_string());
        true
    }

    /// Check whether a term is selected
    pub fn contains(&self, term: &str) -> bool {
        self.selected.iter().any(|t| t == term)
    }

    /// Selected terms in selection order
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Selected terms followed by the default quality terms, comma separated
    pub fn compose(&self) -> String {
        self.selected
            .iter()
            .map(String::as_str)
            .chain(DEFAULT_PROMPT_TERMS)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<S: AsRef<str>> FromIterator<S> for PromptSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for term in iter {
            selection.toggle(term.as_ref());
        }
        selection
    }
}
