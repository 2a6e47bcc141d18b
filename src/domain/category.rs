//! Category - The Fixed Trivia Category Set

use serde::{Deserialize, Serialize};

/// A trivia category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Science,
    Art,
    Geography,
    History,
    Entertainment,
    Sports,
}

impl Category {
    /// All categories, in display order
    pub fn all() -> &'static [Category] {
        &[
            Category::Science,
            Category::Art,
            Category::Geography,
            Category::History,
            Category::Entertainment,
            Category::Sports,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Category::Science => "Science",
            Category::Art => "Art",
            Category::Geography => "Geography",
            Category::History => "History",
            Category::Entertainment => "Entertainment",
            Category::Sports => "Sports",
        }
    }

    /// Parse a category from its display name, case-insensitively.
    ///
    /// Unknown names yield `None` so that a malformed deck entry degrades
    /// to an uncategorized question instead of failing the whole load.
    pub fn parse(s: &str) -> Option<Category> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
    }

    /// Icon file name for this category ("science.svg")
    pub fn icon_file(&self) -> String {
        format!("{}.svg", self.name().to_lowercase())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Icon file reference for an optional category.
///
/// Empty string when the category is absent, so the view renders an empty
/// icon slot instead of erroring.
pub fn icon_src(category: Option<Category>) -> String {
    category.map(|c| c.icon_file()).unwrap_or_default()
}

/// Accessible alt text for an optional category icon ("science", or empty)
pub fn icon_alt(category: Option<Category>) -> String {
    category
        .map(|c| c.name().to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_src_lowercases_name() {
        assert_eq!(icon_src(Some(Category::Science)), "science.svg");
        assert_eq!(icon_src(Some(Category::Entertainment)), "entertainment.svg");
    }

    #[test]
    fn test_icon_src_empty_without_category() {
        assert_eq!(icon_src(None), "");
        assert_eq!(icon_alt(None), "");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Category::parse("science"), Some(Category::Science));
        assert_eq!(Category::parse(" SPORTS "), Some(Category::Sports));
        assert_eq!(Category::parse("Mathematics"), None);
    }
}
