//! Settings - User-Tunable Application Settings

use serde::{Deserialize, Serialize};

use crate::constants::{QUESTIONS_PER_PAGE, QUESTIONS_PER_PLAY};

/// Application settings, loaded from `settings.toml` in the app data
/// directory. Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Questions shown per page in the list view
    pub questions_per_page: usize,
    /// Questions served per quiz round
    pub questions_per_play: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            questions_per_page: QUESTIONS_PER_PAGE,
            questions_per_play: QUESTIONS_PER_PLAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.questions_per_page, 10);
        assert_eq!(settings.questions_per_play, 5);
    }

    #[test]
    fn test_missing_keys_fall_back() {
        let settings: AppSettings =
            toml::from_str("questions_per_page = 25").expect("parse failed");
        assert_eq!(settings.questions_per_page, 25);
        assert_eq!(settings.questions_per_play, 5);
    }

    #[test]
    fn test_empty_file_is_default() {
        let settings: AppSettings = toml::from_str("").expect("parse failed");
        assert_eq!(settings, AppSettings::default());
    }
}
