//! UI Constants
//!
//! Centralized constants for consistent layout and deck behavior.

/// Questions shown per page in the list view
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Questions served per quiz round
pub const QUESTIONS_PER_PLAY: usize = 5;

/// Difficulty bounds (inclusive)
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 200.0;

/// Header height
pub const HEADER_HEIGHT: f32 = 48.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 750.0;

/// Deck file name inside the app data directory
pub const DECK_FILE: &str = "deck.json";

/// Settings file name inside the app data directory
pub const SETTINGS_FILE: &str = "settings.toml";
