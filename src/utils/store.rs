//! Store - Local Deck and Settings Storage

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assets::Assets;
use crate::constants::{DECK_FILE, SETTINGS_FILE};
use crate::domain::question::Question;
use crate::domain::settings::AppSettings;
use crate::utils::format::format_datetime;

/// On-disk deck file format
#[derive(Debug, Serialize, Deserialize)]
pub struct DeckFile {
    /// When the deck was last written
    pub saved_at: DateTime<Utc>,
    pub questions: Vec<Question>,
}

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find local data directory"))?
        .join("trivia-gui");

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load the question deck.
///
/// Falls back to the embedded seed questions when no deck file exists yet or
/// the file cannot be read.
pub fn load_deck() -> Vec<Question> {
    match read_deck_file() {
        Ok(Some(deck)) => {
            tracing::info!(
                "Loaded {} questions (last saved {})",
                deck.questions.len(),
                format_datetime(&deck.saved_at)
            );
            deck.questions
        }
        Ok(None) => {
            tracing::info!("No deck file found, starting from the seed deck");
            seed_questions()
        }
        Err(err) => {
            tracing::error!("Failed to load deck, starting from the seed deck: {err:#}");
            seed_questions()
        }
    }
}

fn read_deck_file() -> Result<Option<DeckFile>> {
    let path = app_data_dir()?.join(DECK_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

/// Save the question deck
pub fn save_deck(questions: &[Question]) -> Result<()> {
    let path = app_data_dir()?.join(DECK_FILE);
    let deck = DeckFile {
        saved_at: Utc::now(),
        questions: questions.to_vec(),
    };
    let content = serde_json::to_string_pretty(&deck)?;
    fs::write(&path, content)?;
    Ok(())
}

/// Load settings, falling back to defaults when the file is absent or broken
pub fn load_settings() -> AppSettings {
    match read_settings_file() {
        Ok(Some(settings)) => settings,
        Ok(None) => AppSettings::default(),
        Err(err) => {
            tracing::warn!("Failed to load settings, using defaults: {err:#}");
            AppSettings::default()
        }
    }
}

fn read_settings_file() -> Result<Option<AppSettings>> {
    let path = app_data_dir()?.join(SETTINGS_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// The embedded first-run deck
pub fn seed_questions() -> Vec<Question> {
    let Some(file) = Assets::get("seed/questions.json") else {
        tracing::error!("Seed questions asset missing");
        return Vec::new();
    };
    match serde_json::from_slice(&file.data) {
        Ok(questions) => questions,
        Err(err) => {
            tracing::error!("Seed questions asset is malformed: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;

    #[test]
    fn test_seed_questions_parse() {
        let questions = seed_questions();
        assert!(!questions.is_empty());
        // Seed ids are ascending and unique so the deck can continue after them
        for pair in questions.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
        assert!(questions.iter().all(|q| q.validate().is_ok()));
    }

    #[test]
    fn test_deck_file_round_trip() {
        let deck = DeckFile {
            saved_at: Utc::now(),
            questions: vec![Question {
                id: 3,
                question: "La Giaconda is better known as what?".to_string(),
                answer: "Mona Lisa".to_string(),
                category: Some(Category::Art),
                difficulty: 3,
            }],
        };
        let json = serde_json::to_string(&deck).expect("serialize failed");
        let parsed: DeckFile = serde_json::from_str(&json).expect("parse failed");
        assert_eq!(parsed.questions, deck.questions);
    }
}
