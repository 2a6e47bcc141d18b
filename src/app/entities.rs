//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and
//! management. This pattern avoids "monolith state" by splitting state by
//! update frequency.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::settings::AppSettings;
use crate::state::nav_state::NavState;
use crate::state::questions_state::QuestionsState;
use crate::state::quiz_state::QuizState;
use crate::utils::store;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Sidebar navigation state
    pub nav: Entity<NavState>,
    /// The question deck with list filters and pagination
    pub questions: Entity<QuestionsState>,
    /// The active quiz round
    pub quiz: Entity<QuizState>,
    /// Settings loaded at startup
    pub settings: AppSettings,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities, loading settings and the persisted deck
    pub fn init(cx: &mut App) -> Self {
        let settings = store::load_settings();
        let deck = store::load_deck();
        let per_page = settings.questions_per_page;

        Self {
            nav: cx.new(|_| NavState::default()),
            questions: cx.new(|_| QuestionsState::new(deck, per_page)),
            quiz: cx.new(|_| QuizState::default()),
            settings,
        }
    }
}
