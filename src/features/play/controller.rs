//! Play Controller
//!
//! Drives quiz rounds against a snapshot of the deck.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::category::Category;

/// Play page controller
pub struct PlayController {
    entities: AppEntities,
}

impl PlayController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Start a round for the chosen category (`None` plays the whole deck)
    pub fn start(&self, category: Option<Category>, cx: &mut App) {
        let deck = self.entities.questions.read(cx).questions().to_vec();
        let per_play = self.entities.settings.questions_per_play;

        tracing::info!(
            "Starting quiz round: {} ({} questions in deck)",
            category.map(|c| c.name()).unwrap_or("All"),
            deck.len()
        );

        self.entities.quiz.update(cx, |quiz, cx| {
            quiz.start(category, &deck, per_play, &mut rand::thread_rng());
            cx.notify();
        });
    }

    /// Score the guess and reveal the answer
    pub fn submit_guess(&self, guess: String, cx: &mut App) {
        self.entities.quiz.update(cx, |quiz, cx| {
            quiz.guess = guess;
            quiz.submit_guess();
            cx.notify();
        });
    }

    /// Serve the next question, or finish the round
    pub fn advance(&self, cx: &mut App) {
        let deck = self.entities.questions.read(cx).questions().to_vec();
        let per_play = self.entities.settings.questions_per_play;

        self.entities.quiz.update(cx, |quiz, cx| {
            quiz.advance(&deck, per_play, &mut rand::thread_rng());
            cx.notify();
        });
    }

    /// Back to category selection
    pub fn reset(&self, cx: &mut App) {
        self.entities.quiz.update(cx, |quiz, cx| {
            quiz.reset();
            cx.notify();
        });
    }
}
