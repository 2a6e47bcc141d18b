//! Questions Controller
//!
//! Mediates between the questions page and the deck state, and persists the
//! deck after mutations.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::utils::format::truncate;
use crate::utils::store;

/// Questions page controller
pub struct QuestionsController {
    entities: AppEntities,
}

impl QuestionsController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Delete a question from the deck and persist the result.
    ///
    /// A failed save is logged and the in-memory deck stays authoritative;
    /// the card that signalled the deletion is never informed either way.
    pub fn delete_question(&self, id: u64, cx: &mut App) {
        let removed = self.entities.questions.update(cx, |questions, cx| {
            let removed = questions.remove(id);
            cx.notify();
            removed
        });

        match removed {
            Ok(question) => {
                tracing::info!(
                    "Deleted question {id}: \"{}\"",
                    truncate(&question.question, 60)
                );
                self.persist(cx);
            }
            Err(err) => tracing::error!("Failed to delete question {id}: {err}"),
        }
    }

    fn persist(&self, cx: &mut App) {
        let snapshot = self.entities.questions.read(cx).questions().to_vec();
        if let Err(err) = store::save_deck(&snapshot) {
            tracing::error!("Failed to save deck: {err:#}");
        }
    }
}
