//! Add Controller
//!
//! Validates and inserts new questions, persisting the deck on success.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::question::Question;
use crate::error::Result;
use crate::utils::format::truncate;
use crate::utils::store;

/// Add page controller
pub struct AddController {
    entities: AppEntities,
}

impl AddController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Validate and append a question to the deck.
    ///
    /// Returns the assigned id. Validation failures come back as
    /// `Error::Invalid` for the form to display.
    pub fn add_question(&self, question: Question, cx: &mut App) -> Result<u64> {
        let added = self.entities.questions.update(cx, |questions, cx| {
            let added = questions.add(question);
            cx.notify();
            added
        });

        if let Ok(id) = &added {
            let snapshot = self.entities.questions.read(cx);
            if let Some(question) = snapshot.questions().iter().find(|q| q.id == *id) {
                tracing::info!(
                    "Added question {id}: \"{}\"",
                    truncate(&question.question, 60)
                );
            }
            let questions = snapshot.questions().to_vec();
            if let Err(err) = store::save_deck(&questions) {
                tracing::error!("Failed to save deck: {err:#}");
            }
        }

        added
    }
}
