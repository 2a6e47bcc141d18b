//! QuestionCard Component
//!
//! One trivia question: its text, category icon, difficulty, an
//! answer-reveal toggle, and a delete trigger. Deletion itself belongs to
//! whoever subscribes to the card's events; the card only signals intent.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, EventEmitter, InteractiveElement, IntoElement,
    ParentElement, Render, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::assets::CustomIconName;
use crate::components::primitives::button::Button;
use crate::domain::question::Question;
use crate::theme::colors::TriviaColors;

/// Signals emitted by a question card to the subscribed parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionCardEvent {
    /// The delete trigger was hit; the parent owns the actual deletion
    Deleted,
}

/// A single question card
pub struct QuestionCard {
    question: Question,
    /// Answer visibility; flips only via the toggle, never via data updates
    visible_answer: bool,
}

impl QuestionCard {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            visible_answer: false,
        }
    }

    /// Replace the question data, leaving the toggle state untouched
    pub fn set_question(&mut self, question: Question) {
        self.question = question;
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn visible_answer(&self) -> bool {
        self.visible_answer
    }

    /// Flip answer visibility
    pub fn flip_visibility(&mut self) {
        self.visible_answer = !self.visible_answer;
    }

    /// Toggle label for the current visibility state
    pub fn toggle_label(&self) -> &'static str {
        if self.visible_answer {
            "Hide Answer"
        } else {
            "Show Answer"
        }
    }
}

impl EventEmitter<QuestionCardEvent> for QuestionCard {}

impl Render for QuestionCard {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let question = self.question.clone();

        div()
            .w_full()
            .p_4()
            .bg(TriviaColors::card_bg())
            .border_1()
            .border_color(TriviaColors::border())
            .rounded_lg()
            .flex()
            .flex_col()
            .gap_2()
            // Question text
            .child(
                div()
                    .text_size(px(15.0))
                    .text_color(TriviaColors::text_primary())
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(question.question.clone()),
            )
            // Status row: category icon, difficulty, delete trigger
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_3()
                            .when_some(question.category, |el, category| {
                                el.child(
                                    div()
                                        .flex()
                                        .items_center()
                                        .gap_1()
                                        .text_color(TriviaColors::text_secondary())
                                        .child(Icon::from(category))
                                        .child(div().text_sm().child(category.name())),
                                )
                            })
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(TriviaColors::text_secondary())
                                    .child(format!("Difficulty: {}", question.difficulty)),
                            ),
                    )
                    .child(
                        div()
                            .id("delete-question")
                            .p_1()
                            .rounded_sm()
                            .text_color(TriviaColors::danger())
                            .cursor_pointer()
                            .hover(|s| s.bg(TriviaColors::row_hover()))
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                tracing::debug!(
                                    id = this.question.id,
                                    "Delete requested for question"
                                );
                                cx.emit(QuestionCardEvent::Deleted);
                            }))
                            .child(Icon::from(CustomIconName::Delete)),
                    ),
            )
            // Answer-reveal toggle
            .child(
                div().child(
                    Button::ghost("toggle-answer", self.toggle_label()).on_click(cx.listener(
                        |this, _event: &ClickEvent, _window, cx| {
                            this.flip_visibility();
                            tracing::debug!(
                                id = this.question.id,
                                visible = this.visible_answer,
                                "Answer visibility toggled"
                            );
                            cx.notify();
                        },
                    )),
                ),
            )
            // Answer line, only while shown
            .when(self.visible_answer, |el| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(TriviaColors::text_secondary())
                        .child(format!("Answer: {}", question.answer)),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;

    fn sample() -> Question {
        Question {
            id: 5,
            question: "What is the largest lake in Africa?".to_string(),
            answer: "Lake Victoria".to_string(),
            category: Some(Category::Geography),
            difficulty: 2,
        }
    }

    #[test]
    fn test_starts_hidden() {
        let card = QuestionCard::new(sample());
        assert!(!card.visible_answer());
        assert_eq!(card.toggle_label(), "Show Answer");
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut card = QuestionCard::new(sample());
        card.flip_visibility();
        assert!(card.visible_answer());
        assert_eq!(card.toggle_label(), "Hide Answer");
        card.flip_visibility();
        assert!(!card.visible_answer());
        assert_eq!(card.toggle_label(), "Show Answer");
    }

    #[test]
    fn test_data_refresh_keeps_toggle_state() {
        let mut card = QuestionCard::new(sample());
        card.flip_visibility();

        let mut updated = sample();
        updated.question = "What is the largest lake in Africa, by area?".to_string();
        card.set_question(updated);
        assert!(card.visible_answer());
    }
}
