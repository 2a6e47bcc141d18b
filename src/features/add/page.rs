//! Add Page
//!
//! Form for adding a new question to the deck.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::Button;
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::constants::{MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::domain::category::Category;
use crate::domain::question::Question;
use crate::features::add::controller::AddController;
use crate::theme::colors::TriviaColors;

/// Add page component
pub struct AddPage {
    controller: AddController,
    // Form state
    question_input: Entity<TextInput>,
    answer_input: Entity<TextInput>,
    category: Option<Category>,
    difficulty: u8,
    error: Option<String>,
    added: Option<u64>,
}

impl AddPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = AddController::new(entities);

        Self {
            controller,
            question_input: text_input("question-input", "", "Question text", cx),
            answer_input: text_input("answer-input", "", "Answer text", cx),
            category: None,
            difficulty: MIN_DIFFICULTY,
            error: None,
            added: None,
        }
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let question = Question {
            id: 0,
            question: self.question_input.read(cx).value().to_string(),
            answer: self.answer_input.read(cx).value().to_string(),
            category: self.category,
            difficulty: self.difficulty,
        };

        match self.controller.add_question(question, cx) {
            Ok(id) => {
                // Clear the form like the original add tab does
                self.question_input.update(cx, |input, cx| {
                    input.set_value("");
                    cx.notify();
                });
                self.answer_input.update(cx, |input, cx| {
                    input.set_value("");
                    cx.notify();
                });
                self.category = None;
                self.difficulty = MIN_DIFFICULTY;
                self.error = None;
                self.added = Some(id);
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.added = None;
            }
        }
        cx.notify();
    }

    fn render_form_row(&self, label: SharedString, input: Entity<TextInput>) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_4()
            .child(
                div()
                    .w(px(100.0))
                    .text_sm()
                    .text_color(TriviaColors::text_secondary())
                    .child(label),
            )
            .child(div().flex_1().child(input))
    }

    fn render_category_chip(
        &self,
        category: Option<Category>,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let is_selected = self.category == category;
        let label: SharedString = category
            .map(|c| c.name().into())
            .unwrap_or_else(|| "Uncategorized".into());

        div()
            .id(SharedString::from(format!("chip-{:?}", category)))
            .px_3()
            .py_1()
            .rounded_md()
            .border_1()
            .border_color(if is_selected {
                TriviaColors::border_focus()
            } else {
                TriviaColors::input_border()
            })
            .bg(if is_selected {
                TriviaColors::chip_selected_bg()
            } else {
                TriviaColors::input_bg()
            })
            .text_sm()
            .text_color(TriviaColors::text_primary())
            .cursor_pointer()
            .hover(|s| s.bg(TriviaColors::row_hover()))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.category = category;
                cx.notify();
            }))
            .child(label)
    }

    fn render_difficulty_chip(&self, level: u8, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let is_selected = self.difficulty == level;

        div()
            .id(SharedString::from(format!("difficulty-{level}")))
            .size(px(32.0))
            .rounded_md()
            .border_1()
            .border_color(if is_selected {
                TriviaColors::border_focus()
            } else {
                TriviaColors::input_border()
            })
            .bg(if is_selected {
                TriviaColors::chip_selected_bg()
            } else {
                TriviaColors::input_bg()
            })
            .flex()
            .items_center()
            .justify_center()
            .text_sm()
            .cursor_pointer()
            .hover(|s| s.bg(TriviaColors::row_hover()))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.difficulty = level;
                cx.notify();
            }))
            .child(level.to_string())
    }
}

impl Render for AddPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child("Add a New Trivia Question"),
            )
            .child(self.render_form_row("Question".into(), self.question_input.clone()))
            .child(self.render_form_row("Answer".into(), self.answer_input.clone()))
            // Category chips
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .w(px(100.0))
                            .text_sm()
                            .text_color(TriviaColors::text_secondary())
                            .child("Category"),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_wrap()
                            .gap_2()
                            .child(self.render_category_chip(None, cx))
                            .children(
                                Category::all()
                                    .iter()
                                    .map(|category| self.render_category_chip(Some(*category), cx)),
                            ),
                    ),
            )
            // Difficulty chips
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .w(px(100.0))
                            .text_sm()
                            .text_color(TriviaColors::text_secondary())
                            .child("Difficulty"),
                    )
                    .child(
                        div().flex().gap_2().children(
                            (MIN_DIFFICULTY..=MAX_DIFFICULTY)
                                .map(|level| self.render_difficulty_chip(level, cx)),
                        ),
                    ),
            )
            // Feedback
            .when_some(self.error.clone(), |el, error| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(TriviaColors::danger())
                        .child(error),
                )
            })
            .when_some(self.added, |el, id| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(TriviaColors::success())
                        .child(format!("Question {id} added")),
                )
            })
            .child(
                div().child(
                    Button::primary("submit-question", "Submit").on_click(cx.listener(
                        |this, _event: &ClickEvent, _window, cx| {
                            this.submit(cx);
                        },
                    )),
                ),
            )
    }
}
