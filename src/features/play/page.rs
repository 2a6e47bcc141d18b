//! Play Page
//!
//! One quiz round: pick a category, guess through random questions, see the
//! final score.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::components::primitives::button::Button;
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::category::Category;
use crate::features::play::controller::PlayController;
use crate::state::quiz_state::QuizPhase;
use crate::theme::colors::TriviaColors;

/// Play page component
pub struct PlayPage {
    entities: AppEntities,
    controller: PlayController,
    guess_input: Entity<TextInput>,
}

impl PlayPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = PlayController::new(entities.clone());

        // Observe quiz state changes
        cx.observe(&entities.quiz, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
            guess_input: text_input("guess-input", "", "Your guess...", cx),
        }
    }

    fn submit_guess(&mut self, cx: &mut Context<Self>) {
        let guess = self.guess_input.read(cx).value().to_string();
        self.controller.submit_guess(guess, cx);
        self.guess_input.update(cx, |input, cx| {
            input.set_value("");
            cx.notify();
        });
    }

    fn render_category_choice(
        &self,
        category: Option<Category>,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let label: SharedString = category
            .map(|c| c.name().into())
            .unwrap_or_else(|| "All".into());

        div()
            .id(SharedString::from(format!("play-category-{:?}", category)))
            .px_4()
            .py_2()
            .rounded_md()
            .border_1()
            .border_color(TriviaColors::input_border())
            .flex()
            .items_center()
            .gap_2()
            .text_sm()
            .text_color(TriviaColors::text_primary())
            .cursor_pointer()
            .hover(|s| s.bg(TriviaColors::chip_selected_bg()))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.controller.start(category, cx);
            }))
            .when_some(category, |el, category| el.child(Icon::from(category)))
            .child(label)
    }

    fn render_category_select(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child("Choose a category"),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_2()
                    .child(self.render_category_choice(None, cx))
                    .children(
                        Category::all()
                            .iter()
                            .map(|category| self.render_category_choice(Some(*category), cx)),
                    ),
            )
    }

    fn render_round(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let per_play = self.entities.settings.questions_per_play;
        let quiz = self.entities.quiz.read(cx);
        let phase = quiz.phase();
        let played = quiz.questions_played();
        let num_correct = quiz.num_correct;
        let last_correct = quiz.last_correct;
        let question = quiz
            .current_question
            .as_ref()
            .map(|q| (q.question.clone(), q.answer.clone()));

        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .text_sm()
                    .text_color(TriviaColors::text_secondary())
                    .child(format!("Question {played} of {per_play}")),
            )
            .when_some(question, |el, (question_text, answer)| {
                el.child(
                    div()
                        .text_size(px(17.0))
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .child(question_text),
                )
                .when(phase == QuizPhase::Guessing, |el| {
                    el.child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(self.guess_input.clone())
                            .child(Button::primary("submit-guess", "Submit Answer").on_click(
                                cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.submit_guess(cx);
                                }),
                            )),
                    )
                })
                .when(phase == QuizPhase::Revealed, |el| {
                    let (verdict, color) = if last_correct {
                        ("You were correct!", TriviaColors::success())
                    } else {
                        ("You were incorrect", TriviaColors::danger())
                    };
                    el.child(
                        div()
                            .text_sm()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(color)
                            .child(verdict),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(TriviaColors::text_secondary())
                            .child(format!("Answer: {answer}")),
                    )
                    .child(
                        div().child(Button::primary("next-question", "Next Question").on_click(
                            cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.advance(cx);
                            }),
                        )),
                    )
                })
            })
            .when(phase == QuizPhase::Finished, |el| {
                el.child(
                    div()
                        .text_xl()
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .child(format!("Your final score is {num_correct}")),
                )
                .child(
                    div().child(Button::primary("play-again", "Play Again").on_click(
                        cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.controller.reset(cx);
                        }),
                    )),
                )
            })
    }
}

impl Render for PlayPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let phase = self.entities.quiz.read(cx).phase();

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
                    .child("Play"),
            )
            .child(match phase {
                QuizPhase::CategorySelect => self.render_category_select(cx).into_any_element(),
                _ => self.render_round(cx).into_any_element(),
            })
    }
}
