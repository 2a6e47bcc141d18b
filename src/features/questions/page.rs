//! Questions Page
//!
//! Browsable question list: search, category filter, pagination, and a
//! delete flow with confirmation.

use std::collections::{HashMap, HashSet};

use gpui::{
    div, prelude::*, ClickEvent, Context, Entity, InteractiveElement, IntoElement, ParentElement,
    Render, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::composite::pagination::Pagination;
use crate::components::composite::question_card::{QuestionCard, QuestionCardEvent};
use crate::components::primitives::button::Button;
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::features::questions::controller::QuestionsController;
use crate::theme::colors::TriviaColors;
use crate::utils::format::pluralize;

/// Questions page component
pub struct QuestionsPage {
    entities: AppEntities,
    controller: QuestionsController,
    search_input: Entity<TextInput>,
    /// Cards cached per question id so toggle state survives list refreshes
    cards: HashMap<u64, Entity<QuestionCard>>,
    /// Question awaiting delete confirmation
    pending_delete: Option<u64>,
}

impl QuestionsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = QuestionsController::new(entities.clone());

        let search_input = text_input("search-input", "", "Search questions...", cx);

        // Live search: every edit narrows the list
        let search_entities = entities.clone();
        search_input.update(cx, |input, _| {
            input.on_change(move |value, cx| {
                search_entities.questions.update(cx, |questions, cx| {
                    questions.set_search(value);
                    cx.notify();
                });
            });
        });

        // Keep the card cache in step with the deck
        cx.observe(&entities.questions, |this: &mut Self, _, cx| {
            this.sync_cards(cx);
            cx.notify();
        })
        .detach();

        let mut page = Self {
            entities,
            controller,
            search_input,
            cards: HashMap::new(),
            pending_delete: None,
        };
        page.sync_cards(cx);
        page
    }

    /// Create cards for questions that gained a row on the current page,
    /// refresh data on existing ones, and drop cards whose question left the
    /// deck. Cards for questions merely filtered out are kept so their
    /// toggle state survives.
    fn sync_cards(&mut self, cx: &mut Context<Self>) {
        let (page_questions, deck_ids) = {
            let state = self.entities.questions.read(cx);
            let deck_ids: HashSet<u64> = state.questions().iter().map(|q| q.id).collect();
            (state.page_questions(), deck_ids)
        };

        self.cards.retain(|id, _| deck_ids.contains(id));

        for question in page_questions {
            let id = question.id;
            match self.cards.get(&id) {
                Some(card) => card.update(cx, |card, cx| {
                    card.set_question(question);
                    cx.notify();
                }),
                None => {
                    let card = cx.new(|_| QuestionCard::new(question));
                    cx.subscribe(
                        &card,
                        move |this: &mut Self, _card, event: &QuestionCardEvent, cx| {
                            match event {
                                QuestionCardEvent::Deleted => {
                                    this.pending_delete = Some(id);
                                    cx.notify();
                                }
                            }
                        },
                    )
                    .detach();
                    self.cards.insert(id, card);
                }
            }
        }
    }

    fn render_delete_modal(&self, id: u64, cx: &mut Context<Self>) -> impl IntoElement {
        let question_text = self
            .cards
            .get(&id)
            .map(|card| card.read(cx).question().question.clone())
            .unwrap_or_default();

        let this = cx.entity();
        Modal::new("Delete question?")
            .on_close(move |cx| {
                this.update(cx, |this, cx| {
                    this.pending_delete = None;
                    cx.notify();
                });
            })
            .child(
                div()
                    .text_sm()
                    .text_color(TriviaColors::text_secondary())
                    .child(question_text),
            )
            .child(
                div()
                    .flex()
                    .justify_end()
                    .gap_2()
                    .child(Button::secondary("cancel-delete", "Cancel").on_click(cx.listener(
                        |this, _event: &ClickEvent, _window, cx| {
                            this.pending_delete = None;
                            cx.notify();
                        },
                    )))
                    .child(Button::danger("confirm-delete", "Delete").on_click(cx.listener(
                        |this, _event: &ClickEvent, _window, cx| {
                            if let Some(id) = this.pending_delete.take() {
                                this.controller.delete_question(id, cx);
                            }
                            cx.notify();
                        },
                    ))),
            )
    }
}

impl Render for QuestionsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (page_questions, current_page, total_pages, total_matching, category) = {
            let state = self.entities.questions.read(cx);
            (
                state.page_questions(),
                state.page(),
                state.total_pages(),
                state.total_matching(),
                state.category(),
            )
        };

        let heading = match category {
            Some(category) => format!("{} Questions", category.name()),
            None => "Questions".to_string(),
        };

        let entities = self.entities.clone();

        div()
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            // Header row: title + search
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(heading),
                    )
                    .child(self.search_input.clone()),
            )
            // Card list
            .child(
                div()
                    .id("question-list")
                    .flex_1()
                    .overflow_y_scroll()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .when(total_matching == 0, |el| {
                        el.child(
                            div()
                                .p_4()
                                .text_sm()
                                .text_color(TriviaColors::text_muted())
                                .child("No questions found"),
                        )
                    })
                    .children(
                        page_questions
                            .iter()
                            .filter_map(|question| self.cards.get(&question.id).cloned()),
                    ),
            )
            // Pagination footer
            .child(
                Pagination::new(current_page, total_pages, total_matching)
                    .items_label(pluralize(total_matching, "question"))
                    .on_page_change(move |page, cx| {
                        entities.questions.update(cx, |questions, cx| {
                            questions.set_page(page);
                            cx.notify();
                        });
                    }),
            )
            // Delete confirmation
            .when_some(self.pending_delete, |el, id| {
                el.child(self.render_delete_modal(id, cx))
            })
    }
}
