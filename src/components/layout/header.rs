//! Header Component
//!
//! The application header with branding and deck stats.

use gpui::{
    div, prelude::*, px, Context, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::constants::HEADER_HEIGHT;
use crate::theme::colors::TriviaColors;
use crate::utils::format::pluralize;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe deck changes for the question count
        cx.observe(&entities.questions, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let count = self.entities.questions.read(cx).len();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(TriviaColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: Logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    // Logo placeholder
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(gpui::rgba(0xffffffcc))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(TriviaColors::header_bg())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("T"),
                    )
                    .child(
                        div()
                            .text_color(TriviaColors::text_header())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child("Trivia"),
                    ),
            )
            // Right side: deck stats
            .child(
                div()
                    .text_color(TriviaColors::text_header())
                    .text_size(px(13.0))
                    .child(format!("{count} {}", pluralize(count, "question"))),
            )
    }
}
