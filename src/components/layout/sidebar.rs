//! Sidebar Component
//!
//! Navigation sidebar with page links and the category filter list.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::constants::SIDEBAR_WIDTH;
use crate::domain::category::Category;
use crate::theme::colors::TriviaColors;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe nav changes
        cx.observe(&entities.nav, |_this, _, cx| cx.notify())
            .detach();

        // Observe filter changes
        cx.observe(&entities.questions, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(
        &self,
        page: ActivePage,
        active_page: ActivePage,
        _cx: &Context<Self>,
    ) -> impl IntoElement {
        let is_active = page == active_page;
        let entities = self.entities.clone();

        let bg_color = if is_active {
            gpui::rgba(0x4f46e522)
        } else {
            gpui::rgba(0x00000000)
        };

        let text_color = if is_active {
            TriviaColors::header_bg()
        } else {
            TriviaColors::text_secondary()
        };

        let border_color = if is_active {
            TriviaColors::header_bg()
        } else {
            gpui::rgba(0x00000000)
        };

        div()
            .id(SharedString::from(format!("nav-{:?}", page)))
            .w_full()
            .px_4()
            .py_2()
            .bg(bg_color)
            .border_l_2()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(px(14.0))
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0x4f46e511)))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.nav.update(cx, |nav, cx| {
                    nav.set_active_page(page);
                    cx.notify();
                });
            })
            .child(page.title())
    }

    /// One row of the category filter list; `None` is the "All" entry
    fn render_category_item(
        &self,
        category: Option<Category>,
        active: Option<Category>,
        on_questions_page: bool,
        _cx: &Context<Self>,
    ) -> impl IntoElement {
        let is_active = on_questions_page && category == active;
        let entities = self.entities.clone();
        let label: SharedString = category
            .map(|c| c.name().into())
            .unwrap_or_else(|| "All".into());

        div()
            .id(SharedString::from(format!("category-{:?}", category)))
            .w_full()
            .px_4()
            .py_1()
            .flex()
            .items_center()
            .gap_2()
            .text_size(px(13.0))
            .text_color(if is_active {
                TriviaColors::header_bg()
            } else {
                TriviaColors::text_secondary()
            })
            .cursor_pointer()
            .hover(|s| s.bg(TriviaColors::row_hover()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                // Selecting a category filters the list and jumps to it
                entities.questions.update(cx, |questions, cx| {
                    questions.set_category(category);
                    cx.notify();
                });
                entities.nav.update(cx, |nav, cx| {
                    nav.set_active_page(ActivePage::Questions);
                    cx.notify();
                });
            })
            .when_some(category, |el, category| el.child(Icon::from(category)))
            .child(label)
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.nav.read(cx).active_page;
        let active_category = self.entities.questions.read(cx).category();
        let on_questions_page = active_page == ActivePage::Questions;

        div()
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .bg(TriviaColors::sidebar_bg())
            .border_r_1()
            .border_color(TriviaColors::border())
            .flex()
            .flex_col()
            .pt_4()
            .children(
                ActivePage::all()
                    .iter()
                    .map(|page| self.render_nav_item(*page, active_page, cx)),
            )
            // Category filter section
            .child(
                div()
                    .px_4()
                    .pt_6()
                    .pb_1()
                    .text_size(px(11.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(TriviaColors::text_muted())
                    .child("CATEGORIES"),
            )
            .child(self.render_category_item(None, active_category, on_questions_page, cx))
            .children(Category::all().iter().map(|category| {
                self.render_category_item(
                    Some(*category),
                    active_category,
                    on_questions_page,
                    cx,
                )
            }))
    }
}
