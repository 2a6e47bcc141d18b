//! Workspace - Main Shell with Layout
//!
//! The workspace is the main container that holds the header, sidebar, and
//! the active page.

use gpui::{
    div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::layout::header::Header;
use crate::components::layout::sidebar::Sidebar;
use crate::features::add::page::AddPage;
use crate::features::play::page::PlayPage;
use crate::features::questions::page::QuestionsPage;
use crate::theme::colors::TriviaColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    // Page views (created lazily or cached)
    questions_page: Option<Entity<QuestionsPage>>,
    add_page: Option<Entity<AddPage>>,
    play_page: Option<Entity<PlayPage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Create layout components
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));

        // Create the questions page (visible initially)
        let questions_page = Some(cx.new(|cx| QuestionsPage::new(entities.clone(), cx)));

        // Observe nav state for page changes
        cx.observe(&entities.nav, |_this, _, cx| {
            cx.notify();
        })
        .detach();

        Self {
            entities,
            header,
            sidebar,
            questions_page,
            add_page: None,
            play_page: None,
        }
    }

    /// Get or create a page view for the given page
    fn get_or_create_page(&mut self, page: ActivePage, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        match page {
            ActivePage::Questions => self
                .questions_page
                .get_or_insert_with(|| cx.new(|cx| QuestionsPage::new(self.entities.clone(), cx)))
                .clone()
                .into_any_element(),
            ActivePage::Add => self
                .add_page
                .get_or_insert_with(|| cx.new(|cx| AddPage::new(self.entities.clone(), cx)))
                .clone()
                .into_any_element(),
            ActivePage::Play => self
                .play_page
                .get_or_insert_with(|| cx.new(|cx| PlayPage::new(self.entities.clone(), cx)))
                .clone()
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.nav.read(cx).active_page;
        let content = self.get_or_create_page(active_page, cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(TriviaColors::background())
            .child(
                // Header
                self.header.clone(),
            )
            .child(
                // Main content area
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(
                        // Sidebar
                        self.sidebar.clone(),
                    )
                    .child(
                        // Content
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .bg(TriviaColors::content_bg())
                            .child(content),
                    ),
            )
    }
}
