//! Navigation - Active Page Management
//!
//! Defines the pages available in the application.

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivePage {
    /// Question list with search and pagination
    #[default]
    Questions,
    /// Add-question form
    Add,
    /// Quiz play mode
    Play,
}

impl ActivePage {
    /// Sidebar label
    pub fn title(&self) -> &'static str {
        match self {
            ActivePage::Questions => "List",
            ActivePage::Add => "Add",
            ActivePage::Play => "Play",
        }
    }

    /// All available pages for the sidebar
    pub fn all() -> &'static [ActivePage] {
        &[ActivePage::Questions, ActivePage::Add, ActivePage::Play]
    }
}
