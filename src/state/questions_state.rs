//! QuestionsState - The Question Deck
//!
//! Single source of truth for the question collection, the active list
//! filters, and pagination. Pure state: no GPUI types, no I/O.

use crate::domain::category::Category;
use crate::domain::question::Question;
use crate::error::{Error, Result};

/// State for the question deck and the list view over it
#[derive(Debug)]
pub struct QuestionsState {
    /// All questions, ordered by ascending id
    questions: Vec<Question>,
    /// Next id to assign
    next_id: u64,
    /// Current 1-based page
    page: usize,
    /// Page size
    per_page: usize,
    /// Active search term; empty means no search
    search: String,
    /// Active category filter
    category: Option<Category>,
}

impl QuestionsState {
    /// Create a deck from loaded questions.
    ///
    /// Questions are reordered by id and the id counter continues after the
    /// highest seen.
    pub fn new(mut questions: Vec<Question>, per_page: usize) -> Self {
        questions.sort_by_key(|q| q.id);
        let next_id = questions.last().map(|q| q.id + 1).unwrap_or(1);
        Self {
            questions,
            next_id,
            page: 1,
            per_page: per_page.max(1),
            search: String::new(),
            category: None,
        }
    }

    /// All questions in the deck, id order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Validate and append a question, assigning the next id.
    ///
    /// Returns the assigned id.
    pub fn add(&mut self, mut question: Question) -> Result<u64> {
        question.validate()?;
        question.id = self.next_id;
        self.next_id += 1;
        self.questions.push(question);
        Ok(self.next_id - 1)
    }

    /// Remove the question with the given id
    pub fn remove(&mut self, id: u64) -> Result<Question> {
        let pos = self
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or(Error::QuestionNotFound { id })?;
        Ok(self.questions.remove(pos))
    }

    /// Set the search term and reset to the first page
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Set the category filter and reset to the first page
    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
        self.page = 1;
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Current page, clamped into the valid range.
    ///
    /// Deleting the last question of the last page would otherwise leave the
    /// view pointing past the end.
    pub fn page(&self) -> usize {
        self.page.min(self.total_pages())
    }

    /// Total pages for the current filters; never zero
    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(self.per_page).max(1)
    }

    /// Number of questions matching the current filters
    pub fn total_matching(&self) -> usize {
        self.filtered().len()
    }

    /// Questions on the current page, under the active filters
    pub fn page_questions(&self) -> Vec<Question> {
        let filtered = self.filtered();
        let start = (self.page() - 1) * self.per_page;
        filtered
            .into_iter()
            .skip(start)
            .take(self.per_page)
            .cloned()
            .collect()
    }

    fn filtered(&self) -> Vec<&Question> {
        let term = self.search.trim().to_lowercase();
        self.questions
            .iter()
            .filter(|q| self.category.is_none() || q.category == self.category)
            .filter(|q| term.is_empty() || q.question.to_lowercase().contains(&term))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, text: &str, category: Option<Category>) -> Question {
        Question {
            id,
            question: text.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: 3,
        }
    }

    fn deck_of(n: usize) -> QuestionsState {
        let questions = (1..=n as u64)
            .map(|id| question(id, &format!("question {id}"), Some(Category::Science)))
            .collect();
        QuestionsState::new(questions, 10)
    }

    #[test]
    fn test_pagination_splits_pages() {
        let mut deck = deck_of(25);
        assert_eq!(deck.total_pages(), 3);
        assert_eq!(deck.page_questions().len(), 10);
        deck.set_page(3);
        assert_eq!(deck.page_questions().len(), 5);
    }

    #[test]
    fn test_empty_deck_has_one_page() {
        let deck = QuestionsState::new(Vec::new(), 10);
        assert_eq!(deck.total_pages(), 1);
        assert!(deck.page_questions().is_empty());
    }

    #[test]
    fn test_page_clamps_after_delete() {
        let mut deck = deck_of(11);
        deck.set_page(2);
        assert_eq!(deck.page_questions().len(), 1);
        deck.remove(11).expect("remove failed");
        assert_eq!(deck.page(), 1);
        assert_eq!(deck.page_questions().len(), 10);
    }

    #[test]
    fn test_add_appends_with_ascending_id() {
        let mut deck = deck_of(3);
        let id = deck
            .add(question(0, "newest", None))
            .expect("add failed");
        assert_eq!(id, 4);
        assert_eq!(deck.questions().last().map(|q| q.id), Some(4));
    }

    #[test]
    fn test_add_rejects_invalid() {
        let mut deck = deck_of(1);
        let mut q = question(0, "", None);
        assert!(deck.add(q.clone()).is_err());
        q.question = "ok".to_string();
        q.difficulty = 9;
        assert!(deck.add(q).is_err());
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_errors() {
        let mut deck = deck_of(2);
        assert!(matches!(
            deck.remove(99),
            Err(Error::QuestionNotFound { id: 99 })
        ));
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_remove_targets_exactly_one() {
        let mut deck = deck_of(3);
        let removed = deck.remove(2).expect("remove failed");
        assert_eq!(removed.id, 2);
        assert_eq!(
            deck.questions().iter().map(|q| q.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut deck = QuestionsState::new(
            vec![
                question(1, "Whose autobiography is entitled I Know Why the Caged Bird Sings?", None),
                question(2, "What is the heaviest organ in the human body?", None),
            ],
            10,
        );
        deck.set_search("CAGED bird");
        assert_eq!(deck.total_matching(), 1);
        assert_eq!(deck.page_questions()[0].id, 1);

        deck.set_search("zebra");
        assert_eq!(deck.total_matching(), 0);
    }

    #[test]
    fn test_category_filter() {
        let mut deck = QuestionsState::new(
            vec![
                question(1, "a", Some(Category::Art)),
                question(2, "b", Some(Category::Science)),
                question(3, "c", Some(Category::Art)),
                question(4, "d", None),
            ],
            10,
        );
        deck.set_category(Some(Category::Art));
        assert_eq!(
            deck.page_questions().iter().map(|q| q.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        deck.set_category(None);
        assert_eq!(deck.total_matching(), 4);
    }

    #[test]
    fn test_filter_resets_page() {
        let mut deck = deck_of(25);
        deck.set_page(3);
        deck.set_search("question");
        assert_eq!(deck.page(), 1);
    }
}
