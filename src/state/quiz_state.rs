//! QuizState - One Quiz Round
//!
//! Serves random not-yet-asked questions, optionally restricted to a
//! category, and scores free-text guesses. Pure state: the deck snapshot and
//! the random source are passed in by the controller.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::category::Category;
use crate::domain::question::Question;

/// Where the round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    /// Picking a category before the round starts
    #[default]
    CategorySelect,
    /// A question is on screen awaiting a guess
    Guessing,
    /// The answer is revealed along with the verdict
    Revealed,
    /// Round over; final score on screen
    Finished,
}

/// State for a quiz round
#[derive(Debug, Default)]
pub struct QuizState {
    /// Category restriction for this round; `None` plays the whole deck
    pub category: Option<Category>,
    /// Ids already served this round
    previous_questions: Vec<u64>,
    /// Question currently on screen
    pub current_question: Option<Question>,
    /// Guess text being composed
    pub guess: String,
    /// Whether the last guess was correct (valid in `Revealed`)
    pub last_correct: bool,
    /// Correct guesses this round
    pub num_correct: usize,
    phase: QuizPhase,
}

impl QuizState {
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Questions served so far this round
    pub fn questions_played(&self) -> usize {
        self.previous_questions.len()
    }

    /// Start a round for the given category and serve the first question
    pub fn start(
        &mut self,
        category: Option<Category>,
        deck: &[Question],
        per_play: usize,
        rng: &mut impl Rng,
    ) {
        *self = Self {
            category,
            ..Self::default()
        };
        self.advance(deck, per_play, rng);
    }

    /// Record the current guess and reveal the answer
    pub fn submit_guess(&mut self) {
        let Some(question) = &self.current_question else {
            return;
        };
        self.last_correct = check_guess(&self.guess, &question.answer);
        if self.last_correct {
            self.num_correct += 1;
        }
        self.phase = QuizPhase::Revealed;
    }

    /// Move on after a reveal: serve the next question or finish the round
    pub fn advance(&mut self, deck: &[Question], per_play: usize, rng: &mut impl Rng) {
        self.guess.clear();
        if self.previous_questions.len() >= per_play {
            self.current_question = None;
            self.phase = QuizPhase::Finished;
            return;
        }
        match next_question(deck, &self.previous_questions, self.category, rng) {
            Some(question) => {
                self.previous_questions.push(question.id);
                self.current_question = Some(question);
                self.phase = QuizPhase::Guessing;
            }
            // Deck exhausted before the quota; end the round early
            None => {
                self.current_question = None;
                self.phase = QuizPhase::Finished;
            }
        }
    }

    /// Back to category selection, dropping all round state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Pick a uniformly random question not yet served, optionally restricted to
/// a category. `None` when no candidate remains.
pub fn next_question(
    deck: &[Question],
    previous: &[u64],
    category: Option<Category>,
    rng: &mut impl Rng,
) -> Option<Question> {
    let candidates: Vec<&Question> = deck
        .iter()
        .filter(|q| category.is_none() || q.category == category)
        .filter(|q| !previous.contains(&q.id))
        .collect();
    candidates.choose(rng).map(|q| (*q).clone())
}

/// A guess matches when every whitespace-separated word of the answer
/// appears in the punctuation-stripped, lowercased guess.
pub fn check_guess(guess: &str, answer: &str) -> bool {
    let formatted: String = guess
        .to_lowercase()
        .chars()
        .filter(|c| !r".,/#!$%^&*;:{}=-_`~()".contains(*c))
        .collect();
    let answer = answer.to_lowercase();
    let mut words = answer.split_whitespace().peekable();
    words.peek().is_some() && words.all(|w| formatted.contains(w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(id: u64, category: Option<Category>) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            category,
            difficulty: 2,
        }
    }

    fn deck() -> Vec<Question> {
        vec![
            question(1, Some(Category::Science)),
            question(2, Some(Category::Science)),
            question(3, Some(Category::Art)),
        ]
    }

    #[test]
    fn test_next_question_skips_previous() {
        let deck = deck();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let q = next_question(&deck, &[1, 3], None, &mut rng).expect("no question");
            assert_eq!(q.id, 2);
        }
    }

    #[test]
    fn test_next_question_respects_category() {
        let deck = deck();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let q = next_question(&deck, &[], Some(Category::Science), &mut rng)
                .expect("no question");
            assert!(matches!(q.category, Some(Category::Science)));
        }
    }

    #[test]
    fn test_next_question_none_when_exhausted() {
        let deck = deck();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(next_question(&deck, &[1, 2, 3], None, &mut rng).is_none());
        assert!(next_question(&deck, &[3], Some(Category::Art), &mut rng).is_none());
    }

    #[test]
    fn test_round_never_repeats_and_finishes() {
        let deck = deck();
        let mut rng = StdRng::seed_from_u64(42);
        let mut quiz = QuizState::default();
        quiz.start(None, &deck, 5, &mut rng);

        let mut served = Vec::new();
        while quiz.phase() == QuizPhase::Guessing {
            let id = quiz.current_question.as_ref().map(|q| q.id).expect("no question");
            assert!(!served.contains(&id));
            served.push(id);
            quiz.submit_guess();
            quiz.advance(&deck, 5, &mut rng);
        }
        // Three questions in the deck, quota of five: exhaustion ends it
        assert_eq!(quiz.phase(), QuizPhase::Finished);
        assert_eq!(served.len(), 3);
    }

    #[test]
    fn test_round_stops_at_quota() {
        let deck: Vec<Question> = (1..=10).map(|id| question(id, None)).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let mut quiz = QuizState::default();
        quiz.start(None, &deck, 5, &mut rng);

        let mut served = 0;
        while quiz.phase() == QuizPhase::Guessing {
            served += 1;
            quiz.submit_guess();
            quiz.advance(&deck, 5, &mut rng);
        }
        assert_eq!(served, 5);
    }

    #[test]
    fn test_correct_guess_scores() {
        let deck = vec![question(1, None)];
        let mut rng = StdRng::seed_from_u64(1);
        let mut quiz = QuizState::default();
        quiz.start(None, &deck, 5, &mut rng);

        quiz.guess = "Answer 1!".to_string();
        quiz.submit_guess();
        assert!(quiz.last_correct);
        assert_eq!(quiz.num_correct, 1);
        assert_eq!(quiz.phase(), QuizPhase::Revealed);
    }

    #[test]
    fn test_check_guess_ignores_case_and_punctuation() {
        assert!(check_guess("Tom Cruise!", "Tom Cruise"));
        assert!(check_guess("it was apollo 13, right", "Apollo 13"));
        assert!(!check_guess("Apollo", "Apollo 13"));
        assert!(!check_guess("", "Apollo 13"));
    }
}
