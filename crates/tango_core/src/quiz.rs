//! The quiz session state machine.
//!
//! A session walks through the questions of one study set strictly
//! forwards: each question is answered once, the answer is locked the
//! moment its correctness is revealed, and advancing past the last
//! question ends the session with a final score. Restarting is not a
//! transition; a restarted quiz is a fresh [`QuizSession`].

use crate::flashcard::QuizQuestion;

/// How a single option should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// Selectable, nothing revealed yet.
    Neutral,
    /// Revealed as the correct answer.
    Correct,
    /// Revealed as the user's incorrect selection.
    Incorrect,
    /// Revealed, neither correct nor selected.
    Dimmed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    InProgress {
        current: usize,
        selected: Option<usize>,
        revealed: bool,
        score: u32,
    },
    Finished {
        score: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    phase: Phase,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            phase: Phase::InProgress {
                current: 0,
                selected: None,
                revealed: false,
                score: 0,
            },
        }
    }

    /// Locks in an answer for the current question and reveals the verdict.
    ///
    /// The first answer is final: calls after the reveal, after the
    /// session has finished, or with an out of range index do nothing.
    pub fn select_answer(&mut self, idx: usize) {
        let Phase::InProgress {
            current,
            selected,
            revealed,
            score,
        } = &mut self.phase
        else {
            return;
        };
        if *revealed || idx >= self.questions[*current].options.len() {
            return;
        }
        *selected = Some(idx);
        *revealed = true;
        if idx == self.questions[*current].correct_answer_index {
            *score += 1;
        }
    }

    /// Moves to the next question, or finishes the session from the last one.
    ///
    /// Only valid once the current question has been revealed; otherwise
    /// this does nothing.
    pub fn advance(&mut self) {
        let Phase::InProgress {
            current,
            selected,
            revealed,
            score,
        } = &mut self.phase
        else {
            return;
        };
        if !*revealed {
            return;
        }
        if *current + 1 < self.questions.len() {
            *current += 1;
            *selected = None;
            *revealed = false;
        } else {
            self.phase = Phase::Finished { score: *score };
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            Phase::InProgress { current, .. } => Some(current),
            Phase::Finished { .. } => None,
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.current_index().map(|idx| &self.questions[idx])
    }

    pub fn selected_answer(&self) -> Option<usize> {
        match self.phase {
            Phase::InProgress { selected, .. } => selected,
            Phase::Finished { .. } => None,
        }
    }

    pub fn revealed(&self) -> bool {
        matches!(self.phase, Phase::InProgress { revealed: true, .. })
    }

    pub fn score(&self) -> u32 {
        match self.phase {
            Phase::InProgress { score, .. } | Phase::Finished { score } => score,
        }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }

    /// Whether the current question is the last one of the session.
    pub fn on_last_question(&self) -> bool {
        self.current_index()
            .is_some_and(|idx| idx + 1 == self.questions.len())
    }

    /// Whether the locked-in answer for the current question was correct.
    pub fn answered_correctly(&self) -> Option<bool> {
        let Phase::InProgress {
            current,
            selected,
            revealed: true,
            ..
        } = self.phase
        else {
            return None;
        };
        selected.map(|s| s == self.questions[current].correct_answer_index)
    }

    /// The presentation of option `idx` of the current question.
    ///
    /// Before the reveal every option is neutral. After it, the correct
    /// option is marked correct, an incorrect selection is marked
    /// incorrect and the rest are dimmed.
    pub fn option_mark(&self, idx: usize) -> OptionMark {
        let Phase::InProgress {
            current,
            selected,
            revealed,
            ..
        } = self.phase
        else {
            return OptionMark::Neutral;
        };
        if !revealed {
            return OptionMark::Neutral;
        }
        if idx == self.questions[current].correct_answer_index {
            OptionMark::Correct
        } else if Some(idx) == selected {
            OptionMark::Incorrect
        } else {
            OptionMark::Dimmed
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn question(correct_answer_index: usize) -> QuizQuestion {
        QuizQuestion {
            question: "この言葉の使い方として正しいものは？".to_string(),
            options: vec![
                "選択肢A".to_string(),
                "選択肢B".to_string(),
                "選択肢C".to_string(),
                "選択肢D".to_string(),
            ],
            correct_answer_index,
            explanation: "解説".to_string(),
        }
    }

    fn ten_questions() -> Vec<QuizQuestion> {
        (0..10).map(|i| question(i % 4)).collect()
    }

    #[test]
    fn starts_at_the_first_question_with_nothing_marked() {
        let session = QuizSession::new(ten_questions());
        assert_eq!(session.current_index(), Some(0));
        assert_eq!(session.selected_answer(), None);
        assert!(!session.revealed());
        assert_eq!(session.score(), 0);
        assert_eq!(session.total(), 10);
        for idx in 0..4 {
            assert_eq!(session.option_mark(idx), OptionMark::Neutral);
        }
    }

    #[test]
    fn correct_selection_reveals_and_scores() {
        // question 0 has correct answer 0
        let mut session = QuizSession::new(ten_questions());
        session.select_answer(0);
        assert!(session.revealed());
        assert_eq!(session.score(), 1);
        assert_eq!(session.answered_correctly(), Some(true));
        assert_eq!(session.option_mark(0), OptionMark::Correct);
        assert_eq!(session.option_mark(1), OptionMark::Dimmed);
        assert_eq!(session.option_mark(2), OptionMark::Dimmed);
        assert_eq!(session.option_mark(3), OptionMark::Dimmed);
    }

    #[test]
    fn incorrect_selection_reveals_without_scoring() {
        let mut session = QuizSession::new(vec![question(3); 10]);
        session.select_answer(0);
        assert!(session.revealed());
        assert_eq!(session.score(), 0);
        assert_eq!(session.answered_correctly(), Some(false));
        assert_eq!(session.option_mark(3), OptionMark::Correct);
        assert_eq!(session.option_mark(0), OptionMark::Incorrect);
        assert_eq!(session.option_mark(1), OptionMark::Dimmed);
        assert_eq!(session.option_mark(2), OptionMark::Dimmed);
    }

    #[test]
    fn first_answer_is_final() {
        let mut session = QuizSession::new(ten_questions());
        session.select_answer(3);
        assert_eq!(session.selected_answer(), Some(3));
        assert_eq!(session.score(), 0);

        // selecting the correct answer after the reveal changes nothing
        session.select_answer(0);
        assert_eq!(session.selected_answer(), Some(3));
        assert_eq!(session.score(), 0);
        session.select_answer(0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut session = QuizSession::new(ten_questions());
        session.select_answer(4);
        assert!(!session.revealed());
        assert_eq!(session.selected_answer(), None);
    }

    #[test]
    fn advance_before_reveal_is_ignored() {
        let mut session = QuizSession::new(ten_questions());
        session.advance();
        assert_eq!(session.current_index(), Some(0));
        assert!(!session.is_finished());
    }

    #[test]
    fn advancing_resets_the_selection_and_reveal() {
        let mut session = QuizSession::new(ten_questions());
        session.select_answer(1);
        session.advance();
        assert_eq!(session.current_index(), Some(1));
        assert_eq!(session.selected_answer(), None);
        assert!(!session.revealed());
    }

    #[test]
    fn full_session_counts_matching_answers() {
        let mut session = QuizSession::new(ten_questions());
        // answer 0 on every question; questions 0, 4 and 8 have correct answer 0
        for turn in 0..10 {
            assert_eq!(session.current_index(), Some(turn));
            assert_eq!(session.on_last_question(), turn == 9);
            session.select_answer(0);
            session.advance();
        }
        assert!(session.is_finished());
        assert_eq!(session.score(), 3);
        assert_eq!(session.total(), 10);
        assert_eq!(session.current_index(), None);
        assert_eq!(session.current_question(), None);
    }

    #[test]
    fn perfect_and_zero_scores() {
        let questions = ten_questions();

        let mut session = QuizSession::new(questions.clone());
        for turn in 0..10 {
            session.select_answer(questions[turn].correct_answer_index);
            session.advance();
        }
        assert!(session.is_finished());
        assert_eq!(session.score(), 10);

        let mut session = QuizSession::new(questions.clone());
        for turn in 0..10 {
            // the wrong answer every time
            session.select_answer((questions[turn].correct_answer_index + 1) % 4);
            session.advance();
        }
        assert!(session.is_finished());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn finished_session_ignores_further_transitions() {
        let mut session = QuizSession::new(ten_questions());
        for _ in 0..10 {
            session.select_answer(0);
            session.advance();
        }
        let score = session.score();
        session.select_answer(0);
        session.advance();
        assert!(session.is_finished());
        assert_eq!(session.score(), score);
        assert_eq!(session.option_mark(0), OptionMark::Neutral);
        assert_eq!(session.answered_correctly(), None);
    }

    #[test]
    fn finishes_only_after_every_question() {
        let mut session = QuizSession::new(ten_questions());
        for _ in 0..9 {
            session.select_answer(0);
            session.advance();
            assert!(!session.is_finished());
        }
        session.select_answer(0);
        assert!(!session.is_finished());
        session.advance();
        assert!(session.is_finished());
    }
}
