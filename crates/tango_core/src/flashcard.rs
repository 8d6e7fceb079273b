//! Generated study material and its structural invariants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of quiz questions in every study set.
pub const QUIZ_COUNT: usize = 10;
/// Number of options in every quiz question.
pub const OPTION_COUNT: usize = 4;

/// A single generated study set for one keyword.
///
/// The field names match the JSON schema declared to the generation
/// service, so a raw service payload deserializes directly into this type.
/// Deserializing alone does not establish the structural invariants;
/// callers must run [`Flashcard::validate`] before trusting the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub term: String,
    pub reading: String,
    pub meaning: String,
    pub explanation: String,
    pub example_sentence: String,
    pub example_meaning: String,
    pub quizzes: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
    pub explanation: String,
}

/// A structural violation in a service payload.
///
/// These are contract obligations on the generation service's output;
/// any violation means the whole payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFlashcard {
    #[error("expected {QUIZ_COUNT} quiz questions, got {got}")]
    WrongQuizCount { got: usize },
    #[error("question {question} has {got} options, expected {OPTION_COUNT}")]
    WrongOptionCount { question: usize, got: usize },
    #[error("question {question} has out of range answer index {index}")]
    AnswerIndexOutOfRange { question: usize, index: usize },
}

impl Flashcard {
    /// Checks the invariants the service promised to uphold:
    /// exactly ten questions, four options each, correct answer in range.
    pub fn validate(&self) -> Result<(), InvalidFlashcard> {
        if self.quizzes.len() != QUIZ_COUNT {
            return Err(InvalidFlashcard::WrongQuizCount {
                got: self.quizzes.len(),
            });
        }
        for (question, quiz) in self.quizzes.iter().enumerate() {
            if quiz.options.len() != OPTION_COUNT {
                return Err(InvalidFlashcard::WrongOptionCount {
                    question,
                    got: quiz.options.len(),
                });
            }
            if quiz.correct_answer_index >= quiz.options.len() {
                return Err(InvalidFlashcard::AnswerIndexOutOfRange {
                    question,
                    index: quiz.correct_answer_index,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    pub(crate) fn quiz_question(correct_answer_index: usize) -> QuizQuestion {
        QuizQuestion {
            question: "「絆」の意味として最も適切なものは？".to_string(),
            options: vec![
                "深いつながり".to_string(),
                "別れ".to_string(),
                "約束".to_string(),
                "記憶".to_string(),
            ],
            correct_answer_index,
            explanation: "絆は人と人との深い結びつきを表します。".to_string(),
        }
    }

    pub(crate) fn flashcard() -> Flashcard {
        Flashcard {
            term: "絆".to_string(),
            reading: "きずな".to_string(),
            meaning: "bond".to_string(),
            explanation: "A deep emotional connection between people.".to_string(),
            example_sentence: "家族の絆を大切にする。".to_string(),
            example_meaning: "Cherish your family bonds.".to_string(),
            quizzes: (0..QUIZ_COUNT).map(|i| quiz_question(i % OPTION_COUNT)).collect(),
        }
    }

    #[test]
    fn accepts_conforming_flashcard() {
        assert_eq!(flashcard().validate(), Ok(()));
    }

    #[test]
    fn rejects_wrong_quiz_count() {
        let mut card = flashcard();
        card.quizzes.pop();
        assert_eq!(
            card.validate(),
            Err(InvalidFlashcard::WrongQuizCount { got: 9 })
        );

        card.quizzes
            .extend([quiz_question(0), quiz_question(1)]);
        assert_eq!(
            card.validate(),
            Err(InvalidFlashcard::WrongQuizCount { got: 11 })
        );
    }

    #[test]
    fn rejects_wrong_option_count() {
        let mut card = flashcard();
        card.quizzes[3].options.pop();
        assert_eq!(
            card.validate(),
            Err(InvalidFlashcard::WrongOptionCount { question: 3, got: 3 })
        );

        let mut card = flashcard();
        card.quizzes[0].options.push("余分".to_string());
        assert_eq!(
            card.validate(),
            Err(InvalidFlashcard::WrongOptionCount { question: 0, got: 5 })
        );
    }

    #[test]
    fn rejects_out_of_range_answer_index() {
        let mut card = flashcard();
        card.quizzes[7].correct_answer_index = 4;
        assert_eq!(
            card.validate(),
            Err(InvalidFlashcard::AnswerIndexOutOfRange {
                question: 7,
                index: 4
            })
        );
    }

    #[test]
    fn uses_the_service_schema_field_names() {
        let json = serde_json::to_value(flashcard()).unwrap();
        assert!(json.get("exampleSentence").is_some());
        assert!(json.get("exampleMeaning").is_some());
        assert!(json["quizzes"][0].get("correctAnswerIndex").is_some());

        let back: Flashcard = serde_json::from_value(json).unwrap();
        assert_eq!(back, flashcard());
    }
}
