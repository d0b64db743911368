//! Progress of one user through one assessment.
//!
//! Transitions never mutate: each returns the next state, or an error that
//! leaves the caller's state as it was.

use crate::domain::answers::{can_advance, record_answer, AnswerError, AnswerSet};
use crate::domain::bank::{Question, QuestionBank, QuestionId};
use crate::domain::likert::Likert;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("question {0} must be answered before moving on")]
    Unanswered(QuestionId),
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("assessment is already completed")]
    AlreadyCompleted,
    #[error(transparent)]
    Answer(#[from] AnswerError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionState {
    InProgress {
        current_index: usize,
        answers: AnswerSet,
    },
    Completed {
        answers: AnswerSet,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    pub percent: u8,
}

impl SessionState {
    pub fn start() -> Self {
        SessionState::InProgress {
            current_index: 0,
            answers: AnswerSet::new(),
        }
    }

    pub fn restart(&self) -> Self {
        Self::start()
    }

    pub fn answers(&self) -> &AnswerSet {
        match self {
            SessionState::InProgress { answers, .. } | SessionState::Completed { answers } => answers,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, SessionState::Completed { .. })
    }

    pub fn current_index(&self) -> Option<usize> {
        match self {
            SessionState::InProgress { current_index, .. } => Some(*current_index),
            SessionState::Completed { .. } => None,
        }
    }

    pub fn current_question<'b>(&self, bank: &'b QuestionBank) -> Option<&'b Question> {
        self.current_index().and_then(|index| bank.get(index))
    }

    /// Whether `Next` is currently allowed.
    pub fn can_advance(&self, bank: &QuestionBank) -> bool {
        self.current_question(bank)
            .map(|q| can_advance(self.answers(), q.id))
            .unwrap_or(false)
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.current_index(), Some(index) if index > 0)
    }

    pub fn record_answer(
        &self,
        bank: &QuestionBank,
        question_id: QuestionId,
        value: Likert,
    ) -> Result<Self, SessionError> {
        match self {
            SessionState::InProgress {
                current_index,
                answers,
            } => Ok(SessionState::InProgress {
                current_index: *current_index,
                answers: record_answer(answers, bank, question_id, value)?,
            }),
            SessionState::Completed { .. } => Err(SessionError::AlreadyCompleted),
        }
    }

    pub fn next(&self, bank: &QuestionBank) -> Result<Self, SessionError> {
        let SessionState::InProgress {
            current_index,
            answers,
        } = self
        else {
            return Err(SessionError::AlreadyCompleted);
        };

        let index = (*current_index).min(bank.len().saturating_sub(1));
        let Some(question) = bank.get(index) else {
            return Err(SessionError::AlreadyCompleted);
        };
        if !can_advance(answers, question.id) {
            return Err(SessionError::Unanswered(question.id));
        }

        if index + 1 >= bank.len() {
            // Completion needs every answer, not just the last one.
            if let Some(missing) = answers.first_unanswered(bank) {
                return Err(SessionError::Unanswered(missing));
            }
            Ok(SessionState::Completed {
                answers: answers.clone(),
            })
        } else {
            Ok(SessionState::InProgress {
                current_index: index + 1,
                answers: answers.clone(),
            })
        }
    }

    pub fn previous(&self) -> Result<Self, SessionError> {
        match self {
            SessionState::InProgress {
                current_index,
                answers,
            } => {
                if *current_index == 0 {
                    return Err(SessionError::AtFirstQuestion);
                }
                Ok(SessionState::InProgress {
                    current_index: current_index - 1,
                    answers: answers.clone(),
                })
            }
            SessionState::Completed { .. } => Err(SessionError::AlreadyCompleted),
        }
    }

    /// Share of the bank answered so far. Rounded down, so it reads 100 only
    /// once every question has an answer.
    pub fn progress(&self, bank: &QuestionBank) -> Progress {
        let answered = self.answers().answered_in(bank);
        let total = bank.len();
        let percent = if bank.is_empty() {
            0
        } else {
            ((answered * 100) / total) as u8
        };
        Progress {
            answered,
            total,
            percent,
        }
    }
}
