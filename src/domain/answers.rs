use crate::domain::bank::{QuestionBank, QuestionId};
use crate::domain::likert::{InvalidLikert, Likert};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("question {0} is not part of this assessment")]
    UnknownQuestion(QuestionId),
    #[error(transparent)]
    InvalidValue(#[from] InvalidLikert),
}

/// Answers keyed by question id. One value per question; re-answering replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    values: BTreeMap<QuestionId, Likert>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: QuestionId) -> Option<Likert> {
        self.values.get(&id).copied()
    }

    /// First question in bank order that has no answer yet.
    pub fn first_unanswered(&self, bank: &QuestionBank) -> Option<QuestionId> {
        bank.questions()
            .iter()
            .map(|q| q.id)
            .find(|id| !self.values.contains_key(id))
    }

    /// Every question in `bank` has an answer.
    pub fn is_complete(&self, bank: &QuestionBank) -> bool {
        self.first_unanswered(bank).is_none()
    }

    pub fn answered_in(&self, bank: &QuestionBank) -> usize {
        bank.questions()
            .iter()
            .filter(|q| self.values.contains_key(&q.id))
            .count()
    }
}

impl Serialize for AnswerSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.values.iter().map(|(id, value)| (id.0, value.value())))
    }
}

/// Returns a copy of `answers` with `value` recorded for `question_id`.
pub fn record_answer(
    answers: &AnswerSet,
    bank: &QuestionBank,
    question_id: QuestionId,
    value: Likert,
) -> Result<AnswerSet, AnswerError> {
    if !bank.contains(question_id) {
        return Err(AnswerError::UnknownQuestion(question_id));
    }
    let mut next = answers.clone();
    next.values.insert(question_id, value);
    Ok(next)
}

pub fn can_advance(answers: &AnswerSet, question_id: QuestionId) -> bool {
    answers.values.contains_key(&question_id)
}
