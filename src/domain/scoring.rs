//! Percentage scores over a question bank.
//!
//! All arithmetic is integer; rounding is half-up. A question without an
//! answer contributes zero, so partial answer sets score low instead of failing.

use crate::domain::answers::AnswerSet;
use crate::domain::bank::{Category, Question, QuestionBank};
use crate::domain::likert::Likert;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub label: &'static str,
    pub score: u8,
    pub question_count: usize,
    pub answered_count: usize,
}

/// `round(100 * sum / (5 * count))`, half-up.
fn percent(sum: u64, count: u64) -> u8 {
    if count == 0 {
        return 0;
    }
    let max = u64::from(Likert::MAX) * count;
    let rounded = (200 * sum + max) / (2 * max);
    rounded.min(100) as u8
}

fn sum_answers<'a>(answers: &AnswerSet, questions: impl Iterator<Item = &'a Question>) -> (u64, u64) {
    questions.fold((0, 0), |(sum, count), q| {
        let value = answers.get(q.id).map(|v| u64::from(v.value())).unwrap_or(0);
        (sum + value, count + 1)
    })
}

pub fn overall_score(answers: &AnswerSet, bank: &QuestionBank) -> u8 {
    let (sum, count) = sum_answers(answers, bank.questions().iter());
    percent(sum, count)
}

/// `None` when the bank has no questions in `category`.
pub fn category_score(answers: &AnswerSet, bank: &QuestionBank, category: Category) -> Option<u8> {
    let (sum, count) = sum_answers(answers, bank.in_category(category));
    (count > 0).then(|| percent(sum, count))
}

pub fn category_scores(answers: &AnswerSet, bank: &QuestionBank) -> Vec<CategoryScore> {
    bank.categories()
        .into_iter()
        .filter_map(|category| {
            let score = category_score(answers, bank, category)?;
            let (question_count, answered_count) =
                bank.in_category(category).fold((0, 0), |(total, answered), q| {
                    (total + 1, answered + usize::from(answers.get(q.id).is_some()))
                });
            Some(CategoryScore {
                category,
                label: category.label(),
                score,
                question_count,
                answered_count,
            })
        })
        .collect()
}
