use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Communication,
    TrustHonesty,
    EmotionalIntimacy,
    ConflictResolution,
    SelfAwareness,
    Boundaries,
    SharedValues,
    QualityTime,
    SupportRespect,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Communication => "Communication",
            Self::TrustHonesty => "Trust & Honesty",
            Self::EmotionalIntimacy => "Emotional Intimacy",
            Self::ConflictResolution => "Conflict Resolution",
            Self::SelfAwareness => "Self-Awareness",
            Self::Boundaries => "Boundaries",
            Self::SharedValues => "Shared Values",
            Self::QualityTime => "Quality Time",
            Self::SupportRespect => "Support & Respect",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub category: Category,
}

impl Question {
    pub fn new(id: u32, text: impl Into<String>, category: Category) -> Self {
        Self {
            id: QuestionId(id),
            text: text.into(),
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("question bank has no questions")]
    Empty,
    #[error("question id {0} appears more than once")]
    DuplicateId(QuestionId),
    #[error("category '{}' is split into more than one run", .0.label())]
    NonContiguousCategory(Category),
}

/// Ordered, immutable list of questions grouped by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        validate(&questions)?;
        Ok(Self { questions })
    }

    /// Builds a bank from a per-category table, keeping category order.
    pub(crate) fn from_sections(sections: &[(Category, &[(u32, &str)])]) -> Result<Self, BankError> {
        let questions = sections
            .iter()
            .flat_map(|(category, items)| {
                items
                    .iter()
                    .map(move |(id, text)| Question::new(*id, *text, *category))
            })
            .collect();
        Self::new(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.questions.iter().any(|q| q.id == id)
    }

    /// Categories in the order they first appear.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = Vec::new();
        for question in &self.questions {
            if !categories.contains(&question.category) {
                categories.push(question.category);
            }
        }
        categories
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.category == category)
    }
}

fn validate(questions: &[Question]) -> Result<(), BankError> {
    if questions.is_empty() {
        return Err(BankError::Empty);
    }

    let mut seen_ids = HashSet::new();
    let mut closed_categories = HashSet::new();
    let mut current: Option<Category> = None;

    for question in questions {
        if !seen_ids.insert(question.id) {
            return Err(BankError::DuplicateId(question.id));
        }
        if current != Some(question.category) {
            if closed_categories.contains(&question.category) {
                return Err(BankError::NonContiguousCategory(question.category));
            }
            if let Some(previous) = current {
                closed_categories.insert(previous);
            }
            current = Some(question.category);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_bank() {
        assert_eq!(QuestionBank::new(Vec::new()), Err(BankError::Empty));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = QuestionBank::new(vec![
            Question::new(1, "a", Category::Communication),
            Question::new(1, "b", Category::Communication),
        ]);
        assert_eq!(result, Err(BankError::DuplicateId(QuestionId(1))));
    }

    #[test]
    fn test_rejects_split_category() {
        let result = QuestionBank::new(vec![
            Question::new(1, "a", Category::Communication),
            Question::new(2, "b", Category::TrustHonesty),
            Question::new(3, "c", Category::Communication),
        ]);
        assert_eq!(
            result,
            Err(BankError::NonContiguousCategory(Category::Communication))
        );
    }

    #[test]
    fn test_categories_keep_first_appearance_order() {
        let bank = QuestionBank::new(vec![
            Question::new(10, "a", Category::TrustHonesty),
            Question::new(11, "b", Category::TrustHonesty),
            Question::new(12, "c", Category::Communication),
        ])
        .unwrap();

        assert_eq!(
            bank.categories(),
            vec![Category::TrustHonesty, Category::Communication]
        );
        assert_eq!(bank.get(2).map(|q| q.id), Some(QuestionId(12)));
        assert!(!bank.contains(QuestionId(1)));
        assert_eq!(bank.in_category(Category::TrustHonesty).count(), 2);
    }

    #[test]
    fn test_from_sections_flattens_in_order() {
        const FIRST: &[(u32, &str)] = &[(1, "one"), (2, "two")];
        const SECOND: &[(u32, &str)] = &[(3, "three")];
        let bank = QuestionBank::from_sections(&[
            (Category::Boundaries, FIRST),
            (Category::QualityTime, SECOND),
        ])
        .unwrap();
        let ids: Vec<u32> = bank.questions().iter().map(|q| q.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_sections_validates() {
        const FIRST: &[(u32, &str)] = &[(1, "one")];
        const SECOND: &[(u32, &str)] = &[(1, "again")];
        let result = QuestionBank::from_sections(&[
            (Category::Boundaries, FIRST),
            (Category::QualityTime, SECOND),
        ]);
        assert_eq!(result, Err(BankError::DuplicateId(QuestionId(1))));
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::TrustHonesty.label(), "Trust & Honesty");
        assert_eq!(Category::SupportRespect.label(), "Support & Respect");
    }
}
