use crate::domain::answers::AnswerSet;
use crate::domain::bank::{BankError, Category, QuestionBank};
use crate::domain::classification::{Bracket, BracketTable, ColorTier};
use crate::domain::scoring::{category_scores, overall_score, CategoryScore};
use crate::domain::{couple, individual};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    Individual,
    Couple,
}

impl AssessmentKind {
    pub const ALL: [AssessmentKind; 2] = [AssessmentKind::Individual, AssessmentKind::Couple];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentKind::Individual => "individual",
            AssessmentKind::Couple => "couple",
        }
    }
}

/// One questionnaire variant: its bank plus the narrative used to classify results.
#[derive(Debug, Clone)]
pub struct AssessmentDefinition {
    pub kind: AssessmentKind,
    pub title: &'static str,
    pub description: &'static str,
    pub bank: QuestionBank,
    pub brackets: BracketTable,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResult {
    #[serde(flatten)]
    pub score: CategoryScore,
    pub bracket: Bracket,
    pub bracket_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub kind: AssessmentKind,
    pub title: &'static str,
    pub overall_score: u8,
    pub bracket: Bracket,
    pub label: &'static str,
    pub color_tier: ColorTier,
    pub summary: &'static str,
    pub insights: &'static [&'static str],
    pub actions: &'static [&'static str],
    pub categories: Vec<CategoryResult>,
    pub strongest_category: Option<Category>,
    pub focus_areas: Vec<Category>,
    pub answered: usize,
    pub total_questions: usize,
    pub complete: bool,
}

impl AssessmentDefinition {
    pub fn evaluate(&self, answers: &AnswerSet) -> AssessmentReport {
        let overall = overall_score(answers, &self.bank);
        let (bracket, content) = self.brackets.classify(overall);

        let categories: Vec<CategoryResult> = category_scores(answers, &self.bank)
            .into_iter()
            .map(|score| {
                let bracket = Bracket::from_score(score.score);
                CategoryResult {
                    bracket,
                    bracket_label: self.brackets.label(bracket),
                    score,
                }
            })
            .collect();

        let mut strongest: Option<&CategoryResult> = None;
        for result in &categories {
            if strongest.map_or(true, |best| result.score.score > best.score.score) {
                strongest = Some(result);
            }
        }

        let mut focus: Vec<&CategoryResult> = categories
            .iter()
            .filter(|r| r.score.score < Bracket::MODERATE_FROM)
            .collect();
        focus.sort_by_key(|r| r.score.score);

        AssessmentReport {
            kind: self.kind,
            title: self.title,
            overall_score: overall,
            bracket,
            label: content.label,
            color_tier: content.color_tier,
            summary: content.summary,
            insights: content.insights,
            actions: content.actions,
            strongest_category: strongest.map(|r| r.score.category),
            focus_areas: focus.iter().map(|r| r.score.category).collect(),
            answered: answers.answered_in(&self.bank),
            total_questions: self.bank.len(),
            complete: answers.is_complete(&self.bank),
            categories,
        }
    }
}

pub fn definition(kind: AssessmentKind) -> Result<AssessmentDefinition, BankError> {
    let bank = load_question_bank(kind)?;
    Ok(match kind {
        AssessmentKind::Individual => individual::definition(bank),
        AssessmentKind::Couple => couple::definition(bank),
    })
}

/// The ordered, validated bank for `kind`.
pub fn load_question_bank(kind: AssessmentKind) -> Result<QuestionBank, BankError> {
    match kind {
        AssessmentKind::Individual => individual::bank(),
        AssessmentKind::Couple => couple::bank(),
    }
}

/// Both compiled-in variants, checked once at start-up.
#[derive(Debug, Clone)]
pub struct AssessmentCatalog {
    individual: AssessmentDefinition,
    couple: AssessmentDefinition,
}

impl AssessmentCatalog {
    pub fn load() -> Result<Self, BankError> {
        Ok(Self {
            individual: definition(AssessmentKind::Individual)?,
            couple: definition(AssessmentKind::Couple)?,
        })
    }

    pub fn get(&self, kind: AssessmentKind) -> &AssessmentDefinition {
        match kind {
            AssessmentKind::Individual => &self.individual,
            AssessmentKind::Couple => &self.couple,
        }
    }

    pub fn all(&self) -> [&AssessmentDefinition; 2] {
        AssessmentKind::ALL.map(|kind| self.get(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::record_answer;
    use crate::domain::bank::Question;
    use crate::domain::likert::Likert;

    fn answer_all(bank: &QuestionBank, value: Likert) -> AnswerSet {
        bank.questions().iter().fold(AnswerSet::new(), |acc, q| {
            record_answer(&acc, bank, q.id, value).unwrap()
        })
    }

    #[test]
    fn test_catalog_loads_both_variants() {
        let catalog = AssessmentCatalog::load().unwrap();
        assert_eq!(catalog.get(AssessmentKind::Individual).kind, AssessmentKind::Individual);
        assert_eq!(catalog.get(AssessmentKind::Couple).kind, AssessmentKind::Couple);
        assert_ne!(
            catalog.get(AssessmentKind::Individual).bank,
            catalog.get(AssessmentKind::Couple).bank
        );
    }

    #[test]
    fn test_single_category_bank_end_to_end() {
        let base = definition(AssessmentKind::Individual).unwrap();
        let bank = QuestionBank::new(
            (1..=6)
                .map(|id| Question::new(id, format!("Communication {id}"), Category::Communication))
                .collect(),
        )
        .unwrap();
        let def = AssessmentDefinition { bank, ..base };

        let report = def.evaluate(&answer_all(&def.bank, Likert::Agree));

        assert_eq!(report.overall_score, 80);
        assert_eq!(report.bracket, Bracket::Strong);
        assert_eq!(report.summary, def.brackets.content(Bracket::Strong).summary);
        assert_eq!(report.insights, def.brackets.content(Bracket::Strong).insights);
        assert_eq!(report.strongest_category, Some(Category::Communication));
        assert!(report.focus_areas.is_empty());
    }

    #[test]
    fn test_couple_top_bracket_is_healthy() {
        let def = definition(AssessmentKind::Couple).unwrap();
        let report = def.evaluate(&answer_all(&def.bank, Likert::StronglyAgree));
        assert_eq!(report.overall_score, 100);
        assert_eq!(report.label, "Healthy");
        assert_eq!(report.color_tier, ColorTier::Green);
        assert_eq!(report.answered, report.total_questions);
        assert!(report.complete);
    }

    #[test]
    fn test_individual_bracket_labels() {
        let def = definition(AssessmentKind::Individual).unwrap();
        assert_eq!(def.brackets.label(Bracket::NeedsWork), "Needs Work");
        assert_eq!(def.brackets.label(Bracket::Strong), "Strong");

        let couple = definition(AssessmentKind::Couple).unwrap();
        assert_eq!(couple.brackets.label(Bracket::NeedsWork), "Needs Attention");
    }

    #[test]
    fn test_every_bracket_has_narrative() {
        for kind in AssessmentKind::ALL {
            let def = definition(kind).unwrap();
            for bracket in [
                Bracket::Critical,
                Bracket::NeedsWork,
                Bracket::Moderate,
                Bracket::Strong,
            ] {
                let content = def.brackets.content(bracket);
                assert!(!content.summary.is_empty());
                assert!(!content.insights.is_empty());
                assert!(!content.actions.is_empty());
            }
        }
    }

    #[test]
    fn test_focus_areas_lowest_first() {
        let def = definition(AssessmentKind::Individual).unwrap();
        let categories = def.bank.categories();
        let weakest = categories[1];
        let weak = categories[3];

        let answers = def.bank.questions().iter().fold(AnswerSet::new(), |acc, q| {
            let value = if q.category == weakest {
                Likert::StronglyDisagree
            } else if q.category == weak {
                Likert::Disagree
            } else {
                Likert::StronglyAgree
            };
            record_answer(&acc, &def.bank, q.id, value).unwrap()
        });

        let report = def.evaluate(&answers);
        assert_eq!(report.focus_areas, vec![weakest, weak]);
        assert_eq!(report.strongest_category, Some(categories[0]));
        let weakest_result = report
            .categories
            .iter()
            .find(|r| r.score.category == weakest)
            .unwrap();
        assert_eq!(weakest_result.bracket, Bracket::Critical);
    }

    #[test]
    fn test_empty_answers_are_critical() {
        let def = definition(AssessmentKind::Couple).unwrap();
        let report = def.evaluate(&AnswerSet::new());
        assert_eq!(report.overall_score, 0);
        assert_eq!(report.bracket, Bracket::Critical);
        assert_eq!(report.answered, 0);
        assert!(!report.complete);
    }

    #[test]
    fn test_report_serializes_category_fields_flat() {
        let def = definition(AssessmentKind::Individual).unwrap();
        let report = def.evaluate(&answer_all(&def.bank, Likert::Neutral));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["overall_score"], 60);
        assert_eq!(json["bracket"], "moderate");
        assert!(json["categories"][0]["score"].is_number());
        assert!(json["categories"][0]["bracket"].is_string());
    }
}
