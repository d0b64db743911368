use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bracket {
    Critical,
    NeedsWork,
    Moderate,
    Strong,
}

impl Bracket {
    pub const STRONG_FROM: u8 = 80;
    pub const MODERATE_FROM: u8 = 60;
    pub const NEEDS_WORK_FROM: u8 = 40;

    pub fn from_score(score: u8) -> Self {
        if score >= Self::STRONG_FROM {
            Bracket::Strong
        } else if score >= Self::MODERATE_FROM {
            Bracket::Moderate
        } else if score >= Self::NEEDS_WORK_FROM {
            Bracket::NeedsWork
        } else {
            Bracket::Critical
        }
    }

    fn index(self) -> usize {
        match self {
            Bracket::Critical => 0,
            Bracket::NeedsWork => 1,
            Bracket::Moderate => 2,
            Bracket::Strong => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTier {
    Red,
    Orange,
    Yellow,
    Green,
}

/// Static narrative attached to one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketContent {
    pub label: &'static str,
    pub color_tier: ColorTier,
    pub summary: &'static str,
    pub insights: &'static [&'static str],
    pub actions: &'static [&'static str],
}

/// Closed lookup table: one entry per bracket, lowest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketTable {
    entries: [BracketContent; 4],
}

impl BracketTable {
    pub fn new(
        critical: BracketContent,
        needs_work: BracketContent,
        moderate: BracketContent,
        strong: BracketContent,
    ) -> Self {
        Self {
            entries: [critical, needs_work, moderate, strong],
        }
    }

    pub fn content(&self, bracket: Bracket) -> &BracketContent {
        &self.entries[bracket.index()]
    }

    pub fn classify(&self, score: u8) -> (Bracket, &BracketContent) {
        let bracket = Bracket::from_score(score);
        (bracket, self.content(bracket))
    }

    pub fn label(&self, bracket: Bracket) -> &'static str {
        self.content(bracket).label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &'static str, color_tier: ColorTier) -> BracketContent {
        BracketContent {
            label,
            color_tier,
            summary: label,
            insights: &[],
            actions: &[],
        }
    }

    fn table() -> BracketTable {
        BracketTable::new(
            entry("Critical", ColorTier::Red),
            entry("Needs Work", ColorTier::Orange),
            entry("Moderate", ColorTier::Yellow),
            entry("Strong", ColorTier::Green),
        )
    }

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(Bracket::from_score(0), Bracket::Critical);
        assert_eq!(Bracket::from_score(39), Bracket::Critical);
        assert_eq!(Bracket::from_score(40), Bracket::NeedsWork);
        assert_eq!(Bracket::from_score(59), Bracket::NeedsWork);
        assert_eq!(Bracket::from_score(60), Bracket::Moderate);
        assert_eq!(Bracket::from_score(79), Bracket::Moderate);
        assert_eq!(Bracket::from_score(80), Bracket::Strong);
        assert_eq!(Bracket::from_score(100), Bracket::Strong);
    }

    #[test]
    fn test_classify_returns_matching_entry() {
        let table = table();
        let (bracket, content) = table.classify(45);
        assert_eq!(bracket, Bracket::NeedsWork);
        assert_eq!(content.label, "Needs Work");
        assert_eq!(content.color_tier, ColorTier::Orange);

        let (bracket, content) = table.classify(80);
        assert_eq!(bracket, Bracket::Strong);
        assert_eq!(content.color_tier, ColorTier::Green);
    }

    #[test]
    fn test_brackets_are_ordered_by_severity() {
        assert!(Bracket::Critical < Bracket::NeedsWork);
        assert!(Bracket::Moderate < Bracket::Strong);
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&Bracket::NeedsWork).unwrap(), "\"needs_work\"");
        assert_eq!(serde_json::to_string(&ColorTier::Yellow).unwrap(), "\"yellow\"");
    }
}
