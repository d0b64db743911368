use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Five-point agreement scale used by every assessment question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Likert {
    StronglyDisagree = 1,
    Disagree = 2,
    Neutral = 3,
    Agree = 4,
    StronglyAgree = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("answer value {0} is outside the 1-5 scale")]
pub struct InvalidLikert(pub u8);

impl Likert {
    pub const ALL: [Likert; 5] = [
        Likert::StronglyDisagree,
        Likert::Disagree,
        Likert::Neutral,
        Likert::Agree,
        Likert::StronglyAgree,
    ];

    pub const MAX: u8 = 5;

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Likert::StronglyDisagree => "Strongly Disagree",
            Likert::Disagree => "Disagree",
            Likert::Neutral => "Neutral",
            Likert::Agree => "Agree",
            Likert::StronglyAgree => "Strongly Agree",
        }
    }
}

impl TryFrom<u8> for Likert {
    type Error = InvalidLikert;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Likert::StronglyDisagree),
            2 => Ok(Likert::Disagree),
            3 => Ok(Likert::Neutral),
            4 => Ok(Likert::Agree),
            5 => Ok(Likert::StronglyAgree),
            other => Err(InvalidLikert(other)),
        }
    }
}

impl From<Likert> for u8 {
    fn from(value: Likert) -> Self {
        value.value()
    }
}
