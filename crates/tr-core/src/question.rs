//! Question records and difficulty tiers.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Difficulty tier of a question, ordered from easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Worth 1 point.
    Easy,
    /// Worth 2 points.
    Medium,
    /// Worth 3 points.
    Hard,
    /// Worth 4 points.
    Expert,
}

impl Difficulty {
    /// All tiers in ascending order.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Normalize a raw difficulty tag.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. A
    /// missing or unrecognized tag is treated as [`Difficulty::Easy`].
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("medium") => Self::Medium,
            Some("hard") => Self::Hard,
            Some("expert") => Self::Expert,
            _ => Self::Easy,
        }
    }

    /// Points awarded for answering a question of this tier correctly.
    pub fn points(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
            Self::Expert => 4,
        }
    }

    /// Position of this tier in [`Difficulty::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
            Self::Expert => 3,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
            Self::Expert => write!(f, "Expert"),
        }
    }
}

/// A single multiple-choice question.
///
/// Always holds at least two options, and the answer is one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    /// The prompt shown to the player.
    #[serde(rename = "question")]
    pub text: String,
    /// The choices, in presentation order.
    pub options: Vec<String>,
    /// The correct choice; equal to one element of `options`.
    pub answer: String,
    /// The normalized difficulty tier.
    pub difficulty: Difficulty,
}

impl Question {
    /// Build a question, checking the record rules.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
        difficulty: Difficulty,
    ) -> CoreResult<Self> {
        let text = text.into();
        let answer = answer.into();

        if options.len() < 2 {
            return Err(CoreError::InvalidQuestion(format!(
                "\"{text}\" has {} option(s), at least 2 are required",
                options.len()
            )));
        }
        if !options.contains(&answer) {
            return Err(CoreError::InvalidQuestion(format!(
                "\"{text}\": answer \"{answer}\" is not one of the options"
            )));
        }

        Ok(Self {
            text,
            options,
            answer,
            difficulty,
        })
    }

    /// Whether `choice` is the correct answer.
    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }

    /// Points this question is worth.
    pub fn points(&self) -> u32 {
        self.difficulty.points()
    }
}

/// The on-disk shape of a question record, before validation.
#[derive(Deserialize)]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    answer: String,
    #[serde(default)]
    difficulty: Option<String>,
}

impl TryFrom<RawQuestion> for Question {
    type Error = CoreError;

    fn try_from(raw: RawQuestion) -> CoreResult<Self> {
        let difficulty = Difficulty::normalize(raw.difficulty.as_deref());
        Self::new(raw.question, raw.options, raw.answer, difficulty)
    }
}
