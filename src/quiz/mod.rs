pub mod checker;
pub mod direction;
pub mod error;
pub mod field;
pub mod force;
pub mod presenter;
pub mod session;

use std::fmt;

use rand::Rng;

pub use direction::{Direction, Glyph, Vocabulary};
pub use error::QuizError;
pub use field::FieldProblem;
pub use force::ForceProblem;
pub use session::Session;

/// The quantity a problem can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Role {
    /// The moving charge: particle velocity or current.
    Motion,
    Field,
    Force,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum UnknownPolicy {
    #[default]
    Random,
    Fixed(Role),
}

impl UnknownPolicy {
    /// Picks the role to ask about. A fixed role the quiz cannot ask about is
    /// treated as random.
    pub fn resolve<R: Rng>(self, roles: &[Role], rng: &mut R) -> Role {
        match self {
            UnknownPolicy::Fixed(role) if roles.contains(&role) => role,
            _ => roles[rng.gen_range(0..roles.len())],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ChargeType {
    Particle,
    Current,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CurrentType {
    Straight,
    Loop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Variant {
    /// Magnetic force rule, `F = q (v × B)`.
    Force(ChargeType),
    /// Magnetic field rule for a straight current or a current loop.
    Field(CurrentType),
}

pub const FORCE_QUIZ: &str = "force";
pub const FIELD_QUIZ: &str = "field";

impl Variant {
    /// Builds a variant from its quiz tag (`force`/`field`) and mode tag
    /// (`particle`/`current` or `straight`/`loop`).
    pub fn from_tags(quiz: &str, mode: &str) -> Result<Variant, QuizError> {
        match (quiz.trim(), mode.trim()) {
            (FORCE_QUIZ, "particle") => Ok(Variant::Force(ChargeType::Particle)),
            (FORCE_QUIZ, "current") => Ok(Variant::Force(ChargeType::Current)),
            (FIELD_QUIZ, "straight") => Ok(Variant::Field(CurrentType::Straight)),
            (FIELD_QUIZ, "loop") => Ok(Variant::Field(CurrentType::Loop)),
            (FORCE_QUIZ, other) | (FIELD_QUIZ, other) => {
                Err(QuizError::InvalidVariant(other.to_string()))
            }
            (other, _) => Err(QuizError::InvalidVariant(other.to_string())),
        }
    }

    pub fn mode_tags(quiz: &str) -> Result<&'static [&'static str], QuizError> {
        match quiz.trim() {
            FORCE_QUIZ => Ok(&["particle", "current"]),
            FIELD_QUIZ => Ok(&["straight", "loop"]),
            other => Err(QuizError::InvalidVariant(other.to_string())),
        }
    }

    /// Roles the variant can ask about, in the order they are offered.
    pub fn roles(self) -> &'static [Role] {
        match self {
            Variant::Force(_) => &[Role::Motion, Role::Force, Role::Field],
            Variant::Field(_) => &[Role::Motion, Role::Field],
        }
    }

    pub fn generate<R: Rng>(self, policy: UnknownPolicy, rng: &mut R) -> Problem {
        match self {
            Variant::Force(charge_type) => {
                Problem::Force(ForceProblem::generate(charge_type, policy, rng))
            }
            Variant::Field(current_type) => {
                Problem::Field(FieldProblem::generate(current_type, policy, rng))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Problem {
    Force(ForceProblem),
    Field(FieldProblem),
}

impl Problem {
    pub fn variant(&self) -> Variant {
        match self {
            Problem::Force(p) => Variant::Force(p.charge_type()),
            Problem::Field(p) => Variant::Field(p.current_type()),
        }
    }

    pub fn unknown(&self) -> Role {
        match self {
            Problem::Force(p) => p.unknown(),
            Problem::Field(p) => p.unknown(),
        }
    }

    pub fn correct(&self) -> Direction {
        match self {
            Problem::Force(p) => p.correct(),
            Problem::Field(p) => p.correct(),
        }
    }

    /// The vocabulary the answer is picked from.
    pub fn answer_vocabulary(&self) -> Vocabulary {
        match self {
            Problem::Force(_) => Vocabulary::Force,
            Problem::Field(p) => p.answer_vocabulary(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Unanswered,
    Correct,
    Incorrect,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Unanswered => f.write_str(""),
            Verdict::Correct => f.write_str("Correct!"),
            Verdict::Incorrect => f.write_str("Try again."),
        }
    }
}
