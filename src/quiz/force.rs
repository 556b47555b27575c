use log::trace;
use rand::Rng;

use crate::quiz::direction::{Direction, Vector3, Vocabulary, LINEAR_CHOICES};
use crate::quiz::{ChargeType, QuizError, Role, UnknownPolicy, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ChargeSign {
    Positive,
    Negative,
}

impl ChargeSign {
    pub fn value(self) -> i32 {
        match self {
            ChargeSign::Positive => 1,
            ChargeSign::Negative => -1,
        }
    }
}

/// A magnetic force problem: `force = q (motion × field)`.
///
/// The only constructor computes the force from the other two, so the law
/// always holds. Deserializing goes through the same constructor.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "StoredForceProblem")]
pub struct ForceProblem {
    charge_type: ChargeType,
    charge: ChargeSign,
    motion: Direction,
    field: Direction,
    force: Direction,
    unknown: Role,
}

/// `ForceProblem` as read back from dialogue storage, before validation.
#[derive(serde::Deserialize)]
struct StoredForceProblem {
    charge_type: ChargeType,
    charge: ChargeSign,
    motion: Direction,
    field: Direction,
    force: Direction,
    unknown: Role,
}

impl TryFrom<StoredForceProblem> for ForceProblem {
    type Error = QuizError;

    fn try_from(stored: StoredForceProblem) -> Result<Self, Self::Error> {
        ForceProblem::try_new(
            stored.charge_type,
            stored.charge,
            stored.motion,
            stored.field,
            stored.unknown,
        )
        .filter(|problem| problem.force == stored.force)
        .ok_or_else(|| {
            QuizError::InconsistentProblem(format!(
                "{} × {} is not {}",
                stored.motion, stored.field, stored.force
            ))
        })
    }
}

impl ForceProblem {
    /// Builds the problem if it has a single, nameable answer.
    ///
    /// Returns `None` when the force is zero while something other than the
    /// force is asked for, since every parallel field or motion would then
    /// fit the givens.
    pub fn try_new(
        charge_type: ChargeType,
        charge: ChargeSign,
        motion: Direction,
        field: Direction,
        unknown: Role,
    ) -> Option<ForceProblem> {
        let force = motion.vector().cross(field.vector()) * charge.value();
        if force.is_zero() && unknown != Role::Force {
            return None;
        }
        let force = Vocabulary::Force.label_of(force)?;
        Some(ForceProblem {
            charge_type,
            charge,
            motion,
            field,
            force,
            unknown,
        })
    }

    pub fn generate<R: Rng>(charge_type: ChargeType, policy: UnknownPolicy, rng: &mut R) -> Self {
        let unknown = policy.resolve(Variant::Force(charge_type).roles(), rng);
        let charge = match charge_type {
            ChargeType::Particle if rng.gen_bool(0.5) => ChargeSign::Negative,
            _ => ChargeSign::Positive,
        };

        // Rejection sampling; ends with probability 1 since most pairs are
        // not parallel.
        loop {
            let field = LINEAR_CHOICES[rng.gen_range(0..LINEAR_CHOICES.len())];
            let motion = LINEAR_CHOICES[rng.gen_range(0..LINEAR_CHOICES.len())];
            match Self::try_new(charge_type, charge, motion, field, unknown) {
                Some(problem) => return problem,
                None => trace!("rejected degenerate draw: motion={} field={}", motion, field),
            }
        }
    }

    pub fn charge_type(&self) -> ChargeType {
        self.charge_type
    }

    pub fn charge(&self) -> ChargeSign {
        self.charge
    }

    pub fn unknown(&self) -> Role {
        self.unknown
    }

    pub fn direction_of(&self, role: Role) -> Direction {
        match role {
            Role::Motion => self.motion,
            Role::Field => self.field,
            Role::Force => self.force,
        }
    }

    pub fn vector_of(&self, role: Role) -> Vector3 {
        self.direction_of(role).vector()
    }

    pub fn correct(&self) -> Direction {
        self.direction_of(self.unknown)
    }

    /// The two roles shown to the student, in drawing order.
    pub fn known_roles(&self) -> [Role; 2] {
        match self.unknown {
            Role::Force => [Role::Field, Role::Motion],
            Role::Field => [Role::Motion, Role::Force],
            Role::Motion => [Role::Field, Role::Force],
        }
    }
}
