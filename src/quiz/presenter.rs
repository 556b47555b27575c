//! Turns problems into what the chat shows: the givens, the answer choices
//! and the instruction line.

use crate::quiz::force::ChargeSign;
use crate::quiz::{ChargeType, Direction, Glyph, Problem, QuizError, Role, UnknownPolicy, Variant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Known {
    pub role_label: String,
    pub direction: Direction,
    pub glyph: Glyph,
}

impl Known {
    fn new(role_label: String, direction: Direction) -> Self {
        Self {
            role_label,
            direction,
            glyph: direction.glyph(),
        }
    }
}

/// Short name of a role, as used in the instruction and the policy menu.
pub fn role_name(variant: Variant, role: Role) -> &'static str {
    match (variant, role) {
        (Variant::Force(ChargeType::Particle), Role::Motion) => "particle",
        (_, Role::Motion) => "current",
        (_, Role::Force) => "force",
        (_, Role::Field) => "magnetic field",
    }
}

pub fn policy_label(variant: Variant, policy: UnknownPolicy) -> &'static str {
    match policy {
        UnknownPolicy::Random => "random",
        UnknownPolicy::Fixed(role) => role_name(variant, role),
    }
}

pub fn policy_options(variant: Variant) -> Vec<UnknownPolicy> {
    std::iter::once(UnknownPolicy::Random)
        .chain(variant.roles().iter().map(|&role| UnknownPolicy::Fixed(role)))
        .collect()
}

pub fn parse_policy(variant: Variant, text: &str) -> Result<UnknownPolicy, QuizError> {
    policy_options(variant)
        .into_iter()
        .find(|&policy| policy_label(variant, policy) == text.trim())
        .ok_or_else(|| QuizError::UnknownPolicy(text.to_string()))
}

pub fn render_known(problem: &Problem) -> Vec<Known> {
    match problem {
        Problem::Force(p) => {
            let carrier = match (p.charge_type(), p.charge()) {
                (ChargeType::Current, _) => "Current",
                (ChargeType::Particle, ChargeSign::Positive) => "Positive Particle",
                (ChargeType::Particle, ChargeSign::Negative) => "Negative Particle",
            };
            p.known_roles()
                .iter()
                .map(|&role| {
                    let label = match role {
                        Role::Field => "Magnetic field".to_string(),
                        Role::Motion => format!("Direction of {}", carrier),
                        Role::Force => format!("Force on {}", carrier),
                    };
                    Known::new(label, p.direction_of(role))
                })
                .collect()
        }
        Problem::Field(p) => {
            let label = match p.known_role() {
                Role::Field => "Magnetic field",
                _ => "Current",
            };
            vec![Known::new(label.to_string(), p.known())]
        }
    }
}

pub fn render_choices(problem: &Problem) -> &'static [Direction] {
    problem.answer_vocabulary().choices()
}

pub fn instruction_text(problem: &Problem) -> String {
    let variant = problem.variant();
    let rule = match variant {
        Variant::Force(_) => "magnetic force",
        Variant::Field(_) => "magnetic field",
    };
    format!(
        "Use the {} right-hand-rule to find the direction of the {}.",
        rule,
        role_name(variant, problem.unknown())
    )
}

/// Full message body: the instruction followed by one line per given.
pub fn render_problem(problem: &Problem) -> String {
    let knowns = render_known(problem)
        .into_iter()
        .map(|k| format!("{} {}: {}", k.direction.symbol(), k.role_label, k.direction))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n\n{}", instruction_text(problem), knowns)
}
