use rand::Rng;

use crate::quiz::direction::{Direction, Vocabulary, LINEAR_CHOICES, LOOP_CHOICES};
use crate::quiz::{CurrentType, Role, UnknownPolicy, Variant};

/// A magnetic field problem: given a current (or its field), name the other.
///
/// For a straight current the current is a line and its field is a loop; for
/// a current loop it is the other way round. Either way the answer is read
/// off the paired tables in `direction`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldProblem {
    current_type: CurrentType,
    known: Direction,
    correct: Direction,
    unknown: Role,
}

impl FieldProblem {
    pub fn from_index(current_type: CurrentType, index: usize, unknown: Role) -> Option<Self> {
        let (known_table, answer_table) = tables(current_type, unknown);
        Some(Self {
            current_type,
            known: *known_table.get(index)?,
            correct: *answer_table.get(index)?,
            unknown,
        })
    }

    pub fn generate<R: Rng>(current_type: CurrentType, policy: UnknownPolicy, rng: &mut R) -> Self {
        let unknown = policy.resolve(Variant::Field(current_type).roles(), rng);
        // Every drawn index is in range, so the first draw is accepted.
        loop {
            let index = rng.gen_range(0..LINEAR_CHOICES.len());
            if let Some(problem) = Self::from_index(current_type, index, unknown) {
                return problem;
            }
        }
    }

    pub fn current_type(&self) -> CurrentType {
        self.current_type
    }

    pub fn unknown(&self) -> Role {
        self.unknown
    }

    pub fn known(&self) -> Direction {
        self.known
    }

    /// The role shown to the student.
    pub fn known_role(&self) -> Role {
        match self.unknown {
            Role::Field => Role::Motion,
            _ => Role::Field,
        }
    }

    pub fn correct(&self) -> Direction {
        self.correct
    }

    pub fn answer_vocabulary(&self) -> Vocabulary {
        if self.correct.is_loop() {
            Vocabulary::Loop
        } else {
            Vocabulary::Linear
        }
    }
}

/// (table of the given, table of the answer)
fn tables(
    current_type: CurrentType,
    unknown: Role,
) -> (&'static [Direction; 6], &'static [Direction; 6]) {
    let current_is_line = current_type == CurrentType::Straight;
    let asking_for_current = unknown == Role::Motion;
    if current_is_line == asking_for_current {
        (&LOOP_CHOICES, &LINEAR_CHOICES)
    } else {
        (&LINEAR_CHOICES, &LOOP_CHOICES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn right_current_has_yz_minus_y_field() {
        let p = FieldProblem::from_index(CurrentType::Straight, 0, Role::Field).unwrap();
        assert_eq!(p.known(), Direction::Right);
        assert_eq!(p.correct(), Direction::YzMinusY);

        let back = FieldProblem::from_index(CurrentType::Straight, 0, Role::Motion).unwrap();
        assert_eq!(back.known(), Direction::YzMinusY);
        assert_eq!(back.correct(), Direction::Right);
    }

    #[test]
    fn loop_current_swaps_the_tables() {
        let p = FieldProblem::from_index(CurrentType::Loop, 4, Role::Motion).unwrap();
        assert_eq!(p.known(), Direction::OutOfPage);
        assert_eq!(p.correct(), Direction::Ccw);
        assert_eq!(p.answer_vocabulary(), Vocabulary::Loop);

        let p = FieldProblem::from_index(CurrentType::Loop, 5, Role::Field).unwrap();
        assert_eq!(p.known(), Direction::Cw);
        assert_eq!(p.correct(), Direction::IntoPage);
        assert_eq!(p.answer_vocabulary(), Vocabulary::Linear);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert!(FieldProblem::from_index(CurrentType::Straight, 6, Role::Field).is_none());
    }

    #[test]
    fn generated_problems_come_from_the_table() {
        let mut rng = StdRng::seed_from_u64(43);
        for _ in 0..100 {
            let p = FieldProblem::generate(CurrentType::Straight, UnknownPolicy::Random, &mut rng);
            let index = LOOP_CHOICES
                .iter()
                .chain(LINEAR_CHOICES.iter())
                .position(|&d| d == p.known())
                .unwrap()
                % LINEAR_CHOICES.len();
            assert_eq!(
                FieldProblem::from_index(CurrentType::Straight, index, p.unknown()),
                Some(p)
            );
        }
    }

    #[test]
    fn generated_pairs_share_an_axis() {
        let mut rng = StdRng::seed_from_u64(41);
        for current_type in [CurrentType::Straight, CurrentType::Loop] {
            for _ in 0..200 {
                let p = FieldProblem::generate(current_type, UnknownPolicy::Random, &mut rng);
                assert_ne!(p.unknown(), Role::Force);
                assert_ne!(p.known_role(), p.unknown());
                assert_eq!(p.known().vector(), p.correct().vector());
                assert_ne!(p.known().is_loop(), p.correct().is_loop());
                assert!(p.answer_vocabulary().contains(p.correct()));
            }
        }
    }
}
