use log::{debug, info, warn};
use rand::Rng;

use crate::quiz::checker::check;
use crate::quiz::{Direction, Problem, QuizError, UnknownPolicy, Variant, Verdict};

/// One student's quiz: the variant, what to ask about and the current
/// problem.
///
/// Every new problem gets a fresh `generation`. Answers carry the generation
/// they were offered for, so an answer to a replaced problem is dropped
/// instead of being checked against the new one. Generations keep counting
/// across the sessions of one chat: a new session starts after the last
/// generation the chat has seen.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    variant: Variant,
    policy: UnknownPolicy,
    problem: Problem,
    generation: u64,
}

impl Session {
    /// `after` is the last generation handed out in this chat (0 if none).
    pub fn start<R: Rng>(
        quiz: &str,
        mode: &str,
        after: u64,
        rng: &mut R,
    ) -> Result<Session, QuizError> {
        let variant = Variant::from_tags(quiz, mode)?;
        Ok(Session::new(variant, UnknownPolicy::Random, after, rng))
    }

    pub fn new<R: Rng>(variant: Variant, policy: UnknownPolicy, after: u64, rng: &mut R) -> Session {
        let generation = after.saturating_add(1);
        info!("Starting {:?} session ({:?}) at problem #{}", variant, policy, generation);
        let problem = variant.generate(policy, rng);
        debug!("First problem: {:?}", problem);
        Session {
            variant,
            policy,
            problem,
            generation,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn policy(&self) -> UnknownPolicy {
        self.policy
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the current problem.
    pub fn request_next<R: Rng>(&mut self, rng: &mut R) -> &Problem {
        self.problem = self.variant.generate(self.policy, rng);
        self.generation += 1;
        debug!("Problem #{}: {:?}", self.generation, self.problem);
        &self.problem
    }

    /// Checks an answer offered for problem `generation`.
    ///
    /// Returns `None` if that problem has since been replaced.
    pub fn submit_answer(&self, generation: u64, submitted: Option<Direction>) -> Option<Verdict> {
        if generation != self.generation {
            warn!(
                "Ignoring answer for problem #{} (current is #{})",
                generation, self.generation
            );
            return None;
        }
        let verdict = check(&self.problem, submitted);
        debug!("Answer {:?} to problem #{}: {:?}", submitted, generation, verdict);
        Some(verdict)
    }

    pub fn set_unknown_policy<R: Rng>(&mut self, policy: UnknownPolicy, rng: &mut R) -> &Problem {
        self.policy = policy;
        self.request_next(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{ChargeType, CurrentType, Role};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn start_rejects_unknown_tags() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Session::start("force", "photon", 0, &mut rng),
            Err(QuizError::InvalidVariant("photon".to_string()))
        );
        let session = Session::start("field", "loop", 0, &mut rng).unwrap();
        assert_eq!(session.variant(), Variant::Field(CurrentType::Loop));
        assert_eq!(session.policy(), UnknownPolicy::Random);
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn answers_are_checked_against_their_own_problem() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = Session::start("force", "particle", 0, &mut rng).unwrap();
        let first_correct = session.problem().correct();

        assert_eq!(session.submit_answer(1, Some(first_correct)), Some(Verdict::Correct));
        assert_eq!(session.submit_answer(1, None), Some(Verdict::Unanswered));

        session.request_next(&mut rng);
        assert_eq!(session.generation(), 2);
        assert_eq!(session.submit_answer(1, Some(first_correct)), None);
        let correct = session.problem().correct();
        assert_eq!(session.submit_answer(2, Some(correct)), Some(Verdict::Correct));
    }

    #[test]
    fn answers_from_an_earlier_session_are_ignored() {
        let mut rng = StdRng::seed_from_u64(31);
        let mut old = Session::start("force", "particle", 0, &mut rng).unwrap();
        old.request_next(&mut rng);
        let stale = (old.generation(), old.problem().correct());

        let new = Session::start("field", "loop", old.generation(), &mut rng).unwrap();
        assert!(new.generation() > old.generation());
        assert_eq!(new.submit_answer(stale.0, Some(stale.1)), None);
        for earlier in 0..new.generation() {
            assert_eq!(new.submit_answer(earlier, Some(new.problem().correct())), None);
        }
    }

    #[test]
    fn policy_change_regenerates() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut session = Session::new(
            Variant::Force(ChargeType::Current),
            UnknownPolicy::Random,
            0,
            &mut rng,
        );
        let problem = session
            .set_unknown_policy(UnknownPolicy::Fixed(Role::Field), &mut rng)
            .clone();
        assert_eq!(problem.unknown(), Role::Field);
        assert_eq!(session.generation(), 2);
        for _ in 0..20 {
            assert_eq!(session.request_next(&mut rng).unknown(), Role::Field);
        }
    }

    #[test]
    fn session_survives_json_storage() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut session = Session::start("field", "straight", 0, &mut rng).unwrap();
        session.request_next(&mut rng);
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
