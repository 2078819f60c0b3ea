//! Response engine: a rule set plus a seedable random source.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::rule::RuleSet;

/// Turns free text into replies using a validated [`RuleSet`].
///
/// Template selection is uniformly random; the generator is seeded so that a
/// given seed always yields the same sequence of replies.
pub struct ResponseEngine {
    rules: RuleSet,
    rng: StdRng,
}

impl ResponseEngine {
    /// Create an engine whose template choices follow `seed`.
    pub fn seeded(rules: RuleSet, seed: u64) -> Self {
        Self {
            rules,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Reply to one line of input. The reply is never blank: templates must
    /// be non-blank, and a reply left blank by an empty capture is replaced
    /// by a catch-all reply.
    pub fn respond(&mut self, line: &str) -> String {
        self.rules.respond_with(line, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{CATCH_ALL_RESPONSES, hal_rules};
    use proptest::prelude::*;

    fn engine(seed: u64) -> ResponseEngine {
        ResponseEngine::seeded(hal_rules().unwrap(), seed)
    }

    #[test]
    fn same_seed_same_replies() {
        let mut a = engine(99);
        let mut b = engine(99);
        for line in ["are you there", "you are scary", "", "hello"] {
            assert_eq!(a.respond(line), b.respond(line));
        }
    }

    #[test]
    fn worried_question_echoes_capture() {
        let reply = engine(3).respond("are you worried?");
        assert!(reply.contains("worried"), "{reply}");
        assert!(!reply.contains("%1"));
    }

    #[test]
    fn adjective_reflection() {
        let mut e = engine(11);
        for _ in 0..10 {
            let reply = e.respond("you are disturbing");
            assert!(reply.contains("disturbing"), "{reply}");
            assert!(!reply.contains("%1"));
        }
    }

    #[test]
    fn unmatched_line_gets_catch_all() {
        let reply = engine(5).respond("good afternoon");
        assert!(CATCH_ALL_RESPONSES.contains(&reply.as_str()));
    }

    #[test]
    fn both_templates_eventually_chosen() {
        let mut e = engine(0);
        let replies: std::collections::HashSet<String> =
            (0..64).map(|_| e.respond("you are scary")).collect();
        assert_eq!(replies.len(), 2);
    }

    proptest! {
        #[test]
        fn every_line_gets_a_reply(line in ".*", seed in any::<u64>()) {
            let reply = engine(seed).respond(&line);
            prop_assert!(!reply.is_empty());
            prop_assert!(!reply.contains("%1"));
        }
    }
}
