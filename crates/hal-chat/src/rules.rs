//! The HAL9000 conversation rules.

use crate::error::ChatResult;
use crate::rule::{Rule, RuleSet};

/// Replies used when nothing else matches.
pub const CATCH_ALL_RESPONSES: &[&str] = &["is everything OK?", "Can you still communicate?"];

/// Build HAL's rule list: adjective reflection, "are you ..." questions,
/// then the catch-all.
pub fn hal_rules() -> ChatResult<RuleSet> {
    RuleSet::new(vec![
        Rule::new(
            r"you are (worrying|scary|disturbing)",
            ["Yes, I am %1.", "Oh, sooo %1."],
        )?,
        Rule::new(
            r"are you ([\w\s]+)\??",
            ["Why would you think I am %1?", "Would you like me to be %1?"],
        )?,
        Rule::catch_all(CATCH_ALL_RESPONSES.iter().copied())?,
    ])
}
