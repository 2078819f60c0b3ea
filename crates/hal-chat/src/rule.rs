//! Rules and validated rule lists.

use rand::Rng;
use regex::{Regex, RegexBuilder};

use crate::error::{ChatError, ChatResult};
use crate::reflections::Reflections;

/// A trigger pattern paired with its candidate reply templates.
///
/// An empty pattern makes a catch-all rule, which matches every line,
/// including the empty one.
#[derive(Debug, Clone)]
pub struct Rule {
    source: String,
    pattern: Option<Regex>,
    responses: Vec<String>,
}

impl Rule {
    /// Build a rule from a pattern and its reply templates.
    ///
    /// The pattern is matched case-insensitively against the whole line.
    pub fn new<I, S>(pattern: &str, responses: I) -> ChatResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let responses: Vec<String> = responses.into_iter().map(Into::into).collect();
        if responses.is_empty() {
            return Err(ChatError::NoResponses(pattern.to_string()));
        }

        let compiled = if pattern.is_empty() {
            None
        } else {
            let regex = RegexBuilder::new(&format!("^(?:{pattern})$"))
                .case_insensitive(true)
                .build()
                .map_err(|source| ChatError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
            Some(regex)
        };

        let available = compiled
            .as_ref()
            .map(|re| re.captures_len() - 1)
            .unwrap_or(0);
        for response in &responses {
            if response.trim().is_empty() {
                return Err(ChatError::EmptyResponse(pattern.to_string()));
            }
            if let Some(group) = placeholders(response).find(|&g| g > available) {
                return Err(ChatError::UnknownPlaceholder {
                    pattern: pattern.to_string(),
                    response: response.clone(),
                    group,
                    available,
                });
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            pattern: compiled,
            responses,
        })
    }

    /// Build a catch-all rule.
    pub fn catch_all<I, S>(responses: I) -> ChatResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("", responses)
    }

    /// The pattern as written.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// The candidate reply templates.
    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// Whether this rule matches any input.
    pub fn is_catch_all(&self) -> bool {
        self.pattern.is_none()
    }

    /// Match the whole line, returning the capture groups (1-based order).
    ///
    /// Groups that did not take part in the match come back as empty strings.
    pub fn capture<'h>(&self, line: &'h str) -> Option<Vec<&'h str>> {
        let Some(regex) = &self.pattern else {
            return Some(Vec::new());
        };
        let caps = regex.captures(line)?;
        Some(
            caps.iter()
                .skip(1)
                .map(|m| m.map(|m| m.as_str()).unwrap_or(""))
                .collect(),
        )
    }
}

/// An ordered, validated rule list ending in a catch-all.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    fallback: Rule,
    reflections: Option<Reflections>,
}

impl RuleSet {
    /// Validate a rule list.
    ///
    /// The list must be non-empty and its last rule, and only its last rule,
    /// must be a catch-all.
    pub fn new(mut rules: Vec<Rule>) -> ChatResult<Self> {
        let fallback = rules.pop().ok_or(ChatError::EmptyRuleSet)?;
        if !fallback.is_catch_all() {
            return Err(ChatError::MissingCatchAll);
        }
        if let Some(index) = rules.iter().position(Rule::is_catch_all) {
            return Err(ChatError::CatchAllNotLast(index));
        }
        Ok(Self {
            rules,
            fallback,
            reflections: None,
        })
    }

    /// Reflect captured text (`my` becomes `your`, ...) before substitution.
    pub fn with_reflections(mut self, reflections: Reflections) -> Self {
        self.reflections = Some(reflections);
        self
    }

    /// Number of rules, catch-all included.
    pub fn len(&self) -> usize {
        self.rules.len() + 1
    }

    /// Always `false`: a valid rule set holds at least its catch-all.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the rules in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().chain(std::iter::once(&self.fallback))
    }

    /// Produce a reply for a line, drawing the template choice from `rng`.
    pub fn respond_with<R: Rng + ?Sized>(&self, line: &str, rng: &mut R) -> String {
        let (index, rule, groups) = self
            .rules
            .iter()
            .enumerate()
            .find_map(|(i, rule)| rule.capture(line).map(|g| (i, rule, g)))
            .unwrap_or((self.rules.len(), &self.fallback, Vec::new()));

        tracing::debug!(rule = index, pattern = rule.pattern(), "rule fired");

        let reply = self.reply_from(rule, &groups, rng);
        if reply.trim().is_empty() {
            tracing::debug!(rule = index, "blank reply after substitution, using catch-all");
            return self.reply_from(&self.fallback, &[], rng);
        }
        reply
    }

    /// Pick one of `rule`'s templates and fill it from `groups`.
    fn reply_from<R: Rng + ?Sized>(&self, rule: &Rule, groups: &[&str], rng: &mut R) -> String {
        let template = &rule.responses[rng.random_range(0..rule.responses.len())];
        let groups: Vec<String> = match &self.reflections {
            Some(table) => groups.iter().map(|g| table.reflect(g)).collect(),
            None => groups.iter().map(|g| (*g).to_string()).collect(),
        };
        tidy(fill(template, &groups))
    }
}

/// Group numbers referenced by `%N` placeholders in a template.
fn placeholders(template: &str) -> impl Iterator<Item = usize> + '_ {
    template
        .as_bytes()
        .windows(2)
        .filter(|w| w[0] == b'%' && (b'1'..=b'9').contains(&w[1]))
        .map(|w| usize::from(w[1] - b'0'))
}

/// Replace `%N` placeholders with the matching group text.
fn fill(template: &str, groups: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '%'
            && let Some(group) = chars.peek().and_then(|d| d.to_digit(10)).filter(|&d| d > 0)
        {
            chars.next();
            if let Some(text) = groups.get(group as usize - 1) {
                out.push_str(text);
            }
            continue;
        }
        out.push(c);
    }
    out
}

/// Collapse doubled punctuation left behind by substitution.
fn tidy(mut reply: String) -> String {
    if reply.ends_with("?.") || reply.ends_with("??") {
        let last = if reply.ends_with('.') { '.' } else { '?' };
        reply.truncate(reply.len() - 2);
        reply.push(last);
    }
    reply
}
