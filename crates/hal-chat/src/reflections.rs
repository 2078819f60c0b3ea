//! Word reflection for captured text.
//!
//! Reflection swaps first and second person so that a captured phrase can be
//! echoed back from the agent's point of view: "my" becomes "your", "you are"
//! becomes "I am".

use std::collections::HashMap;

/// Default reflection pairs.
const ENGLISH: &[(&str, &str)] = &[
    ("i am", "you are"),
    ("i was", "you were"),
    ("i", "you"),
    ("i'm", "you are"),
    ("i'd", "you would"),
    ("i've", "you have"),
    ("i'll", "you will"),
    ("my", "your"),
    ("you are", "I am"),
    ("you were", "I was"),
    ("you've", "I have"),
    ("you'll", "I will"),
    ("your", "my"),
    ("yours", "mine"),
    ("you", "me"),
    ("me", "you"),
];

/// A table of word and two-word phrase replacements.
#[derive(Debug, Clone)]
pub struct Reflections {
    table: HashMap<String, String>,
}

impl Default for Reflections {
    fn default() -> Self {
        Self::english()
    }
}

impl Reflections {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// The standard English first/second person table.
    pub fn english() -> Self {
        ENGLISH
            .iter()
            .fold(Self::new(), |table, (from, to)| table.with(from, to))
    }

    /// Add a replacement. Keys are matched lower-case.
    pub fn with(mut self, from: &str, to: &str) -> Self {
        self.table.insert(from.to_lowercase(), to.to_string());
        self
    }

    /// Lower-case `text` and apply the table, preferring two-word phrases.
    pub fn reflect(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();
        let mut out: Vec<&str> = Vec::with_capacity(words.len());

        let mut i = 0;
        while i < words.len() {
            if let Some(next) = words.get(i + 1)
                && let Some(to) = self.table.get(&format!("{} {next}", words[i]))
            {
                out.push(to);
                i += 2;
                continue;
            }
            out.push(self.table.get(words[i]).map_or(words[i], String::as_str));
            i += 1;
        }

        out.join(" ")
    }
}
