//! Operator input classification and command parsing.

use hal_deck::Direction;

/// Prefix that marks a command line.
const COMMAND_PREFIX: char = '/';

/// A line of operator input, classified.
#[derive(Debug, Clone, PartialEq)]
pub enum Input<'a> {
    /// Free text for the response engine.
    Chat(&'a str),
    /// A `/`-prefixed directive.
    Command(Command),
}

impl<'a> Input<'a> {
    /// Classify a line by its leading character.
    pub fn classify(line: &'a str) -> Self {
        match line.strip_prefix(COMMAND_PREFIX) {
            Some(rest) => Self::Command(Command::parse(rest)),
            None => Self::Chat(line),
        }
    }
}

/// A parsed operator directive.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Stop the application.
    Quit,
    /// Step one cell. `None` when the direction was missing or unrecognised.
    Move {
        /// The direction to move.
        direction: Option<Direction>,
    },
    /// Anything else.
    Unknown {
        /// The directive as typed, without the prefix.
        input: String,
    },
}

impl Command {
    /// Parse the text after the command prefix.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let mut words = input.split_whitespace();

        match words.next().map(str::to_lowercase).as_deref() {
            Some("quit") if words.next().is_none() => Self::Quit,
            Some("move") => Self::Move {
                direction: words.next().and_then(Direction::parse),
            },
            _ => Self::Unknown {
                input: input.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_marks_commands() {
        assert_eq!(Input::classify("/quit"), Input::Command(Command::Quit));
        assert_eq!(Input::classify("quit"), Input::Chat("quit"));
        assert_eq!(Input::classify(" /quit"), Input::Chat(" /quit"));
    }

    #[test]
    fn parse_move() {
        assert_eq!(
            Command::parse("move up"),
            Command::Move {
                direction: Some(Direction::Up)
            }
        );
        assert_eq!(
            Command::parse("MOVE Left"),
            Command::Move {
                direction: Some(Direction::Left)
            }
        );
    }

    #[test]
    fn move_without_direction() {
        assert_eq!(Command::parse("move"), Command::Move { direction: None });
        assert_eq!(
            Command::parse("move sideways"),
            Command::Move { direction: None }
        );
    }

    #[test]
    fn verb_and_direction_are_whole_words() {
        assert_eq!(
            Command::parse("move upward"),
            Command::Move { direction: None }
        );
        assert_eq!(
            Command::parse("movement"),
            Command::Unknown {
                input: "movement".to_string()
            }
        );
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            Command::parse("open pod bay doors"),
            Command::Unknown {
                input: "open pod bay doors".to_string()
            }
        );
        assert_eq!(
            Command::parse("quit now"),
            Command::Unknown {
                input: "quit now".to_string()
            }
        );
        assert_eq!(
            Command::parse(""),
            Command::Unknown {
                input: String::new()
            }
        );
    }
}
