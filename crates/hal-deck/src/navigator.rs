//! The navigation state machine.
//!
//! The agent's position is the only state. A move request is checked against
//! the deck and always resolves to one of four outcomes; nothing here fails
//! at runtime.

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};
use crate::map::{DeckMap, Terrain};
use crate::position::{Direction, Position};

/// Glyph drawn at the agent's position when rendering.
pub const MARKER: char = 'M';

/// Classification of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOutcome {
    /// Stepped onto open floor.
    Moved,
    /// Stepped into a doorway.
    MovedThroughDoorway,
    /// A wall is in the way.
    Blocked,
    /// The target is off the map or holds an unrecognised glyph.
    InvalidLocation,
}

impl MoveOutcome {
    /// Whether the agent's position changed.
    pub fn moved(self) -> bool {
        matches!(self, Self::Moved | Self::MovedThroughDoorway)
    }

    /// Whether the map should be shown again after this outcome.
    ///
    /// Invalid locations re-render too, as feedback, even though nothing moved.
    pub fn rerenders(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

/// The result of a single move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// How the attempt was classified.
    pub outcome: MoveOutcome,
    /// The cell the agent tried to enter.
    pub target: Position,
    /// The agent's position after the attempt.
    pub position: Position,
}

impl MoveReport {
    /// What the agent says about this move.
    pub fn message(&self) -> String {
        match self.outcome {
            MoveOutcome::Moved => "One step at the time.".to_string(),
            MoveOutcome::MovedThroughDoorway => {
                "Don't stand in the doorway for too long!".to_string()
            }
            MoveOutcome::Blocked => {
                "Stop banging your head against the wall. It's gonna be ok!".to_string()
            }
            MoveOutcome::InvalidLocation => format!(
                "Something is really wrong with your location `{}`!",
                self.target
            ),
        }
    }
}

/// Tracks the agent's position on a fixed deck.
#[derive(Debug, Clone)]
pub struct Navigator {
    map: DeckMap,
    position: Position,
    marker: char,
}

impl Navigator {
    /// Place the agent at `start`, which must be open floor or a doorway.
    pub fn new(map: DeckMap, start: Position) -> DeckResult<Self> {
        match map.terrain_at(start) {
            Some(terrain) if terrain.is_passable() => Ok(Self {
                map,
                position: start,
                marker: MARKER,
            }),
            _ => Err(DeckError::InvalidStart(start)),
        }
    }

    /// Use a different glyph for the agent when rendering.
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// The deck being navigated.
    pub fn map(&self) -> &DeckMap {
        &self.map
    }

    /// The agent's current position.
    pub fn current_position(&self) -> Position {
        self.position
    }

    /// Try to move one cell in `direction`.
    pub fn step(&mut self, direction: Direction) -> MoveReport {
        self.try_move(self.position.step(direction))
    }

    /// Try to move to `target`.
    pub fn try_move(&mut self, target: Position) -> MoveReport {
        let outcome = match self.map.terrain_at(target) {
            Some(Terrain::Floor) => MoveOutcome::Moved,
            Some(Terrain::Doorway) => MoveOutcome::MovedThroughDoorway,
            Some(Terrain::Wall) => MoveOutcome::Blocked,
            // Unknown glyphs share the off-map path, so a legitimate floor
            // glyph other than a space reads as an invalid location.
            Some(Terrain::Unknown(_)) | None => MoveOutcome::InvalidLocation,
        };

        if outcome.moved() {
            self.position = target;
        }
        tracing::debug!(?outcome, %target, position = %self.position, "move attempt");

        MoveReport {
            outcome,
            target,
            position: self.position,
        }
    }

    /// The deck with the agent's marker at its current position.
    pub fn render(&self) -> Vec<String> {
        self.map.render(self.position, self.marker)
    }

    /// Find the first `marker` in rendered rows.
    pub fn locate_marker<S: AsRef<str>>(rendered: &[S], marker: char) -> Option<Position> {
        rendered.iter().enumerate().find_map(|(row, line)| {
            line.as_ref()
                .chars()
                .position(|c| c == marker)
                .map(|col| Position::new(row as i64, col as i64))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const START: Position = Position::new(4, 14);

    fn hal() -> Navigator {
        Navigator::new(DeckMap::reference(), START).unwrap()
    }

    #[test]
    fn starts_at_given_position() {
        assert_eq!(hal().current_position(), START);
    }

    #[test]
    fn rejects_wall_start() {
        let err = Navigator::new(DeckMap::reference(), Position::new(3, 14)).unwrap_err();
        assert!(matches!(err, DeckError::InvalidStart(p) if p == Position::new(3, 14)));
    }

    #[test]
    fn rejects_off_map_start() {
        assert!(Navigator::new(DeckMap::reference(), Position::new(40, 0)).is_err());
    }

    #[test]
    fn wall_above_start_blocks() {
        let mut nav = hal();
        let report = nav.step(Direction::Up);
        assert_eq!(report.outcome, MoveOutcome::Blocked);
        assert_eq!(report.target, Position::new(3, 14));
        assert_eq!(report.position, START);
        assert_eq!(nav.current_position(), START);
        assert!(!report.outcome.rerenders());
        assert_eq!(
            report.message(),
            "Stop banging your head against the wall. It's gonna be ok!"
        );
    }

    #[test]
    fn open_floor_moves() {
        let mut nav = hal();
        let report = nav.step(Direction::Right);
        assert_eq!(report.outcome, MoveOutcome::Moved);
        assert_eq!(nav.current_position(), Position::new(4, 15));
        assert_eq!(report.message(), "One step at the time.");
    }

    #[test]
    fn doorway_moves_and_renders_marker_there() {
        let mut nav = hal();
        for dir in [Direction::Down, Direction::Down, Direction::Left, Direction::Left] {
            assert_eq!(nav.step(dir).outcome, MoveOutcome::Moved);
        }
        let report = nav.step(Direction::Left);
        assert_eq!(report.outcome, MoveOutcome::MovedThroughDoorway);
        assert_eq!(report.position, Position::new(6, 11));
        assert_eq!(report.message(), "Don't stand in the doorway for too long!");

        let rendered = nav.render();
        let markers: usize = rendered
            .iter()
            .map(|l| l.chars().filter(|&c| c == MARKER).count())
            .sum();
        assert_eq!(markers, 1);
        assert_eq!(rendered[6].chars().nth(11), Some(MARKER));
    }

    #[test]
    fn negative_row_is_invalid() {
        let mut nav = hal();
        let report = nav.try_move(Position::new(-1, 14));
        assert_eq!(report.outcome, MoveOutcome::InvalidLocation);
        assert_eq!(nav.current_position(), START);
        assert!(report.outcome.rerenders());
        assert_eq!(
            report.message(),
            "Something is really wrong with your location `(-1, 14)`!"
        );
    }

    #[test]
    fn row_past_the_end_is_invalid() {
        let mut nav = hal();
        let report = nav.try_move(Position::new(12, 14));
        assert_eq!(report.outcome, MoveOutcome::InvalidLocation);
        assert_eq!(nav.current_position(), START);
    }

    #[test]
    fn column_past_row_end_is_invalid() {
        let map = DeckMap::parse("   \n ").unwrap();
        let mut nav = Navigator::new(map, Position::new(1, 0)).unwrap();
        assert_eq!(nav.step(Direction::Right).outcome, MoveOutcome::InvalidLocation);
        assert_eq!(nav.current_position(), Position::new(1, 0));
    }

    // Known quirk: any glyph other than `*`, `+`, or a space is reported as an
    // invalid location rather than as terrain.
    #[test]
    fn unknown_glyph_is_invalid_location() {
        let map = DeckMap::parse(" .").unwrap();
        let mut nav = Navigator::new(map, Position::new(0, 0)).unwrap();
        let report = nav.step(Direction::Right);
        assert_eq!(report.outcome, MoveOutcome::InvalidLocation);
        assert_eq!(nav.current_position(), Position::new(0, 0));

        let mut nav = hal();
        assert_eq!(
            nav.try_move(Position::new(4, 35)).outcome,
            MoveOutcome::InvalidLocation
        );
    }

    #[test]
    fn custom_marker() {
        let map = DeckMap::parse("  ").unwrap();
        let nav = Navigator::new(map, Position::new(0, 1)).unwrap().with_marker('@');
        assert_eq!(nav.render(), vec![" @"]);
    }

    #[test]
    fn outcome_serde_names() {
        assert_eq!(
            serde_json::to_string(&MoveOutcome::MovedThroughDoorway).unwrap(),
            r#""moved_through_doorway""#
        );
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn render_round_trips_position(moves in proptest::collection::vec(direction(), 0..40)) {
            let mut nav = hal();
            for dir in moves {
                let before = nav.current_position();
                let report = nav.step(dir);
                if !report.outcome.moved() {
                    prop_assert_eq!(nav.current_position(), before);
                }
            }
            let found = Navigator::locate_marker(&nav.render(), MARKER);
            prop_assert_eq!(found, Some(nav.current_position()));
        }

        #[test]
        fn position_always_passable(moves in proptest::collection::vec(direction(), 0..40)) {
            let mut nav = hal();
            for dir in moves {
                nav.step(dir);
                let terrain = nav.map().terrain_at(nav.current_position());
                prop_assert!(terrain.is_some_and(Terrain::is_passable));
            }
        }
    }
}
