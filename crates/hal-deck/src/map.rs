//! The static deck layout.

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};
use crate::position::Position;

/// The ship deck HAL patrols. Row 0 is intentionally empty.
const REFERENCE_DECK: &[&str] = &[
    "",
    "                ********",
    "               *        *",
    "      ***********+****************",
    "   ***     *    * *     *         *---",
    " **  *     *    * *     *         *-----",
    "*    **    +    * *     *         *------",
    " **  + **** ****   +****          *----- ",
    "   ***                 +          *---",
    "      ***********++***************",
    "               *        *",
    "                ********",
];

/// What a single map cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    /// `*`: impassable.
    Wall,
    /// `+`: passable, but not a place to linger.
    Doorway,
    /// A space: passable.
    Floor,
    /// Any other glyph. Treated as an anomaly, never entered.
    Unknown(char),
}

impl Terrain {
    /// Classify a map character.
    pub fn from_char(c: char) -> Self {
        match c {
            '*' => Self::Wall,
            '+' => Self::Doorway,
            ' ' => Self::Floor,
            other => Self::Unknown(other),
        }
    }

    /// Whether the agent may stand on this terrain.
    pub fn is_passable(self) -> bool {
        matches!(self, Self::Floor | Self::Doorway)
    }
}

/// An immutable grid of rows; rows may differ in length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckMap {
    rows: Vec<Vec<char>>,
}

impl DeckMap {
    /// Build a map from rows of text.
    pub fn from_rows<I, S>(rows: I) -> DeckResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = rows
            .into_iter()
            .map(|r| r.as_ref().chars().collect())
            .collect();
        if rows.is_empty() {
            return Err(DeckError::EmptyMap);
        }
        Ok(Self { rows })
    }

    /// Parse a map from a block of text, one row per line.
    pub fn parse(text: &str) -> DeckResult<Self> {
        Self::from_rows(text.lines())
    }

    /// The built-in ship deck.
    pub fn reference() -> Self {
        Self {
            rows: REFERENCE_DECK.iter().map(|r| r.chars().collect()).collect(),
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of a row, if it exists.
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    /// The terrain at `pos`, or `None` when `pos` is off the map.
    pub fn terrain_at(&self, pos: Position) -> Option<Terrain> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        self.rows.get(row)?.get(col).copied().map(Terrain::from_char)
    }

    /// The map as text with `marker` drawn over `pos`.
    ///
    /// The stored rows are never modified. A `pos` off the map draws no
    /// marker.
    pub fn render(&self, pos: Position, marker: char) -> Vec<String> {
        self.rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, &ch)| {
                        if r as i64 == pos.row && c as i64 == pos.col {
                            marker
                        } else {
                            ch
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
