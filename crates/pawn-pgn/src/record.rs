//! The parsed form of one PGN game.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Tags written first, in this order, when a record is rendered.
pub const SEVEN_TAG_ROSTER: [&str; 7] =
    ["Event", "Site", "Date", "Round", "White", "Black", "Result"];

const LINE_WIDTH: usize = 80;

/// Game termination marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    #[serde(rename = "1-0")]
    WhiteWins,
    #[serde(rename = "0-1")]
    BlackWins,
    #[serde(rename = "1/2-1/2")]
    Draw,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::WhiteWins, Outcome::BlackWins, Outcome::Draw];

    /// Recognizes one of the three result literals.
    pub fn from_literal(s: &str) -> Option<Self> {
        Outcome::ALL.into_iter().find(|o| o.as_str() == s)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::WhiteWins => "1-0",
            Outcome::BlackWins => "0-1",
            Outcome::Draw => "1/2-1/2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag pairs keyed by tag name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tags(BTreeMap<String, String>);

impl Tags {
    pub fn new() -> Self {
        Tags::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Sets a tag, returning the previous value if the key was present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates tags in export order: the Seven Tag Roster first, then the
    /// rest sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let roster = SEVEN_TAG_ROSTER
            .iter()
            .filter_map(|&key| self.get(key).map(|value| (key, value)));
        let rest = self
            .0
            .iter()
            .filter(|(key, _)| !SEVEN_TAG_ROSTER.contains(&key.as_str()))
            .map(|(key, value)| (key.as_str(), value.as_str()));
        roster.chain(rest)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Tags {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Tags(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            write!(f, "[{} \"", key)?;
            for c in value.chars() {
                if c == '"' || c == '\\' {
                    write!(f, "\\")?;
                }
                write!(f, "{}", c)?;
            }
            writeln!(f, "\"]")?;
        }
        Ok(())
    }
}

/// One numbered entry of movetext: a White half-move and its Black reply.
///
/// Either side can be missing: a game may end after White's move, and a
/// record may resume with a Black continuation (`5... Nf6`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovetextMove {
    pub number: u32,
    pub white: Option<String>,
    pub black: Option<String>,
}

impl MovetextMove {
    pub fn new(number: u32) -> Self {
        MovetextMove {
            number,
            ..MovetextMove::default()
        }
    }

    /// Iterates the half-moves present, White first.
    pub fn half_moves(&self) -> impl Iterator<Item = &str> {
        self.white.iter().chain(self.black.iter()).map(String::as_str)
    }
}

impl fmt::Display for MovetextMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.white, &self.black) {
            (Some(white), Some(black)) => write!(f, "{}. {} {}", self.number, white, black),
            (Some(white), None) => write!(f, "{}. {}", self.number, white),
            (None, Some(black)) => write!(f, "{}... {}", self.number, black),
            (None, None) => write!(f, "{}.", self.number),
        }
    }
}

/// A parsed game: tags, numbered movetext and the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PgnRecord {
    pub tags: Tags,
    pub moves: Vec<MovetextMove>,
    /// `None` when the game ended with `*` or without a result.
    pub outcome: Option<Outcome>,
}

impl PgnRecord {
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key)
    }

    /// "White vs Black", with "?" for a missing player.
    pub fn matchup(&self) -> String {
        format!(
            "{} vs {}",
            self.tag("White").unwrap_or("?"),
            self.tag("Black").unwrap_or("?")
        )
    }

    /// Iterates every half-move SAN token in playing order.
    pub fn turns(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().flat_map(MovetextMove::half_moves)
    }

    pub fn ply_count(&self) -> usize {
        self.turns().count()
    }
}

/// Renders export-style PGN: tags, a blank line, then movetext wrapped at
/// 80 columns and terminated by the result (`*` when unknown).
impl fmt::Display for PgnRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tags)?;
        writeln!(f)?;

        let result = self.outcome.map_or("*", Outcome::as_str);
        let words = self
            .moves
            .iter()
            .map(ToString::to_string)
            .chain(std::iter::once(result.to_string()));

        let mut column = 0;
        for word in words {
            if column > 0 && column + 1 + word.len() > LINE_WIDTH {
                writeln!(f)?;
                column = 0;
            }
            if column > 0 {
                write!(f, " ")?;
                column += 1;
            }
            write!(f, "{}", word)?;
            column += word.len();
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PgnRecord {
        PgnRecord {
            tags: [
                ("White", "Dupre"),
                ("Black", "Carlos Torre Repetto"),
                ("ECO", "C41"),
                ("Event", "New Orleans"),
                ("Result", "0-1"),
            ]
            .into_iter()
            .collect(),
            moves: vec![
                MovetextMove {
                    number: 1,
                    white: Some("e4".to_string()),
                    black: Some("e5".to_string()),
                },
                MovetextMove {
                    number: 2,
                    white: Some("Nf3".to_string()),
                    black: None,
                },
            ],
            outcome: Some(Outcome::BlackWins),
        }
    }

    #[test]
    fn outcome_literals() {
        for outcome in Outcome::ALL {
            assert_eq!(Outcome::from_literal(outcome.as_str()), Some(outcome));
        }
        assert_eq!(Outcome::from_literal("1/2"), None);
        assert_eq!(Outcome::from_literal("*"), None);
        assert_eq!(Outcome::Draw.to_string(), "1/2-1/2");
    }

    #[test]
    fn accessors() {
        let record = record();
        assert_eq!(record.tag("ECO"), Some("C41"));
        assert_eq!(record.tag("Round"), None);
        assert_eq!(record.matchup(), "Dupre vs Carlos Torre Repetto");
        assert_eq!(record.turns().collect::<Vec<_>>(), ["e4", "e5", "Nf3"]);
        assert_eq!(record.ply_count(), 3);
    }

    #[test]
    fn matchup_with_missing_players() {
        assert_eq!(PgnRecord::default().matchup(), "? vs ?");
    }

    #[test]
    fn tags_render_roster_first() {
        let rendered = record().tags.to_string();
        let keys: Vec<&str> = rendered
            .lines()
            .map(|line| line.trim_start_matches('[').split(' ').next().unwrap_or(""))
            .collect();
        assert_eq!(keys, ["Event", "White", "Black", "Result", "ECO"]);
    }

    #[test]
    fn tag_values_are_escaped() {
        let tags: Tags = [("Annotator", r#"J. "Jack" O\Hara"#)].into_iter().collect();
        assert_eq!(tags.to_string(), "[Annotator \"J. \\\"Jack\\\" O\\\\Hara\"]\n");
    }

    #[test]
    fn movetext_move_display() {
        let mut m = MovetextMove::new(5);
        assert_eq!(m.to_string(), "5.");
        m.black = Some("Nf6".to_string());
        assert_eq!(m.to_string(), "5... Nf6");
        m.white = Some("e4".to_string());
        assert_eq!(m.to_string(), "5. e4 Nf6");
    }

    #[test]
    fn record_display() {
        let rendered = record().to_string();
        assert!(rendered.starts_with("[Event \"New Orleans\"]\n"));
        assert!(rendered.ends_with("\n\n1. e4 e5 2. Nf3 0-1\n"));
    }

    #[test]
    fn unknown_result_renders_as_star() {
        let mut record = record();
        record.outcome = None;
        assert!(record.to_string().ends_with("2. Nf3 *\n"));
    }

    #[test]
    fn long_movetext_wraps() {
        let moves = (1..=40)
            .map(|n| MovetextMove {
                number: n,
                white: Some("Nf3".to_string()),
                black: Some("Ng8".to_string()),
            })
            .collect();
        let record = PgnRecord {
            moves,
            ..PgnRecord::default()
        };
        let rendered = record.to_string();
        assert!(rendered.lines().all(|line| line.len() <= 80));
        assert!(rendered.lines().count() > 3);
    }
}
