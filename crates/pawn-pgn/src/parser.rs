//! Single-pass PGN parser.
//!
//! Each record is read in two phases. The tag phase consumes `[Key "Value"]`
//! pairs; the first character that does not open a tag starts the movetext.
//! Movetext is a cycle of move number, White SAN, Black SAN. Comments
//! (`{...}`, `;...`), variations (`(...)`, nested), NAGs (`$n`), escape lines
//! (`%...`) and annotation glyphs (`!`, `?`) are skipped. A result literal
//! ends the record wherever it appears in the cycle.

use crate::record::{MovetextMove, Outcome, PgnRecord, Tags};
use crate::PgnError;
use std::iter::Peekable;
use std::str::Chars;

/// Characters that end a SAN token.
const DELIMITERS: &[char] = &['{', '}', '(', ')', '[', ']', ';', '$', '!', '?', '.'];

/// What the movetext cycle expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Number,
    White,
    Black,
}

/// Parses PGN records from a character stream.
///
/// The parser is an iterator over records. It stops for good once the
/// stream holds nothing but whitespace, or after yielding the first error.
///
/// # Example
///
/// ```
/// use pawn_pgn::{Outcome, PgnParser};
///
/// let text = "[White \"Dupre\"]\n\n1. e4 e5 2. Nf3 d6 0-1\n";
/// let records: Vec<_> = PgnParser::new(text.chars()).collect::<Result<_, _>>().unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].outcome, Some(Outcome::BlackWins));
/// assert_eq!(records[0].turns().collect::<Vec<_>>(), ["e4", "e5", "Nf3", "d6"]);
/// ```
pub struct PgnParser<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    line: usize,
    finished: bool,
}

impl<'a> PgnParser<Chars<'a>> {
    pub fn from_text(text: &'a str) -> Self {
        PgnParser::new(text.chars())
    }
}

impl<I: Iterator<Item = char>> PgnParser<I> {
    pub fn new(chars: I) -> Self {
        PgnParser {
            chars: chars.peekable(),
            line: 1,
            finished: false,
        }
    }

    /// Skips whitespace and reports whether another record follows.
    pub fn has_next(&mut self) -> bool {
        self.skip_whitespace();
        self.peek().is_some()
    }

    /// Parses the next record.
    ///
    /// At the end of the stream this yields an empty record; use
    /// [`has_next`](Self::has_next) or the [`Iterator`] impl to stop first.
    pub fn parse_record(&mut self) -> Result<PgnRecord, PgnError> {
        let start = self.line;
        let tags = self.parse_tags()?;
        let (moves, outcome) = self.parse_movetext()?;
        let record = PgnRecord {
            tags,
            moves,
            outcome,
        };
        tracing::debug!(
            line = start,
            tags = record.tags.len(),
            moves = record.moves.len(),
            outcome = ?record.outcome,
            "parsed record"
        );
        Ok(record)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self
            .peek()
            .is_some_and(|c| c.is_whitespace() || c == '\u{feff}')
        {
            self.bump();
        }
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
    }

    // Tag phase

    fn parse_tags(&mut self) -> Result<Tags, PgnError> {
        let mut tags = Tags::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('[') => {
                    let (key, value) = self.parse_tag()?;
                    tags.insert(key, value);
                }
                Some('%') | Some(';') => self.skip_line(),
                _ => return Ok(tags),
            }
        }
    }

    fn parse_tag(&mut self) -> Result<(String, String), PgnError> {
        let line = self.line;
        let malformed = || PgnError::MalformedTag { line };

        self.bump();
        self.skip_whitespace();
        let mut key = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '"' || c == ']' {
                break;
            }
            key.push(c);
            self.bump();
        }
        if key.is_empty() {
            return Err(malformed());
        }

        self.skip_whitespace();
        if !self.eat('"') {
            return Err(malformed());
        }
        let mut value = String::new();
        loop {
            match self.bump().ok_or_else(malformed)? {
                '"' => break,
                '\\' => value.push(self.bump().ok_or_else(malformed)?),
                '\n' => return Err(malformed()),
                c => value.push(c),
            }
        }

        self.skip_whitespace();
        if !self.eat(']') {
            return Err(malformed());
        }
        Ok((key, value))
    }

    // Movetext phase

    fn parse_movetext(&mut self) -> Result<(Vec<MovetextMove>, Option<Outcome>), PgnError> {
        let mut moves: Vec<MovetextMove> = Vec::new();
        let mut slot = Slot::Number;

        loop {
            self.skip_whitespace();
            let Some(c) = self.peek() else {
                return Ok((moves, None));
            };
            match c {
                '{' => self.skip_comment()?,
                '(' => self.skip_variation()?,
                ';' | '%' => self.skip_line(),
                '$' => {
                    self.bump();
                    while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                        self.bump();
                    }
                }
                '.' | '!' | '?' => {
                    self.bump();
                }
                // A new tag section: the previous game had no result.
                '[' => return Ok((moves, None)),
                '*' => {
                    self.bump();
                    return Ok((moves, None));
                }
                c if c.is_ascii_digit() => {
                    let line = self.line;
                    let token = self.read_numeric();
                    if let Some(outcome) = Outcome::from_literal(&token) {
                        return Ok((moves, Some(outcome)));
                    }
                    if let Some(castle) = zero_castle(&token) {
                        slot = place(&mut moves, slot, castle, line)?;
                        continue;
                    }
                    let number = parse_move_number(&token, line)?;
                    slot = self.begin_move(&mut moves, number);
                }
                _ => {
                    let line = self.line;
                    let token = self.read_san();
                    if token.is_empty() {
                        let unexpected = self.bump().map(String::from).unwrap_or_default();
                        return Err(PgnError::UnexpectedToken {
                            token: unexpected,
                            line,
                        });
                    }
                    slot = place(&mut moves, slot, token, line)?;
                }
            }
        }
    }

    /// Starts the entry for move `number`. Three or more dots after the
    /// number mark a Black continuation.
    fn begin_move(&mut self, moves: &mut Vec<MovetextMove>, number: u32) -> Slot {
        let mut dots = 0;
        while self.eat('.') {
            dots += 1;
        }
        if dots >= 3 {
            let resumes_last = moves
                .last()
                .is_some_and(|m| m.number == number && m.black.is_none());
            if !resumes_last {
                moves.push(MovetextMove::new(number));
            }
            Slot::Black
        } else {
            moves.push(MovetextMove::new(number));
            Slot::White
        }
    }

    /// Reads digits plus any '-' and '/' joined to them, so that result
    /// literals such as "1/2-1/2" come back whole.
    fn read_numeric(&mut self) -> String {
        let mut token = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '-' || c == '/' {
                token.push(c);
                self.bump();
            } else {
                break;
            }
        }
        // Check suffix on a zero-castle ("0-0+").
        if token.contains('-') {
            while let Some(c) = self.peek().filter(|c| *c == '+' || *c == '#') {
                token.push(c);
                self.bump();
            }
        }
        token
    }

    /// Reads a SAN token, including promotion and check suffixes.
    fn read_san(&mut self) -> String {
        let mut token = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || DELIMITERS.contains(&c) {
                break;
            }
            token.push(c);
            self.bump();
        }
        token
    }

    fn skip_comment(&mut self) -> Result<(), PgnError> {
        let line = self.line;
        self.bump();
        while let Some(c) = self.bump() {
            if c == '}' {
                tracing::trace!(from = line, to = self.line, "skipped comment");
                return Ok(());
            }
        }
        Err(PgnError::UnterminatedComment { line })
    }

    fn skip_variation(&mut self) -> Result<(), PgnError> {
        let line = self.line;
        self.bump();
        let mut depth = 1;
        while let Some(c) = self.peek() {
            match c {
                '{' => {
                    self.skip_comment()?;
                    continue;
                }
                ';' => {
                    self.skip_line();
                    continue;
                }
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
            self.bump();
            if depth == 0 {
                tracing::trace!(from = line, to = self.line, "skipped variation");
                return Ok(());
            }
        }
        Err(PgnError::UnterminatedVariation { line })
    }
}

/// Stores a SAN token in the slot the cycle expects.
fn place(
    moves: &mut [MovetextMove],
    slot: Slot,
    san: String,
    line: usize,
) -> Result<Slot, PgnError> {
    match (slot, moves.last_mut()) {
        (Slot::White, Some(last)) => {
            last.white = Some(san);
            Ok(Slot::Black)
        }
        (Slot::Black, Some(last)) => {
            last.black = Some(san);
            Ok(Slot::Number)
        }
        _ => Err(PgnError::UnexpectedToken { token: san, line }),
    }
}

fn parse_move_number(token: &str, line: usize) -> Result<u32, PgnError> {
    match token.parse::<u32>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(PgnError::InvalidMoveNumber {
            token: token.to_string(),
            line,
        }),
    }
}

/// Maps castling written with zeros to letter form.
fn zero_castle(token: &str) -> Option<String> {
    let suffix_at = token.find(['+', '#']).unwrap_or(token.len());
    let (body, suffix) = token.split_at(suffix_at);
    let castle = match body {
        "0-0" => "O-O",
        "0-0-0" => "O-O-O",
        _ => return None,
    };
    Some(format!("{}{}", castle, suffix))
}

impl<I: Iterator<Item = char>> Iterator for PgnParser<I> {
    type Item = Result<PgnRecord, PgnError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || !self.has_next() {
            self.finished = true;
            return None;
        }
        let result = self.parse_record();
        if result.is_err() {
            self.finished = true;
        }
        Some(result)
    }
}

impl<I: Iterator<Item = char>> std::iter::FusedIterator for PgnParser<I> {}

/// Parses the first record in `text`.
pub fn parse(text: &str) -> Result<PgnRecord, PgnError> {
    PgnParser::from_text(text).parse_record()
}

/// Parses every record in `text`.
pub fn parse_all(text: &str) -> Result<Vec<PgnRecord>, PgnError> {
    PgnParser::from_text(text).collect()
}
