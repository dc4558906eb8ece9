//! Depth-aware forward search over source text.
//!
//! A scan keeps one signed counter per tracked bracket kind and one toggle per
//! tracked literal kind. A position is "top level" when the sum of every
//! active counter and toggle is exactly zero. Only net depth is tracked, not a
//! stack of open brackets, so unbalanced input such as `a > b` shifts the
//! depth for the rest of the scan.

use std::ops::BitOr;

/// Bit mask selecting which nesting constructs a scan tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Track(u8);

impl Track {
    pub const NONE: Track = Track(0);
    pub const ANGLE: Track = Track(1 << 0);
    pub const ROUND: Track = Track(1 << 1);
    pub const BOX: Track = Track(1 << 2);
    pub const CURLY: Track = Track(1 << 3);
    pub const DOUBLE_QUOTE: Track = Track(1 << 4);
    pub const SINGLE_QUOTE: Track = Track(1 << 5);

    /// Both string and character literals.
    pub const LITERALS: Track = Track((1 << 4) | (1 << 5));
    /// Every bracket kind plus both literal kinds.
    pub const ALL: Track = Track(0b11_1111);

    pub const fn contains(self, other: Track) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Track {
    type Output = Track;

    fn bitor(self, rhs: Track) -> Track {
        Track(self.0 | rhs.0)
    }
}

/// Incremental nesting state, fed one character at a time.
#[derive(Debug, Clone)]
pub struct DepthState {
    track: Track,
    angle: i32,
    round: i32,
    square: i32,
    curly: i32,
    in_double: bool,
    in_single: bool,
    verbatim: bool,
    escaped: bool,
    prev: Option<char>,
}

impl DepthState {
    pub fn new(track: Track) -> Self {
        Self {
            track,
            angle: 0,
            round: 0,
            square: 0,
            curly: 0,
            in_double: false,
            in_single: false,
            verbatim: false,
            escaped: false,
            prev: None,
        }
    }

    /// Sum of every active counter and literal toggle.
    pub fn depth(&self) -> i32 {
        self.angle
            + self.round
            + self.square
            + self.curly
            + i32::from(self.in_double)
            + i32::from(self.in_single)
    }

    pub fn is_top_level(&self) -> bool {
        self.depth() == 0
    }

    pub fn in_literal(&self) -> bool {
        self.in_double || self.in_single
    }

    /// Advance the state past `ch`.
    pub fn feed(&mut self, ch: char) {
        let prev = self.prev.replace(ch);

        if self.in_literal() {
            if self.escaped {
                self.escaped = false;
                return;
            }
            match ch {
                // verbatim strings double their quotes instead of escaping
                '\\' if !self.verbatim => self.escaped = true,
                '"' if self.in_double => {
                    self.in_double = false;
                    self.verbatim = false;
                }
                '\'' if self.in_single => self.in_single = false,
                _ => {}
            }
            return;
        }

        let track = self.track;
        match ch {
            '"' if track.contains(Track::DOUBLE_QUOTE) => {
                self.in_double = true;
                self.verbatim = prev == Some('@');
            }
            '\'' if track.contains(Track::SINGLE_QUOTE) => self.in_single = true,
            '<' if track.contains(Track::ANGLE) => self.angle += 1,
            '>' if track.contains(Track::ANGLE) => self.angle -= 1,
            '(' if track.contains(Track::ROUND) => self.round += 1,
            ')' if track.contains(Track::ROUND) => self.round -= 1,
            '[' if track.contains(Track::BOX) => self.square += 1,
            ']' if track.contains(Track::BOX) => self.square -= 1,
            '{' if track.contains(Track::CURLY) => self.curly += 1,
            '}' if track.contains(Track::CURLY) => self.curly -= 1,
            _ => {}
        }
    }
}

/// First index at or after `start` where `needle` begins at top level.
pub fn find_top_level(text: &str, needle: &str, start: usize, track: Track) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let tail = text.get(start..)?;
    let mut state = DepthState::new(track);
    for (offset, ch) in tail.char_indices() {
        if state.is_top_level() && tail[offset..].starts_with(needle) {
            return Some(start + offset);
        }
        state.feed(ch);
    }
    None
}

/// First index at or after `start` whose character satisfies `pred` at top level.
pub fn find_top_level_by<P>(text: &str, start: usize, track: Track, pred: P) -> Option<usize>
where
    P: Fn(char) -> bool,
{
    let tail = text.get(start..)?;
    let mut state = DepthState::new(track);
    for (offset, ch) in tail.char_indices() {
        if state.is_top_level() && pred(ch) {
            return Some(start + offset);
        }
        state.feed(ch);
    }
    None
}

/// Split on `separator` wherever it occurs at top level. Segments are trimmed
/// and empty segments are dropped.
pub fn split_top_level(text: &str, separator: char, track: Track) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut state = DepthState::new(track);
    let mut segment_start = 0;

    for (idx, ch) in text.char_indices() {
        if ch == separator && state.is_top_level() {
            parts.push(&text[segment_start..idx]);
            segment_start = idx + ch.len_utf8();
            continue;
        }
        state.feed(ch);
    }
    parts.push(&text[segment_start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}
