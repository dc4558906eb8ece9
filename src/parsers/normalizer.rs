use super::depth::{find_top_level, DepthState, Track};
use super::patterns::SINGLE_LINE_BLOCK_COMMENT;

const LINE_COMMENT: &str = "//";

/// Strip comments and re-segment `source` so every statement and brace
/// begins a new line. Lines are trimmed and blank lines dropped.
///
/// Block comments are only removed when they open and close on the same
/// line; a `/* ... */` spanning several lines survives normalization.
pub fn normalize(source: &str) -> String {
    let mut stripped = String::with_capacity(source.len());
    for line in source.lines() {
        if line.trim_start().starts_with(LINE_COMMENT) {
            continue;
        }
        let line = SINGLE_LINE_BLOCK_COMMENT.replace_all(line, "");
        stripped.push_str(strip_trailing_comment(&line));
        stripped.push('\n');
    }

    let broken = break_statements(&stripped);
    let mut out = String::with_capacity(broken.len());
    for line in broken.lines().map(str::trim).filter(|l| !l.is_empty()) {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Cut a line at a trailing `//` that sits outside any literal. A marker that
/// only appears inside a literal leaves the line unchanged.
pub fn strip_trailing_comment(line: &str) -> &str {
    if !line.contains(LINE_COMMENT) {
        return line;
    }
    match find_top_level(line, LINE_COMMENT, 0, Track::LITERALS) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Insert a line break after every `;`, `{` and `}` outside literals.
fn break_statements(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut state = DepthState::new(Track::LITERALS);
    for ch in text.chars() {
        let top_level = state.is_top_level();
        state.feed(ch);
        out.push(ch);
        if ch == '\n' {
            // an unterminated literal ends at the line break
            state = DepthState::new(Track::LITERALS);
            continue;
        }
        if top_level && matches!(ch, ';' | '{' | '}') {
            out.push('\n');
        }
    }
    out
}
