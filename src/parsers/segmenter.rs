use std::ops::Range;

use super::patterns::{CLASS_DECLARATION, NAMESPACE_DECLARATION, USING_DIRECTIVE};

/// Name declared by a `class` keyword on this line, if any.
pub fn class_name(line: &str) -> Option<&str> {
    CLASS_DECLARATION
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Half-open line ranges, one per class declaration. Each range starts at a
/// declaration line and ends where the next declaration starts (or at the
/// end of input). A nested class opens its own range and cuts the body of
/// the enclosing class short at that point.
pub fn chunk_ranges(lines: &[&str]) -> Vec<Range<usize>> {
    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| CLASS_DECLARATION.is_match(line))
        .map(|(idx, _)| idx)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(lines.len());
            start..end
        })
        .collect()
}

/// Slice normalized lines into class chunks.
pub fn segment<'a, 'b>(lines: &'b [&'a str]) -> Vec<&'b [&'a str]> {
    chunk_ranges(lines)
        .into_iter()
        .map(|range| &lines[range])
        .collect()
}

/// The first declared namespace, or `""` when the file has none.
pub fn namespace(lines: &[&str]) -> String {
    lines
        .iter()
        .find_map(|line| NAMESPACE_DECLARATION.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Imported namespaces in declaration order. Aliases (`using A = B;`) and
/// using-statements are not imports.
pub fn imports(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| USING_DIRECTIVE.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
