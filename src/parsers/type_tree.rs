use serde::{Deserialize, Serialize};

use super::depth::{find_top_level, split_top_level, Track};

/// One parsed type expression: a base name plus its generic arguments or
/// tuple elements, in source order.
///
/// Tuple nodes have an empty `base_name`. Nodes are purely syntactic and carry
/// no namespace or project: those are only known after resolution, which
/// produces a [`DependencyInfo`](crate::core::DependencyInfo) per reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeNode {
    pub base_name: String,
    pub children: Vec<TypeNode>,
}

impl TypeNode {
    pub fn leaf(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            children: Vec::new(),
        }
    }

    /// Parse a raw type expression such as `Dictionary<string, List<Foo>>`
    /// or `(int, Bar)`.
    pub fn parse(expr: &str) -> Self {
        let expr = expr.trim();

        // `(int, Bar)[]` and `(int, Bar)?` are still tuples
        if let Some(inner) = tuple_body(strip_suffixes(expr)) {
            return Self {
                base_name: String::new(),
                children: parse_arguments(inner),
            };
        }

        if let Some(open) = expr.find('<') {
            if let Some(close) = expr.rfind('>').filter(|&close| close > open) {
                return Self {
                    base_name: expr[..open].trim().to_string(),
                    children: parse_arguments(&expr[open + 1..close]),
                };
            }
        }

        Self::leaf(expr)
    }

    pub fn is_tuple(&self) -> bool {
        self.base_name.is_empty()
    }

    /// This node followed by every descendant, depth first.
    pub fn flatten(&self) -> Vec<&TypeNode> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a TypeNode>) {
        out.push(self);
        for child in &self.children {
            child.collect_into(out);
        }
    }
}

/// Interior of `(...)` when the opening parenthesis is closed by the last
/// character of `expr`.
fn tuple_body(expr: &str) -> Option<&str> {
    if !expr.starts_with('(') || !expr.ends_with(')') || expr.len() < 2 {
        return None;
    }
    let close = find_top_level(expr, ")", 1, Track::ROUND)?;
    (close == expr.len() - 1).then(|| &expr[1..close])
}

fn parse_arguments(inner: &str) -> Vec<TypeNode> {
    split_top_level(inner, ',', Track::ANGLE | Track::ROUND)
        .into_iter()
        .map(|part| TypeNode::parse(strip_element_name(part)))
        .collect()
}

/// Tuple elements may carry a name (`(int Count, Foo Item)`); keep the type.
fn strip_element_name(part: &str) -> &str {
    let last_close = part.rfind(['>', ')', ']']).map_or(0, |idx| idx + 1);
    match part[last_close..].trim_end().rfind(char::is_whitespace) {
        Some(space) if !part[..last_close + space].trim().is_empty() => {
            part[..last_close + space].trim()
        }
        _ => part,
    }
}

/// Reduce a type expression to its nominal base: generic arguments,
/// nullable markers and array ranks are dropped.
///
/// `List<Foo>[]` becomes `List`, `Bar?` becomes `Bar`.
pub fn base_form(expr: &str) -> &str {
    let mut base = expr.trim();
    base = base.strip_prefix("global::").unwrap_or(base);
    if let Some(open) = base.find('<') {
        base = &base[..open];
    }
    strip_suffixes(base)
}

/// Drop trailing nullable markers and array ranks.
fn strip_suffixes(expr: &str) -> &str {
    let mut base = expr;
    loop {
        let trimmed = base.trim_end();
        if let Some(stripped) = trimmed.strip_suffix('?') {
            base = stripped;
        } else if let Some(open) = trimmed.strip_suffix(']').and_then(|s| s.rfind('[')) {
            base = &trimmed[..open];
        } else {
            return trimmed;
        }
    }
}
