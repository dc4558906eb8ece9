use serde::{Deserialize, Serialize};

use super::depth::{find_top_level, find_top_level_by, split_top_level, Track};
use super::patterns::{
    is_framework_type, is_non_type_keyword, is_parameter_modifier, is_primitive,
    is_universal_base, CLASS_DECLARATION, CONSTRUCTOR, FIELD, INSTANTIATION, METHOD, PROPERTY,
    STATIC_CALL,
};
use super::type_tree::{base_form, TypeNode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    /// `None` for `void` methods.
    pub return_type: Option<TypeNode>,
    pub parameters: Vec<TypeNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorSignature {
    pub name: String,
    pub parameters: Vec<TypeNode>,
}

/// Structural facts mined from one class chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub class_name: String,
    /// `None` when the declaration has no base list at all.
    pub inheritance: Option<Vec<TypeNode>>,
    pub instantiations: Vec<TypeNode>,
    pub static_call_targets: Vec<TypeNode>,
    pub field_or_property_types: Vec<TypeNode>,
    pub methods: Vec<MethodSignature>,
    pub constructors: Vec<ConstructorSignature>,
}

impl ClassRecord {
    fn new(class_name: String) -> Self {
        Self {
            class_name,
            inheritance: None,
            instantiations: Vec::new(),
            static_call_targets: Vec::new(),
            field_or_property_types: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Every raw type reference in resolution order: inheritance,
    /// constructor parameters, method return and parameter types,
    /// field/property types, instantiations, static-call targets.
    pub fn type_references(&self) -> Vec<&TypeNode> {
        let mut refs: Vec<&TypeNode> = Vec::new();
        if let Some(bases) = &self.inheritance {
            refs.extend(bases);
        }
        for ctor in &self.constructors {
            refs.extend(&ctor.parameters);
        }
        for method in &self.methods {
            refs.extend(method.return_type.as_ref());
            refs.extend(&method.parameters);
        }
        refs.extend(&self.field_or_property_types);
        refs.extend(&self.instantiations);
        refs.extend(&self.static_call_targets);
        refs
    }
}

/// Extract a [`ClassRecord`] from a chunk whose first line declares the
/// class. Returns `None` when that line is not a class declaration.
pub fn extract_class(chunk: &[&str]) -> Option<ClassRecord> {
    let (declaration, body) = chunk.split_first()?;
    let caps = CLASS_DECLARATION.captures(declaration)?;
    let name = caps.get(1)?;

    let mut record = ClassRecord::new(name.as_str().to_string());
    let header = DeclarationHeader::locate(declaration, name.end());

    record.inheritance = header.inheritance(declaration);
    if let Some(parameters) = header.primary_constructor(declaration) {
        record.constructors.push(ConstructorSignature {
            name: record.class_name.clone(),
            parameters,
        });
    }

    let text = chunk.join("\n");
    record.instantiations = instantiations(&text);
    record.static_call_targets = static_call_targets(&text);

    for line in body {
        if let Some(ty) = field_or_property_type(line) {
            record.field_or_property_types.push(TypeNode::parse(ty));
        }
        if let Some(method) = method_signature(line) {
            record.methods.push(method);
        } else if let Some(ctor) = constructor_signature(line, &record.class_name) {
            record.constructors.push(ctor);
        }
    }

    Some(record)
}

/// Landmarks on a class declaration line, all measured after the class name.
struct DeclarationHeader {
    after_name: usize,
    colon: Option<usize>,
    brace: usize,
}

impl DeclarationHeader {
    fn locate(line: &str, after_name: usize) -> Self {
        let brace = line[after_name..]
            .find('{')
            .map_or(line.len(), |idx| idx + after_name);
        let colon = find_top_level(line, ":", after_name, Track::ANGLE | Track::ROUND)
            .filter(|&idx| idx < brace);
        Self {
            after_name,
            colon,
            brace,
        }
    }

    fn inheritance(&self, line: &str) -> Option<Vec<TypeNode>> {
        let colon = self.colon?;
        let mut list = &line[colon + 1..self.brace];
        if let Some(constraints) = find_top_level(list, " where ", 0, Track::ANGLE | Track::ROUND) {
            list = &list[..constraints];
        }

        let bases = split_top_level(list, ',', Track::ANGLE | Track::ROUND)
            .into_iter()
            .map(strip_base_arguments)
            .map(TypeNode::parse)
            .filter(|node| !is_universal_base(&node.base_name))
            .collect();
        Some(bases)
    }

    /// Parameters of `class Foo(Bar bar)`. The parenthesis must come before
    /// both the base list and the body brace.
    fn primary_constructor(&self, line: &str) -> Option<Vec<TypeNode>> {
        let limit = self.colon.unwrap_or(self.brace).min(self.brace);
        let open = line[self.after_name..limit].find('(')? + self.after_name;
        let parameters = parameter_list(line, open)
            .into_iter()
            .filter(|node| !is_universal_base(&node.base_name))
            .collect();
        Some(parameters)
    }
}

/// `Base(x, y)` in a base list names `Base`.
fn strip_base_arguments(segment: &str) -> &str {
    match find_top_level(segment, "(", 0, Track::ANGLE) {
        Some(idx) => segment[..idx].trim(),
        None => segment,
    }
}

fn instantiations(text: &str) -> Vec<TypeNode> {
    INSTANTIATION
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|ty| {
            let base = base_form(ty);
            !is_primitive(base) && !is_framework_type(base)
        })
        .map(TypeNode::parse)
        .collect()
}

fn static_call_targets(text: &str) -> Vec<TypeNode> {
    STATIC_CALL
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        // `obj.Member.Call(` is an instance chain, not a static call
        .filter(|m| !text[..m.start()].ends_with('.'))
        .map(|m| m.as_str())
        .filter(|ident| !is_primitive(ident))
        .map(TypeNode::parse)
        .collect()
}

fn field_or_property_type(line: &str) -> Option<&str> {
    [&*FIELD, &*PROPERTY].into_iter().find_map(|pattern| {
        let caps = pattern.captures(line)?;
        let ty = caps.get(1)?.as_str().trim();
        let name = caps.get(2)?.as_str();
        (!is_non_type_keyword(ty) && !is_non_type_keyword(name)).then_some(ty)
    })
}

fn method_signature(line: &str) -> Option<MethodSignature> {
    let caps = METHOD.captures(line)?;
    let ty = caps.get(1)?.as_str().trim();
    if is_non_type_keyword(ty) {
        return None;
    }
    // the match ends just past the opening parenthesis
    let open = caps.get(0)?.end() - 1;
    Some(MethodSignature {
        return_type: (ty != "void").then(|| TypeNode::parse(ty)),
        parameters: parameter_list(line, open),
    })
}

fn constructor_signature(line: &str, class_name: &str) -> Option<ConstructorSignature> {
    let caps = CONSTRUCTOR.captures(line)?;
    let name = caps.get(1)?;
    if name.as_str() != class_name {
        return None;
    }
    let open = caps.get(0)?.end() - 1;
    Some(ConstructorSignature {
        name: class_name.to_string(),
        parameters: parameter_list(line, open),
    })
}

/// Parameter types of the list opened by the `(` at `open`. A list that does
/// not close on this line runs to the end of the line.
fn parameter_list(line: &str, open: usize) -> Vec<TypeNode> {
    let close = find_top_level(line, ")", open + 1, Track::ANGLE | Track::ROUND | Track::LITERALS)
        .unwrap_or(line.len());
    parse_parameters(&line[open + 1..close])
}

pub fn parse_parameters(list: &str) -> Vec<TypeNode> {
    split_top_level(list, ',', Track::ALL)
        .into_iter()
        .filter_map(parameter_type)
        .map(TypeNode::parse)
        .collect()
}

/// The first top-level whitespace-delimited token of a parameter, after any
/// attributes and modifiers.
fn parameter_type(parameter: &str) -> Option<&str> {
    let mut rest = parameter.trim();
    while rest.starts_with('[') {
        let close = find_top_level(rest, "]", 1, Track::BOX)?;
        rest = rest[close + 1..].trim_start();
    }
    while let Some(word) = rest.split_whitespace().next() {
        if !is_parameter_modifier(word) {
            break;
        }
        rest = rest[word.len()..].trim_start();
    }

    let end = find_top_level_by(rest, 0, Track::ANGLE | Track::ROUND, char::is_whitespace)
        .unwrap_or(rest.len());
    let ty = rest[..end].trim();
    (!ty.is_empty()).then_some(ty)
}
