//! Compiled line patterns and the keyword tables the extractor consults.
//!
//! Every repeated group is bounded (`{0,127}`, `{0,6}`, ...) so a hostile
//! input line cannot make any single match expensive.

use regex::Regex;
use std::sync::LazyLock;

/// Longest identifier a declaration pattern accepts.
pub const MAX_IDENTIFIER_LEN: usize = 128;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        pub static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(&$re).expect("built-in pattern must compile"));
    };
}

const IDENT: &str = r"[A-Za-z_][A-Za-z0-9_]{0,127}";

/// A type expression: dotted name with an optional generic argument list, or
/// a parenthesised tuple, followed by optional nullable/array suffixes.
const TYPE_EXPR: &str = concat!(
    r"(?:[A-Za-z_][A-Za-z0-9_.]{0,127}(?:\s*<[A-Za-z0-9_.,<>?\[\]\s]{0,256}>)?",
    r"|\([A-Za-z0-9_.,<>?\[\]\s]{1,256}\))",
    r"\??(?:\[[\s,]{0,8}\]){0,3}\??",
);

const ATTRIBUTES: &str = r"(?:\[[^\]]{0,128}\]\s*){0,3}";
const VISIBILITY: &str = r"(?:(?:public|private|protected|internal)\s+){1,2}";
const FIELD_MODIFIERS: &str =
    r"(?:(?:public|private|protected|internal|static|readonly|const|volatile|new|required|unsafe|fixed|event)\s+){0,6}";
const MEMBER_MODIFIERS: &str =
    r"(?:(?:public|private|protected|internal|static|virtual|override|abstract|sealed|new|required|extern|unsafe|partial|readonly)\s+){0,6}";
const METHOD_MODIFIERS: &str =
    r"(?:(?:static|virtual|override|abstract|sealed|async|new|extern|unsafe|partial|readonly)\s+){0,6}";

pattern!(CLASS_DECLARATION, format!(r"\bclass\s+({IDENT})\b"));

pattern!(NAMESPACE_DECLARATION, r"^namespace\s+([A-Za-z_][A-Za-z0-9_.]{0,255})");

pattern!(
    USING_DIRECTIVE,
    r"^(?:global\s+)?using\s+(?:static\s+)?([A-Za-z_][A-Za-z0-9_.]{0,255})\s*;"
);

pattern!(SINGLE_LINE_BLOCK_COMMENT, r"/\*.*?\*/");

pattern!(
    INSTANTIATION,
    r"\bnew\s+([A-Za-z_][A-Za-z0-9_.]{0,127}(?:\s*<[A-Za-z0-9_.,<>?\[\]\s]{0,256}>)?)\s*[({]"
);

pattern!(
    STATIC_CALL,
    format!(r"\b([A-Z][A-Za-z0-9_]{{0,127}})\.{IDENT}\s*(?:<[A-Za-z0-9_.,\s]{{0,128}}>)?\s*\(")
);

pattern!(
    FIELD,
    format!(r"^{ATTRIBUTES}{FIELD_MODIFIERS}({TYPE_EXPR})\s+({IDENT})\s*(?:=|;)")
);

pattern!(
    PROPERTY,
    format!(r"^{ATTRIBUTES}{MEMBER_MODIFIERS}({TYPE_EXPR})\s+({IDENT})\s*\{{")
);

pattern!(
    METHOD,
    format!(
        r"^{ATTRIBUTES}{VISIBILITY}{METHOD_MODIFIERS}({TYPE_EXPR})\s+({IDENT})\s*(?:<[A-Za-z0-9_,\s]{{0,128}}>)?\s*\("
    )
);

pattern!(
    CONSTRUCTOR,
    format!(r"^{ATTRIBUTES}{VISIBILITY}({IDENT})\s*\(")
);

const PRIMITIVES: &[&str] = &[
    "bool", "byte", "sbyte", "char", "decimal", "double", "float", "int", "uint", "nint", "nuint",
    "long", "ulong", "short", "ushort", "object", "string", "void", "dynamic", "var", "Boolean",
    "Byte", "SByte", "Char", "Decimal", "Double", "Single", "Int16", "Int32", "Int64", "UInt16",
    "UInt32", "UInt64", "IntPtr", "UIntPtr", "Object", "String", "Void",
];

const FRAMEWORK_TYPES: &[&str] = &[
    "List", "IList", "IEnumerable", "IEnumerator", "ICollection", "IReadOnlyList",
    "IReadOnlyCollection", "IReadOnlyDictionary", "Dictionary", "IDictionary", "HashSet", "ISet",
    "SortedDictionary", "SortedList", "SortedSet", "LinkedList", "Queue", "Stack",
    "ConcurrentDictionary", "ConcurrentQueue", "ConcurrentBag", "IQueryable", "Array", "Span",
    "ReadOnlySpan", "Memory", "ReadOnlyMemory", "Task", "ValueTask", "Func", "Action", "Predicate",
    "Nullable", "Tuple", "ValueTuple", "KeyValuePair", "Lazy", "StringBuilder", "Exception",
    "ArgumentException", "ArgumentNullException", "ArgumentOutOfRangeException",
    "InvalidOperationException", "NotImplementedException", "NotSupportedException", "Random",
    "Guid", "DateTime", "DateTimeOffset", "TimeSpan", "CancellationToken",
    "CancellationTokenSource", "Stopwatch", "Regex", "Uri", "SemaphoreSlim", "EventHandler",
    "EventArgs", "IDisposable", "IAsyncDisposable",
];

const UNIVERSAL_BASE: &[&str] = &["object", "Object", "System.Object"];

/// Words that can sit in a type position of a line pattern without naming a type.
const NON_TYPE_KEYWORDS: &[&str] = &[
    "class", "struct", "interface", "enum", "record", "delegate", "namespace", "return", "throw",
    "await", "yield", "using", "goto", "case", "else", "new", "lock", "in", "is", "as", "out",
    "ref", "params", "typeof", "sizeof", "nameof", "default", "checked", "unchecked", "get",
    "set", "init", "add", "remove", "when", "where", "select", "from", "let", "orderby", "group",
    "into", "join", "operator", "implicit", "explicit", "this", "base", "null", "true", "false",
    "break", "continue", "do", "for", "foreach", "while", "if", "switch", "try", "catch",
    "finally", "static", "const", "readonly", "event",
];

/// Modifiers that may precede a parameter's type.
const PARAMETER_MODIFIERS: &[&str] = &["this", "ref", "out", "in", "params", "scoped", "readonly"];

pub fn is_primitive(name: &str) -> bool {
    PRIMITIVES.contains(&name)
}

pub fn is_framework_type(name: &str) -> bool {
    FRAMEWORK_TYPES.contains(&name)
}

/// Primitive or well-known framework type that never becomes a dependency,
/// written bare (`String`) or under the `System` namespaces
/// (`System.Collections.Generic.List`).
pub fn is_builtin(name: &str) -> bool {
    let name = match name.rsplit_once('.') {
        Some((prefix, last)) if prefix == "System" || prefix.starts_with("System.") => last,
        _ => name,
    };
    is_primitive(name) || is_framework_type(name)
}

pub fn is_universal_base(name: &str) -> bool {
    UNIVERSAL_BASE.contains(&name)
}

pub fn is_non_type_keyword(word: &str) -> bool {
    NON_TYPE_KEYWORDS.contains(&word)
}

pub fn is_parameter_modifier(word: &str) -> bool {
    PARAMETER_MODIFIERS.contains(&word)
}
