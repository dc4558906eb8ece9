use classweb::parsers::normalizer::{normalize, strip_trailing_comment};

#[test]
fn drops_full_line_comments() {
    let source = "// header\n  /// doc comment\nint x;\n";
    assert_eq!(normalize(source), "int x;\n");
}

#[test]
fn truncates_trailing_comment() {
    assert_eq!(normalize("int x; // note"), "int x;\n");
}

#[test]
fn keeps_comment_marker_inside_string() {
    let source = r#"var url = "http://example.com";"#;
    assert_eq!(normalize(source), format!("{source}\n"));
    assert_eq!(strip_trailing_comment(source), source);
}

#[test]
fn removes_single_line_block_comment() {
    assert_eq!(normalize("int /* inline */ x;"), "int  x;\n");
}

#[test]
fn multi_line_block_comment_is_left_in_place() {
    let source = "/* start\nclass Hidden {}\n*/\n";
    let normalized = normalize(source);
    assert!(normalized.contains("/* start"));
    assert!(normalized.contains("class Hidden {"));
    assert!(normalized.contains("*/"));
}

#[test]
fn each_statement_and_brace_gets_its_own_line() {
    assert_eq!(
        normalize("class A { int x; int y; }"),
        "class A {\nint x;\nint y;\n}\n"
    );
}

#[test]
fn terminators_inside_literals_do_not_split() {
    let source = r#"var s = "a;b{c}"; char c = ';';"#;
    assert_eq!(
        normalize(source),
        "var s = \"a;b{c}\";\nchar c = ';';\n"
    );
}

#[test]
fn blank_lines_are_dropped() {
    assert_eq!(normalize("\n\n   \nint x;\n\n"), "int x;\n");
}
