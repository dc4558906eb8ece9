use classweb::parsers::extractor::parse_parameters;
use classweb::parsers::{extract_class, parse_source, scan_declarations, TypeNode};

fn names(nodes: &[TypeNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.base_name.as_str()).collect()
}

#[test]
fn non_class_chunks_yield_nothing() {
    assert!(extract_class(&["interface IFoo {", "void Run();", "}"]).is_none());
    assert!(extract_class(&["struct Point {", "}"]).is_none());
    assert!(extract_class(&[]).is_none());
}

#[test]
fn inheritance_drops_universal_base() {
    let record = extract_class(&["public class Foo : Base<Bar>, IService, object {", "}"]).unwrap();
    let bases = record.inheritance.expect("base list");
    assert_eq!(names(&bases), vec!["Base", "IService"]);
    assert_eq!(names(&bases[0].children), vec!["Bar"]);
}

#[test]
fn missing_base_list_is_none() {
    let record = extract_class(&["class Foo {", "}"]).unwrap();
    assert_eq!(record.class_name, "Foo");
    assert!(record.inheritance.is_none());
    assert!(record.constructors.is_empty());
}

#[test]
fn inheritance_stops_at_constraint_clause() {
    let record = extract_class(&["class Repo<T> : IRepo<T> where T : class {", "}"]).unwrap();
    let bases = record.inheritance.unwrap();
    assert_eq!(names(&bases), vec!["IRepo"]);
    assert_eq!(names(&bases[0].children), vec!["T"]);
}

#[test]
fn inheritance_without_brace_runs_to_end_of_line() {
    let record = extract_class(&["class Foo : Base, IThing", "{", "}"]).unwrap();
    assert_eq!(names(&record.inheritance.unwrap()), vec!["Base", "IThing"]);
}

#[test]
fn primary_constructor_parameters() {
    let record = extract_class(&[
        "public class Service(ILogger logger, object state, Repo<Item> repo) : Base(logger) {",
        "}",
    ])
    .unwrap();
    assert_eq!(record.constructors.len(), 1);
    assert_eq!(record.constructors[0].name, "Service");
    assert_eq!(names(&record.constructors[0].parameters), vec!["ILogger", "Repo"]);
    assert_eq!(names(&record.inheritance.unwrap()), vec!["Base"]);
}

#[test]
fn parenthesis_after_brace_is_not_a_constructor() {
    let record = extract_class(&["class Foo { void Run() {", "}"]).unwrap();
    assert!(record.constructors.is_empty());
}

#[test]
fn instantiations_skip_primitives_and_framework_types() {
    let record = extract_class(&[
        "class Foo {",
        "public void Run() {",
        "var a = new Widget();",
        "var b = new List<Gadget>();",
        "var c = new App.Models.Part(1);",
        "var d = new int[3];",
        "var e = new Config {",
        "};",
        "}",
        "}",
    ])
    .unwrap();
    assert_eq!(
        names(&record.instantiations),
        vec!["Widget", "App.Models.Part", "Config"]
    );
}

#[test]
fn instantiation_with_brace_on_next_line() {
    let record = extract_class(&["class Foo {", "var w = new Widget", "{", "};", "}"]).unwrap();
    assert_eq!(names(&record.instantiations), vec!["Widget"]);
}

#[test]
fn static_call_targets() {
    let record = extract_class(&[
        "class Foo {",
        "Logger.Info(\"x\");",
        "this.Service.Call();",
        "String.Join(\",\", xs);",
        "Factory.Create<Foo>();",
        "value.ToString();",
        "}",
    ])
    .unwrap();
    assert_eq!(names(&record.static_call_targets), vec!["Logger", "Factory"]);
}

#[test]
fn per_line_declarations() {
    let record = extract_class(&[
        "public class Order {",
        "private readonly Customer _customer;",
        "public List<OrderLine> Lines {",
        "get;",
        "}",
        "public Order(Customer customer, IClock clock) {",
        "}",
        "public Invoice Bill(Discount discount, ref int count) {",
        "return null;",
        "}",
        "public void Ship() {",
        "}",
        "}",
    ])
    .unwrap();

    assert_eq!(names(&record.field_or_property_types), vec!["Customer", "List"]);

    assert_eq!(record.constructors.len(), 1);
    assert_eq!(names(&record.constructors[0].parameters), vec!["Customer", "IClock"]);

    assert_eq!(record.methods.len(), 2);
    let bill = &record.methods[0];
    assert_eq!(bill.return_type.as_ref().unwrap().base_name, "Invoice");
    assert_eq!(names(&bill.parameters), vec!["Discount", "int"]);
    let ship = &record.methods[1];
    assert!(ship.return_type.is_none());
    assert!(ship.parameters.is_empty());
}

#[test]
fn keywords_are_not_field_types() {
    let record = extract_class(&[
        "class Foo {",
        "return value;",
        "throw error;",
        "public class Nested {",
        "}",
    ])
    .unwrap();
    assert!(record.field_or_property_types.is_empty());
}

#[test]
fn constructor_must_match_class_name() {
    let record = extract_class(&["class Foo {", "public Bar(int x) {", "}", "}"]).unwrap();
    assert!(record.constructors.is_empty());
    assert!(record.methods.is_empty());
}

#[test]
fn parameters_skip_attributes_and_modifiers() {
    let params = parse_parameters(
        "[FromBody] Request request, this IQuery q, Dictionary<string, int> map, out Result r, string s = \"a,b\"",
    );
    assert_eq!(
        names(&params),
        vec!["Request", "IQuery", "Dictionary", "Result", "string"]
    );
    assert_eq!(names(&params[2].children), vec!["string", "int"]);
}

#[test]
fn type_references_follow_resolution_order() {
    let parsed = parse_source(
        "class Foo : Base {\n\
         private Field f;\n\
         public Foo(CtorArg a) { }\n\
         public Result Run(Param p) { Helper.Go(); return new Made(); }\n\
         }",
    );
    let record = &parsed.classes[0];
    let refs: Vec<&str> = record
        .type_references()
        .into_iter()
        .map(|n| n.base_name.as_str())
        .collect();
    assert_eq!(
        refs,
        vec!["Base", "CtorArg", "Result", "Param", "Field", "Made", "Helper"]
    );
}

#[test]
fn parse_source_collects_file_context() {
    let parsed = parse_source(
        "using System;\nusing App.Models;\nnamespace App.Services\n{\n\
         // a service\n\
         public class A { }\n\
         public interface IB { }\n\
         public class C : A { }\n\
         }\n",
    );
    assert_eq!(parsed.namespace, "App.Services");
    assert_eq!(parsed.imports, vec!["System", "App.Models"]);
    let classes: Vec<&str> = parsed.classes.iter().map(|c| c.class_name.as_str()).collect();
    assert_eq!(classes, vec!["A", "C"]);
}

#[test]
fn scan_declarations_finds_names_only() {
    let declarations =
        scan_declarations("namespace App;\nclass Foo { }\n/* class Hidden */\nclass Bar : Foo { }");
    assert_eq!(declarations.namespace, "App");
    assert_eq!(declarations.class_names, vec!["Foo", "Bar"]);
}
