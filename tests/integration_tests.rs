use pepon::{
    parse_lines, parse_str, to_string, to_string_with_style, CommentStyle, ContainerKind, Error,
    PeponFile, Quotes, Scalar, TypeTag,
};

#[test]
fn test_two_value_group() {
    let lines = ["[G]", "a : int = 1", "b : string = \"hi\""];
    let doc = parse_lines(&lines).unwrap();

    assert_eq!(doc.len(), 1);
    let group = doc.group("G").unwrap();
    assert_eq!(group.values().len(), 2);

    let a = group.get("a").unwrap().as_scalar().unwrap();
    assert_eq!(a, &Scalar::Int(1));

    let b = group.get("b").unwrap().as_scalar().unwrap();
    assert_eq!(b, &Scalar::Str("hi".to_string()));
}

#[test]
fn test_single_line_container() {
    let doc = parse_lines(&["[G]", "v : vector<int> = { 1, 2, 3 }"]).unwrap();

    let v = doc.group("G").unwrap().get("v").unwrap();
    assert_eq!(v.container_kind(), Some(ContainerKind::Vector));
    assert_eq!(v.type_tag(), TypeTag::Int);

    let elements: Vec<i32> = v
        .as_elements()
        .unwrap()
        .iter()
        .filter_map(Scalar::as_i32)
        .collect();
    assert_eq!(elements, vec![1, 2, 3]);
}

#[test]
fn test_whitespace_insensitivity() {
    let forms = ["a:int=1", "a : int = 1", "  a\t:  int =1 "];
    let parsed: Vec<PeponFile> = forms
        .iter()
        .map(|form| parse_lines(&["[G]", form]).unwrap())
        .collect();

    for doc in &parsed[1..] {
        assert_eq!(doc.group("G").unwrap(), parsed[0].group("G").unwrap());
    }
    assert_eq!(
        parsed[0].group("G").unwrap().get("a").unwrap().as_scalar(),
        Some(&Scalar::Int(1))
    );
}

#[test]
fn test_case_insensitive_annotations() {
    let upper = parse_lines(&["[G]", "v : vEctOr<inT> = { 1 }"]).unwrap();
    let lower = parse_lines(&["[G]", "v : vector<int> = { 1 }"]).unwrap();
    assert_eq!(upper.group("G").unwrap(), lower.group("G").unwrap());
}

#[test]
fn test_multi_line_container_matches_single_line() {
    let multi = parse_lines(&[
        "[G]",
        "d : deque<uint> = { 10, 20,",
        "                    30, 40,",
        "                    50, 60 }",
    ])
    .unwrap();
    let single = parse_lines(&["[G]", "d : deque<uint> = { 10, 20, 30, 40, 50, 60 }"]).unwrap();

    assert_eq!(multi.group("G").unwrap(), single.group("G").unwrap());
}

#[test]
fn test_multi_line_string_preserves_line_breaks() {
    let doc = parse_lines(&[
        "[G]",
        "e : string = \"This is a very,",
        "very long",
        "string",
        "\"",
    ])
    .unwrap();

    let e = doc.group("G").unwrap().get("e").unwrap().as_scalar().unwrap();
    assert_eq!(e.as_str(), Some("This is a very,\nvery long\nstring\n"));
}

#[test]
fn test_comment_attachment_across_dialects() {
    let doc = parse_lines(&[
        "// first",
        "-- second",
        "# third",
        "[Commented]",
        "a : int = 1",
    ])
    .unwrap();

    let comments = doc.group("Commented").unwrap().comments();
    assert_eq!(comments, ["first", "second", "third"]);
}

#[test]
fn test_comments_between_values_belong_to_the_next_group() {
    let doc = parse_lines(&[
        "[First]",
        "a : int = 1",
        "// stranded note",
        "b : int = 2",
        "[Second]",
    ])
    .unwrap();

    assert!(doc.group("First").unwrap().comments().is_empty());
    assert_eq!(doc.group("Second").unwrap().comments(), ["stranded note"]);
}

#[test]
fn test_unclosed_group_bracket_fails() {
    let err = parse_lines(&["[Group"]).unwrap_err();
    assert!(matches!(err, Error::Syntax { line: 0, .. }), "{err}");
}

#[test]
fn test_assignment_without_colon_fails() {
    let err = parse_lines(&["[G]", "a int = 1"]).unwrap_err();
    assert!(matches!(err, Error::Syntax { line: 1, .. }), "{err}");
}

#[test]
fn test_assignment_before_any_group_fails() {
    let err = parse_lines(&["a : int = 1"]).unwrap_err();
    assert!(err.to_string().contains("[Group]"), "{err}");
}

#[test]
fn test_vector_of_bool_fails() {
    let err = parse_lines(&["[G]", "a : vector<bool> = { true }"]).unwrap_err();
    assert_eq!(err, Error::UnsupportedContainer);

    // The sequential kinds take booleans
    let doc = parse_lines(&["[G]", "a : list<bool> = { true, false }"]).unwrap();
    assert_eq!(
        doc.group("G").unwrap().get("a").unwrap().container_kind(),
        Some(ContainerKind::List)
    );
}

#[test]
fn test_dangling_closing_brace_fails() {
    let err = parse_lines(&["[G]", "a : vector<int> = 1, 2 }"]).unwrap_err();
    assert!(matches!(err, Error::Syntax { line: 1, .. }), "{err}");
}

#[test]
fn test_duplicate_group_fails() {
    let err = parse_lines(&["[G]", "[Other]", "[G]"]).unwrap_err();
    assert_eq!(err, Error::DuplicateGroup { name: "G".into() });
}

#[test]
fn test_unknown_scalar_type_fails() {
    let err = parse_lines(&["[G]", "a : i64 = 1"]).unwrap_err();
    assert_eq!(err, Error::UnknownType { name: "a".into() });
}

#[test]
fn test_unknown_container_annotation_fails() {
    for line in [
        "a : vector = { 1 }",
        "a : tuple<int> = { 1 }",
        "a : vector<i64> = { 1 }",
    ] {
        let err = parse_lines(&["[G]", line]).unwrap_err();
        assert!(
            matches!(err, Error::BadContainerAnnotation { .. }),
            "{line}: {err}"
        );
    }
}

#[test]
fn test_quotes_on_non_string_declaration_fail() {
    let err = parse_lines(&["[G]", "a : int = \"1\""]).unwrap_err();
    assert!(err.to_string().contains("only for strings"), "{err}");

    // Same rule when only the opening quote is present
    let err = parse_lines(&["[G]", "a : int = \"1"]).unwrap_err();
    assert!(err.to_string().contains("only for strings"), "{err}");
}

#[test]
fn test_group_lookup_by_name() {
    let doc = parse_lines(&["[Video]", "fps : uint = 60"]).unwrap();

    assert!(doc.group("Video").is_ok());
    assert_eq!(
        doc.group("Audio").unwrap_err(),
        Error::GroupNotFound {
            name: "Audio".into()
        }
    );
}

#[test]
fn test_full_document_walkthrough() {
    // The kind of document a real config file looks like: mixed comment
    // dialects, hostile spacing, multi-line values, blank separators.
    let lines = [
        "// Hello, this is a nice C++ style comment",
        "# And this is a nice Python style comment",
        "[My first group]",
        "a : int = 1",
        "b: string=\"Hello world!\"",
        "   EVIL :   vEctOr  <   inT         >   =   {      1,      2,3}",
        "",
        "d:deque<uint> = { 10, 20,",
        "                  30, 40,",
        "                  50, 60 }",
        "",
        " e : string = \"This is a very,",
        "              very long",
        "              string",
        "\"",
        "",
    ];

    let doc = parse_lines(&lines).unwrap();
    let group = doc.group("My first group").unwrap();

    assert_eq!(
        group.comments(),
        [
            "Hello, this is a nice C++ style comment",
            "And this is a nice Python style comment"
        ]
    );

    let names: Vec<&str> = group.values().iter().map(|v| v.name()).collect();
    assert_eq!(names, vec!["a", "b", "EVIL", "d", "e"]);

    let evil: Vec<i32> = group
        .get("EVIL")
        .unwrap()
        .as_elements()
        .unwrap()
        .iter()
        .filter_map(Scalar::as_i32)
        .collect();
    assert_eq!(evil, vec![1, 2, 3]);

    let d: Vec<u32> = group
        .get("d")
        .unwrap()
        .as_elements()
        .unwrap()
        .iter()
        .filter_map(Scalar::as_u32)
        .collect();
    assert_eq!(d, vec![10, 20, 30, 40, 50, 60]);

    let e = group.get("e").unwrap().as_scalar().unwrap();
    assert_eq!(e.as_str(), Some("This is a very,\nvery long\nstring\n"));
}

#[test]
fn test_round_trip_without_quoting() {
    let mut doc = parse_lines(&[
        "// knobs",
        "[Tuning]",
        "retries : int = 3",
        "workers : uint = 8",
        "verbose : bool = false",
        "rate : float = 0.5",
        "precision : double = 0.001",
        "label : string = \"run one\"",
        "steps : vector<int> = { 1, 2, 3 }",
        "[Extra]",
        "names : list<string> = { alpha, beta }",
    ])
    .unwrap();
    doc.use_quotation(Quotes::disabled());

    let text = to_string(&doc);
    let mut doc_back = parse_str(&text).unwrap();
    doc_back.use_quotation(Quotes::disabled());

    assert_eq!(doc_back, doc);
    // A second pass is textually stable
    assert_eq!(to_string(&doc_back), text);
}

#[test]
fn test_comment_dialect_selection_when_printing() {
    let mut doc = parse_lines(&["// note", "[G]", "a : int = 1"]).unwrap();
    doc.use_quotation(Quotes::disabled());

    assert_eq!(to_string(&doc), "// note\n[G]\na : int = 1\n");
    assert_eq!(
        to_string_with_style(&doc, CommentStyle::Lua),
        "-- note\n[G]\na : int = 1\n"
    );
    assert_eq!(
        to_string_with_style(&doc, CommentStyle::Python),
        "# note\n[G]\na : int = 1\n"
    );
}

#[test]
fn test_export_to_json() {
    let doc = parse_lines(&[
        "[Server]",
        "port : uint = 8080",
        "secure : bool = true",
        "hosts : vector<string> = { 'alpha', 'beta' }",
    ])
    .unwrap();

    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "Server": {
                "port": 8080,
                "secure": true,
                "hosts": ["alpha", "beta"]
            }
        })
    );
}
