use param_doc_checker::{ClassMember, check_callable, check_class, match_param_docs};
use param_doc_core::{DiagnosticKind, DocstringStyle, ParamSignature};

#[test]
fn test_fully_documented_sphinx_function_is_clean() {
    let doc = "\
Read a file.

:param str path: file to read
:param mode: open mode
:type mode: str
";
    let sig = ParamSignature::new(&["self", "path", "mode"]);
    assert!(check_callable("Reader.read", Some(doc), &sig).is_empty());
}

#[test]
fn test_fully_documented_google_function_is_clean() {
    let doc = "\
Read a file.

Args:
    path (str): file to read
    mode (str): open mode
";
    let sig = ParamSignature::new(&["path", "mode"]);
    assert!(check_callable("read", Some(doc), &sig).is_empty());
}

#[test]
fn test_fully_documented_numpy_function_is_clean() {
    let doc = "\
Read a file.

Parameters
----------
path : str
    file to read
mode : str
    open mode
";
    let sig = ParamSignature::new(&["path", "mode"]);
    assert!(check_callable("read", Some(doc), &sig).is_empty());
}

#[test]
fn test_missing_docstring_is_never_flagged() {
    let sig = ParamSignature::new(&["a", "b"]);
    assert!(check_callable("f", None, &sig).is_empty());
}

#[test]
fn test_exact_name_match_and_one_extra_name() {
    let sig = ParamSignature::new(&["a", "b"]);

    let exact = ":param a: first\n:param b: second\n:type a: int\n:type b: int\n";
    assert!(check_callable("f", Some(exact), &sig).is_empty());

    let extra = ":param a: first\n:param b: second\n:param ghost: gone\n\
                 :type a: int\n:type b: int\n:type ghost: int\n";
    let diagnostics = check_callable("f", Some(extra), &sig);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::MissingParamDoc);
    assert_eq!(diagnostics[0].names, vec!["ghost"]);
    assert_eq!(diagnostics[1].kind, DiagnosticKind::MissingTypeDoc);
    assert_eq!(diagnostics[1].names, vec!["ghost"]);
}

#[test]
fn test_delegation_phrase_suppresses_missing_names() {
    let doc = "Shorthand wrapper.\n\nFor the other parameters, see :func:`full_version`.\n";
    let sig = ParamSignature::new(&["a", "b", "c"]);
    assert!(check_callable("wrapper", Some(doc), &sig).is_empty());
}

#[test]
fn test_unrecognized_convention_is_tolerated() {
    let doc = "Takes a and b and does things.\n\n@param a the first\n@param b the second\n";
    let (style, docs) = match_param_docs(doc);
    assert_eq!(style, DocstringStyle::None);
    assert!(docs.with_description.is_empty());

    let sig = ParamSignature::new(&["a", "b"]);
    assert!(check_callable("f", Some(doc), &sig).is_empty());
}

#[test]
fn test_sphinx_param_and_bare_type_tag_extraction() {
    let (style, docs) = match_param_docs(":param int x: the x\n:type y: str\n");
    assert_eq!(style, DocstringStyle::Sphinx);
    assert_eq!(docs.with_description, vec!["x"]);
    assert_eq!(docs.with_type, vec!["x", "y"]);
}

#[test]
fn test_continuation_lines_record_name_once() {
    let doc = "\
Parameters
----------
x : int
    a description spanning
    several continuation
    lines
";
    let (style, docs) = match_param_docs(doc);
    assert_eq!(style, DocstringStyle::Numpy);
    assert_eq!(docs.with_description, vec!["x"]);
}

#[test]
fn test_names_after_block_termination_are_not_collected() {
    let doc = "\
Args:
    x: the x

Notes:
    y: looks like an entry but sits outside the block
";
    let (style, docs) = match_param_docs(doc);
    assert_eq!(style, DocstringStyle::Google);
    assert_eq!(docs.with_description, vec!["x"]);
}

#[test]
fn test_tab_indented_body_is_measured_after_expansion() {
    let doc = "Args:\n\tx: the x\n\ty: the y\n";
    let sig = ParamSignature::new(&["x", "y"]);
    let diagnostics = check_callable("f", Some(doc), &sig);
    // Names resolve; only the types are missing.
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::MissingTypeDoc);
}

#[test]
fn test_variadic_parameter_tolerated_for_types() {
    let doc = "\
Combine values.

Args:
    a (int): the base
    b: the increment
";
    let sig = ParamSignature::new(&["a", "b"]).with_vararg("args");
    // `args` is undocumented, which the name check reports; `b` lacks a
    // type and `args` is tolerated as variadic.
    let diagnostics = check_callable("combine", Some(doc), &sig);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::MissingParamDoc);
    assert_eq!(diagnostics[0].names, vec!["args"]);
    assert_eq!(diagnostics[1].kind, DiagnosticKind::MissingTypeDoc);
    assert_eq!(diagnostics[1].names, vec!["b"]);
}

#[test]
fn test_documented_variadic_with_untyped_param() {
    let doc = "\
Combine values.

:param int a: the base
:param b: the increment
:param args: extra values
";
    let sig = ParamSignature::new(&["a", "b"]).with_vararg("args");
    let diagnostics = check_callable("combine", Some(doc), &sig);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::MissingTypeDoc);
    assert_eq!(diagnostics[0].names, vec!["b"]);
}

#[test]
fn test_constructor_checked_against_class_docstring() {
    let class_doc = "A pair.\n\n:param x: the first coordinate\n";
    let members = [
        ClassMember::new("__init__", None, ParamSignature::new(&["self", "x", "y"])),
        ClassMember::new(
            "shift",
            Some(":param dx: offset\n"),
            ParamSignature::new(&["self", "dx"]),
        ),
    ];

    let diagnostics = check_class("geometry.Pair", Some(class_doc), &members);

    let name_diag = diagnostics
        .iter()
        .find(|d| d.kind == DiagnosticKind::MissingParamDoc)
        .expect("constructor name mismatch should be reported");
    assert_eq!(name_diag.callable, "geometry.Pair");
    assert_eq!(name_diag.names, vec!["y"]);

    // `shift` is checked against its own docstring and attributed to the
    // method, not the class.
    assert!(
        diagnostics
            .iter()
            .filter(|d| d.callable == "geometry.Pair.shift")
            .all(|d| d.kind == DiagnosticKind::MissingTypeDoc)
    );
}

#[test]
fn test_dunder_new_also_uses_class_docstring() {
    let class_doc = "Args:\n    x: the only parameter\n";
    let members = [ClassMember::new(
        "__new__",
        None,
        ParamSignature::new(&["cls", "x"]),
    )];
    let diagnostics = check_class("C", Some(class_doc), &members);
    // Name documented, type missing; `cls` tolerated.
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::MissingTypeDoc);
    assert_eq!(diagnostics[0].callable, "C");
    assert_eq!(diagnostics[0].names, vec!["x"]);
}

#[test]
fn test_diagnostics_serialize_for_host_reporting() {
    let sig = ParamSignature::new(&["a", "b"]);
    let doc = ":param a: only one documented\n:type a: int\n";
    let diagnostics = check_callable("m.f", Some(doc), &sig);
    assert_eq!(diagnostics.len(), 2);

    let json = serde_json::to_value(&diagnostics).expect("diagnostics serialize");
    assert_eq!(json[0]["callable"], "m.f");
    assert_eq!(json[0]["names"][0], "b");
}
