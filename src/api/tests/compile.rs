use crate::*;

#[test]
fn test_compile_valid_program() {
    let source = "n = 0\nwhile n < 3 {\n    n = n + 1\n}\nprint(n)\nprintflush(message1)\n";
    let listing = compile(source, "count.mnd").unwrap();
    insta::assert_snapshot!(listing, @r###"
    set tmp0 0
    set n tmp0
    label label0
    set tmp1 3
    op lessThan tmp2 n tmp1
    jump label1 notEqual tmp2 true
    set tmp3 1
    op add tmp4 n tmp3
    set n tmp4
    jump label0 always
    label label1
    print n
    printflush message1
    end
    "###);
}

#[test]
fn test_listing_ends_with_newline() {
    let listing = compile("x = 1", "x.mnd").unwrap();
    assert_eq!(listing, "set tmp0 1\nset x tmp0\nend\n");
}

#[test]
fn test_empty_source_is_just_end() {
    assert_eq!(compile("", "empty.mnd").unwrap(), "end\n");
    assert_eq!(compile("// only a comment\n", "empty.mnd").unwrap(), "end\n");
}

#[test]
fn test_emit_end_off() {
    let options = CompileOptions { emit_end: false };
    let listing = compile_with_options("idle()", "idle.mnd", &options).unwrap();
    assert_eq!(listing, "ucontrol idle\n");
}

#[test]
fn test_compile_to_instructions() {
    let instructions =
        compile_to_instructions("x = rand(10)", "r.mnd", &CompileOptions::default()).unwrap();
    let opcodes: Vec<_> = instructions.iter().map(|i| i.opcode.as_str()).collect();
    assert_eq!(opcodes, vec!["set", "op", "set", "end"]);
}

#[test]
fn test_unit_control_program() {
    let source = r#"
@unit = ubind(@poly)
if @unit.@totalItems < @unit.@itemCapacity {
    approach(core.x, core.y, 5)
    mine(ore.x, ore.y)
} else {
    itemDrop(core, @unit.@totalItems)
}
"#;
    let listing = compile(source, "miner.mnd").unwrap();
    assert!(listing.contains("ubind @poly\n"));
    assert!(listing.contains("sensor tmp0 @unit @totalItems\n"));
    assert!(listing.contains("op lessThan tmp2 tmp0 tmp1\n"));
    assert!(listing.contains("ucontrol approach tmp3 tmp4 tmp5\n"));
    assert!(listing.contains("ucontrol itemDrop core tmp8\n"));
    assert!(listing.ends_with("end\n"));
}

#[test]
fn test_heap_and_control_program() {
    let source = "cell1[0] = cell1[0] + 1\nswitch1.enabled = false";
    let listing = compile(source, "mem.mnd").unwrap();
    insta::assert_snapshot!(listing, @r###"
    set tmp0 0
    set tmp1 0
    read tmp2 cell1 tmp1
    set tmp3 1
    op add tmp4 tmp2 tmp3
    write tmp4 cell1 tmp0
    control enabled switch1 false
    end
    "###);
}

#[test]
fn test_case_program() {
    let source = "r = case n { when 1 { \"one\" } else { \"other\" } }\nprint(r)";
    let listing = compile(source, "case.mnd").unwrap();
    insta::assert_snapshot!(listing, @r###"
    set tmp0 1
    jump label0 notEqual n tmp0
    set tmp1 "one"
    set tmp3 tmp1
    jump label1 always
    label label0
    set tmp2 "other"
    set tmp3 tmp2
    label label1
    set r tmp3
    print r
    end
    "###);
}

#[test]
fn test_parse_error_is_reported() {
    let errors = compile("x = (1 + ", "bad.mnd").unwrap_err();
    assert!(!errors.is_empty());
    assert!(errors[0].span.is_some());
}

#[test]
fn test_lex_error_is_reported() {
    let errors = compile("x = 1 $", "bad.mnd").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("unexpected character"));
}

#[test]
fn test_generate_error_is_unlocated() {
    let errors = compile("x = a % 2", "mod.mnd").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "unsupported binary operator \"%\"");
    assert_eq!(errors[0].span, None);
}

#[test]
fn test_unknown_function_fails() {
    let errors = compile("boost(1, true)", "b.mnd").unwrap_err();
    assert!(errors[0].message.contains("unsupported function call \"boost\""));
}

#[test]
fn test_check_accepts_and_rejects() {
    assert!(check("print(\"hi\")", "ok.mnd").is_ok());
    assert!(check("if c { }", "empty_branch.mnd").is_err());
}

#[test]
fn test_parse_returns_tree() {
    let node = parse("x = 1", "p.mnd").unwrap();
    assert_eq!(node, ast::Node::assign("x", ast::Node::num("1")));
}

#[test]
fn test_compile_project_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.mnd");
    std::fs::write(&path, "print(42)\n").unwrap();
    let listing = compile_project(&path).unwrap();
    assert_eq!(listing, "set tmp0 42\nprint tmp0\nend\n");
}

#[test]
fn test_compile_project_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let errors = compile_project(&dir.path().join("nope.mnd")).unwrap_err();
    assert!(errors[0].message.contains("cannot read"));
}
