use std::path::Path;

use mindcode::project::{Project, MANIFEST_NAME};
use mindcode::{compile, compile_project, CompileOptions};

/// Helper: write a program into a temp dir and compile it from disk.
fn compile_test_program(dir: &Path, name: &str, source: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, source).expect("write temp program");
    compile_project(&path).unwrap_or_else(|errs| {
        panic!(
            "{} should compile, got {} errors: {:?}",
            name,
            errs.len(),
            errs.iter().map(|e| &e.message).collect::<Vec<_>>()
        );
    })
}

fn lines(listing: &str) -> Vec<&str> {
    listing.lines().collect()
}

// ── Whole programs from source ──

#[test]
fn test_assignment_program() {
    assert_eq!(lines(&compile("x = 5", "a.mnd").unwrap()), ["set tmp0 5", "set x tmp0", "end"]);
}

#[test]
fn test_binary_program() {
    assert_eq!(
        lines(&compile("1 + 2", "b.mnd").unwrap()),
        ["set tmp0 1", "set tmp1 2", "op add tmp2 tmp0 tmp1", "end"]
    );
}

#[test]
fn test_conditional_program() {
    assert_eq!(
        lines(&compile("if a { 1 } else { 0 }", "c.mnd").unwrap()),
        [
            "jump label0 notEqual a true",
            "set tmp0 1",
            "set tmp2 tmp0",
            "jump label1 always",
            "label label0",
            "set tmp1 0",
            "set tmp2 tmp1",
            "label label1",
            "end",
        ]
    );
}

#[test]
fn test_print_program() {
    assert_eq!(
        lines(&compile("print(\"hi\")", "d.mnd").unwrap()),
        ["set tmp0 \"hi\"", "print tmp0", "end"]
    );
}

#[test]
fn test_unsupported_call_names_function() {
    let errs = compile("bogus()", "e.mnd").unwrap_err();
    assert_eq!(errs.len(), 1);
    assert!(errs[0].message.contains("\"bogus\""));
}

#[test]
fn test_unsupported_operator_names_operator() {
    let errs = compile("1 % 2", "f.mnd").unwrap_err();
    assert!(errs[0].message.contains("\"%\""));
}

#[test]
fn test_string_with_quotes_survives_round_trip() {
    let listing = compile(r#"print("say \"go\"")"#, "q.mnd").unwrap();
    assert_eq!(lines(&listing)[0], r#"set tmp0 "say \"go\"""#);
}

// ── Realistic scripts ──

#[test]
fn test_sorter_script() {
    let dir = tempfile::tempdir().unwrap();
    let listing = compile_test_program(
        dir.path(),
        "sorter.mnd",
        r#"// keep the core stocked
n = getlink(0)
while n != null {
    count = n.@copper
    if count > 100 {
        n.enabled = false
    } else {
        n.enabled = true
    }
    print("copper: ", count)
    printflush(message1)
    n = null
}
"#,
    );
    let l = lines(&listing);
    assert_eq!(l[0], "set tmp0 0");
    assert_eq!(l[1], "getlink tmp1 tmp0");
    assert_eq!(l[2], "set n tmp1");
    assert!(l.contains(&"op notEqual tmp2 n null"));
    assert!(l.contains(&"sensor tmp3 n @copper"));
    assert!(l.contains(&"control enabled n false"));
    assert!(l.contains(&"control enabled n true"));
    assert!(l.contains(&"printflush message1"));
    assert_eq!(*l.last().unwrap(), "end");
    assert_eq!(l.iter().filter(|s| **s == "end").count(), 1);
}

#[test]
fn test_every_label_is_defined_once_and_targeted() {
    let source = r#"
i = 0
while i < 10 {
    r = case i {
        when 1 { "one" }
        when 2 { if flag { "two" } else { "deux" } }
        else { "many" }
    }
    i = i + 1
}
"#;
    let listing = compile(source, "labels.mnd").unwrap();
    let l = lines(&listing);
    let defined: Vec<&str> = l
        .iter()
        .filter_map(|s| s.strip_prefix("label "))
        .collect();
    let mut unique = defined.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), defined.len(), "duplicate label in {:?}", defined);
    for line in &l {
        if let Some(rest) = line.strip_prefix("jump ") {
            let target = rest.split(' ').next().unwrap();
            assert!(defined.contains(&target), "jump to undefined {}", target);
        }
    }
}

#[test]
fn test_independent_compiles_number_from_zero() {
    let first = compile("x = 1 + 2", "one.mnd").unwrap();
    let second = compile("x = 1 + 2", "two.mnd").unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with("set tmp0 1\n"));
}

#[test]
fn test_concurrent_compiles_are_independent() {
    let source = "while a { b = if c { rand(3) } else { @unit.@x } }";
    let expected = compile(source, "t.mnd").unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || compile(source, "t.mnd").unwrap()))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn test_long_script_compiles_on_small_stack() {
    let handle = std::thread::Builder::new()
        .stack_size(2 << 20)
        .spawn(|| {
            let source: String = (0..5000).map(|i| format!("print({})\n", i)).collect();
            compile(&source, "long.mnd").unwrap()
        })
        .unwrap();
    let listing = handle.join().unwrap();
    let out = lines(&listing);

    assert_eq!(out.len(), 2 * 5000 + 1);
    assert_eq!(out[..2], ["set tmp0 0", "print tmp0"]);
    assert_eq!(out[9998..], ["set tmp4999 4999", "print tmp4999", "end"]);
}

#[test]
fn test_no_end_option() {
    let options = CompileOptions { emit_end: false };
    let listing = mindcode::compile_with_options("stop()", "s.mnd", &options).unwrap();
    assert_eq!(listing, "ucontrol stop\n");
}

// ── Projects ──

#[test]
fn test_project_entry_compiles() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("src")).unwrap();
    std::fs::write(
        dir.path().join(MANIFEST_NAME),
        "[project]\nname = \"flagger\"\nentry = \"src/flag.mnd\"\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("src/flag.mnd"), "flag(7)\n").unwrap();

    let project = Project::load(&dir.path().join(MANIFEST_NAME)).unwrap();
    assert!(project.output.ends_with("flagger.mlog"));
    let listing = compile_project(&project.entry).unwrap();
    assert_eq!(lines(&listing), ["set tmp0 7", "ucontrol flag tmp0", "end"]);
}
