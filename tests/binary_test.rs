mod common;

use std::process::{Command, Output};

use common::Trees;

fn tmplsync(trees: &Trees, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tmplsync"))
        .arg("--template-dir")
        .arg(&trees.template)
        .arg("--expanded-dir")
        .arg(&trees.expanded)
        .arg("--no-color")
        .args(extra)
        .output()
        .expect("run tmplsync")
}

#[test]
fn test_sync_exits_zero_and_updates_template() {
    let trees = Trees::new();
    trees
        .template_file("greeting.txt", "Hello {{cookiecutter.name}}\n")
        .expanded_file("greeting.txt", "Hello World, welcome!\n")
        .expanded_file("extra.txt", "extra\n");

    let output = tmplsync(&trees, &["--var", "name=World"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("+Hello {{cookiecutter.name}}, welcome!"));
    assert!(!stdout.contains('\u{1b}'));
    assert!(stdout.contains("  extra.txt"));
    assert_eq!(trees.read_template("greeting.txt"), "Hello {{cookiecutter.name}}, welcome!\n");
}

#[test]
fn test_var_without_equals_is_fatal() {
    let trees = Trees::new();
    trees
        .template_file("greeting.txt", "Hello {{cookiecutter.name}}\n")
        .expanded_file("greeting.txt", "Hello World!\n");

    let output = tmplsync(&trees, &["--var", "name"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--var expects NAME=VALUE"));
    assert_eq!(trees.read_template("greeting.txt"), "Hello {{cookiecutter.name}}\n");
}

#[test]
fn test_missing_expanded_dir_is_fatal() {
    let trees = Trees::new();
    let output = Command::new(env!("CARGO_BIN_EXE_tmplsync"))
        .arg("--template-dir")
        .arg(&trees.template)
        .arg("--expanded-dir")
        .arg(trees.expanded.join("missing"))
        .args(["--var", "name=World"])
        .output()
        .expect("run tmplsync");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not a directory"));
}

#[test]
fn test_no_bindings_is_fatal() {
    let trees = Trees::new();
    let output = tmplsync(&trees, &[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_vars_file_with_cli_override() {
    let trees = Trees::new();
    trees
        .template_file("a.txt", "{{cookiecutter.name}} {{cookiecutter.slug}}\n")
        .expanded_file("a.txt", "World calc\n");
    let vars_file = trees.expanded.join("vars.yml");
    std::fs::write(&vars_file, "name: Nobody\nslug: calc\n").unwrap();

    let output = tmplsync(
        &trees,
        &["--vars-file", vars_file.to_str().unwrap(), "--var", "name=World", "--diff-only"],
    );
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    // nothing to change once name=World overrides the file
    assert!(!stdout.contains("--- a/a.txt"));
    assert!(stdout.contains("(Diff-only mode - no files were modified.)"));
}

#[test]
fn test_file_failure_gives_non_zero_exit() {
    let trees = Trees::new();
    trees
        .template_file("bad.txt", "ok\n")
        .expanded_file("bad.txt", b"\xff\xfe not utf-8\n");

    let output = tmplsync(&trees, &["--var", "name=World"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("1 file(s) could not be synchronized."));
}
