use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_binary(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_charswap"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn charswap");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input)
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_of(args: &[&str], input: &str) -> String {
    let output = run_binary(args, input.as_bytes());
    assert!(output.status.success(), "exit status {:?}", output.status);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn replaces_until_stop() {
    let out = stdout_of(&[], "hello\nl\nL\naaa\na\nb\ntest\nz\nx\nAaAa\na\n_\nstop\n");
    let results: Vec<&str> = out.lines().filter_map(|l| l.split("New string: ").nth(1)).collect();
    assert_eq!(results, vec!["heLLo", "bbb", "test", "A_A_"]);
    assert!(out.ends_with("Enter string: "));
}

#[test]
fn stop_prints_only_the_first_prompt() {
    assert_eq!(stdout_of(&[], "stop\n"), "Enter string: ");
}

#[test]
fn grading_inputs() {
    let out = stdout_of(&[], "banana\na\no\nstop\n");
    assert!(out.contains("New string: bonono\n"));

    let out = stdout_of(&[], "hello world\nl\nx\nstop\n");
    assert!(out.contains("New string: hexxo worxd\n"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let out = stdout_of(&[], "hello\nl\n");
    assert!(!out.contains("New string:"));
}

#[test]
fn custom_stop_word() {
    let out = stdout_of(&["--plain", "--stop-word", "quit"], "stop\no\n0\nquit\n");
    assert!(out.contains("New string: st0p\n"));
}

#[test]
fn empty_stop_word_fails() {
    let output = run_binary(&["--stop-word", ""], b"");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("stop word must not be empty"));
}

#[test]
fn invalid_utf8_bytes_survive() {
    let output = run_binary(&[], b"a\xffz\na\nb\nstop\n");
    assert!(output.status.success());
    let expected: &[u8] = b"New string: b\xffz\n";
    assert!(output.stdout.windows(expected.len()).any(|w| w == expected));
}

#[test]
fn no_break_space_can_be_replaced() {
    let out = stdout_of(&[], "a\u{a0}b\n\u{a0}\n_\nstop\n");
    assert!(out.contains("New string: a_b\n"));
    assert!(out.ends_with("Enter string: "));
}
