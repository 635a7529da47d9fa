//! Tests for presentation

use super::*;
use insta::assert_snapshot;

fn suggestion() -> Suggestion {
    Suggestion {
        script: "ls -la".to_string(),
        explanation: "Lists files".to_string(),
        executables: vec!["ls".to_string()],
    }
}

fn render_suggestion(palette: Palette, suggestion: &Suggestion) -> String {
    let mut out = Vec::new();
    present_suggestion(&mut out, &palette, suggestion).unwrap();
    String::from_utf8(out).unwrap()
}

fn render_choices(palette: Palette, policy: DecisionPolicy) -> String {
    let mut out = Vec::new();
    present_choices(&mut out, &palette, &policy).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_plain_suggestion_layout() {
    let output = render_suggestion(Palette::plain(), &suggestion());
    assert_eq!(
        output,
        "\n🤖 Here is your script:\n\nls -la\n--\nRequired commands: ls\nLists files\n\n"
    );
}

#[test]
fn test_suggestion_without_executables_says_none() {
    let mut suggestion = suggestion();
    suggestion.executables.clear();

    let output = render_suggestion(Palette::plain(), &suggestion);
    assert!(output.contains("Required commands: none\n"));
}

#[test]
fn test_suggestion_joins_executables() {
    let mut suggestion = suggestion();
    suggestion.executables = vec!["find".to_string(), "xargs".to_string()];

    let output = render_suggestion(Palette::plain(), &suggestion);
    assert!(output.contains("Required commands: find, xargs\n"));
}

#[test]
fn test_plain_palette_emits_no_escape_codes() {
    let output = render_suggestion(Palette::plain(), &suggestion());
    assert!(!output.contains('\x1b'));
}

#[test]
fn test_color_palette_emits_escape_codes() {
    let output = render_suggestion(Palette::new(true), &suggestion());
    assert!(output.contains('\x1b'));
    assert!(output.contains("ls -la"));
}

#[test]
fn test_palette_is_scoped_to_the_call() {
    let colored = render_suggestion(Palette::new(true), &suggestion());
    let plain = render_suggestion(Palette::plain(), &suggestion());

    assert!(colored.contains('\x1b'));
    assert!(!plain.contains('\x1b'));
}

#[test]
fn test_choices_with_retry() {
    let output = render_choices(Palette::plain(), DecisionPolicy::default());
    assert_snapshot!(output, @"[E]xecute, [R]etry, [S]kip");
}

#[test]
fn test_choices_without_retry() {
    let policy = DecisionPolicy {
        allow_retry: false,
        ..DecisionPolicy::default()
    };
    let output = render_choices(Palette::plain(), policy);
    assert_snapshot!(output, @"[E]xecute, [S]kip");
}

#[test]
fn test_choices_with_exit_dismiss() {
    let policy = DecisionPolicy {
        allow_retry: false,
        dismiss: UserDecision::Exit,
        fallback: UserDecision::Exit,
    };
    let output = render_choices(Palette::plain(), policy);
    assert_snapshot!(output, @"[E]xecute, [Q]uit");
}

#[test]
fn test_prompt_marker() {
    let mut out = Vec::new();
    write_prompt_marker(&mut out, &Palette::plain()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\n🤖 How may I help you? > ");
}
