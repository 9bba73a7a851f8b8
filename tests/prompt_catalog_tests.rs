//! Prompt catalog tests
//!
//! Audience parsing is strict; templates are fixed strings composed by
//! prefixing the instruction to the user text.

use toneshift::prompts::{build_user_prompt, Audience, SYSTEM_PROMPT};

#[test]
fn known_audiences_parse() {
    assert_eq!("boss".parse::<Audience>().unwrap(), Audience::Boss);
    assert_eq!("colleague".parse::<Audience>().unwrap(), Audience::Colleague);
    assert_eq!("client".parse::<Audience>().unwrap(), Audience::Client);
}

#[test]
fn unknown_audience_is_rejected() {
    assert!("stranger".parse::<Audience>().is_err());
    assert!("".parse::<Audience>().is_err());
    // Matching is exact: no case folding, no whitespace trimming.
    assert!("Boss".parse::<Audience>().is_err());
    assert!(" boss".parse::<Audience>().is_err());
}

#[test]
fn unknown_audience_error_carries_the_input() {
    let err = "stranger".parse::<Audience>().unwrap_err();
    assert!(err.to_string().contains("stranger"));
}

#[test]
fn each_audience_has_a_distinct_instruction() {
    let boss = Audience::Boss.instruction();
    let colleague = Audience::Colleague.instruction();
    let client = Audience::Client.instruction();

    assert!(!boss.is_empty());
    assert!(!colleague.is_empty());
    assert!(!client.is_empty());
    assert_ne!(boss, colleague);
    assert_ne!(colleague, client);
    assert_ne!(boss, client);
}

#[test]
fn boss_instruction_asks_for_honorifics() {
    assert!(Audience::Boss.instruction().contains("존댓말"));
}

#[test]
fn client_instruction_asks_for_formal_register() {
    assert!(Audience::Client.instruction().contains("고객"));
}

#[test]
fn system_prompt_defines_the_converter_persona() {
    assert!(SYSTEM_PROMPT.contains("업무 말투 변환 전문가"));
}

#[test]
fn user_prompt_prefixes_the_instruction() {
    let text = "이거 오늘까지 해주세요";
    let prompt = build_user_prompt(Audience::Boss, text);

    assert!(prompt.starts_with(Audience::Boss.instruction()));
    assert!(prompt.ends_with(text));
    assert_eq!(
        prompt.len(),
        Audience::Boss.instruction().len() + text.len()
    );
}
