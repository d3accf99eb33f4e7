//! Interactive mode: menu loop, validation and recoverable failures.

use std::process::ExitCode;

use ec2ops_cli::commands::{FAREWELL, Session, interactive, is_interrupt};
use ec2ops_common::{LogCategory, OperationKind};
use serde_json::json;

use crate::helpers::{
    Event, FakeProvider, MemoryAudit, RecordingReporter, ScriptedInput, incorrect_state,
    state_change,
};

#[tokio::test]
async fn test_quit_exits_zero_without_provider_call() {
    let provider = FakeProvider::new();
    let audit = MemoryAudit::new();
    let reporter = RecordingReporter::new();
    let input = ScriptedInput::new(&["7"]);
    let session = Session::new(&provider, &audit, &reporter, &input);

    let code = interactive::run(&session).await.expect("run");

    assert_eq!(code, ExitCode::SUCCESS);
    assert!(provider.calls().is_empty());
    assert_eq!(reporter.events().last(), Some(&Event::Info(FAREWELL.to_string())));
}

#[tokio::test]
async fn test_invalid_choices_are_rejected_and_menu_shown_again() {
    let provider = FakeProvider::new();
    let audit = MemoryAudit::new();
    let reporter = RecordingReporter::new();
    let input = ScriptedInput::new(&["abc", "9", "7"]);
    let session = Session::new(&provider, &audit, &reporter, &input);

    let code = interactive::run(&session).await.expect("run");

    assert_eq!(code, ExitCode::SUCCESS);
    assert!(provider.calls().is_empty());
    let failures = reporter.failures();
    assert_eq!(failures.len(), 2);
    assert!(failures.iter().all(|f| f.starts_with("Invalid Input")));
    assert_eq!(reporter.menus_shown(), 3);
}

#[tokio::test]
async fn test_info_does_not_prompt_for_instance_id() {
    let provider = FakeProvider::new().with(OperationKind::Info, Ok(json!({"Reservations": []})));
    let audit = MemoryAudit::new();
    let reporter = RecordingReporter::new();
    let input = ScriptedInput::new(&["1", "7"]);
    let session = Session::new(&provider, &audit, &reporter, &input);

    interactive::run(&session).await.expect("run");

    assert_eq!(provider.calls(), vec![(OperationKind::Info, None)]);
    assert_eq!(input.prompts().len(), 2);
}

#[tokio::test]
async fn test_reboot_failure_does_not_end_the_loop() {
    let provider = FakeProvider::new()
        .with(OperationKind::Reboot, Err(incorrect_state()))
        .with(
            OperationKind::Start,
            Ok(state_change("StartingInstances", "i-2", "pending")),
        );
    let audit = MemoryAudit::new();
    let reporter = RecordingReporter::new();
    let input = ScriptedInput::new(&["6", "i-1", "4", "i-2", "7"]);
    let session = Session::new(&provider, &audit, &reporter, &input);

    let code = interactive::run(&session).await.expect("run");

    assert_eq!(code, ExitCode::SUCCESS);
    assert!(reporter.failures()[0].starts_with("Cannot reboot instance i-1"));
    assert_eq!(
        provider.calls(),
        vec![
            (OperationKind::Reboot, Some("i-1".to_string())),
            (OperationKind::Start, Some("i-2".to_string()))
        ]
    );
    assert_eq!(audit.entries(LogCategory::Error).len(), 1);
    assert_eq!(audit.entries(LogCategory::InstanceState).len(), 1);
}

#[tokio::test]
async fn test_empty_instance_id_returns_to_menu() {
    let provider = FakeProvider::new();
    let audit = MemoryAudit::new();
    let reporter = RecordingReporter::new();
    let input = ScriptedInput::new(&["5", "", "7"]);
    let session = Session::new(&provider, &audit, &reporter, &input);

    let code = interactive::run(&session).await.expect("run");

    assert_eq!(code, ExitCode::SUCCESS);
    assert!(provider.calls().is_empty());
    assert_eq!(
        reporter.failures(),
        vec!["Invalid Input: an instance ID is required.".to_string()]
    );
    assert_eq!(reporter.menus_shown(), 2);
}

#[tokio::test]
async fn test_end_of_input_acts_as_quit() {
    let provider = FakeProvider::new();
    let audit = MemoryAudit::new();
    let reporter = RecordingReporter::new();
    let input = ScriptedInput::new(&[]);
    let session = Session::new(&provider, &audit, &reporter, &input);

    let code = interactive::run(&session).await.expect("run");

    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(reporter.events().last(), Some(&Event::Info(FAREWELL.to_string())));
}

#[tokio::test]
async fn test_instance_id_is_not_reused_between_operations() {
    let provider = FakeProvider::new().with(
        OperationKind::Stop,
        Ok(state_change("StoppingInstances", "i-1", "stopping")),
    );
    let audit = MemoryAudit::new();
    let reporter = RecordingReporter::new();
    // Second stop gets a blank ID and must not fall back to i-1.
    let input = ScriptedInput::new(&["5", "i-1", "5", " ", "7"]);
    let session = Session::new(&provider, &audit, &reporter, &input);

    interactive::run(&session).await.expect("run");

    assert_eq!(
        provider.calls(),
        vec![(OperationKind::Stop, Some("i-1".to_string()))]
    );
}

#[tokio::test]
async fn test_interrupt_at_instance_prompt_ends_session_without_call() {
    let provider = FakeProvider::new();
    let audit = MemoryAudit::new();
    let reporter = RecordingReporter::new();
    let input = ScriptedInput::interrupted_after(&["4"]);
    let session = Session::new(&provider, &audit, &reporter, &input);

    let err = interactive::run(&session)
        .await
        .expect_err("interrupt ends the session");

    assert!(is_interrupt(&err));
    assert!(provider.calls().is_empty());
    assert!(audit.entries(LogCategory::InstanceState).is_empty());
}

#[test]
fn test_read_failures_are_not_interrupts() {
    let err = anyhow::anyhow!("reading from stdin");
    assert!(!is_interrupt(&err));
    let wrapped = anyhow::Error::from(ec2ops_cli::domain::Interrupted).context("reading choice");
    assert!(is_interrupt(&wrapped));
}
