//! Shared test fakes for the application ports.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use ec2ops_cli::application::ports::{
    AuditStore, ComputeProvider, LineSource, Reporter, StatusIndicator,
};
use ec2ops_cli::domain::{Interrupted, LogEntry, ProviderFault, StorageError};
use ec2ops_common::{LogCategory, OperationKind};
use serde_json::{Value, json};

// ── Canned responses ─────────────────────────────────────────────────────────

pub fn state_change(key: &str, id: &str, current: &str) -> Value {
    json!({
        key: [{
            "InstanceId": id,
            "CurrentState": {"Code": 0, "Name": current},
            "PreviousState": {"Code": 16, "Name": "running"}
        }]
    })
}

pub fn monitoring(id: &str, state: &str) -> Value {
    json!({
        "InstanceMonitorings": [{"InstanceId": id, "Monitoring": {"State": state}}]
    })
}

pub fn incorrect_state() -> ProviderFault {
    ProviderFault::IncorrectState {
        message: "The instance 'i-0abc' is not in a state from which it can be rebooted."
            .to_string(),
    }
}

// ── Provider ─────────────────────────────────────────────────────────────────

/// Returns a canned result per operation kind and records every call.
#[derive(Default)]
pub struct FakeProvider {
    results: HashMap<OperationKind, Result<Value, ProviderFault>>,
    calls: Mutex<Vec<(OperationKind, Option<String>)>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, kind: OperationKind, result: Result<Value, ProviderFault>) -> Self {
        self.results.insert(kind, result);
        self
    }

    pub fn calls(&self) -> Vec<(OperationKind, Option<String>)> {
        self.calls.lock().expect("lock").clone()
    }

    fn respond(&self, kind: OperationKind, id: Option<&str>) -> Result<Value, ProviderFault> {
        self.calls
            .lock()
            .expect("lock")
            .push((kind, id.map(str::to_string)));
        self.results
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| Err(ProviderFault::Invocation(format!("{kind} not expected"))))
    }
}

impl ComputeProvider for FakeProvider {
    async fn describe_instances(&self) -> Result<Value, ProviderFault> {
        self.respond(OperationKind::Info, None)
    }
    async fn start_instances(&self, id: &str) -> Result<Value, ProviderFault> {
        self.respond(OperationKind::Start, Some(id))
    }
    async fn stop_instances(&self, id: &str) -> Result<Value, ProviderFault> {
        self.respond(OperationKind::Stop, Some(id))
    }
    async fn reboot_instances(&self, id: &str) -> Result<Value, ProviderFault> {
        self.respond(OperationKind::Reboot, Some(id))
    }
    async fn monitor_instances(&self, id: &str) -> Result<Value, ProviderFault> {
        self.respond(OperationKind::EnableMonitoring, Some(id))
    }
    async fn unmonitor_instances(&self, id: &str) -> Result<Value, ProviderFault> {
        self.respond(OperationKind::DisableMonitoring, Some(id))
    }
}

// ── Audit store ──────────────────────────────────────────────────────────────

/// In-memory audit store, newest entry first. `failing()` makes every write fail.
#[derive(Default)]
pub struct MemoryAudit {
    entries: Mutex<Vec<(LogCategory, LogEntry)>>,
    snapshot: Mutex<Option<Value>>,
    fail: bool,
}

impl MemoryAudit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn entries(&self, category: LogCategory) -> Vec<LogEntry> {
        self.entries
            .lock()
            .expect("lock")
            .iter()
            .filter(|(c, _)| *c == category)
            .map(|(_, e)| e.clone())
            .collect()
    }

    pub fn snapshot(&self) -> Option<Value> {
        self.snapshot.lock().expect("lock").clone()
    }

    fn denied() -> StorageError {
        StorageError::Write {
            path: PathBuf::from("/denied"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        }
    }
}

impl AuditStore for MemoryAudit {
    fn append(&self, category: LogCategory, entry: &LogEntry) -> Result<(), StorageError> {
        if self.fail {
            return Err(Self::denied());
        }
        self.entries
            .lock()
            .expect("lock")
            .insert(0, (category, entry.clone()));
        Ok(())
    }

    fn write_snapshot(&self, inventory: &Value) -> Result<PathBuf, StorageError> {
        if self.fail {
            return Err(Self::denied());
        }
        *self.snapshot.lock().expect("lock") = Some(inventory.clone());
        Ok(PathBuf::from("/out/ec2_info.json"))
    }

    fn location(&self, category: LogCategory) -> String {
        category.file_name().to_string()
    }
}

// ── Input ────────────────────────────────────────────────────────────────────

/// Replays scripted lines; input is closed once they run out, or
/// interrupted when built with `interrupted_after`.
#[derive(Default)]
pub struct ScriptedInput {
    lines: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
    interrupt: bool,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: Mutex::new(lines.iter().map(|l| (*l).to_string()).collect()),
            prompts: Mutex::new(Vec::new()),
            interrupt: false,
        }
    }

    /// Operator presses Ctrl-C at the prompt after `lines`.
    pub fn interrupted_after(lines: &[&str]) -> Self {
        Self {
            interrupt: true,
            ..Self::new(lines)
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("lock").clone()
    }

    pub fn remaining(&self) -> usize {
        self.lines.lock().expect("lock").len()
    }
}

impl LineSource for ScriptedInput {
    async fn read_line(&self, prompt: &str) -> Result<Option<String>> {
        self.prompts.lock().expect("lock").push(prompt.to_string());
        match self.lines.lock().expect("lock").pop_front() {
            None if self.interrupt => Err(Interrupted.into()),
            line => Ok(line),
        }
    }
}

// ── Reporter ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Begin(String),
    Stop,
    Success(String),
    Failure(String),
    Warn(String),
    Info(String),
    Menu,
}

/// Records every reporter call in order.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().expect("lock").clone()
    }

    pub fn failures(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Failure(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Success(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Warn(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn menus_shown(&self) -> usize {
        self.events().iter().filter(|e| **e == Event::Menu).count()
    }

    fn push(&self, event: Event) {
        self.events.lock().expect("lock").push(event);
    }
}

struct RecordingIndicator<'a> {
    reporter: &'a RecordingReporter,
}

impl StatusIndicator for RecordingIndicator<'_> {
    fn stop(&self) {
        self.reporter.push(Event::Stop);
    }
}

impl Reporter for RecordingReporter {
    fn begin(&self, message: &str) -> Box<dyn StatusIndicator + '_> {
        self.push(Event::Begin(message.to_string()));
        Box::new(RecordingIndicator { reporter: self })
    }
    fn success(&self, message: &str) {
        self.push(Event::Success(message.to_string()));
    }
    fn failure(&self, message: &str) {
        self.push(Event::Failure(message.to_string()));
    }
    fn warn(&self, message: &str) {
        self.push(Event::Warn(message.to_string()));
    }
    fn info(&self, message: &str) {
        self.push(Event::Info(message.to_string()));
    }
    fn menu(&self, _entries: &[(usize, &str)]) {
        self.push(Event::Menu);
    }
}
