//! Interactive menu model and input validation.

use ec2ops_common::OperationKind;

use crate::domain::error::InputError;

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(OperationKind),
    Quit,
}

/// Menu entries in display order; numbering starts at 1.
pub const MENU_ITEMS: [MenuChoice; 7] = [
    MenuChoice::Run(OperationKind::Info),
    MenuChoice::Run(OperationKind::EnableMonitoring),
    MenuChoice::Run(OperationKind::DisableMonitoring),
    MenuChoice::Run(OperationKind::Start),
    MenuChoice::Run(OperationKind::Stop),
    MenuChoice::Run(OperationKind::Reboot),
    MenuChoice::Quit,
];

impl MenuChoice {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Run(kind) => kind.label(),
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Numbered menu lines, e.g. `(1, "Get EC2 information")`.
#[must_use]
pub fn menu_entries() -> Vec<(usize, &'static str)> {
    MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| (i + 1, item.label()))
        .collect()
}

/// Parse one line of menu input.
///
/// # Errors
///
/// Returns `InputError::InvalidChoice` for anything other than 1–7.
pub fn parse_choice(input: &str) -> Result<MenuChoice, InputError> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| MENU_ITEMS.get(i).copied())
        .ok_or_else(|| InputError::InvalidChoice(trimmed.to_string()))
}

/// Validate an instance ID typed at the prompt.
///
/// # Errors
///
/// Returns `InputError::EmptyInstanceId` when nothing but whitespace was entered.
pub fn validate_instance_id(input: &str) -> Result<String, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyInstanceId);
    }
    Ok(trimmed.to_string())
}
