//! User-facing capabilities injected into resource managers.

use dialoguer::Confirm as ConfirmPrompt;

/// Asks the user to approve a destructive action.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Approves everything. Used for `--yes` and scripted runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Interactive yes/no prompt on the controlling terminal.
///
/// Defaults to "no". A prompt that cannot be shown (no terminal, input
/// closed) also counts as "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        match ConfirmPrompt::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "Confirmation prompt unavailable, declining");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assume_yes_always_confirms() {
        assert!(AssumeYes.confirm("Delete everything?"));
    }
}
