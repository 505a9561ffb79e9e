// src/integrations/confirmation.rs
//
// Blocking yes/no gate in front of destructive operations.
// The destructive store call never runs without a `true` answer.

#[cfg_attr(test, mockall::automock)]
pub trait Confirmation: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Adapts any closure into a `Confirmation`
pub struct FnConfirmation<F>(pub F);

impl<F> Confirmation for FnConfirmation<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, message: &str) -> bool {
        (self.0)(message)
    }
}

/// Fixed answer, for scripted or headless sessions
#[derive(Debug, Clone, Copy)]
pub struct FixedConfirmation(pub bool);

impl Confirmation for FixedConfirmation {
    fn confirm(&self, message: &str) -> bool {
        log::debug!("Auto-answering '{}' with {}", message, self.0);
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_confirmation_sees_message() {
        let gate = FnConfirmation(|msg: &str| msg.contains("delete"));
        assert!(gate.confirm("Really delete?"));
        assert!(!gate.confirm("Really clear?"));
    }

    #[test]
    fn test_fixed_confirmation() {
        assert!(FixedConfirmation(true).confirm("?"));
        assert!(!FixedConfirmation(false).confirm("?"));
    }
}
