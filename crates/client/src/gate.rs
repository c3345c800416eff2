//! Synchronous yes/no confirmation asked before destructive operations.

/// Answers "are you sure?" for the caller.
pub trait ConfirmGate {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> ConfirmGate for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Fixed answer, handy for scripted flows and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl ConfirmGate for Answer {
    fn confirm(&mut self, _prompt: &str) -> bool {
        *self == Answer::Yes
    }
}
