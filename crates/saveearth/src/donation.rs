//! The donation submission flow.
//!
//! Submission is modelled as a small state machine instead of ad-hoc view
//! flags: `Editing` shows the form, `Pending` shows the transient thank-you
//! panel. The view layer decides *when* to acknowledge (today: a fixed
//! delay), and how to tell the user (today: a browser alert behind the
//! [`Notify`] trait), so a real backend call could replace either without
//! touching the states.

use std::time::Duration;

use thiserror::Error;

/// Confirmation message raised once per completed donation.
pub const THANK_YOU: &str = "Thank you for supporting our planet! 🌍💚";

/// How long the thank-you panel stays up before the dialog closes itself.
pub const ACK_DELAY: Duration = Duration::from_secs(2);

/// Delivers a user-facing notice outside the dialog.
pub trait Notify {
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// The form is shown and accepts input.
    #[default]
    Editing,
    /// The donation was accepted; the thank-you panel is shown while the
    /// dialog waits to close itself.
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("donation amount is required")]
    MissingAmount,
    #[error("a donation is already being processed")]
    AlreadyPending,
}

/// Form state for the donation dialog.
///
/// Only the amount is mirrored here; name and email live in the browser's
/// own input state and are checked by its native validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationForm {
    amount: String,
    state: SubmitState,
}

impl DonationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmitState::Pending
    }

    /// Accepts the form, moving to `Pending`.
    ///
    /// The amount check backstops the `required` attribute on the input;
    /// a blank amount never reaches `Pending`.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if self.is_pending() {
            return Err(SubmitError::AlreadyPending);
        }
        if self.amount.trim().is_empty() {
            return Err(SubmitError::MissingAmount);
        }
        self.state = SubmitState::Pending;
        Ok(())
    }

    /// Completes a pending donation: clears the amount, returns to
    /// `Editing`, and raises the thank-you notice exactly once.
    ///
    /// Does nothing unless a donation is pending.
    pub fn acknowledge(&mut self, notifier: &impl Notify) {
        if !self.is_pending() {
            return;
        }
        self.amount.clear();
        self.state = SubmitState::Editing;
        notifier.notify(THANK_YOU);
    }

    /// Manual close: discards whatever was entered without notifying.
    pub fn cancel(&mut self) {
        self.amount.clear();
        self.state = SubmitState::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        messages: RefCell<Vec<String>>,
    }

    impl Notify for Recorder {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_owned());
        }
    }

    #[test]
    fn submit_requires_an_amount() {
        let mut form = DonationForm::new();
        assert_eq!(form.submit(), Err(SubmitError::MissingAmount));
        assert_eq!(form.state(), SubmitState::Editing);

        form.set_amount("   ");
        assert_eq!(form.submit(), Err(SubmitError::MissingAmount));
        assert_eq!(form.state(), SubmitState::Editing);
    }

    #[test]
    fn submit_moves_to_pending_once() {
        let mut form = DonationForm::new();
        form.set_amount("25");
        assert_eq!(form.submit(), Ok(()));
        assert!(form.is_pending());
        assert_eq!(form.submit(), Err(SubmitError::AlreadyPending));
    }

    #[test]
    fn acknowledge_resets_and_notifies_exactly_once() {
        let recorder = Recorder::default();
        let mut form = DonationForm::new();
        form.set_amount("25");
        form.submit().unwrap();

        form.acknowledge(&recorder);
        assert_eq!(form.state(), SubmitState::Editing);
        assert_eq!(form.amount(), "");
        assert_eq!(recorder.messages.borrow().as_slice(), [THANK_YOU]);

        // A second acknowledge has nothing to complete.
        form.acknowledge(&recorder);
        assert_eq!(recorder.messages.borrow().len(), 1);
    }

    #[test]
    fn acknowledge_is_a_no_op_while_editing() {
        let recorder = Recorder::default();
        let mut form = DonationForm::new();
        form.set_amount("10");
        form.acknowledge(&recorder);
        assert_eq!(form.amount(), "10");
        assert!(recorder.messages.borrow().is_empty());
    }

    #[test]
    fn cancel_discards_without_notifying() {
        let mut form = DonationForm::new();
        form.set_amount("100");
        form.submit().unwrap();

        form.cancel();
        assert_eq!(form.state(), SubmitState::Editing);
        assert_eq!(form.amount(), "");
    }
}
