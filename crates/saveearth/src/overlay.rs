//! Which dialog sits above the page.
//!
//! The root owns a single [`Overlay`] value rather than one open flag per
//! dialog, so the donation form and the card-detail viewer are mutually
//! exclusive by construction and stacking order never needs a rule.

/// Payload shown by the card-detail dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardContent {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    /// No dialog is open.
    #[default]
    Closed,
    /// The donation form is open.
    Donation,
    /// The card-detail viewer is open with the given content.
    Detail(CardContent),
}

impl Overlay {
    pub fn is_closed(&self) -> bool {
        matches!(self, Overlay::Closed)
    }

    pub fn is_donation(&self) -> bool {
        matches!(self, Overlay::Donation)
    }

    /// The card content on display, when the detail viewer is open.
    pub fn detail(&self) -> Option<CardContent> {
        match self {
            Overlay::Detail(content) => Some(*content),
            _ => None,
        }
    }

    pub fn dismiss(&mut self) {
        *self = Overlay::Closed;
    }
}
