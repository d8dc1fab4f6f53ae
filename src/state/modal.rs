//! Order Modal State

/// Where a click inside the modal overlay landed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed overlay around the dialog
    Backdrop,
    /// Anything inside the dialog content
    Content,
}

/// Visibility of the order modal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Apply a click; only clicks on the backdrop close the modal
    ///
    /// Returns whether the modal was closed by this click.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        if self.open && target == ClickTarget::Backdrop {
            self.open = false;
            return true;
        }
        false
    }

    /// CSS `display` value for the overlay
    pub fn display(&self) -> &'static str {
        if self.open {
            "flex"
        } else {
            "none"
        }
    }
}
