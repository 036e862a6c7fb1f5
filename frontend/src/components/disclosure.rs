use std::fmt;

use crate::components::icons::Icon;

/// Open/closed state of a collapsible panel such as the mobile menu.
///
/// A fresh mount always starts [`Disclosure::Closed`]; nothing is persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn is_open(self) -> bool {
        self == Disclosure::Open
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Disclosure::Closed => Disclosure::Open,
            Disclosure::Open => Disclosure::Closed,
        }
    }

    /// Used when a link inside the panel is followed.
    #[must_use]
    pub fn close(self) -> Self {
        Disclosure::Closed
    }

    /// Label announced for the trigger button.
    pub fn trigger_label(self) -> &'static str {
        match self {
            Disclosure::Closed => "Open menu",
            Disclosure::Open => "Close menu",
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }

    /// Glyph on the trigger: the action a click will perform.
    pub fn icon(self) -> Icon {
        match self {
            Disclosure::Closed => Icon::Menu,
            Disclosure::Open => Icon::Close,
        }
    }
}

impl fmt::Display for Disclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disclosure::Closed => write!(f, "closed"),
            Disclosure::Open => write!(f, "open"),
        }
    }
}
