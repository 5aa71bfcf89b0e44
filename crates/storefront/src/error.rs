use thiserror::Error;

use printmart_core::DomainError;

/// Which listing a selection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Catalog,
    Cart,
}

impl core::fmt::Display for Pane {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Pane::Catalog => f.write_str("catalog"),
            Pane::Cart => f.write_str("cart"),
        }
    }
}

/// Problems reported back to the shopper. None of them end the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    #[error("select a product first")]
    NoProductSelected,

    #[error("select an item in the cart")]
    NoCartItemSelected,

    /// `position` is 1-based, as typed by the shopper.
    #[error("there is no {pane} entry #{position} (the {pane} has {len})")]
    NoSuchEntry {
        pane: Pane,
        position: usize,
        len: usize,
    },

    #[error("`{0}` is not a valid position")]
    InvalidPosition(String),

    #[error("unknown command `{0}` (type `help` for the list)")]
    InvalidCommand(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl StorefrontError {
    /// Translate a 0-based domain range error into the shopper's 1-based terms.
    pub(crate) fn from_domain(pane: Pane, err: DomainError) -> Self {
        match err {
            DomainError::IndexOutOfRange { index, len } => StorefrontError::NoSuchEntry {
                pane,
                position: index + 1,
                len,
            },
            other => StorefrontError::Domain(other),
        }
    }
}
