use std::fmt;

use crate::{Event, EventId};

/// A payload-free event kind.
///
/// Callbacks bound to `Molecule` take no arguments. The only field is the
/// occurrence id, which shows up in logs but never reaches the closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Molecule {
    id: EventId,
}

impl Molecule {
    /// Create a new occurrence with a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self { id: EventId::new() }
    }

    /// Create an occurrence with a known id.
    pub fn with_id(id: EventId) -> Self {
        Self { id }
    }

    #[inline]
    pub fn id(&self) -> EventId {
        self.id
    }
}

impl Event for Molecule {
    const KIND: &'static str = "molecule";
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ id: {} }}", Self::KIND, self.id)
    }
}
