//! Boundary resolution.
//!
//! A [`Boundary`] pairs the measured blank-line count of a gap with the
//! contexts classification assigned to it. [`resolve`] combines both with a
//! style into a single [`Target`].
//!
//! The governing rule: a configured floor always wins over a configured
//! ceiling at the same boundary; a ceiling alone clamps; with neither rule
//! active the gap is left exactly as measured. Under composition the larger
//! floor and the smaller ceiling win, keeping resolution well-defined when a
//! boundary belongs to several contexts of the same group.

use crate::classify::ContextSet;
use crate::style::BlankLineStyle;

/// One policy-governed gap, measured and classified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Boundary {
    /// Blank lines currently present in the gap.
    pub current: usize,

    pub contexts: ContextSet,
}

impl Boundary {
    pub fn new(current: usize, contexts: ContextSet) -> Self {
        Boundary { current, contexts }
    }
}

/// The resolved outcome for a boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// No configured rule governs the gap.
    Unchanged,

    /// The gap must contain exactly this many blank lines.
    BlankLines(usize),

    /// The gap is stripped entirely: a configured edge floor whose
    /// precondition failed (nothing precedes the boundary).
    Empty,
}

/// Resolve a boundary against a style.
pub fn resolve(boundary: &Boundary, style: &BlankLineStyle) -> Target {
    let minimums = boundary.contexts.minimums();

    // A configured floor with a failed precondition does not merely go
    // inactive: the boundary sits at the start of the file region, where the
    // gap must vanish outright.
    if minimums
        .iter()
        .any(|m| !m.precondition && style.minimum_for(m.kind).is_some())
    {
        return Target::Empty;
    }

    let floor = minimums
        .iter()
        .filter(|m| m.precondition)
        .filter_map(|m| style.minimum_for(m.kind))
        .max();
    let ceiling = boundary
        .contexts
        .maximums()
        .iter()
        .filter_map(|&k| style.keep_maximum_for(k))
        .min();

    if floor.is_none() && ceiling.is_none() {
        return Target::Unchanged;
    }

    let mut target = boundary.current;
    if let Some(ceiling) = ceiling {
        target = target.min(ceiling);
    }
    if let Some(floor) = floor {
        target = target.max(floor);
    }
    Target::BlankLines(target)
}
