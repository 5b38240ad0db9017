//! Blank-Line Normalization for Java Source Trees
//!
//! Rewrites the vertical whitespace between tree elements so every structural
//! juncture satisfies a [`BlankLineStyle`]: user-configured floors (minimum
//! blank lines to enforce) and ceilings (maximum blank lines to retain),
//! keyed by named context.
//!
//! # Architecture
//!
//! A single pre-order pass composed of four small pieces:
//!
//! 1. **Classification** ([`classify`]): map each element boundary to the
//!    contexts whose rules may govern it, precondition facts resolved.
//! 2. **Measurement** ([`rewrite::blank_lines`]): count the blank lines
//!    currently present in the gap.
//! 3. **Resolution** ([`boundary`]): combine contexts, measurement, and style
//!    into one target per boundary. A floor beats a ceiling at the same
//!    boundary; otherwise the ceiling clamps; with neither, the gap passes
//!    through unchanged.
//! 4. **Rewriting** ([`rewrite`]): apply the target to the whitespace,
//!    preserving all non-blank content verbatim.
//!
//! The pass never parses or prints source text; it consumes and produces
//! [`jv_tree`] trees and is idempotent over its own output.

pub mod boundary;
pub mod classify;
pub mod rewrite;
pub mod style;

mod blank_lines;

pub use blank_lines::normalize_blank_lines;
pub use boundary::{resolve, Boundary, Target};
pub use classify::{ContextSet, KeepMaximumKind, MinimumContext, MinimumKind};
pub use style::{BlankLineStyle, KeepMaximum, Minimum};
