//! Whitespace surgery.
//!
//! Pure string operations on the whitespace of a gap. A run of whitespace
//! holding `n >= 1` newlines represents `n - 1` blank lines; a run with no
//! newline is an inline gap with zero blank lines.
//!
//! Rewrites preserve everything they can: trimming drops excess newlines from
//! the front of the run (keeping the indentation text of the surviving
//! lines), growing prepends bare newlines. A ceiling never turns an inline
//! gap into a line break; a floor applied to an inline gap breaks the line
//! first, then adds its blank lines.

use crate::boundary::Target;

/// Blank lines represented by a whitespace run.
pub fn blank_lines(whitespace: &str) -> usize {
    newlines(whitespace).saturating_sub(1)
}

/// Rewrite a whitespace run to contain exactly `target` blank lines.
///
/// Returns the input unchanged when it already satisfies the target, which
/// makes repeated application a fixed point.
pub fn apply_blank_lines(whitespace: &str, target: usize) -> String {
    let newlines = newlines(whitespace);
    let current = newlines.saturating_sub(1);

    if current > target {
        // Keep the last `target + 1` newlines and everything between them.
        let drop = newlines - (target + 1);
        match nth_newline(whitespace, drop) {
            Some(keep_from) => whitespace[keep_from..].to_string(),
            None => whitespace.to_string(),
        }
    } else if current < target {
        // An inline gap needs `target + 1` newlines to show `target` blanks.
        let add = (target + 1) - newlines;
        let mut grown = String::with_capacity(whitespace.len() + add);
        for _ in 0..add {
            grown.push('\n');
        }
        grown.push_str(whitespace);
        grown
    } else {
        whitespace.to_string()
    }
}

/// Apply a resolved target to a gap in place.
pub fn apply_target(gap: &mut String, target: Target) {
    match target {
        Target::Unchanged => {}
        Target::Empty => gap.clear(),
        Target::BlankLines(count) => {
            if blank_lines(gap) != count {
                *gap = apply_blank_lines(gap, count);
            }
        }
    }
}

fn newlines(whitespace: &str) -> usize {
    whitespace.bytes().filter(|&b| b == b'\n').count()
}

/// Byte index of the `n`-th newline (zero-based).
fn nth_newline(whitespace: &str, n: usize) -> Option<usize> {
    whitespace
        .char_indices()
        .filter(|&(_, c)| c == '\n')
        .nth(n)
        .map(|(index, _)| index)
}
