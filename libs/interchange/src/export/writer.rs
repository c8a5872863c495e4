//! Small helpers shared by the exporters for writing JSON fragments.

use model3d_json::write_escaped;
use std::fmt::{self, Write};

/// Writes a JSON number. NaN and infinities have no JSON form and are
/// written as `0`.
pub(crate) fn number(f: &mut impl Write, n: f64) -> fmt::Result {
    if n.is_finite() {
        write!(f, "{n}")
    } else {
        f.write_char('0')
    }
}

/// Writes a quoted, escaped JSON string.
pub(crate) fn string(f: &mut impl Write, text: &str) -> fmt::Result {
    write_escaped(f, text)
}

/// Writes `[a, b, c]` on one line.
pub(crate) fn numbers(f: &mut impl Write, items: impl IntoIterator<Item = f64>) -> fmt::Result {
    f.write_char('[')?;
    for (i, n) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        number(f, n)?;
    }
    f.write_char(']')
}

/// Writes `[i, j, k]` on one line.
pub(crate) fn indices(f: &mut impl Write, items: impl IntoIterator<Item = u32>) -> fmt::Result {
    f.write_char('[')?;
    for (i, n) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{n}")?;
    }
    f.write_char(']')
}
