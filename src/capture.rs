//! A bare name in pattern position captures; it never compares.

use std::io::{self, Write};
use tracing::debug;

/// Matches `a` against the single pattern `b` and keeps the binding.
///
/// The pattern `b` is irrefutable: it binds `a`'s value whatever `b` held
/// before. The match result is rebound to `b` so the capture outlives the
/// arm, and the returned pair is always `(a, a)`.
pub fn rebind_by_capture<W: Write>(a: i64, b: i64, out: &mut W) -> io::Result<(i64, i64)> {
    debug!(a, b, "before match");

    #[allow(clippy::match_single_binding)]
    let b = match a {
        b => {
            writeln!(out, "{} {}", a, b)?;
            b
        }
    };

    writeln!(out, "{} {}", a, b)?;
    debug!(a, b, "bare-name pattern captured subject");
    Ok((a, b))
}
