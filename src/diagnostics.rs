//! Uniform stderr reporting.
//!
//! Warnings are single `WARN: ...` lines. Fatal errors are not formatted here;
//! they propagate through anyhow and `main` prints them once.

use std::fmt::Display;
use std::io::{self, Write};

pub fn warn(err: &mut impl Write, msg: impl Display) -> io::Result<()> {
    writeln!(err, "WARN: {}", msg)
}
