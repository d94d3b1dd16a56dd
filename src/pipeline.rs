//! End-to-end driver: lines in, rendered report out
//!
//! The reference shape for this kind of tool is a producer thread feeding
//! a consumer over a channel with a stop/acknowledge handshake. With
//! exactly one producer and one consumer operating in lockstep there is
//! nothing to overlap, so the driver is a direct call sequence.

use std::io::{self, BufRead, Write};

use crate::reader::LineReader;
use crate::statistics::Accumulator;

/// Drain `input`, fold every line into an [`Accumulator`], and write the
/// final report to `output`.
///
/// A read error other than end-of-stream aborts before any output is
/// produced; no partial report is ever written.
///
/// # Example
///
/// ```
/// let input: &[u8] = b"1\n2\n3\n";
/// let mut out = Vec::new();
/// streamhist::pipeline::run(input, &mut out).unwrap();
///
/// let rendered = String::from_utf8(out).unwrap();
/// assert!(rendered.starts_with("count:\t3\n"));
/// ```
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> io::Result<()> {
    let mut reader = LineReader::new(input);
    let mut acc = Accumulator::new();

    while let Some(line) = reader.next_line()? {
        acc.ingest(line);
    }

    write!(output, "{}", acc.finalize())
}
