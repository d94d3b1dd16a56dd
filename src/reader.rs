//! Buffered line reading

use std::io::{self, BufRead};

/// Yields complete text lines from a buffered byte stream.
///
/// Lines split across internal buffer refills are reassembled before being
/// returned, and the `\n` or `\r\n` terminator is stripped. A trailing
/// line with no terminator is yielded as a final line before end-of-stream
/// is signalled. Read errors other than clean end-of-stream propagate to
/// the caller.
pub struct LineReader<R> {
    inner: R,
    buf: String,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::new(),
        }
    }

    /// The next complete line, or `None` once the stream is exhausted
    pub fn next_line(&mut self) -> io::Result<Option<&str>> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.ends_with('\n') {
            self.buf.pop();
            if self.buf.ends_with('\r') {
                self.buf.pop();
            }
        }
        Ok(Some(self.buf.as_str()))
    }
}
