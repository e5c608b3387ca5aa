//! Kernel range-list scanning.
//!
//! The kernel encodes CPU sets as compact text: comma-separated single
//! values or inclusive ranges, e.g. `0-3,8,10-11`. [`CpuList`] scans such a
//! stream incrementally, yielding one CPU id at a time without ever
//! materializing the whole list.
//!
//! Malformed or truncated input ends the sequence instead of failing: the
//! containing pseudo-file may be absent, empty, or cut short on restricted
//! systems, and callers are expected to tolerate short lists. The scanner
//! does not sort or deduplicate — that is the consumer's concern.

use std::io::{Bytes, Read};

/// Lazy iterator over the CPU ids encoded in a kernel range list.
///
/// A bare token `n` yields `n`; a range token `a-b` yields every value from
/// `a` to `b` inclusive. Tokens are separated by a single non-digit byte (a
/// comma in practice; the delimiter is not validated). The first byte that
/// cannot start or continue a token ends the sequence — there is no error
/// value.
///
/// The scanner reads one byte at a time, so wrap files in a `BufReader`.
pub struct CpuList<R: Read> {
    bytes: Bytes<R>,
    /// One byte of lookahead, pushed back by the number scanner.
    pending: Option<u8>,
    /// Next value to yield while a range is active.
    current: u32,
    /// One past the last value implied by the most recent token.
    end: u32,
}

impl<R: Read> CpuList<R> {
    /// Starts scanning `reader`, positioned at the beginning of a range list.
    pub fn new(reader: R) -> Self {
        CpuList {
            bytes: reader.bytes(),
            pending: None,
            current: 0,
            end: 0,
        }
    }

    /// Next byte from the lookahead slot or the stream.
    /// Read errors are treated as end-of-stream.
    fn next_byte(&mut self) -> Option<u8> {
        match self.pending.take() {
            Some(b) => Some(b),
            None => match self.bytes.next() {
                Some(Ok(b)) => Some(b),
                _ => None,
            },
        }
    }

    /// Scans an unsigned decimal integer, skipping leading ASCII whitespace.
    ///
    /// The terminating non-digit byte, if any, is left in the lookahead
    /// slot. Returns `None` at end-of-stream, on a non-digit where a digit
    /// was required, or on overflow of the accumulated value.
    fn read_number(&mut self) -> Option<u32> {
        let mut b = self.next_byte()?;
        while b.is_ascii_whitespace() {
            b = self.next_byte()?;
        }
        if !b.is_ascii_digit() {
            self.pending = Some(b);
            return None;
        }
        let mut value = u32::from(b - b'0');
        loop {
            match self.next_byte() {
                Some(d) if d.is_ascii_digit() => {
                    value = value.checked_mul(10)?.checked_add(u32::from(d - b'0'))?;
                }
                Some(other) => {
                    self.pending = Some(other);
                    break;
                }
                None => break,
            }
        }
        Some(value)
    }
}

impl<R: Read> Iterator for CpuList<R> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.current >= self.end {
            // Previous token exhausted; parse the next one.
            let first = self.read_number()?;
            self.end = match self.next_byte() {
                // `a-b`: the token is an inclusive range. A truncated
                // suffix (`3-` at end of stream) degrades to the bare value.
                Some(b'-') => match self.read_number() {
                    Some(last) => last.checked_add(1)?,
                    None => first.checked_add(1)?,
                },
                Some(other) => {
                    self.pending = Some(other);
                    first.checked_add(1)?
                }
                None => first.checked_add(1)?,
            };
            // Consume the single delimiter byte following the token. At
            // true end-of-stream there is nothing left to take.
            let _ = self.next_byte();
            self.current = first;
        }
        let value = self.current;
        self.current += 1;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: &str) -> Vec<u32> {
        CpuList::new(input.as_bytes()).collect()
    }

    #[test]
    fn bare_value() {
        assert_eq!(expand("7"), vec![7]);
    }

    #[test]
    fn range_expands_inclusive() {
        assert_eq!(expand("0-2"), vec![0, 1, 2]);
    }

    #[test]
    fn mixed_tokens() {
        assert_eq!(expand("0-2,5"), vec![0, 1, 2, 5]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(expand(""), Vec::<u32>::new());
    }

    #[test]
    fn trailing_newline_ignored() {
        // sysfs files end with a newline; it is consumed as the delimiter
        // after the final token.
        assert_eq!(expand("0-3\n"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn truncated_range_yields_start() {
        assert_eq!(expand("3-"), vec![3]);
    }

    #[test]
    fn values_are_not_deduplicated() {
        assert_eq!(expand("4,0-2,1"), vec![4, 0, 1, 2, 1]);
    }
}
