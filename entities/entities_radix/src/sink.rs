//! Digit Sinks
//!
//! Append-only destinations for rendered digits. The converter produces
//! every digit through a sink, so rendering into an owned string, into a
//! caller's buffer and merely counting digits all share one routine.

/// Append-only destination for digit characters
pub trait DigitSink {
    /// Append one character
    fn push_digit(&mut self, digit: char);
}

impl DigitSink for String {
    fn push_digit(&mut self, digit: char) {
        self.push(digit);
    }
}

impl DigitSink for Vec<char> {
    fn push_digit(&mut self, digit: char) {
        self.push(digit);
    }
}

impl DigitSink for Vec<u8> {
    fn push_digit(&mut self, digit: char) {
        let mut buf = [0u8; 4];
        self.extend_from_slice(digit.encode_utf8(&mut buf).as_bytes());
    }
}

impl<S: DigitSink + ?Sized> DigitSink for &mut S {
    fn push_digit(&mut self, digit: char) {
        (**self).push_digit(digit);
    }
}

/// Sink that discards characters and keeps only their count
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DigitCounter {
    count: usize,
}

impl DigitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Characters seen so far
    pub fn count(&self) -> usize {
        self.count
    }
}

impl DigitSink for DigitCounter {
    fn push_digit(&mut self, _digit: char) {
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter() {
        let mut counter = DigitCounter::new();
        for c in "abc".chars() {
            counter.push_digit(c);
        }
        assert_eq!(counter.count(), 3);
    }

    #[test]
    fn test_byte_sink_encodes_utf8() {
        let mut bytes: Vec<u8> = Vec::new();
        bytes.push_digit('z');
        bytes.push_digit('é');
        assert_eq!(bytes, "zé".as_bytes());
    }

    #[test]
    fn test_mut_ref_sink() {
        fn fill<S: DigitSink>(mut sink: S) {
            sink.push_digit('1');
        }

        let mut s = String::from("x=");
        fill(&mut s);
        assert_eq!(s, "x=1");
    }
}
