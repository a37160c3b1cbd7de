// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Error, ErrorKind, Result, Write};

use crate::StdoutMock;

/// When a [`FailingWriter`] rejects a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePlan {
    /// Only the n-th `write()` call fails (1-based); every other call succeeds.
    NthWrite(usize),
    /// The n-th `write()` call and every call after it fail (1-based).
    FromNthWrite(usize),
    /// Every `write()` call fails.
    Always,
}

/// A sink that fails according to its [`FailurePlan`]. Successful writes are recorded
/// in the wrapped [`StdoutMock`], which you can inspect through [`Self::recorded`].
#[derive(Debug, Clone)]
pub struct FailingWriter {
    plan: FailurePlan,
    attempts: usize,
    inner: StdoutMock,
}

impl FailingWriter {
    #[must_use]
    pub fn new(plan: FailurePlan) -> Self {
        Self {
            plan,
            attempts: 0,
            inner: StdoutMock::new(),
        }
    }

    #[must_use]
    pub fn fail_on_nth_write(n: usize) -> Self { Self::new(FailurePlan::NthWrite(n)) }

    #[must_use]
    pub fn fail_from_nth_write(n: usize) -> Self {
        Self::new(FailurePlan::FromNthWrite(n))
    }

    #[must_use]
    pub fn fail_always() -> Self { Self::new(FailurePlan::Always) }

    /// The writes that succeeded.
    #[must_use]
    pub fn recorded(&self) -> &StdoutMock { &self.inner }

    /// Number of `write()` calls attempted so far, failed ones included.
    #[must_use]
    pub fn attempts(&self) -> usize { self.attempts }

    fn should_fail(&self) -> bool {
        match self.plan {
            FailurePlan::NthWrite(n) => self.attempts == n,
            FailurePlan::FromNthWrite(n) => self.attempts >= n,
            FailurePlan::Always => true,
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.attempts += 1;
        if self.should_fail() {
            return Err(Error::new(
                ErrorKind::BrokenPipe,
                format!("simulated failure on write #{}", self.attempts),
            ));
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_fail_on_nth_write_only_fails_once() {
        let mut writer = FailingWriter::fail_on_nth_write(2);

        assert!(writer.write_all(b"one").is_ok());
        assert!(writer.write_all(b"two").is_err());
        assert!(writer.write_all(b"three").is_ok());

        assert_eq!(writer.attempts(), 3);
        assert_eq!(writer.recorded().get_writes_as_strings(), vec!["one", "three"]);
    }

    #[test]
    fn test_fail_from_nth_write_keeps_failing() {
        let mut writer = FailingWriter::fail_from_nth_write(2);

        assert!(writer.write_all(b"one").is_ok());
        assert!(writer.write_all(b"two").is_err());
        assert!(writer.write_all(b"three").is_err());

        assert_eq!(writer.recorded().get_writes_as_strings(), vec!["one"]);
    }

    #[test]
    fn test_fail_always() {
        let mut writer = FailingWriter::fail_always();
        let error = writer.write_all(b"nope").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::BrokenPipe);
        assert_eq!(writer.recorded().write_count(), 0);
    }
}
