// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Boundary configuration: which process stream is the default sink, and what ends a
//! printed line.
//!
//! The core functions ([`apply()`], [`styled_print()`], [`StyledScope::enter()`]) always
//! take an explicit sink. Only the `*_default` entry points read a [`StyleConfig`] and
//! turn its [`OutputTarget`] into a [`DefaultSink`].
//!
//! [`apply()`]: crate::apply
//! [`styled_print()`]: crate::styled_print
//! [`StyledScope::enter()`]: crate::StyledScope::enter

use std::io::{self, StderrLock, StdoutLock, Write};

use smallstr::SmallString;

pub const DEFAULT_LINE_TERMINATOR: &str = "\n";

pub type InlineLineTerminator = SmallString<[u8; 4]>;

/// The process stream used when no sink is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
}

/// [`OutputTarget`] resolved to a locked standard stream. The lock is held until this is
/// dropped.
#[derive(Debug)]
pub enum DefaultSink {
    Stdout(StdoutLock<'static>),
    Stderr(StderrLock<'static>),
}

impl DefaultSink {
    #[must_use]
    pub fn new_stdout() -> Self { Self::Stdout(io::stdout().lock()) }

    #[must_use]
    pub fn new_stderr() -> Self { Self::Stderr(io::stderr().lock()) }
}

impl From<OutputTarget> for DefaultSink {
    fn from(target: OutputTarget) -> Self {
        match target {
            OutputTarget::Stdout => Self::new_stdout(),
            OutputTarget::Stderr => Self::new_stderr(),
        }
    }
}

impl Write for DefaultSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(it) => it.write(buf),
            Self::Stderr(it) => it.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(it) => it.flush(),
            Self::Stderr(it) => it.flush(),
        }
    }
}

/// ```
/// use ansi_scope::{OutputTarget, StyleConfig};
///
/// let config = StyleConfig::default()
///     .with_output_target(OutputTarget::Stderr)
///     .with_line_terminator("\r\n");
/// assert_eq!(config.line_terminator(), "\r\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    pub output_target: OutputTarget,
    pub line_terminator: InlineLineTerminator,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            output_target: OutputTarget::default(),
            line_terminator: DEFAULT_LINE_TERMINATOR.into(),
        }
    }
}

impl StyleConfig {
    #[must_use]
    pub fn with_output_target(mut self, output_target: OutputTarget) -> Self {
        self.output_target = output_target;
        self
    }

    /// An empty terminator means nothing is written after the text.
    #[must_use]
    pub fn with_line_terminator(mut self, line_terminator: &str) -> Self {
        self.line_terminator = line_terminator.into();
        self
    }

    #[must_use]
    pub fn line_terminator(&self) -> &str { self.line_terminator.as_str() }

    #[must_use]
    pub fn sink(&self) -> DefaultSink { DefaultSink::from(self.output_target) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = StyleConfig::default();
        assert_eq!(config.output_target, OutputTarget::Stdout);
        assert_eq!(config.line_terminator(), "\n");
    }

    #[test]
    fn test_with_methods() {
        let config = StyleConfig::default()
            .with_output_target(OutputTarget::Stderr)
            .with_line_terminator("");
        assert_eq!(config.output_target, OutputTarget::Stderr);
        assert_eq!(config.line_terminator(), "");
    }

    #[test]
    fn test_default_sink_matches_target() {
        assert!(matches!(
            DefaultSink::from(OutputTarget::Stdout),
            DefaultSink::Stdout(_)
        ));
        assert!(matches!(
            StyleConfig::default()
                .with_output_target(OutputTarget::Stderr)
                .sink(),
            DefaultSink::Stderr(_)
        ));
    }
}
