// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A styling session on a borrowed sink that always ends with [`soft_reset()`].
//!
//! # Lifecycle
//!
//! ```text
//! enter(L, sink) ── resolve all of L ──► write L[0] .. L[n-1] ──► StyledScope
//!       │                                  │                         │
//!       ▼                                  ▼                         ▼
//!  Err (nothing written)          Err (no scope, no reset)   exit() or Drop:
//!                                                           exactly one soft reset
//! ```
//!
//! - Every name in `L` is resolved before the first write, so an unknown name never
//!   leaves the terminal half styled.
//! - A write failure while applying `L` means the scope was never entered. The caller
//!   gets the error and no reset is written.
//! - Once entered, the reset is written when the scope ends by [`StyledScope::exit()`],
//!   by falling out of scope, by `?` propagating an error out of the body, or by a panic
//!   unwinding through it. A failed write in between (text, an extra [`apply`]) does not
//!   skip the reset.
//!
//! The reset is [`soft_reset()`] rather than SGR reset because `L` may contain non-SGR
//! modes, eg: [`hide_cursor()`] or [`enable_alternative_screen_buffer()`].
//!
//! [`apply`]: StyledScope::apply
//! [`soft_reset()`]: crate::soft_reset
//! [`hide_cursor()`]: crate::hide_cursor
//! [`enable_alternative_screen_buffer()`]: crate::enable_alternative_screen_buffer

use std::{fmt::{self, Debug, Display, Formatter, Write as _},
          io::{self, Write}};

use crate::{AnsiScopeError, EscapeSequence, Result, SequenceSource,
            config::{DEFAULT_LINE_TERMINATOR, InlineLineTerminator},
            escape_sequence::sizing::InlineVecSequences,
            sequence_source::{prepare, prepare_all, write_sequence},
            soft_reset};

pub const DEFAULT_VALUE_SEPARATOR: &str = " ";

/// Live handle for an entered styling scope. See the [module docs](self) for the
/// lifecycle.
///
/// ```
/// use ansi_scope::{StyledScope, bold, fg_magenta};
///
/// let mut sink = Vec::<u8>::new();
/// {
///     let mut scope = StyledScope::enter([fg_magenta(), bold()], &mut sink).unwrap();
///     scope.print("Hello").unwrap();
/// }
/// assert_eq!(sink, b"\x1b[38;5;5m\x1b[1mHello\n\x1b[!p");
/// ```
pub struct StyledScope<'w, W: Write + ?Sized> {
    sequences: InlineVecSequences,
    sink: &'w mut W,
    line_terminator: InlineLineTerminator,
    has_exited: bool,
}

impl<'w, W: Write + ?Sized> StyledScope<'w, W> {
    /// Resolve `sources`, write each one to `sink` in order, and return the live scope.
    ///
    /// # Errors
    ///
    /// - [`AnsiScopeError::UnknownSequenceName`] if any name does not resolve. Nothing is
    ///   written.
    /// - [`AnsiScopeError::WriteFailure`] if applying a sequence fails. The scope is not
    ///   entered and no reset is written.
    pub fn enter<'a, I>(sources: I, sink: &'w mut W) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<SequenceSource<'a>>,
    {
        Self::enter_with_terminator(sources, sink, DEFAULT_LINE_TERMINATOR)
    }

    pub(crate) fn enter_with_terminator<'a, I>(
        sources: I,
        sink: &'w mut W,
        line_terminator: &str,
    ) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<SequenceSource<'a>>,
    {
        let sequences = prepare_all(sources)?;
        Self::enter_prepared(sequences, sink, line_terminator)
    }

    pub(crate) fn enter_prepared(
        sequences: InlineVecSequences,
        sink: &'w mut W,
        line_terminator: &str,
    ) -> Result<Self> {
        for sequence in &sequences {
            write_sequence(sequence, sink)?;
        }
        tracing::debug!(sequences = sequences.len(), "entered styled scope");
        Ok(Self {
            sequences,
            sink,
            line_terminator: line_terminator.into(),
            has_exited: false,
        })
    }

    /// The sequences applied on entry. Sequences added later with [`Self::apply`] are
    /// not included.
    #[must_use]
    pub fn sequences(&self) -> &[EscapeSequence] { &self.sequences }

    #[must_use]
    pub fn line_terminator(&self) -> &str { self.line_terminator.as_str() }

    /// Apply one more sequence to the same sink. It is covered by the reset on exit.
    ///
    /// # Errors
    ///
    /// Same as [`crate::apply()`]. The scope stays live either way.
    #[allow(single_use_lifetimes)] // `'_` in argument position `impl Trait` is unstable.
    pub fn apply<'a>(&mut self, source: impl Into<SequenceSource<'a>>) -> Result<()> {
        let sequence = prepare(source)?;
        write_sequence(&sequence, self.sink)
    }

    /// Write [`soft_reset()`] now. This does not end the scope, and the reset on exit
    /// still happens.
    ///
    /// # Errors
    ///
    /// [`AnsiScopeError::WriteFailure`] if the sink fails.
    pub fn reset(&mut self) -> Result<()> { write_sequence(&soft_reset(), self.sink) }

    /// Write `text` then the line terminator, as two separate writes. Empty parts are
    /// skipped.
    ///
    /// # Errors
    ///
    /// [`AnsiScopeError::WriteFailure`] if the sink fails.
    pub fn print(&mut self, text: &str) -> Result<()> {
        if !text.is_empty() {
            self.sink.write_all(text.as_bytes())?;
        }
        if !self.line_terminator.is_empty() {
            self.sink.write_all(self.line_terminator.as_bytes())?;
        }
        Ok(())
    }

    /// Join `values` with `separator`, then [`Self::print`] the result.
    ///
    /// # Errors
    ///
    /// [`AnsiScopeError::WriteFailure`] if the sink fails.
    pub fn print_values(&mut self, values: &[&dyn Display], separator: &str) -> Result<()> {
        let mut acc = String::new();
        for (index, value) in values.iter().enumerate() {
            if index > 0 {
                acc.push_str(separator);
            }
            // Writing into a String can't fail.
            let _unused = write!(acc, "{value}");
        }
        self.print(&acc)
    }

    /// [`Self::print_values`] with a single space between values.
    ///
    /// # Errors
    ///
    /// [`AnsiScopeError::WriteFailure`] if the sink fails.
    pub fn print_spaced(&mut self, values: &[&dyn Display]) -> Result<()> {
        self.print_values(values, DEFAULT_VALUE_SEPARATOR)
    }

    /// End the scope now and report whether the reset write succeeded. Dropping the
    /// scope does the same thing but can only log the failure.
    ///
    /// # Errors
    ///
    /// [`AnsiScopeError::WriteFailure`] if the reset write fails. It is not retried.
    pub fn exit(mut self) -> Result<()> { self.write_exit_reset() }

    fn write_exit_reset(&mut self) -> Result<()> {
        if self.has_exited {
            return Ok(());
        }
        self.has_exited = true;
        tracing::debug!(sequences = self.sequences.len(), "exiting styled scope");
        write_sequence(&soft_reset(), self.sink)
    }
}

impl<W: Write + ?Sized> Drop for StyledScope<'_, W> {
    fn drop(&mut self) {
        if let Err(error) = self.write_exit_reset() {
            tracing::warn!(%error, "soft reset failed while dropping styled scope");
        }
    }
}

impl<W: Write + ?Sized> Write for StyledScope<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> { self.sink.write(buf) }

    fn flush(&mut self) -> io::Result<()> { self.sink.flush() }
}

impl<W: Write + ?Sized> Debug for StyledScope<'_, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledScope")
            .field("sequences", &self.sequences)
            .field("line_terminator", &self.line_terminator)
            .field("has_exited", &self.has_exited)
            .finish_non_exhaustive()
    }
}

/// Enter a scope, run `body` inside it, then exit. The reset is written whether `body`
/// returns `Ok`, returns `Err`, or panics.
///
/// ```
/// use ansi_scope::{AnsiScopeError, with_scope};
///
/// let mut sink = Vec::<u8>::new();
/// let result = with_scope(["bold"], &mut sink, |scope| {
///     scope.print("ok")?;
///     Ok::<_, AnsiScopeError>(42)
/// });
/// assert_eq!(result.unwrap(), 42);
/// assert_eq!(sink, b"\x1b[1mok\n\x1b[!p");
/// ```
///
/// # Errors
///
/// Entry failures (converted into `E`), then the body's own error, then a failed exit
/// reset, in that order of precedence.
pub fn with_scope<'a, W, I, F, R, E>(
    sources: I,
    sink: &mut W,
    body: F,
) -> std::result::Result<R, E>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Into<SequenceSource<'a>>,
    F: FnOnce(&mut StyledScope<'_, W>) -> std::result::Result<R, E>,
    E: From<AnsiScopeError>,
{
    let scope = StyledScope::enter(sources, sink)?;
    run_in_scope(scope, body)
}

pub(crate) fn run_in_scope<W, F, R, E>(
    mut scope: StyledScope<'_, W>,
    body: F,
) -> std::result::Result<R, E>
where
    W: Write + ?Sized,
    F: FnOnce(&mut StyledScope<'_, W>) -> std::result::Result<R, E>,
    E: From<AnsiScopeError>,
{
    let result = body(&mut scope);
    let exit_result = scope.exit();
    let value = result?;
    exit_result?;
    Ok(value)
}
