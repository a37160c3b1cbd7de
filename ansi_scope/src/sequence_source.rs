// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything that can stand in for an escape sequence at the call site, and the single
//! dispatch function that turns it into one.

use std::io::Write;

use crate::{EscapeSequence, Result, SequenceName, StyleConfig,
            escape_sequence::sizing::{InlineVecArgs, InlineVecSequences},
            sequence_from_name};

/// A sequence constructor that takes its numeric arguments at apply time, eg:
/// [`select_graphical_rendition`](crate::select_graphical_rendition).
pub type SequenceFactory = fn(&[u16]) -> EscapeSequence;

/// One of the three ways to ask for an escape sequence. [`prepare()`] resolves all of them
/// to an [`EscapeSequence`].
///
/// ```
/// use ansi_scope::{SequenceSource, bold, prepare, select_graphical_rendition};
///
/// let literal = SequenceSource::from(bold());
/// let factory = SequenceSource::factory(select_graphical_rendition, &[1]);
/// let name = SequenceSource::from("bold");
///
/// assert_eq!(prepare(literal).unwrap(), "\x1b[1m");
/// assert_eq!(prepare(factory).unwrap(), "\x1b[1m");
/// assert_eq!(prepare(name).unwrap(), "\x1b[1m");
/// ```
#[derive(Debug, Clone)]
pub enum SequenceSource<'a> {
    /// Already built. Passed through unchanged.
    Literal(EscapeSequence),
    /// Invoked with `args` when resolved. Only constructors that take a slice, eg:
    /// [`select_graphical_rendition`](crate::select_graphical_rendition), fit
    /// [`SequenceFactory`] as is. Fixed arity constructors like
    /// [`erase_in_display`](crate::erase_in_display) need a small adapter, or can simply
    /// be called and passed as a [`SequenceSource::Literal`].
    Factory {
        factory: SequenceFactory,
        args: InlineVecArgs,
    },
    /// Looked up with [`sequence_from_name()`].
    Name(&'a str),
}

impl SequenceSource<'_> {
    #[must_use]
    pub fn factory(factory: SequenceFactory, args: &[u16]) -> Self {
        Self::Factory {
            factory,
            args: InlineVecArgs::from_slice(args),
        }
    }
}

impl From<EscapeSequence> for SequenceSource<'_> {
    fn from(sequence: EscapeSequence) -> Self { Self::Literal(sequence) }
}

impl From<&EscapeSequence> for SequenceSource<'_> {
    fn from(sequence: &EscapeSequence) -> Self { Self::Literal(sequence.clone()) }
}

impl From<SequenceName> for SequenceSource<'_> {
    fn from(name: SequenceName) -> Self { Self::Literal(name.sequence()) }
}

impl<'a> From<&'a str> for SequenceSource<'a> {
    fn from(name: &'a str) -> Self { Self::Name(name) }
}

impl<'a> From<&'a String> for SequenceSource<'a> {
    fn from(name: &'a String) -> Self { Self::Name(name.as_str()) }
}

/// Resolve a [`SequenceSource`] without writing anything.
///
/// # Errors
///
/// [`AnsiScopeError::UnknownSequenceName`](crate::AnsiScopeError::UnknownSequenceName)
/// for a [`SequenceSource::Name`] that is not registered. The other variants never fail.
#[allow(single_use_lifetimes)] // `'_` in argument position `impl Trait` is unstable.
pub fn prepare<'a>(source: impl Into<SequenceSource<'a>>) -> Result<EscapeSequence> {
    match source.into() {
        SequenceSource::Literal(sequence) => Ok(sequence),
        SequenceSource::Factory { factory, args } => Ok(factory(&args)),
        SequenceSource::Name(name) => sequence_from_name(name),
    }
}

/// Resolve `source` and write it to `sink` with one write call. The sink is not flushed.
///
/// ```
/// use ansi_scope::{apply, cursor_up};
///
/// let mut sink = Vec::<u8>::new();
/// apply(cursor_up(3), &mut sink).unwrap();
/// apply("fg_magenta", &mut sink).unwrap();
/// assert_eq!(sink, b"\x1b[3A\x1b[38;5;5m");
/// ```
///
/// # Errors
///
/// - [`AnsiScopeError::UnknownSequenceName`](crate::AnsiScopeError::UnknownSequenceName)
///   if a name does not resolve. Nothing is written in this case.
/// - [`AnsiScopeError::WriteFailure`](crate::AnsiScopeError::WriteFailure) if the sink
///   fails.
#[allow(single_use_lifetimes)] // `'_` in argument position `impl Trait` is unstable.
pub fn apply<'a, W: Write + ?Sized>(
    source: impl Into<SequenceSource<'a>>,
    sink: &mut W,
) -> Result<()> {
    let sequence = prepare(source)?;
    write_sequence(&sequence, sink)
}

/// [`apply()`] to the default sink named by `config`, then flush it.
///
/// # Errors
///
/// Same as [`apply()`].
#[allow(single_use_lifetimes)] // `'_` in argument position `impl Trait` is unstable.
pub fn apply_default<'a>(
    source: impl Into<SequenceSource<'a>>,
    config: &StyleConfig,
) -> Result<()> {
    let mut sink = config.sink();
    apply(source, &mut sink)?;
    sink.flush()?;
    Ok(())
}

pub(crate) fn write_sequence<W: Write + ?Sized>(
    sequence: &EscapeSequence,
    sink: &mut W,
) -> Result<()> {
    tracing::trace!(sequence = ?sequence.as_str(), "write escape sequence");
    sink.write_all(sequence.as_bytes())?;
    Ok(())
}

/// Resolve every source in order, failing on the first unknown name.
pub(crate) fn prepare_all<'a, I>(sources: I) -> Result<InlineVecSequences>
where
    I: IntoIterator,
    I::Item: Into<SequenceSource<'a>>,
{
    sources.into_iter().map(prepare).collect()
}
