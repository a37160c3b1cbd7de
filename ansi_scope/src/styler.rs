// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crate::{AnsiScopeError, DefaultSink, EscapeSequence, Result, SequenceSource,
            StyleConfig, StyledScope, escape_sequence::sizing::InlineVecSequences,
            sequence_source::prepare_all, styled_scope::run_in_scope};

/// Apply `sources` in order, write `text` and `line_terminator`, then write the soft
/// reset.
///
/// ```
/// use ansi_scope::{fg_magenta, italic, styled_print};
///
/// let mut sink = Vec::<u8>::new();
/// styled_print("Hello World!", [fg_magenta(), italic()], &mut sink, "\n").unwrap();
/// assert_eq!(sink, b"\x1b[38;5;5m\x1b[3mHello World!\n\x1b[!p");
/// ```
///
/// # Errors
///
/// - [`AnsiScopeError::UnknownSequenceName`]: nothing is written.
/// - [`AnsiScopeError::WriteFailure`] while applying `sources`: no reset is written.
/// - [`AnsiScopeError::WriteFailure`] while writing the text: the reset is still
///   attempted, and the text error is returned.
pub fn styled_print<'a, W, I>(
    text: &str,
    sources: I,
    sink: &mut W,
    line_terminator: &str,
) -> Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Into<SequenceSource<'a>>,
{
    let mut scope = StyledScope::enter_with_terminator(sources, sink, line_terminator)?;
    scope.print(text)?;
    scope.exit()
}

/// [`styled_print()`] to the sink and line terminator from `config`, then flush.
///
/// # Errors
///
/// Same as [`styled_print()`].
pub fn styled_print_default<'a, I>(text: &str, sources: I, config: &StyleConfig) -> Result<()>
where
    I: IntoIterator,
    I::Item: Into<SequenceSource<'a>>,
{
    let mut sink = config.sink();
    styled_print(text, sources, &mut sink, config.line_terminator())?;
    sink.flush()?;
    Ok(())
}

/// A resolved set of sequences plus a [`StyleConfig`], reusable for any number of prints
/// and scopes.
///
/// ```
/// use ansi_scope::{Styler, StyleConfig};
///
/// let warning = Styler::new(["bold", "fg_yellow"])
///     .unwrap()
///     .with_config(StyleConfig::default().with_line_terminator(""));
///
/// let mut sink = Vec::<u8>::new();
/// warning.print("careful", &mut sink).unwrap();
/// assert_eq!(sink, b"\x1b[1m\x1b[38;5;3mcareful\x1b[!p");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Styler {
    sequences: InlineVecSequences,
    config: StyleConfig,
}

impl Styler {
    /// Resolve `sources` once, up front.
    ///
    /// # Errors
    ///
    /// [`AnsiScopeError::UnknownSequenceName`] if any name does not resolve.
    pub fn new<'a, I>(sources: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<SequenceSource<'a>>,
    {
        Ok(Self::from_sequences(prepare_all(sources)?))
    }

    #[must_use]
    pub fn from_sequences(sequences: impl IntoIterator<Item = EscapeSequence>) -> Self {
        Self {
            sequences: sequences.into_iter().collect(),
            config: StyleConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: StyleConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn sequences(&self) -> &[EscapeSequence] { &self.sequences }

    #[must_use]
    pub fn config(&self) -> &StyleConfig { &self.config }

    /// # Errors
    ///
    /// Same as [`styled_print()`], minus the unknown name case.
    pub fn print<W: Write + ?Sized>(&self, text: &str, sink: &mut W) -> Result<()> {
        let mut scope = self.enter(sink)?;
        scope.print(text)?;
        scope.exit()
    }

    /// [`Self::print`] to the configured default sink, then flush.
    ///
    /// # Errors
    ///
    /// Same as [`Self::print`].
    pub fn print_default(&self, text: &str) -> Result<()> {
        let mut sink = self.config.sink();
        self.print(text, &mut sink)?;
        sink.flush()?;
        Ok(())
    }

    /// Enter a [`StyledScope`] on `sink` with these sequences and the configured line
    /// terminator.
    ///
    /// # Errors
    ///
    /// [`AnsiScopeError::WriteFailure`] if applying a sequence fails.
    pub fn enter<'w, W: Write + ?Sized>(&self, sink: &'w mut W) -> Result<StyledScope<'w, W>> {
        StyledScope::enter_prepared(
            self.sequences.clone(),
            sink,
            self.config.line_terminator(),
        )
    }

    /// Run `body` in a scope on the configured default sink, then flush it.
    ///
    /// # Errors
    ///
    /// Same as [`with_scope()`](crate::with_scope).
    pub fn scoped_default<F, R, E>(&self, body: F) -> std::result::Result<R, E>
    where
        F: FnOnce(&mut StyledScope<'_, DefaultSink>) -> std::result::Result<R, E>,
        E: From<AnsiScopeError>,
    {
        let mut sink = self.config.sink();
        let scope = self.enter(&mut sink)?;
        let value = run_in_scope(scope, body)?;
        sink.flush().map_err(AnsiScopeError::from)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use ansi_scope_test_fixtures::{FailingWriter, StdoutMock};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{OutputTarget, bold, fg_magenta, italic, show_cursor};

    const SOFT_RESET: &str = "\x1b[!p";

    #[test]
    fn test_styled_print_write_order() {
        let mut sink = StdoutMock::new();
        styled_print("Hello World!", [fg_magenta(), italic()], &mut sink, "\n").unwrap();
        assert_eq!(
            sink.get_writes_as_strings(),
            vec![
                "\x1b[38;5;5m".to_string(),
                "\x1b[3m".to_string(),
                "Hello World!".to_string(),
                "\n".to_string(),
                SOFT_RESET.to_string(),
            ]
        );
    }

    #[test]
    fn test_styled_print_by_name() {
        let mut by_name = StdoutMock::new();
        let mut by_value = StdoutMock::new();
        styled_print("x", ["fg_magenta", "italic"], &mut by_name, "\n").unwrap();
        styled_print("x", [fg_magenta(), italic()], &mut by_value, "\n").unwrap();
        assert_eq!(by_name.get_copy_of_buffer(), by_value.get_copy_of_buffer());
    }

    #[test]
    fn test_styled_print_text_failure_still_resets() {
        let mut sink = FailingWriter::fail_on_nth_write(2);
        let result = styled_print("text", [bold()], &mut sink, "\n");
        assert!(matches!(result, Err(AnsiScopeError::WriteFailure(_))));
        assert_eq!(sink.recorded().get_writes_as_strings(), vec![
            "\x1b[1m".to_string(),
            SOFT_RESET.to_string()
        ]);
    }

    #[test]
    fn test_styled_print_entry_failure_skips_reset() {
        let mut sink = FailingWriter::fail_on_nth_write(1);
        let result = styled_print("text", [bold()], &mut sink, "\n");
        assert!(matches!(result, Err(AnsiScopeError::WriteFailure(_))));
        assert_eq!(sink.attempts(), 1);
        assert_eq!(sink.recorded().write_count(), 0);
    }

    #[test]
    fn test_styler_uses_configured_terminator() {
        let styler = Styler::new(["italic"])
            .unwrap()
            .with_config(StyleConfig::default().with_line_terminator("\r\n"));
        let mut sink = StdoutMock::new();
        styler.print("a", &mut sink).unwrap();
        styler.print("b", &mut sink).unwrap();
        assert_eq!(
            sink.get_copy_of_buffer_as_string(),
            "\x1b[3ma\r\n\x1b[!p\x1b[3mb\r\n\x1b[!p"
        );
    }

    #[test]
    fn test_styler_enter() {
        let styler = Styler::from_sequences([show_cursor(), bold()]);
        assert_eq!(styler.sequences(), &[show_cursor(), bold()]);
        assert_eq!(styler.config().output_target, OutputTarget::Stdout);

        let mut sink = StdoutMock::new();
        {
            let mut scope = styler.enter(&mut sink).unwrap();
            scope.print_values(&[&"n", &7], "=").unwrap();
        }
        assert_eq!(sink.get_copy_of_buffer_as_string_strip_ansi(), "n=7\n");
        assert_eq!(sink.count_writes_equal_to(SOFT_RESET), 1);
    }

    #[test]
    fn test_styler_unknown_name() {
        assert!(matches!(
            Styler::new(["bold", "blod"]),
            Err(AnsiScopeError::UnknownSequenceName { name }) if name == "blod"
        ));
    }
}
