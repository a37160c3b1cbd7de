// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors surfaced by the sequence registry and the styling wrapper. See
//! [`AnsiScopeError`] for details.

/// Errors from [`sequence_from_name()`], [`apply()`], [`styled_print()`] and
/// [`StyledScope`].
///
/// | Variant                 | Cause                                             | Recoverable? |
/// | :---------------------- | :------------------------------------------------ | :----------- |
/// | [`UnknownSequenceName`] | A symbolic name has no registered escape sequence | Yes          |
/// | [`WriteFailure`]        | The sink rejected a write                         | Maybe        |
///
/// Neither is retried or suppressed inside this crate.
///
/// [`UnknownSequenceName`]: Self::UnknownSequenceName
/// [`WriteFailure`]: Self::WriteFailure
/// [`sequence_from_name()`]: crate::sequence_from_name
/// [`apply()`]: crate::apply
/// [`styled_print()`]: crate::styled_print
/// [`StyledScope`]: crate::StyledScope
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AnsiScopeError {
    /// Symbolic lookup failed. Names are matched case-sensitively.
    #[error("No escape sequence is registered under the name '{name}'")]
    #[diagnostic(
        code(ansi_scope::registry::unknown_sequence_name),
        help(
            "Names are snake_case and case-sensitive, eg: 'bold', 'fg_magenta', \
             'show_cursor'. See `SequenceName` for the full vocabulary."
        )
    )]
    UnknownSequenceName { name: String },

    /// The underlying sink failed a write.
    #[error("Failed to write escape sequence or text to the sink")]
    #[diagnostic(
        code(ansi_scope::sink::write_failure),
        help("Check that the output stream (stdout, file, pipe) is still open")
    )]
    WriteFailure(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnsiScopeError>;

#[cfg(test)]
mod tests {
    use std::io::{Error, ErrorKind};

    use miette::Diagnostic;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_unknown_sequence_name_message() {
        let error = AnsiScopeError::UnknownSequenceName {
            name: "Bold".into(),
        };
        assert_eq!(
            error.to_string(),
            "No escape sequence is registered under the name 'Bold'"
        );
        assert_eq!(
            error.code().map(|it| it.to_string()),
            Some("ansi_scope::registry::unknown_sequence_name".to_string())
        );
    }

    #[test]
    fn test_write_failure_keeps_source() {
        let error: AnsiScopeError = Error::new(ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(error, AnsiScopeError::WriteFailure(_)));

        let source = std::error::Error::source(&error).map(ToString::to_string);
        assert_eq!(source, Some("gone".to_string()));
    }
}
