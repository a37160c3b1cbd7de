// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Named escape sequence constructors, layered on top of [`build_sequence()`].
//!
//! Every constructor is a thin, total function: numeric arguments are passed through
//! without range checks. Sequences that take a count (cursor movement, scrolling)
//! default to [`DEFAULT_COUNT`] when given `None`.
//!
//! ## Organization
//!
//! - **fe**: C1 "Fe" introducers (CSI, OSC, DCS, ST, ...)
//! - **csi**: cursor movement, erase, scroll, DEC private mode toggles, cursor shapes
//! - **sgr**: Select Graphic Rendition, ie: text attributes and colors
//! - **esc**: plain ESC sequences, character sets, soft reset
//!
//! Sources:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>
//! - <https://learn.microsoft.com/en-us/windows/console/console-virtual-terminal-sequences>
//!
//! [`build_sequence()`]: crate::build_sequence
//! [`DEFAULT_COUNT`]: crate::DEFAULT_COUNT

/// Generates zero argument constructors that each return one fixed [`EscapeSequence`].
///
/// [`EscapeSequence`]: crate::EscapeSequence
macro_rules! named_sequences {
    ($($(#[$meta:meta])* $name:ident => $body:expr;)*) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $name() -> $crate::EscapeSequence { $body }
        )*
    };
}

// Private modules (hide internal structure).
mod csi;
mod esc;
mod fe;
mod sgr;

// Public re-exports (flat API) for convenience.
pub use csi::*;
pub use esc::*;
pub use fe::*;
pub use sgr::*;
