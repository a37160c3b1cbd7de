// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # ansi_scope
//!
//! Build ANSI / VT escape sequences, and print styled text that always ends with a
//! terminal soft reset.
//!
//! There are two layers:
//!
//! 1. **Sequence builder**: pure functions that return an [`EscapeSequence`]. Everything
//!    is built by [`build_sequence()`], and the named constructors in [`sequences`]
//!    (re-exported here) cover cursor movement, erase, scroll, DEC private modes, cursor
//!    shapes, SGR attributes and colors. [`sequence_from_name()`] resolves a symbolic
//!    name like `"fg_magenta"` through the [`SequenceName`] vocabulary.
//! 2. **Scoped styling**: [`apply()`] writes one sequence to a sink, and
//!    [`StyledScope`] / [`with_scope()`] / [`styled_print()`] / [`Styler`] write a set
//!    of sequences on entry and exactly one [`soft_reset()`] when the scope ends, on
//!    every exit path.
//!
//! # Example
//!
//! ```
//! use ansi_scope::{StyledScope, cursor_up, fg_magenta, italic, styled_print};
//!
//! assert_eq!(cursor_up(None), "\x1b[1A");
//! assert_eq!(cursor_up(3), "\x1b[3A");
//!
//! let mut sink = Vec::<u8>::new();
//! styled_print("Hello World!", [fg_magenta(), italic()], &mut sink, "\n").unwrap();
//! assert_eq!(sink, b"\x1b[38;5;5m\x1b[3mHello World!\n\x1b[!p");
//!
//! let mut sink = Vec::<u8>::new();
//! {
//!     let mut scope = StyledScope::enter(["bold", "hide_cursor"], &mut sink).unwrap();
//!     scope.print("working...").unwrap();
//! } // Soft reset written here, which also shows the cursor again.
//! assert_eq!(sink, b"\x1b[1m\x1b[?25lworking...\n\x1b[!p");
//! ```
//!
//! # Sinks
//!
//! A sink is any [`std::io::Write`]. It is borrowed and never flushed or closed by the
//! core functions. The `*_default` variants ([`apply_default()`],
//! [`styled_print_default()`], [`Styler::print_default()`]) write to the process
//! stream named by [`StyleConfig`] and flush it.
//!
//! # Logging
//!
//! This crate emits [`tracing`] events (`trace` per sequence written, `debug` on scope
//! enter / exit, `warn` if the reset fails while a scope is dropped). It never installs a
//! subscriber.
//!
//! [`tracing`]: https://docs.rs/tracing

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod constants;
pub mod sequences;

mod config;
mod error;
mod escape_sequence;
mod sequence_name;
mod sequence_source;
mod styled_scope;
mod styler;

// Re-export the public API (flat).
pub use config::*;
pub use constants::DEFAULT_COUNT;
pub use error::*;
pub use escape_sequence::{EscapeSequence, SequenceParts, build_sequence, sizing};
pub use sequence_name::*;
pub use sequence_source::{SequenceFactory, SequenceSource, apply, apply_default,
                          prepare};
pub use sequences::*;
pub use styled_scope::{DEFAULT_VALUE_SEPARATOR, StyledScope, with_scope};
pub use styler::*;
