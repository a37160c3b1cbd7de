// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The formatting primitive every other sequence in this crate is built from.
//!
//! ```text
//! \x1b  [  38;2;255;127;0  m
//!   ↑   ↑  \____________/  ↖ subcode
//!  ESC code     args
//! ```
//!
//! There is no validation of the code or subcode. This is a formatting primitive, not a
//! registry of legal ANSI codes: the caller is trusted with domain correctness.

use std::fmt::{self, Display, Formatter, Write as _};

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::constants::{ARG_SEPARATOR, CHAR_ESC};

pub mod sizing {
    use super::{EscapeSequence, SmallString, SmallVec};

    /// The longest sequence this crate builds by itself is a truecolor SGR, eg:
    /// `\x1b[38;2;255;255;255m` which is 19 bytes. Anything longer spills to the heap.
    pub const SEQUENCE_STORAGE_SIZE: usize = 24;
    pub type InlineSequenceString = SmallString<[u8; SEQUENCE_STORAGE_SIZE]>;

    /// Truecolor SGR has 5 numeric args, the most of any named constructor.
    pub const MAX_INLINE_ARGS: usize = 8;
    pub type InlineVecArgs = SmallVec<[u16; MAX_INLINE_ARGS]>;

    /// Typical styling is a color plus an attribute or two.
    pub const MAX_INLINE_SEQUENCES: usize = 4;
    pub type InlineVecSequences = SmallVec<[EscapeSequence; MAX_INLINE_SEQUENCES]>;
}
use sizing::InlineSequenceString;

/// A well-formed escape sequence: ESC, an introducer code, optional `;` separated
/// decimal arguments, and an optional subcode / terminator.
///
/// The only way to get one is through [`build_sequence()`] or [`SequenceParts::build()`]
/// (which every named constructor uses), so the wrapper layer never hand-assembles a
/// sequence. It is immutable, and equality is string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EscapeSequence(InlineSequenceString);

mod escape_sequence_impl {
    use super::{Display, EscapeSequence, Formatter, fmt};

    impl EscapeSequence {
        #[must_use]
        pub fn as_str(&self) -> &str { self.0.as_str() }

        #[must_use]
        pub fn as_bytes(&self) -> &[u8] { self.0.as_bytes() }
    }

    impl Display for EscapeSequence {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
    }

    impl AsRef<str> for EscapeSequence {
        fn as_ref(&self) -> &str { self.as_str() }
    }

    impl PartialEq<str> for EscapeSequence {
        fn eq(&self, other: &str) -> bool { self.as_str() == other }
    }

    impl PartialEq<&str> for EscapeSequence {
        fn eq(&self, other: &&str) -> bool { self.as_str() == *other }
    }

    impl From<EscapeSequence> for String {
        fn from(value: EscapeSequence) -> Self { value.0.into_string() }
    }
}

/// The parameters used to build an [`EscapeSequence`]. It is a builder input only, and
/// is not retained after [`Self::build()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequenceParts<'a> {
    /// Introducer, eg: `[` for CSI, `[?` for DEC private modes, `N` for SS2.
    pub code: &'a str,
    /// Subcode or terminator, eg: `m` for SGR. `None` and `Some("")` are the same.
    pub subcode: Option<&'a str>,
    pub args: &'a [u16],
}

impl<'a> SequenceParts<'a> {
    #[must_use]
    pub fn new(code: &'a str) -> Self {
        Self {
            code,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn subcode(mut self, subcode: &'a str) -> Self {
        self.subcode = Some(subcode);
        self
    }

    #[must_use]
    pub fn args(mut self, args: &'a [u16]) -> Self {
        self.args = args;
        self
    }

    /// `ESC + code + join(";", args) + subcode`. Numbers are written in decimal without
    /// leading zeros, and there are no stray separators when `args` is empty.
    #[must_use]
    pub fn build(&self) -> EscapeSequence {
        let mut acc = InlineSequenceString::new();
        acc.push(CHAR_ESC);
        acc.push_str(self.code);
        for (index, arg) in self.args.iter().enumerate() {
            if index > 0 {
                acc.push(ARG_SEPARATOR);
            }
            // Writing into an in-memory buffer can't fail.
            let _unused = write!(acc, "{arg}");
        }
        if let Some(subcode) = self.subcode {
            acc.push_str(subcode);
        }
        EscapeSequence(acc)
    }
}

/// Shorthand for [`SequenceParts::build()`].
///
/// ```
/// use ansi_scope::build_sequence;
///
/// assert_eq!(build_sequence("[", Some("m"), &[38, 2, 255, 127, 0]), "\x1b[38;2;255;127;0m");
/// assert_eq!(build_sequence("N", None, &[]), "\x1bN");
/// ```
#[must_use]
pub fn build_sequence(code: &str, subcode: Option<&str>, args: &[u16]) -> EscapeSequence {
    SequenceParts {
        code,
        subcode,
        args,
    }
    .build()
}
