// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Plain ESC sequences (no CSI), character set designation, and the soft reset.
//!
//! `ESC 7` / `ESC 8` predate the CSI equivalents `ESC[s` / `ESC[u`; both forms are
//! still around for backward compatibility.

use crate::{EscapeSequence, build_sequence,
            constants::{CHARSET_ASCII, CHARSET_DEC_GRAPHICS, CSI_BANG_CODE,
                        DECRC_CODE, DECSC_CODE, DECSTR_SOFT_RESET, G0_CHARSET_CODE,
                        RIS_CODE}};

named_sequences! {
    /// `ESC c` (RIS): full terminal reset. Clears the screen and the scrollback on most
    /// terminals, which is usually more than you want. See [`soft_reset()`].
    reset_initial_state => build_sequence(RIS_CODE, None, &[]);
    /// `ESC 7` (DECSC): save cursor position and attributes.
    dec_save_cursor => build_sequence(DECSC_CODE, None, &[]);
    /// `ESC 8` (DECRC): restore cursor position and attributes.
    dec_restore_cursor => build_sequence(DECRC_CODE, None, &[]);
    /// `ESC ( 0`: box drawing characters.
    dec_line_drawing => designate_charset(CHARSET_DEC_GRAPHICS);
    /// `ESC ( B`.
    us_ascii => designate_charset(CHARSET_ASCII);
    /// `CSI ! p` (DECSTR): soft terminal reset.
    ///
    /// Unlike SGR reset (`CSI 0 m`) this also reverts non-SGR state such as cursor
    /// visibility, and unlike [`reset_initial_state()`] it leaves the screen contents
    /// alone. Every styling scope ends with this sequence.
    soft_reset => build_sequence(CSI_BANG_CODE, Some(DECSTR_SOFT_RESET), &[]);
}

/// `ESC ( x`: designate the G0 character set.
#[must_use]
pub fn designate_charset(subcode: &str) -> EscapeSequence {
    build_sequence(G0_CHARSET_CODE, Some(subcode), &[])
}
