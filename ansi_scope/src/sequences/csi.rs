// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI based sequences: cursor movement and shape, erase, scroll, DEC private modes,
//! numpad keys.

use crate::{EscapeSequence, build_sequence,
            constants::{ALT_SCREEN_BUFFER, AUX_PORT_FINAL, AUX_PORT_OFF, AUX_PORT_ON,
                        BRACKETED_PASTE_MODE, CHA_CURSOR_COLUMN, CNL_CURSOR_NEXT_LINE,
                        CPL_CURSOR_PREVIOUS_LINE, CSI_PRIVATE_CODE, CUB_CURSOR_BACK,
                        CUD_CURSOR_DOWN, CUF_CURSOR_FORWARD, CUP_CURSOR_POSITION,
                        CURSOR_VISIBILITY, CUU_CURSOR_UP, DECSCUSR_CURSOR_SHAPE,
                        DEFAULT_COUNT, DSR_CURSOR_POSITION, DSR_FINAL,
                        ED_ERASE_IN_DISPLAY, EL_ERASE_IN_LINE, FOCUS_REPORT, HVP_POSITION,
                        NUMPAD_FINAL, PRIVATE_MODE_DISABLE, PRIVATE_MODE_ENABLE,
                        RCP_RESTORE_CURSOR, SCP_SAVE_CURSOR, SD_SCROLL_DOWN,
                        SU_SCROLL_UP},
            control_sequence_introducer as csi};

fn count_or_default(n: impl Into<Option<u16>>) -> u16 { n.into().unwrap_or(DEFAULT_COUNT) }

// Cursor movement.

/// `CSI n A` (CUU). `None` moves by 1.
///
/// ```
/// use ansi_scope::cursor_up;
///
/// assert_eq!(cursor_up(None), cursor_up(1));
/// assert_eq!(cursor_up(3), "\x1b[3A");
/// ```
#[must_use]
pub fn cursor_up(n: impl Into<Option<u16>>) -> EscapeSequence {
    csi(CUU_CURSOR_UP, &[count_or_default(n)])
}

/// `CSI n B` (CUD). `None` moves by 1.
#[must_use]
pub fn cursor_down(n: impl Into<Option<u16>>) -> EscapeSequence {
    csi(CUD_CURSOR_DOWN, &[count_or_default(n)])
}

/// `CSI n C` (CUF). `None` moves by 1.
#[must_use]
pub fn cursor_forward(n: impl Into<Option<u16>>) -> EscapeSequence {
    csi(CUF_CURSOR_FORWARD, &[count_or_default(n)])
}

/// `CSI n D` (CUB). `None` moves by 1.
#[must_use]
pub fn cursor_back(n: impl Into<Option<u16>>) -> EscapeSequence {
    csi(CUB_CURSOR_BACK, &[count_or_default(n)])
}

/// `CSI n E` (CNL): beginning of the line `n` lines down.
#[must_use]
pub fn cursor_next_line(n: impl Into<Option<u16>>) -> EscapeSequence {
    csi(CNL_CURSOR_NEXT_LINE, &[count_or_default(n)])
}

/// `CSI n F` (CPL): beginning of the line `n` lines up.
#[must_use]
pub fn cursor_previous_line(n: impl Into<Option<u16>>) -> EscapeSequence {
    csi(CPL_CURSOR_PREVIOUS_LINE, &[count_or_default(n)])
}

/// `CSI n G` (CHA): move to absolute column `n` (1-based).
#[must_use]
pub fn cursor_horizontal_absolute(n: impl Into<Option<u16>>) -> EscapeSequence {
    csi(CHA_CURSOR_COLUMN, &[count_or_default(n)])
}

/// `CSI n ; m H` (CUP): row `n`, column `m`, both 1-based and defaulting to 1.
#[must_use]
pub fn cursor_position(
    n: impl Into<Option<u16>>,
    m: impl Into<Option<u16>>,
) -> EscapeSequence {
    csi(CUP_CURSOR_POSITION, &[count_or_default(n), count_or_default(m)])
}

/// `CSI n ; m f` (HVP). Same as [`cursor_position()`] on most terminals.
#[must_use]
pub fn horizontal_vertical_position(
    n: impl Into<Option<u16>>,
    m: impl Into<Option<u16>>,
) -> EscapeSequence {
    csi(HVP_POSITION, &[count_or_default(n), count_or_default(m)])
}

// Erase & scroll.

/// `CSI n J` (ED). There is no default: 0 clears to the end of the screen, 1 to the
/// beginning, 2 the entire screen, 3 the entire screen and scrollback.
#[must_use]
pub fn erase_in_display(n: u16) -> EscapeSequence { csi(ED_ERASE_IN_DISPLAY, &[n]) }

/// `CSI n K` (EL). 0 clears to the end of the line, 1 to the beginning, 2 the line.
#[must_use]
pub fn erase_in_line(n: u16) -> EscapeSequence { csi(EL_ERASE_IN_LINE, &[n]) }

/// `CSI n S` (SU). `None` scrolls by 1.
#[must_use]
pub fn scroll_up(n: impl Into<Option<u16>>) -> EscapeSequence {
    csi(SU_SCROLL_UP, &[count_or_default(n)])
}

/// `CSI n T` (SD). `None` scrolls by 1.
#[must_use]
pub fn scroll_down(n: impl Into<Option<u16>>) -> EscapeSequence {
    csi(SD_SCROLL_DOWN, &[count_or_default(n)])
}

// DEC private modes.

/// Direction of a DEC private mode toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeToggle {
    /// `CSI ? n h` (DECSET).
    Enable,
    /// `CSI ? n l` (DECRST).
    Disable,
}

/// The shared primitive behind every enable / disable pair below.
#[must_use]
pub fn private_mode(toggle: ModeToggle, mode: u16) -> EscapeSequence {
    let subcode = match toggle {
        ModeToggle::Enable => PRIVATE_MODE_ENABLE,
        ModeToggle::Disable => PRIVATE_MODE_DISABLE,
    };
    build_sequence(CSI_PRIVATE_CODE, Some(subcode), &[mode])
}

#[must_use]
pub fn enable_private_mode(mode: u16) -> EscapeSequence {
    private_mode(ModeToggle::Enable, mode)
}

#[must_use]
pub fn disable_private_mode(mode: u16) -> EscapeSequence {
    private_mode(ModeToggle::Disable, mode)
}

named_sequences! {
    show_cursor => enable_private_mode(CURSOR_VISIBILITY);
    hide_cursor => disable_private_mode(CURSOR_VISIBILITY);
    /// The terminal reports focus in / out as `CSI I` / `CSI O`.
    enable_focus_report => enable_private_mode(FOCUS_REPORT);
    disable_focus_report => disable_private_mode(FOCUS_REPORT);
    enable_alternative_screen_buffer => enable_private_mode(ALT_SCREEN_BUFFER);
    disable_alternative_screen_buffer => disable_private_mode(ALT_SCREEN_BUFFER);
    /// Pasted text arrives wrapped in `CSI 200~` ... `CSI 201~`.
    enable_bracketed_paste_mode => enable_private_mode(BRACKETED_PASTE_MODE);
    disable_bracketed_paste_mode => disable_private_mode(BRACKETED_PASTE_MODE);
}

// Misc CSI.

named_sequences! {
    aux_port_on => csi(AUX_PORT_FINAL, &[AUX_PORT_ON]);
    aux_port_off => csi(AUX_PORT_FINAL, &[AUX_PORT_OFF]);
    /// `CSI 6 n` (DSR): the terminal answers with the cursor position.
    device_status_report => csi(DSR_FINAL, &[DSR_CURSOR_POSITION]);
    /// `CSI s` (SCP / SCOSC).
    save_current_cursor_position => csi(SCP_SAVE_CURSOR, &[]);
    /// `CSI u` (RCP / SCORC).
    restore_current_cursor_position => csi(RCP_RESTORE_CURSOR, &[]);
}

// Cursor shapes.

/// `CSI n SP q` (DECSCUSR).
#[must_use]
pub fn cursor_shape(n: u16) -> EscapeSequence { csi(DECSCUSR_CURSOR_SHAPE, &[n]) }

named_sequences! {
    user_defined_cursor_shape => cursor_shape(0);
    blinking_block_cursor_shape => cursor_shape(1);
    steady_block_cursor_shape => cursor_shape(2);
    blinking_underline_cursor_shape => cursor_shape(3);
    steady_underline_cursor_shape => cursor_shape(4);
    blinking_bar_cursor_shape => cursor_shape(5);
    steady_bar_cursor_shape => cursor_shape(6);
}

// Numpad and function keys.

/// `CSI n ~`.
#[must_use]
pub fn numpad(n: u16) -> EscapeSequence { csi(NUMPAD_FINAL, &[n]) }

named_sequences! {
    numpad_insert => numpad(2);
    numpad_delete => numpad(3);
    numpad_page_up => numpad(5);
    numpad_page_down => numpad(6);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(cursor_up, 'A')]
    #[test_case(cursor_down, 'B')]
    #[test_case(cursor_forward, 'C')]
    #[test_case(cursor_back, 'D')]
    #[test_case(cursor_next_line, 'E')]
    #[test_case(cursor_previous_line, 'F')]
    #[test_case(cursor_horizontal_absolute, 'G')]
    #[test_case(scroll_up, 'S')]
    #[test_case(scroll_down, 'T')]
    fn test_count_defaults_to_one(
        constructor: fn(Option<u16>) -> EscapeSequence,
        final_byte: char,
    ) {
        assert_eq!(constructor(None), format!("\x1b[1{final_byte}").as_str());
        assert_eq!(constructor(Some(1)), constructor(None));
        assert_eq!(constructor(Some(3)), format!("\x1b[3{final_byte}").as_str());
    }

    #[test]
    fn test_cursor_up() {
        assert_eq!(cursor_up(None), cursor_up(1));
        assert_eq!(cursor_up(None), "\x1b[1A");
        assert_eq!(cursor_up(3), "\u{001b}[3A");
    }

    #[test_case(None, None, "\x1b[1;1H")]
    #[test_case(Some(3), None, "\x1b[3;1H")]
    #[test_case(None, Some(3), "\x1b[1;3H")]
    #[test_case(Some(3), Some(3), "\x1b[3;3H")]
    fn test_cursor_position(n: Option<u16>, m: Option<u16>, expected: &str) {
        assert_eq!(cursor_position(n, m), expected);
    }

    #[test_case(None, None, "\x1b[1;1f")]
    #[test_case(Some(3), None, "\x1b[3;1f")]
    #[test_case(Some(3), Some(4), "\x1b[3;4f")]
    #[test_case(None, Some(4), "\x1b[1;4f")]
    fn test_horizontal_vertical_position(n: Option<u16>, m: Option<u16>, expected: &str) {
        assert_eq!(horizontal_vertical_position(n, m), expected);
    }

    #[test]
    fn test_erase() {
        assert_eq!(erase_in_display(2), "\u{001b}[2J");
        assert_eq!(erase_in_display(1), "\x1b[1J");
        assert_eq!(erase_in_line(1), "\x1b[1K");
    }

    #[test]
    fn test_private_mode_pairs() {
        assert_eq!(show_cursor(), "\x1b[?25h");
        assert_eq!(hide_cursor(), "\x1b[?25l");
        assert_eq!(enable_focus_report(), "\x1b[?1004h");
        assert_eq!(disable_focus_report(), "\x1b[?1004l");
        assert_eq!(enable_alternative_screen_buffer(), "\x1b[?1049h");
        assert_eq!(disable_alternative_screen_buffer(), "\x1b[?1049l");
        assert_eq!(enable_bracketed_paste_mode(), "\x1b[?2004h");
        assert_eq!(disable_bracketed_paste_mode(), "\x1b[?2004l");
        assert_eq!(private_mode(ModeToggle::Enable, 7), enable_private_mode(7));
    }

    #[test]
    fn test_misc_csi() {
        assert_eq!(aux_port_on(), "\x1b[5i");
        assert_eq!(aux_port_off(), "\x1b[4i");
        assert_eq!(device_status_report(), "\x1b[6n");
        assert_eq!(save_current_cursor_position(), "\x1b[s");
        assert_eq!(restore_current_cursor_position(), "\x1b[u");
    }

    #[test]
    fn test_cursor_shape() {
        assert_eq!(cursor_shape(0), "\x1b[0 q");
        assert_eq!(user_defined_cursor_shape(), "\x1b[0 q");
        assert_eq!(steady_bar_cursor_shape(), "\x1b[6 q");
    }

    #[test]
    fn test_numpad() {
        assert_eq!(numpad_insert(), "\x1b[2~");
        assert_eq!(numpad_delete(), "\x1b[3~");
        assert_eq!(numpad_page_up(), "\x1b[5~");
        assert_eq!(numpad_page_down(), "\x1b[6~");
    }
}
