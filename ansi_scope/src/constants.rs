// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequence building blocks: introducers, final bytes, DEC private mode numbers
//! and SGR base codes.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>
//! - <https://learn.microsoft.com/en-us/windows/console/console-virtual-terminal-sequences>

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

/// ESC (0x1B). Every sequence built by this crate starts with it.
pub const CHAR_ESC: char = '\x1b';

/// Separator between numeric arguments, eg: `ESC[38;2;255;127;0m`.
pub const ARG_SEPARATOR: char = ';';

// C1 "Fe" introducers (the byte that follows ESC).

pub const SS2_CODE: &str = "N";
pub const SS3_CODE: &str = "O";
pub const DCS_CODE: &str = "P";
pub const CSI_CODE: &str = "[";
pub const ST_CODE: &str = "\\";
pub const OSC_CODE: &str = "]";
pub const SOS_CODE: &str = "X";
pub const PM_CODE: &str = "^";
pub const APC_CODE: &str = "_";

/// CSI followed by `?`, the introducer of DEC private mode sequences.
pub const CSI_PRIVATE_CODE: &str = "[?";

/// CSI followed by `!`, used by DECSTR (soft terminal reset).
pub const CSI_BANG_CODE: &str = "[!";

// Non-CSI ESC codes.

/// ESC c (RIS): Reset to Initial State.
pub const RIS_CODE: &str = "c";
/// ESC 7 (DECSC): Save cursor position and attributes.
pub const DECSC_CODE: &str = "7";
/// ESC 8 (DECRC): Restore cursor position and attributes.
pub const DECRC_CODE: &str = "8";
/// ESC ( - G0 character set designation intermediate.
pub const G0_CHARSET_CODE: &str = "(";
/// Final byte for ESC ( that selects the DEC Special Graphics (line drawing) set.
pub const CHARSET_DEC_GRAPHICS: &str = "0";
/// Final byte for ESC ( that selects US ASCII.
pub const CHARSET_ASCII: &str = "B";

// CSI final bytes.

pub const CUU_CURSOR_UP: &str = "A";
pub const CUD_CURSOR_DOWN: &str = "B";
pub const CUF_CURSOR_FORWARD: &str = "C";
pub const CUB_CURSOR_BACK: &str = "D";
pub const CNL_CURSOR_NEXT_LINE: &str = "E";
pub const CPL_CURSOR_PREVIOUS_LINE: &str = "F";
pub const CHA_CURSOR_COLUMN: &str = "G";
pub const CUP_CURSOR_POSITION: &str = "H";
pub const ED_ERASE_IN_DISPLAY: &str = "J";
pub const EL_ERASE_IN_LINE: &str = "K";
pub const SU_SCROLL_UP: &str = "S";
pub const SD_SCROLL_DOWN: &str = "T";
pub const HVP_POSITION: &str = "f";
pub const SGR_FINAL: &str = "m";
pub const AUX_PORT_FINAL: &str = "i";
pub const DSR_FINAL: &str = "n";
pub const SCP_SAVE_CURSOR: &str = "s";
pub const RCP_RESTORE_CURSOR: &str = "u";
pub const NUMPAD_FINAL: &str = "~";
/// DECSCUSR is `CSI n SP q`; the space is an intermediate byte.
pub const DECSCUSR_CURSOR_SHAPE: &str = " q";
pub const DECSTR_SOFT_RESET: &str = "p";
pub const PRIVATE_MODE_ENABLE: &str = "h";
pub const PRIVATE_MODE_DISABLE: &str = "l";

/// The count used by cursor movement and scroll sequences when none is given.
pub const DEFAULT_COUNT: u16 = 1;

// DEC private modes.

pub const CURSOR_VISIBILITY: u16   = 25;
pub const FOCUS_REPORT: u16        = 1004;
pub const ALT_SCREEN_BUFFER: u16   = 1049;
pub const BRACKETED_PASTE_MODE: u16 = 2004;

// AUX port and device status report parameters.

pub const AUX_PORT_ON: u16  = 5;
pub const AUX_PORT_OFF: u16 = 4;
pub const DSR_CURSOR_POSITION: u16 = 6;

// SGR base codes. Adding `SGR_EXTENDED_COLOR_OFFSET` selects the extended color form,
// adding `SGR_DEFAULT_COLOR_OFFSET` selects the "default color" form.

pub const FOREGROUND_CODE: u16 = 30;
pub const BACKGROUND_CODE: u16 = 40;
pub const UNDERLINE_CODE: u16  = 50;
pub const SGR_EXTENDED_COLOR_OFFSET: u16 = 8;
pub const SGR_DEFAULT_COLOR_OFFSET: u16  = 9;
/// Sub-parameter selecting an indexed (256 color) palette entry.
pub const SGR_COLOR_INDEXED: u16 = 5;
/// Sub-parameter selecting a 24-bit RGB color.
pub const SGR_COLOR_TRUECOLOR: u16 = 2;
/// Alternative fonts 1..=9 are SGR 11..=19.
pub const SGR_FONT_BASE: u16 = 10;
