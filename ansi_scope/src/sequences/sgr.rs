// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition): `CSI n ; ... m`.
//!
//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>
//!
//! Codes marked "rarely supported" are emitted as is; most terminals ignore them.

use crate::{EscapeSequence,
            constants::{BACKGROUND_CODE, FOREGROUND_CODE, SGR_COLOR_INDEXED,
                        SGR_COLOR_TRUECOLOR, SGR_DEFAULT_COLOR_OFFSET,
                        SGR_EXTENDED_COLOR_OFFSET, SGR_FINAL, SGR_FONT_BASE,
                        UNDERLINE_CODE},
            control_sequence_introducer};

/// `CSI args m`.
///
/// ```
/// use ansi_scope::select_graphical_rendition;
///
/// assert_eq!(select_graphical_rendition(&[38, 5, 16]), "\x1b[38;5;16m");
/// ```
#[must_use]
pub fn select_graphical_rendition(args: &[u16]) -> EscapeSequence {
    control_sequence_introducer(SGR_FINAL, args)
}

fn sgr(code: u16) -> EscapeSequence { select_graphical_rendition(&[code]) }

fn indexed_color(base: u16, index: u8) -> EscapeSequence {
    select_graphical_rendition(&[
        base + SGR_EXTENDED_COLOR_OFFSET,
        SGR_COLOR_INDEXED,
        u16::from(index),
    ])
}

fn truecolor(base: u16, red: u8, green: u8, blue: u8) -> EscapeSequence {
    select_graphical_rendition(&[
        base + SGR_EXTENDED_COLOR_OFFSET,
        SGR_COLOR_TRUECOLOR,
        u16::from(red),
        u16::from(green),
        u16::from(blue),
    ])
}

named_sequences! {
    /// SGR 0. Only resets SGR attributes, see [`crate::soft_reset()`] for more.
    reset => sgr(0);
    bold => sgr(1);
    faint => sgr(2);
    italic => sgr(3);
    underline => sgr(4);
    slow_blink => sgr(5);
    rapid_blink => sgr(6);
    invert => sgr(7);
    /// Hide the text.
    conceal => sgr(8);
    crossed_out => sgr(9);
    primary_font => sgr(10);
    /// Rarely supported.
    fraktur => sgr(20);
    /// Some terminals treat this as "bold off" instead.
    double_underline => sgr(21);
    normal_intensity => sgr(22);
    no_italic => sgr(23);
    /// Also turns off double underline.
    no_underline => sgr(24);
    /// Turns off both blinks.
    no_blink => sgr(25);
    proportional_spacing => sgr(26);
    no_invert => sgr(27);
    /// Reveal concealed text.
    no_conceal => sgr(28);
    not_crossed_out => sgr(29);
    default_foreground_color => sgr(FOREGROUND_CODE + SGR_DEFAULT_COLOR_OFFSET);
    default_background_color => sgr(BACKGROUND_CODE + SGR_DEFAULT_COLOR_OFFSET);
    no_proportional_spacing => sgr(50);
    framed => sgr(51);
    encircled => sgr(52);
    overlined => sgr(53);
    not_framed_encircled => sgr(54);
    not_overlined => sgr(55);
    /// Not standard.
    default_underline_color => sgr(UNDERLINE_CODE + SGR_DEFAULT_COLOR_OFFSET);
    ideogram_underline => sgr(60);
    ideogram_double_underline => sgr(61);
    ideogram_overline => sgr(62);
    ideogram_double_overline => sgr(63);
    ideogram_stress_marking => sgr(64);
    no_ideogram => sgr(65);
    /// mintty.
    superscript => sgr(73);
    /// mintty.
    subscript => sgr(74);
    no_superscript_subscript => sgr(75);
}

/// SGR 11..=19. `n` should be in `1..=9` but is not checked.
#[must_use]
pub fn alternative_font(n: u8) -> EscapeSequence { sgr(SGR_FONT_BASE + u16::from(n)) }

/// 256 color palette foreground, `CSI 38;5;n m`.
#[must_use]
pub fn foreground_color(index: u8) -> EscapeSequence {
    indexed_color(FOREGROUND_CODE, index)
}

/// 24-bit foreground, `CSI 38;2;r;g;b m`.
#[must_use]
pub fn foreground_truecolor(red: u8, green: u8, blue: u8) -> EscapeSequence {
    truecolor(FOREGROUND_CODE, red, green, blue)
}

/// 256 color palette background, `CSI 48;5;n m`.
#[must_use]
pub fn background_color(index: u8) -> EscapeSequence {
    indexed_color(BACKGROUND_CODE, index)
}

/// 24-bit background, `CSI 48;2;r;g;b m`.
#[must_use]
pub fn background_truecolor(red: u8, green: u8, blue: u8) -> EscapeSequence {
    truecolor(BACKGROUND_CODE, red, green, blue)
}

/// 256 color palette underline color, `CSI 58;5;n m`. Not standard.
#[must_use]
pub fn underline_color(index: u8) -> EscapeSequence {
    indexed_color(UNDERLINE_CODE, index)
}

/// 24-bit underline color, `CSI 58;2;r;g;b m`. Not standard.
#[must_use]
pub fn underline_truecolor(red: u8, green: u8, blue: u8) -> EscapeSequence {
    truecolor(UNDERLINE_CODE, red, green, blue)
}

// Bright colors (aixterm, not standard).
named_sequences! {
    foreground_bright_black => sgr(90);
    foreground_bright_red => sgr(91);
    foreground_bright_green => sgr(92);
    foreground_bright_yellow => sgr(93);
    foreground_bright_blue => sgr(94);
    foreground_bright_magenta => sgr(95);
    foreground_bright_cyan => sgr(96);
    foreground_bright_white => sgr(97);
    background_bright_black => sgr(100);
    background_bright_red => sgr(101);
    background_bright_green => sgr(102);
    background_bright_yellow => sgr(103);
    background_bright_blue => sgr(104);
    background_bright_magenta => sgr(105);
    background_bright_cyan => sgr(106);
    background_bright_white => sgr(107);
}

// The first 8 palette entries, by name.
named_sequences! {
    fg_black => foreground_color(0);
    fg_red => foreground_color(1);
    fg_green => foreground_color(2);
    fg_yellow => foreground_color(3);
    fg_blue => foreground_color(4);
    fg_magenta => foreground_color(5);
    fg_cyan => foreground_color(6);
    fg_white => foreground_color(7);
    bg_black => background_color(0);
    bg_red => background_color(1);
    bg_green => background_color(2);
    bg_yellow => background_color(3);
    bg_blue => background_color(4);
    bg_magenta => background_color(5);
    bg_cyan => background_color(6);
    bg_white => background_color(7);
    ul_black => underline_color(0);
    ul_red => underline_color(1);
    ul_green => underline_color(2);
    ul_yellow => underline_color(3);
    ul_blue => underline_color(4);
    ul_magenta => underline_color(5);
    ul_cyan => underline_color(6);
    ul_white => underline_color(7);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_select_graphical_rendition() {
        assert_eq!(select_graphical_rendition(&[38, 5, 16]), "\x1b[38;5;16m");
        assert_eq!(select_graphical_rendition(&[]), "\x1b[m");
    }

    #[test]
    fn test_attributes() {
        assert_eq!(reset(), "\x1b[0m");
        assert_eq!(bold(), "\x1b[1m");
        assert_eq!(italic(), "\x1b[3m");
        assert_eq!(underline(), "\x1b[4m");
        assert_eq!(slow_blink(), "\x1b[5m");
        assert_eq!(rapid_blink(), "\x1b[6m");
        assert_eq!(invert(), "\x1b[7m");
        assert_eq!(conceal(), "\x1b[8m");
        assert_eq!(crossed_out(), "\x1b[9m");
        assert_eq!(overlined(), "\x1b[53m");
        assert_eq!(no_blink(), "\x1b[25m");
        assert_eq!(superscript(), "\x1b[73m");
    }

    #[test]
    fn test_alternative_font() {
        assert_eq!(alternative_font(1), "\x1b[11m");
        assert_eq!(alternative_font(9), "\x1b[19m");
    }

    #[test]
    fn test_truecolor() {
        assert_eq!(foreground_truecolor(255, 255, 255), "\x1b[38;2;255;255;255m");
        assert_eq!(background_truecolor(255, 255, 255), "\x1b[48;2;255;255;255m");
        assert_eq!(underline_truecolor(255, 255, 255), "\x1b[58;2;255;255;255m");
        assert_eq!(foreground_truecolor(175, 215, 135), "\x1b[38;2;175;215;135m");
    }

    #[test]
    fn test_indexed_color() {
        assert_eq!(foreground_color(150), "\x1b[38;5;150m");
        assert_eq!(background_color(150), "\x1b[48;5;150m");
        assert_eq!(underline_color(0), "\x1b[58;5;0m");
        assert_eq!(fg_magenta(), "\x1b[38;5;5m");
        assert_eq!(bg_white(), "\x1b[48;5;7m");
        assert_eq!(ul_red(), "\x1b[58;5;1m");
    }

    #[test]
    fn test_default_colors() {
        assert_eq!(default_foreground_color(), "\x1b[39m");
        assert_eq!(default_background_color(), "\x1b[49m");
        assert_eq!(default_underline_color(), "\x1b[59m");
    }

    #[test]
    fn test_bright_colors() {
        assert_eq!(foreground_bright_black(), "\x1b[90m");
        assert_eq!(foreground_bright_white(), "\x1b[97m");
        assert_eq!(background_bright_black(), "\x1b[100m");
        assert_eq!(background_bright_white(), "\x1b[107m");
    }
}
