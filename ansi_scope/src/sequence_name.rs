// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The closed vocabulary of symbolic sequence names, eg: `"bold"`, `"fg_magenta"`.
//!
//! Names are the snake_case spelling of each [`SequenceName`] variant. Lookup is an
//! exact, case-sensitive match, so `"Bold"` and `"BOLD"` are unknown.

use std::str::FromStr;

use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

#[allow(clippy::wildcard_imports)]
use crate::{AnsiScopeError, EscapeSequence, Result, sequences::*};

/// Every escape sequence that can be resolved from a name. Only sequences without
/// parameters are registered; parameterized ones are reached through
/// [`SequenceSource::Factory`](crate::SequenceSource::Factory).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum SequenceName {
    // Fe.
    SingleShiftTwo,
    SingleShiftThree,
    DeviceControlString,
    StringTerminator,
    OperatingSystemCommand,
    StartOfString,
    PrivacyMessage,
    ApplicationProgramCommand,
    // ESC.
    ResetInitialState,
    DecSaveCursor,
    DecRestoreCursor,
    DecLineDrawing,
    UsAscii,
    SoftReset,
    // CSI.
    AuxPortOn,
    AuxPortOff,
    DeviceStatusReport,
    SaveCurrentCursorPosition,
    RestoreCurrentCursorPosition,
    ShowCursor,
    HideCursor,
    EnableFocusReport,
    DisableFocusReport,
    EnableAlternativeScreenBuffer,
    DisableAlternativeScreenBuffer,
    EnableBracketedPasteMode,
    DisableBracketedPasteMode,
    UserDefinedCursorShape,
    BlinkingBlockCursorShape,
    SteadyBlockCursorShape,
    BlinkingUnderlineCursorShape,
    SteadyUnderlineCursorShape,
    BlinkingBarCursorShape,
    SteadyBarCursorShape,
    Insert,
    Delete,
    PageUp,
    PageDown,
    // SGR attributes.
    Reset,
    Bold,
    Faint,
    Dim,
    Italic,
    Underline,
    SlowBlink,
    RapidBlink,
    Invert,
    Conceal,
    Hide,
    CrossedOut,
    Strikethrough,
    PrimaryFont,
    Fraktur,
    DoubleUnderline,
    NormalIntensity,
    NoItalic,
    NoUnderline,
    NoBlink,
    ProportionalSpacing,
    NoInvert,
    NoConceal,
    Reveal,
    NotCrossedOut,
    NoStrikethrough,
    DefaultForegroundColor,
    DefaultBackgroundColor,
    NoProportionalSpacing,
    Framed,
    Encircled,
    Overlined,
    NotFramedEncircled,
    NotOverlined,
    DefaultUnderlineColor,
    IdeogramUnderline,
    IdeogramDoubleUnderline,
    IdeogramOverline,
    IdeogramDoubleOverline,
    IdeogramStressMarking,
    NoIdeogram,
    Superscript,
    Subscript,
    NoSuperscriptSubscript,
    // SGR bright colors.
    ForegroundBrightBlack,
    ForegroundBrightRed,
    ForegroundBrightGreen,
    ForegroundBrightYellow,
    ForegroundBrightBlue,
    ForegroundBrightMagenta,
    ForegroundBrightCyan,
    ForegroundBrightWhite,
    BackgroundBrightBlack,
    BackgroundBrightRed,
    BackgroundBrightGreen,
    BackgroundBrightYellow,
    BackgroundBrightBlue,
    BackgroundBrightMagenta,
    BackgroundBrightCyan,
    BackgroundBrightWhite,
    // SGR palette colors.
    FgBlack,
    FgRed,
    FgGreen,
    FgYellow,
    FgBlue,
    FgMagenta,
    FgCyan,
    FgWhite,
    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
    UlBlack,
    UlRed,
    UlGreen,
    UlYellow,
    UlBlue,
    UlMagenta,
    UlCyan,
    UlWhite,
}

mod sequence_name_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl SequenceName {
        /// The escape sequence registered under this name.
        #[must_use]
        #[rustfmt::skip]
        #[allow(clippy::too_many_lines)]
        pub fn sequence(self) -> EscapeSequence {
            match self {
                SequenceName::SingleShiftTwo                 => single_shift_two(),
                SequenceName::SingleShiftThree               => single_shift_three(),
                SequenceName::DeviceControlString            => device_control_string(),
                SequenceName::StringTerminator               => string_terminator(),
                SequenceName::OperatingSystemCommand         => operating_system_command(),
                SequenceName::StartOfString                  => start_of_string(),
                SequenceName::PrivacyMessage                 => privacy_message(),
                SequenceName::ApplicationProgramCommand      => application_program_command(),
                SequenceName::ResetInitialState              => reset_initial_state(),
                SequenceName::DecSaveCursor                  => dec_save_cursor(),
                SequenceName::DecRestoreCursor               => dec_restore_cursor(),
                SequenceName::DecLineDrawing                 => dec_line_drawing(),
                SequenceName::UsAscii                        => us_ascii(),
                SequenceName::SoftReset                      => soft_reset(),
                SequenceName::AuxPortOn                      => aux_port_on(),
                SequenceName::AuxPortOff                     => aux_port_off(),
                SequenceName::DeviceStatusReport             => device_status_report(),
                SequenceName::SaveCurrentCursorPosition      => save_current_cursor_position(),
                SequenceName::RestoreCurrentCursorPosition   => restore_current_cursor_position(),
                SequenceName::ShowCursor                     => show_cursor(),
                SequenceName::HideCursor                     => hide_cursor(),
                SequenceName::EnableFocusReport              => enable_focus_report(),
                SequenceName::DisableFocusReport             => disable_focus_report(),
                SequenceName::EnableAlternativeScreenBuffer  => enable_alternative_screen_buffer(),
                SequenceName::DisableAlternativeScreenBuffer => disable_alternative_screen_buffer(),
                SequenceName::EnableBracketedPasteMode       => enable_bracketed_paste_mode(),
                SequenceName::DisableBracketedPasteMode      => disable_bracketed_paste_mode(),
                SequenceName::UserDefinedCursorShape         => user_defined_cursor_shape(),
                SequenceName::BlinkingBlockCursorShape       => blinking_block_cursor_shape(),
                SequenceName::SteadyBlockCursorShape         => steady_block_cursor_shape(),
                SequenceName::BlinkingUnderlineCursorShape   => blinking_underline_cursor_shape(),
                SequenceName::SteadyUnderlineCursorShape     => steady_underline_cursor_shape(),
                SequenceName::BlinkingBarCursorShape         => blinking_bar_cursor_shape(),
                SequenceName::SteadyBarCursorShape           => steady_bar_cursor_shape(),
                SequenceName::Insert                         => numpad_insert(),
                SequenceName::Delete                         => numpad_delete(),
                SequenceName::PageUp                         => numpad_page_up(),
                SequenceName::PageDown                       => numpad_page_down(),
                SequenceName::Reset                          => reset(),
                SequenceName::Bold                           => bold(),
                SequenceName::Faint | SequenceName::Dim      => faint(),
                SequenceName::Italic                         => italic(),
                SequenceName::Underline                      => underline(),
                SequenceName::SlowBlink                      => slow_blink(),
                SequenceName::RapidBlink                     => rapid_blink(),
                SequenceName::Invert                         => invert(),
                SequenceName::Conceal | SequenceName::Hide   => conceal(),
                SequenceName::CrossedOut
                | SequenceName::Strikethrough                => crossed_out(),
                SequenceName::PrimaryFont                    => primary_font(),
                SequenceName::Fraktur                        => fraktur(),
                SequenceName::DoubleUnderline                => double_underline(),
                SequenceName::NormalIntensity                => normal_intensity(),
                SequenceName::NoItalic                       => no_italic(),
                SequenceName::NoUnderline                    => no_underline(),
                SequenceName::NoBlink                        => no_blink(),
                SequenceName::ProportionalSpacing            => proportional_spacing(),
                SequenceName::NoInvert                       => no_invert(),
                SequenceName::NoConceal | SequenceName::Reveal => no_conceal(),
                SequenceName::NotCrossedOut
                | SequenceName::NoStrikethrough              => not_crossed_out(),
                SequenceName::DefaultForegroundColor         => default_foreground_color(),
                SequenceName::DefaultBackgroundColor         => default_background_color(),
                SequenceName::NoProportionalSpacing          => no_proportional_spacing(),
                SequenceName::Framed                         => framed(),
                SequenceName::Encircled                      => encircled(),
                SequenceName::Overlined                      => overlined(),
                SequenceName::NotFramedEncircled             => not_framed_encircled(),
                SequenceName::NotOverlined                   => not_overlined(),
                SequenceName::DefaultUnderlineColor          => default_underline_color(),
                SequenceName::IdeogramUnderline              => ideogram_underline(),
                SequenceName::IdeogramDoubleUnderline        => ideogram_double_underline(),
                SequenceName::IdeogramOverline               => ideogram_overline(),
                SequenceName::IdeogramDoubleOverline         => ideogram_double_overline(),
                SequenceName::IdeogramStressMarking          => ideogram_stress_marking(),
                SequenceName::NoIdeogram                     => no_ideogram(),
                SequenceName::Superscript                    => superscript(),
                SequenceName::Subscript                      => subscript(),
                SequenceName::NoSuperscriptSubscript         => no_superscript_subscript(),
                SequenceName::ForegroundBrightBlack          => foreground_bright_black(),
                SequenceName::ForegroundBrightRed            => foreground_bright_red(),
                SequenceName::ForegroundBrightGreen          => foreground_bright_green(),
                SequenceName::ForegroundBrightYellow         => foreground_bright_yellow(),
                SequenceName::ForegroundBrightBlue           => foreground_bright_blue(),
                SequenceName::ForegroundBrightMagenta        => foreground_bright_magenta(),
                SequenceName::ForegroundBrightCyan           => foreground_bright_cyan(),
                SequenceName::ForegroundBrightWhite          => foreground_bright_white(),
                SequenceName::BackgroundBrightBlack          => background_bright_black(),
                SequenceName::BackgroundBrightRed            => background_bright_red(),
                SequenceName::BackgroundBrightGreen          => background_bright_green(),
                SequenceName::BackgroundBrightYellow         => background_bright_yellow(),
                SequenceName::BackgroundBrightBlue           => background_bright_blue(),
                SequenceName::BackgroundBrightMagenta        => background_bright_magenta(),
                SequenceName::BackgroundBrightCyan           => background_bright_cyan(),
                SequenceName::BackgroundBrightWhite          => background_bright_white(),
                SequenceName::FgBlack                        => fg_black(),
                SequenceName::FgRed                          => fg_red(),
                SequenceName::FgGreen                        => fg_green(),
                SequenceName::FgYellow                       => fg_yellow(),
                SequenceName::FgBlue                         => fg_blue(),
                SequenceName::FgMagenta                      => fg_magenta(),
                SequenceName::FgCyan                         => fg_cyan(),
                SequenceName::FgWhite                        => fg_white(),
                SequenceName::BgBlack                        => bg_black(),
                SequenceName::BgRed                          => bg_red(),
                SequenceName::BgGreen                        => bg_green(),
                SequenceName::BgYellow                       => bg_yellow(),
                SequenceName::BgBlue                         => bg_blue(),
                SequenceName::BgMagenta                      => bg_magenta(),
                SequenceName::BgCyan                         => bg_cyan(),
                SequenceName::BgWhite                        => bg_white(),
                SequenceName::UlBlack                        => ul_black(),
                SequenceName::UlRed                          => ul_red(),
                SequenceName::UlGreen                        => ul_green(),
                SequenceName::UlYellow                       => ul_yellow(),
                SequenceName::UlBlue                         => ul_blue(),
                SequenceName::UlMagenta                      => ul_magenta(),
                SequenceName::UlCyan                         => ul_cyan(),
                SequenceName::UlWhite                        => ul_white(),
            }
        }
    }

    impl From<SequenceName> for EscapeSequence {
        fn from(name: SequenceName) -> Self { name.sequence() }
    }
}

/// Resolve a symbolic name, eg: `"fg_magenta"`, to its escape sequence.
///
/// # Errors
///
/// [`AnsiScopeError::UnknownSequenceName`] if `name` is not registered.
pub fn sequence_from_name(name: &str) -> Result<EscapeSequence> {
    SequenceName::from_str(name)
        .map(SequenceName::sequence)
        .map_err(|_| AnsiScopeError::UnknownSequenceName { name: name.into() })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    use super::*;

    #[test_case("bold", "\x1b[1m")]
    #[test_case("italic", "\x1b[3m")]
    #[test_case("fg_magenta", "\x1b[38;5;5m")]
    #[test_case("soft_reset", "\x1b[!p")]
    #[test_case("show_cursor", "\x1b[?25h")]
    #[test_case("dec_line_drawing", "\x1b(0")]
    #[test_case("page_up", "\x1b[5~")]
    #[test_case("foreground_bright_cyan", "\x1b[96m")]
    fn test_sequence_from_name(name: &str, expected: &str) {
        assert_eq!(sequence_from_name(name).unwrap(), expected);
    }

    #[test_case("dim", "faint")]
    #[test_case("hide", "conceal")]
    #[test_case("strikethrough", "crossed_out")]
    #[test_case("reveal", "no_conceal")]
    #[test_case("no_strikethrough", "not_crossed_out")]
    fn test_aliases_resolve_to_same_sequence(alias: &str, canonical: &str) {
        assert_eq!(
            sequence_from_name(alias).unwrap(),
            sequence_from_name(canonical).unwrap()
        );
    }

    #[test_case("Bold" ; "wrong case")]
    #[test_case("BOLD" ; "upper case")]
    #[test_case("" ; "empty")]
    #[test_case("fg_purple" ; "not registered")]
    #[test_case(" bold" ; "leading space")]
    fn test_unknown_name(name: &str) {
        let result = sequence_from_name(name);
        assert!(matches!(
            result,
            Err(AnsiScopeError::UnknownSequenceName { name: ref it }) if it == name
        ));
    }

    #[test]
    fn test_every_name_round_trips() {
        for name in SequenceName::iter() {
            let key: &'static str = name.into();
            assert_eq!(key, name.to_string());
            assert_eq!(sequence_from_name(key).unwrap(), name.sequence());
            assert!(name.sequence().as_str().starts_with('\x1b'));
        }
        assert_eq!(SequenceName::iter().count(), SequenceName::COUNT);
    }
}
