// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use ansi_scope::{AnsiScopeError, SequenceName, SequenceSource, apply, build_sequence,
                 erase_in_display, prepare, select_graphical_rendition,
                 sequence_from_name};
use ansi_scope_test_fixtures::StdoutMock;
use miette::Diagnostic;
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;
use test_case::test_case;

#[test]
fn test_apply_by_name_matches_apply_by_value_for_every_name() {
    for name in SequenceName::iter() {
        let key: &'static str = name.into();

        let mut by_name = StdoutMock::new();
        let mut by_value = StdoutMock::new();
        apply(key, &mut by_name).unwrap();
        apply(name.sequence(), &mut by_value).unwrap();

        assert_eq!(by_name.get_copy_of_buffer(), by_value.get_copy_of_buffer());
        assert_eq!(by_name.write_count(), 1);
    }
}

#[test_case("fg_magenta")]
#[test_case("bold")]
#[test_case("soft_reset")]
#[test_case("enable_bracketed_paste_mode")]
fn test_name_lookup_is_exact(name: &str) {
    assert!(sequence_from_name(name).is_ok());
    assert!(sequence_from_name(&name.to_uppercase()).is_err());
    assert!(sequence_from_name(&format!("{name} ")).is_err());
}

#[test]
fn test_unknown_name_error_reports_name_and_code() {
    let error = sequence_from_name("fg_orange").unwrap_err();
    assert_eq!(
        error.to_string(),
        "No escape sequence is registered under the name 'fg_orange'"
    );
    assert_eq!(
        error.code().map(|it| it.to_string()).as_deref(),
        Some("ansi_scope::registry::unknown_sequence_name")
    );
}

fn erase_in_display_from_args(args: &[u16]) -> ansi_scope::EscapeSequence {
    erase_in_display(args.first().copied().unwrap_or_default())
}

#[test]
fn test_factory_is_called_with_args() {
    let mut sink = StdoutMock::new();
    apply(SequenceSource::factory(erase_in_display_from_args, &[2]), &mut sink).unwrap();
    apply(
        SequenceSource::factory(select_graphical_rendition, &[38, 5, 16]),
        &mut sink,
    )
    .unwrap();
    assert_eq!(sink.get_writes_as_strings(), vec!["\x1b[2J", "\x1b[38;5;16m"]);
}

#[test]
fn test_literal_passes_through_unchanged() {
    let custom = build_sequence("]", Some("\x07"), &[0]);
    assert_eq!(prepare(custom.clone()).unwrap(), custom);
    assert!(matches!(
        prepare("not_a_name"),
        Err(AnsiScopeError::UnknownSequenceName { .. })
    ));
}

#[test]
fn test_wire_format_examples() {
    assert_eq!(ansi_scope::cursor_up(3), "\x1b[3A");
    assert_eq!(
        ansi_scope::foreground_truecolor(255, 127, 0),
        "\x1b[38;2;255;127;0m"
    );
    assert_eq!(ansi_scope::soft_reset(), "\x1b[!p");
}
