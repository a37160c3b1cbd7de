// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs::File, io::Write};

use ansi_scope::{AnsiScopeError, StyleConfig, Styler, fg_green, styled_print,
                 with_scope};
use ansi_scope_test_fixtures::create_temp_dir;
use miette::IntoDiagnostic;
use pretty_assertions::assert_eq;

#[test]
fn test_styled_output_to_file() -> miette::Result<()> {
    let temp_dir = create_temp_dir()?;
    let path = temp_dir.join("styled.txt");

    {
        let mut file = File::create(&path).into_diagnostic()?;
        styled_print("ok", [fg_green()], &mut file, "\n")?;

        let styler = Styler::new(["bold"])?
            .with_config(StyleConfig::default().with_line_terminator("\r\n"));
        styler.print("windows", &mut file)?;

        with_scope(["underline"], &mut file, |scope| {
            write!(scope, "raw")?;
            Ok::<_, AnsiScopeError>(())
        })?;
    }

    let contents = std::fs::read_to_string(&path).into_diagnostic()?;
    assert_eq!(
        contents,
        "\x1b[38;5;2mok\n\x1b[!p\x1b[1mwindows\r\n\x1b[!p\x1b[4mraw\x1b[!p"
    );
    Ok(())
}
