// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with `RUST_LOG=ansi_scope=trace cargo run --example demo` to see every sequence
//! written. Logs go to stderr so they don't mix with the styled stdout output.

use std::{fs::File, io::Write};

use ansi_scope::{AnsiScopeError, SequenceSource, StyleConfig, StyledScope, Styler,
                 apply_default, background_truecolor, bold, cursor_up, erase_in_line,
                 fg_magenta, foreground_truecolor, italic, select_graphical_rendition,
                 styled_print, styled_print_default, underline, with_scope};
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = StyleConfig::default();

    // One shot print, by value and by name.
    {
        styled_print_default("Hello World!", [fg_magenta(), italic()], &config)?;
        styled_print_default("Hello again, by name.", ["fg_cyan", "bold"], &config)?;
        styled_print_default(
            "Truecolor foreground and background.",
            [
                foreground_truecolor(50, 50, 50),
                background_truecolor(100, 200, 1),
            ],
            &config,
        )?;
    }

    // A factory called with args at apply time.
    {
        apply_default(
            SequenceSource::factory(select_graphical_rendition, &[38, 5, 208]),
            &config,
        )?;
        styled_print_default("Orange (via a factory), then reset.", ["underline"], &config)?;
    }

    // Reusable style set.
    {
        let warning = Styler::new(["bold", "fg_yellow"])?;
        warning.print_default("warning: this is reusable")?;
        warning.print_default("warning: and again")?;
        warning.scoped_default(|scope| {
            scope.print("a scope on the default sink")?;
            scope.apply("strikethrough")?;
            scope.print_values(&[&"one", &2, &3.0], " | ")?;
            Ok::<_, AnsiScopeError>(())
        })?;
    }

    // Scope on an explicit sink, with a body that fails. The reset still happens.
    {
        let mut stdout = std::io::stdout().lock();
        let result: Result<(), AnsiScopeError> =
            with_scope([bold(), underline()], &mut stdout, |scope| {
                scope.print("this line is bold and underlined")?;
                Err(AnsiScopeError::UnknownSequenceName {
                    name: "simulated".into(),
                })
            });
        if let Err(error) = result {
            println!("body failed with: {error}");
        }
        stdout.flush().into_diagnostic()?;
    }

    // Move the cursor up and rewrite the previous line.
    {
        let mut stdout = std::io::stdout().lock();
        let mut scope = StyledScope::enter([cursor_up(None), erase_in_line(2)], &mut stdout)?;
        scope.print("(the previous line was replaced)")?;
        scope.exit()?;
        stdout.flush().into_diagnostic()?;
    }

    // Any `Write` works as a sink, eg: a file.
    {
        let path = std::env::temp_dir().join("ansi_scope_demo.txt");
        let mut file = File::create(&path).into_diagnostic()?;
        styled_print("written to a file", ["bold", "fg_green"], &mut file, "\n")?;
        println!("wrote styled text to {}", path.display());
    }

    Ok(())
}
