// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test fixtures for `ansi_scope`.
//!
//! - [`StdoutMock`] is a cloneable, capturing [`std::io::Write`] sink. Besides the
//!   concatenated bytes it keeps every `write()` call as its own chunk, so tests can
//!   assert exactly which (and how many) writes reached the sink.
//! - [`FailingWriter`] wraps a [`StdoutMock`] and fails on a chosen write call, to
//!   exercise error paths.
//! - [`create_temp_dir()`] gives a self-deleting [`TempDir`] for tests that write to a
//!   real file.

// Attach sources.
pub mod output_device_fixtures;
pub mod temp_dir;

// Re-export.
pub use output_device_fixtures::*;
pub use temp_dir::*;
