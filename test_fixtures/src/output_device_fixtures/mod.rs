// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod failing_writer;
pub mod stdout_mock;

// Re-export.
pub use failing_writer::*;
pub use stdout_mock::*;
