// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Result, Write},
          sync::{Arc, Mutex, MutexGuard, PoisonError}};

use smallvec::SmallVec;
use strip_ansi_escapes::strip;

/// Inline storage for the bytes of a single `write()` call. Escape sequences are short,
/// so most chunks never spill to the heap.
pub type WriteChunk = SmallVec<[u8; 32]>;

#[derive(Debug, Default)]
struct Recording {
    buffer: Vec<u8>,
    chunks: Vec<WriteChunk>,
}

/// You can safely clone this struct, since it only contains an `Arc<Mutex<..>>`. The
/// inner recording is not cloned, just the [Arc]. Keep one clone in the test and hand
/// the other one (or a `&mut` to it) to the code under test.
///
/// The main constructors are:
/// - [`StdoutMock::default`]
/// - [`StdoutMock::new`]
#[derive(Debug, Clone, Default)]
pub struct StdoutMock {
    recording: Arc<Mutex<Recording>>,
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    fn lock(&self) -> MutexGuard<'_, Recording> {
        self.recording.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StdoutMock {
    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> { self.lock().buffer.clone() }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.lock().buffer).into_owned()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let stripped = strip(&self.lock().buffer);
        String::from_utf8_lossy(&stripped).into_owned()
    }

    /// Every `write()` call that reached this sink, in order, one string per call.
    #[must_use]
    pub fn get_writes_as_strings(&self) -> Vec<String> {
        self.lock()
            .chunks
            .iter()
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect()
    }

    #[must_use]
    pub fn write_count(&self) -> usize { self.lock().chunks.len() }

    /// How many `write()` calls carried exactly `needle`.
    #[must_use]
    pub fn count_writes_equal_to(&self, needle: &str) -> usize {
        self.lock()
            .chunks
            .iter()
            .filter(|chunk| chunk.as_slice() == needle.as_bytes())
            .count()
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let mut recording = self.lock();
        recording.buffer.extend_from_slice(buf);
        recording.chunks.push(WriteChunk::from_slice(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
