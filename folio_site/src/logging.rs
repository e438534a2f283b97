// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `tracing` output routed to the browser console.
//!
//! Each formatted event is buffered and handed to the console method that
//! matches its level when the writer is dropped, so one event is one console
//! entry.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Installs the panic hook and a global fmt subscriber at `max_level`.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub(crate) fn init(max_level: Level) {
    console_error_panic_hook::set_once();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("logging already initialized");
    }
}

/// Console methods, by severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConsoleLevel {
    Debug,
    Log,
    Warn,
    Error,
}

impl ConsoleLevel {
    fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Log,
            _ => Self::Debug,
        }
    }

    fn emit(self, line: &str) {
        let line = wasm_bindgen::JsValue::from_str(line);
        match self {
            Self::Debug => web_sys::console::debug_1(&line),
            Self::Log => web_sys::console::log_1(&line),
            Self::Warn => web_sys::console::warn_1(&line),
            Self::Error => web_sys::console::error_1(&line),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::for_level(meta.level()))
    }
}

#[derive(Debug)]
struct ConsoleWriter {
    level: ConsoleLevel,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: ConsoleLevel) -> Self {
        Self {
            level,
            buf: Vec::with_capacity(128),
        }
    }

    fn take_line(&mut self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end_matches('\n');
        let line = (!line.is_empty()).then(|| line.to_owned());
        self.buf.clear();
        line
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(line) = self.take_line() {
            self.level.emit(&line);
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.take_line() {
            self.level.emit(&line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(ConsoleLevel::for_level(&Level::ERROR), ConsoleLevel::Error);
        assert_eq!(ConsoleLevel::for_level(&Level::WARN), ConsoleLevel::Warn);
        assert_eq!(ConsoleLevel::for_level(&Level::INFO), ConsoleLevel::Log);
        assert_eq!(ConsoleLevel::for_level(&Level::TRACE), ConsoleLevel::Debug);
    }

    #[test]
    fn buffered_event_becomes_one_line() {
        let mut w = ConsoleWriter::new(ConsoleLevel::Log);
        w.write_all(b"INFO folio_site: ").unwrap();
        w.write_all(b"page booted\n").unwrap();
        assert_eq!(w.take_line().as_deref(), Some("INFO folio_site: page booted"));
        assert_eq!(w.take_line(), None);
    }
}
