//! Console Logger
//!
//! `tracing` output for the browser. Every formatted event goes to the
//! `console.*` method matching its level (stderr off wasm32) and is kept in
//! a bounded buffer of recent lines.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::MakeWriter;

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

/// Circular buffer of the most recent log lines
#[derive(Clone, Debug)]
pub struct RecentLines {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl RecentLines {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        // A panic while logging must not take the buffer down with it
        match self.lines.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&self, line: String) {
        let mut lines = self.lock();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Copy of the buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    /// The last `n` lines, oldest first
    pub fn tail(&self, n: usize) -> Vec<String> {
        let lines = self.lock();
        let skip = lines.len().saturating_sub(n);
        lines.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

/// `MakeWriter` handing out one [`ConsoleWriter`] per event
#[derive(Clone, Debug)]
pub struct ConsoleMakeWriter {
    recent: RecentLines,
}

impl ConsoleMakeWriter {
    pub fn new(recent: RecentLines) -> Self {
        Self { recent }
    }

    fn writer(&self, level: Level) -> ConsoleWriter {
        ConsoleWriter {
            level,
            buf: Vec::new(),
            recent: self.recent.clone(),
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.writer(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.writer(*meta.level())
    }
}

/// Collects one formatted event and emits it when dropped
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
    recent: RecentLines,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let text = text.trim_end();
        if text.is_empty() {
            return;
        }
        emit(self.level, text);
        self.recent.push(text.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, text: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(text);
    if level == Level::ERROR {
        console::error_1(&value);
    } else if level == Level::WARN {
        console::warn_1(&value);
    } else if level == Level::INFO {
        console::info_1(&value);
    } else if level == Level::DEBUG {
        console::debug_1(&value);
    } else {
        console::log_1(&value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, text: &str) {
    eprintln!("{}", text);
}

/// Install the global subscriber.
///
/// Returns the buffer of recent lines. Calling this twice keeps the first
/// subscriber and hands back a fresh, unused buffer.
pub fn init(level: Level, capacity: usize) -> RecentLines {
    let recent = RecentLines::new(capacity);
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter::new(recent.clone()))
        .with_max_level(level)
        .with_ansi(false)
        .with_target(true)
        .with_timer(ChronoLocal::new("%H:%M:%S%.3f".to_string()))
        .try_init();

    if let Err(e) = result {
        emit(Level::WARN, &format!("console logger not installed: {}", e));
    }
    recent
}
