use std::io;

use anyhow::{Result, anyhow};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt};
use wasm_bindgen::JsValue;

pub(crate) const DEFAULT_LOG_LEVEL: &str = match option_env!("POSTS_LOG_LEVEL") {
    Some(value) => value,
    None => "info",
};

/// Настраивает `tracing` с выводом в консоль браузера.
///
/// Без таймстемпов: на wasm32 системных часов нет.
pub(crate) fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Копит одно событие и отдаёт его в `console` при drop.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
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
        let Some(line) = take_line(&mut self.buf) else {
            return;
        };
        let line = JsValue::from_str(&line);
        if self.level == Level::ERROR {
            web_sys::console::error_1(&line);
        } else if self.level == Level::WARN {
            web_sys::console::warn_1(&line);
        } else if self.level == Level::INFO {
            web_sys::console::info_1(&line);
        } else {
            web_sys::console::debug_1(&line);
        }
    }
}

fn take_line(buf: &mut Vec<u8>) -> Option<String> {
    let raw = std::mem::take(buf);
    let text = String::from_utf8_lossy(&raw);
    let line = text.trim_end();
    if line.is_empty() {
        return None;
    }
    Some(line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_line_trims_trailing_newline() {
        let mut buf = b"INFO posts fetched count=3\n".to_vec();
        assert_eq!(take_line(&mut buf).as_deref(), Some("INFO posts fetched count=3"));
        assert!(buf.is_empty());
    }

    #[test]
    fn take_line_skips_blank_output() {
        let mut buf = b" \n".to_vec();
        assert!(take_line(&mut buf).is_none());
    }
}
