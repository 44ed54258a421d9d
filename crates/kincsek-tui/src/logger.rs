/// Logger that keeps records in memory so they never draw over the terminal UI
use log::{Level, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

const MAX_LOG_LINES: usize = 5_000;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub message: String,
}

impl LogEntry {
    pub fn format(&self) -> String {
        format!("[{}] {} {}", self.timestamp, self.level, self.message)
    }
}

/// Thread-safe ring of recent log entries
#[derive(Clone)]
pub struct LogBuffer {
    logs: Arc<RwLock<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(RwLock::new(VecDeque::with_capacity(MAX_LOG_LINES))),
        }
    }

    pub fn add_log(&self, entry: LogEntry) {
        let mut logs = self.logs.write().unwrap_or_else(|e| e.into_inner());

        if logs.len() >= MAX_LOG_LINES {
            logs.pop_front();
        }

        logs.push_back(entry);
    }

    pub fn get_recent_logs(&self, count: usize) -> Vec<String> {
        let logs = self.logs.read().unwrap_or_else(|e| e.into_inner());
        let start = logs.len().saturating_sub(count);
        logs.iter()
            .skip(start)
            .map(|entry| entry.format())
            .collect()
    }
}

pub struct BufferedLogger {
    buffer: LogBuffer,
}

impl BufferedLogger {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl log::Log for BufferedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.add_log(LogEntry {
                timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
                level: record.level().to_string(),
                message: format!("{}", record.args()),
            });
        }
    }

    fn flush(&self) {}
}

/// Install the buffered logger and return the buffer it writes to
pub fn init_memory_logger() -> Result<LogBuffer, SetLoggerError> {
    let buffer = LogBuffer::new();
    log::set_boxed_logger(Box::new(BufferedLogger::new(buffer.clone())))?;
    log::set_max_level(log::LevelFilter::Info);
    Ok(buffer)
}
