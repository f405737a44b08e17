use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

fn logger() -> MutexGuard<'static, Option<File>> {
    LOGGER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Opens `path` in append mode. Until this is called every log call is a no-op.
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    *logger() = Some(file);
    Ok(())
}

pub fn log(message: &str) {
    if let Some(file) = logger().as_mut() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(file, "[{}] {}", timestamp, message);
    }
}

/// Logs `value` as a single JSON line tagged with `event`.
pub fn log_json<T: Serialize>(event: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => log(&format!("{} {}", event, json)),
        Err(e) => log(&format!("{} <unserializable: {}>", event, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.log");
        init(&path).unwrap();

        log("Test log message");
        log_json("summary", &vec![1, 2, 3]);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Test log message"));
        assert!(contents.contains("summary [1,2,3]"));
    }

    #[test]
    fn test_logger_init_fails_on_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("quiz.log");
        assert!(init(&path).is_err());
    }
}
