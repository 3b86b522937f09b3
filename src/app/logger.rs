use once_cell::sync::Lazy;
use std::fmt::Arguments;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

/// How a run-log line is tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    fn tag(self) -> &'static str {
        match self {
            Severity::Info => "",
            Severity::Error => "ERROR: ",
        }
    }
}

/// The run log of one `run_app` call.
struct RunLog {
    writer: BufWriter<File>,
    lines: usize,
}

impl RunLog {
    fn write(&mut self, severity: Severity, args: Arguments<'_>) -> io::Result<()> {
        writeln!(self.writer, "{}{}", severity.tag(), args)?;
        self.lines += 1;
        Ok(())
    }
}

// Unset until `init_global_logger`; lines recorded before that are dropped.
static RUN_LOG: Lazy<Mutex<Option<RunLog>>> = Lazy::new(|| Mutex::new(None));

fn with_run_log<T>(f: impl FnOnce(&mut RunLog) -> io::Result<T>) -> io::Result<Option<T>> {
    let mut guard = RUN_LOG
        .lock()
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "run log mutex poisoned"))?;
    guard.as_mut().map(f).transpose()
}

/// Opens `path` as the run log, replacing any log from an earlier run.
pub fn init_global_logger(path: impl AsRef<Path>) -> io::Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    let mut guard = RUN_LOG
        .lock()
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "run log mutex poisoned"))?;
    *guard = Some(RunLog { writer, lines: 0 });
    Ok(())
}

/// Appends one line. A failed write goes to stderr instead.
pub fn record(severity: Severity, args: Arguments<'_>) {
    if let Err(e) = with_run_log(|log| log.write(severity, args)) {
        eprintln!("[WARNING] run log write failed ({}): {}{}", e, severity.tag(), args);
    }
}

/// Pushes buffered lines to disk.
pub fn flush_global_logger() -> io::Result<()> {
    with_run_log(|log| log.writer.flush()).map(|_| ())
}

/// Lines recorded since the log was opened, zero when it never was.
pub fn lines_written() -> usize {
    with_run_log(|log| Ok(log.lines))
        .ok()
        .flatten()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_tagged_lines_and_counts_them() {
        let path = std::env::temp_dir().join(format!("mathpath-log-{}.log", std::process::id()));
        init_global_logger(&path).unwrap();
        record(Severity::Info, format_args!("level {}", 3));
        record(Severity::Error, format_args!("no path after {} attempts", 1000));
        flush_global_logger().unwrap();

        assert_eq!(lines_written(), 2);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "level 3\nERROR: no path after 1000 attempts\n");
        std::fs::remove_file(&path).ok();
    }
}
