use parking_lot::Mutex;
/// Debugging infrastructure for par-workbench
///
/// Controlled by DEBUG_LEVEL environment variable:
/// - 0 or unset: No debugging
/// - 1: Errors only
/// - 2: Info level (layout mutations, focus changes)
/// - 3: Debug level (drag gestures, hit tests)
/// - 4: Trace level (every operation, detailed info)
///
/// All output goes to par_workbench_debug.log in the system temp directory,
/// keeping debug output separate from the tree dumps printed on stdout.
///
/// The `log` facade is routed into the same file by [`init_log_bridge`].
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl DebugLevel {
    fn from_env() -> Self {
        match std::env::var("DEBUG_LEVEL") {
            Ok(val) => Self::parse(&val),
            Err(_) => DebugLevel::Off,
        }
    }

    /// Parse a DEBUG_LEVEL value: 0-4 or a level name
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match value.parse::<u8>() {
            Ok(0) => DebugLevel::Off,
            Ok(1) => DebugLevel::Error,
            Ok(2) => DebugLevel::Info,
            Ok(3) => DebugLevel::Debug,
            Ok(4) => DebugLevel::Trace,
            Ok(_) => DebugLevel::Off,
            Err(_) => value
                .parse::<log::LevelFilter>()
                .map(Self::from)
                .unwrap_or(DebugLevel::Off),
        }
    }

    fn label(self) -> &'static str {
        match self {
            DebugLevel::Off => "OFF  ",
            DebugLevel::Error => "ERROR",
            DebugLevel::Warn => "WARN ",
            DebugLevel::Info => "INFO ",
            DebugLevel::Debug => "DEBUG",
            DebugLevel::Trace => "TRACE",
        }
    }
}

impl From<log::LevelFilter> for DebugLevel {
    fn from(filter: log::LevelFilter) -> Self {
        match filter {
            log::LevelFilter::Off => DebugLevel::Off,
            log::LevelFilter::Error => DebugLevel::Error,
            log::LevelFilter::Warn => DebugLevel::Warn,
            log::LevelFilter::Info => DebugLevel::Info,
            log::LevelFilter::Debug => DebugLevel::Debug,
            log::LevelFilter::Trace => DebugLevel::Trace,
        }
    }
}

impl From<log::Level> for DebugLevel {
    fn from(level: log::Level) -> Self {
        Self::from(level.to_level_filter())
    }
}

impl From<DebugLevel> for log::LevelFilter {
    fn from(level: DebugLevel) -> Self {
        match level {
            DebugLevel::Off => log::LevelFilter::Off,
            DebugLevel::Error => log::LevelFilter::Error,
            DebugLevel::Warn => log::LevelFilter::Warn,
            DebugLevel::Info => log::LevelFilter::Info,
            DebugLevel::Debug => log::LevelFilter::Debug,
            DebugLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Location of the debug log file
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("par_workbench_debug.log")
}

/// Global debug logger
struct DebugLogger {
    level: DebugLevel,
    file: Option<std::fs::File>,
}

impl DebugLogger {
    fn new() -> Self {
        let mut logger = DebugLogger {
            level: DebugLevel::Off,
            file: None,
        };
        logger.set_level(DebugLevel::from_env());
        logger
    }

    fn set_level(&mut self, level: DebugLevel) {
        self.level = level;
        if level != DebugLevel::Off && self.file.is_none() {
            self.open_file();
        }
    }

    fn open_file(&mut self) {
        match OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
        {
            Ok(f) => {
                self.file = Some(f);
                self.write_raw(&format!(
                    "\n{}\npar-workbench debug session started at {} (level={:?})\n{}\n",
                    "=".repeat(80),
                    get_timestamp(),
                    self.level,
                    "=".repeat(80)
                ));
            }
            Err(_e) => {
                // Silently fail if log file can't be opened
                self.file = None;
            }
        }
    }

    fn write_raw(&mut self, msg: &str) {
        if let Some(ref mut file) = self.file {
            let _ = file.write_all(msg.as_bytes());
            let _ = file.flush();
        }
    }

    fn log(&mut self, level: DebugLevel, category: &str, msg: &str) {
        if level == DebugLevel::Off || level > self.level {
            return;
        }
        let line = format!(
            "[{}] [{}] [{}] {}\n",
            get_timestamp(),
            level.label(),
            category,
            msg
        );
        if MIRROR_STDERR.load(Ordering::Relaxed) {
            eprint!("{}", line);
        }
        self.write_raw(&line);
    }
}

static LOGGER: OnceLock<Mutex<DebugLogger>> = OnceLock::new();

/// Mirror log lines to stderr (enabled when RUST_LOG is set)
static MIRROR_STDERR: AtomicBool = AtomicBool::new(false);

fn get_logger() -> &'static Mutex<DebugLogger> {
    LOGGER.get_or_init(|| Mutex::new(DebugLogger::new()))
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Check if debugging is enabled at given level
pub fn is_enabled(level: DebugLevel) -> bool {
    let logger = get_logger().lock();
    level <= logger.level
}

/// Change the active debug level, opening the log file if needed
pub fn set_level(level: DebugLevel) {
    get_logger().lock().set_level(level);
}

/// Current debug level
pub fn level() -> DebugLevel {
    get_logger().lock().level
}

/// Log a message at specified level
pub fn log(level: DebugLevel, category: &str, msg: &str) {
    let mut logger = get_logger().lock();
    logger.log(level, category, msg);
}

/// Log formatted message
pub fn logf(level: DebugLevel, category: &str, args: fmt::Arguments) {
    if is_enabled(level) {
        log(level, category, &format!("{}", args));
    }
}

/// `log::Log` implementation that forwards facade records to the debug logger
struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        is_enabled(DebugLevel::from(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            logf(
                DebugLevel::from(record.level()),
                record.target(),
                *record.args(),
            );
        }
    }

    fn flush(&self) {}
}

/// Pick the level for this crate out of a RUST_LOG value
///
/// Bare levels (`debug`) apply globally; `par_workbench=trace` style
/// directives override them. Directives for other crates are ignored.
pub fn parse_rust_log(value: &str) -> Option<log::LevelFilter> {
    let mut level = None;
    for directive in value.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        match directive.split_once('=') {
            Some((target, filter)) => {
                if target.trim().starts_with("par_workbench")
                    && let Ok(parsed) = filter.trim().parse()
                {
                    level = Some(parsed);
                }
            }
            None => {
                if let Ok(parsed) = directive.parse() {
                    level = level.or(Some(parsed));
                }
            }
        }
    }
    level
}

/// Install the `log` facade bridge
///
/// Level precedence: `cli_level`, then RUST_LOG, then DEBUG_LEVEL. When
/// RUST_LOG is set, lines are also mirrored to stderr.
pub fn init_log_bridge(cli_level: Option<log::LevelFilter>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    MIRROR_STDERR.store(rust_log.is_some(), Ordering::Relaxed);

    let level = cli_level
        .map(DebugLevel::from)
        .or_else(|| rust_log.as_deref().and_then(parse_rust_log).map(DebugLevel::from))
        .unwrap_or_else(DebugLevel::from_env);
    set_level(level);

    // A second call only updates the level
    let _ = log::set_logger(&BRIDGE);
    log::set_max_level(log::LevelFilter::from(level));
}

// Convenience macros for logging
#[macro_export]
macro_rules! debug_error {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Error, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_info {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Info, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Debug, $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_trace {
    ($category:expr, $($arg:tt)*) => {
        $crate::debug::logf($crate::debug::DebugLevel::Trace, $category, format_args!($($arg)*))
    };
}
