//! Process-wide tracing setup.
//!
//! One registry with a reloadable global level, a stdout layer behind its
//! own reloadable on/off gate, and a file layer whose target can be swapped
//! after startup. Both output layers share [`CalcFormat`].

use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

use crate::config::LoggingConfig;

const DEFAULT_FILTER: &str = "info,calc_ui=debug";

/// `timestamp LEVEL file:line fields`, coloured when the writer supports ANSI.
struct CalcFormat;

impl CalcFormat {
    fn level_style(level: Level) -> &'static str {
        match level {
            Level::ERROR => "\x1b[1;31m",
            Level::WARN => "\x1b[1;33m",
            Level::INFO => "\x1b[1;32m",
            Level::DEBUG => "\x1b[1;34m",
            Level::TRACE => "\x1b[1;35m",
        }
    }
}

impl<S, N> FormatEvent<S, N> for CalcFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
        let location = meta.file().zip(meta.line()).map(|(file, line)| {
            let file = file
                .strip_prefix("src/")
                .or_else(|| file.strip_prefix("src\\"))
                .unwrap_or(file);
            format!("{file}:{line}")
        });

        if writer.has_ansi_escapes() {
            let style = Self::level_style(*meta.level());
            write!(writer, "\x1b[2m{timestamp}\x1b[0m {style}{:>5}\x1b[0m ", meta.level())?;
            if let Some(location) = location {
                write!(writer, "\x1b[36m{location}\x1b[0m ")?;
            }
        } else {
            write!(writer, "{timestamp} {:>5} ", meta.level())?;
            if let Some(location) = location {
                write!(writer, "{location} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Late-bound file writer ---

type FileHandle = Arc<Mutex<Option<File>>>;

fn lock_file(slot: &Mutex<Option<File>>) -> MutexGuard<'_, Option<File>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writer target that discards output until a file is attached.
#[derive(Clone)]
struct LogFile(FileHandle);

struct LogFileWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for LogFileWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.0.as_mut().map_or(Ok(buf.len()), |f| f.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), |f| f.flush())
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogFileWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileWriter(lock_file(&self.0))
    }
}

// --- Runtime handles ---

type ReloadFn = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

struct Handles {
    level: ReloadFn,
    stdout: ReloadFn,
    file: FileHandle,
}

static HANDLES: OnceLock<Handles> = OnceLock::new();

fn handles() -> Result<&'static Handles> {
    HANDLES.get().context("logging not yet initialized")
}

fn reloader<S>(handle: reload::Handle<EnvFilter, S>) -> ReloadFn
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter| {
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("filter reload failed: {e}"))
    })
}

/// Parses a bare level ("warn") or a full directive ("info,calc_core=trace").
pub fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive.trim().to_ascii_lowercase())
        .with_context(|| format!("invalid log level '{directive}'"))
}

// --- Public API ---

/// Changes the active log filter at runtime.
pub fn set_log_level(level: &str) -> Result<()> {
    let filter = parse_filter(level)?;
    (handles()?.level)(filter)
}

/// Shows or hides stdout output without touching the log file.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    let gate = EnvFilter::new(if enabled { "trace" } else { "off" });
    (handles()?.stdout)(gate)
}

/// Starts appending log output to `path`, replacing any open log file.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    *lock_file(&handles()?.file) = Some(file);
    Ok(())
}

/// Closes the current log file, if any.
pub fn disable_file_logging() {
    if let Some(handles) = HANDLES.get() {
        *lock_file(&handles.file) = None;
    }
}

/// Applies the `[logging]` settings to the already initialized subscriber.
///
/// A `RUST_LOG` environment variable takes precedence over `settings.level`.
pub fn apply_settings(settings: &LoggingConfig) -> Result<()> {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
        set_log_level(&settings.level)?;
    }
    set_stdout_enabled(settings.stdout)?;
    match &settings.file {
        Some(path) => enable_file_logging(path)?,
        None => disable_file_logging(),
    }
    info!(
        level = %settings.level,
        file = ?settings.file,
        stdout = settings.stdout,
        "logging configured"
    );
    Ok(())
}

/// Initializes logging. Call once at startup; later calls are ignored.
///
/// - Stdout: coloured when attached to a terminal, plain when piped.
/// - File: inactive until [`enable_file_logging`] is called.
/// - Level: `RUST_LOG` when set, otherwise `info` with debug for this crate.
pub fn init_default_logging() {
    let file: FileHandle = Arc::new(Mutex::new(None));
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (level_layer, level_handle) = reload::Layer::new(filter);
    let (stdout_gate, stdout_handle) = reload::Layer::new(EnvFilter::new("trace"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(CalcFormat)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(CalcFormat)
        .with_ansi(false)
        .with_writer(LogFile(file.clone()));

    if tracing_subscriber::registry()
        .with(level_layer)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        let _ = HANDLES.set(Handles {
            level: reloader(level_handle),
            stdout: reloader(stdout_handle),
            file,
        });
    }
}
