use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Bracketed log lines:
/// `[TIMESTAMP] [LEVEL] [SPANS] [TARGET: FILE:LINE]: MESSAGE`
///
/// `SPANS` is the span chain from root to leaf joined by `>`, or `-` when
/// the event happens outside any span. The location part is only written
/// when `with_location` is set, so terminal output stays short while the
/// log file keeps the full source position.
#[derive(Debug, Clone, Copy)]
pub struct BracketedFormatter {
    with_location: bool,
}

impl BracketedFormatter {
    /// For stdout: no target or source location
    pub fn terminal() -> Self {
        Self {
            with_location: false,
        }
    }

    /// For the log file: target plus `file:line`
    pub fn file() -> Self {
        Self {
            with_location: true,
        }
    }
}

impl<S, N> FormatEvent<S, N> for BracketedFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        write!(
            writer,
            "[{}] [{:5}] [",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            metadata.level()
        )?;

        match ctx.event_scope() {
            Some(scope) => {
                for (depth, span) in scope.from_root().enumerate() {
                    if depth > 0 {
                        writer.write_char('>')?;
                    }
                    writer.write_str(span.name())?;
                }
            }
            None => writer.write_char('-')?,
        }
        writer.write_str("]")?;

        if self.with_location {
            match (metadata.file(), metadata.line()) {
                (Some(file), Some(line)) => {
                    write!(writer, " [{}: {}:{}]", metadata.target(), file, line)?
                }
                _ => write!(writer, " [{}]", metadata.target())?,
            }
        }
        writer.write_str(": ")?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
