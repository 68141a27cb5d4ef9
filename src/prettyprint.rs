use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    fmt::{
        format::{FormatEvent, FormatFields, Writer},
        FmtContext,
    },
    registry::LookupSpan,
};

const SPAN_SEPARATOR: &str = " › ";

/// One line per event: `HH:MM:SS LEVEL outer › inner │ message`. The breadcrumb lists the
/// spans the event was emitted in, root first, and is omitted outside any span.
pub struct PrettyFormatter {
    ansi: bool,
}

impl PrettyFormatter {
    pub fn new(ansi: bool) -> Self {
        Self { ansi }
    }

    fn write_level(&self, writer: &mut Writer<'_>, level: Level) -> std::fmt::Result {
        if !self.ansi {
            return write!(writer, "{:>5} ", level.as_str());
        }

        let color = match level {
            Level::ERROR => "31",
            Level::WARN => "33",
            Level::INFO => "32",
            Level::DEBUG => "34",
            _ => "35",
        };
        write!(writer, "\x1b[{color}m{:>5}\x1b[0m ", level.as_str())
    }
}

impl<S, N> FormatEvent<S, N> for PrettyFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} ", Local::now().format("%H:%M:%S"))?;
        self.write_level(&mut writer, *event.metadata().level())?;

        if let Some(scope) = ctx.event_scope() {
            let breadcrumb = scope
                .from_root()
                .map(|span| span.name())
                .collect::<Vec<_>>()
                .join(SPAN_SEPARATOR);
            write!(writer, "{breadcrumb} │ ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
