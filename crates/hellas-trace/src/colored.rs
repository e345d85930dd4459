//! Level-colored event formatting

use hellas_format::Color;
use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Color used for events of `level`
#[must_use]
pub fn level_color(level: Level) -> Color {
    if level == Level::ERROR {
        Color::Red
    } else if level == Level::WARN {
        Color::Yellow
    } else if level == Level::INFO {
        Color::Green
    } else if level == Level::DEBUG {
        Color::PurpleBr
    } else {
        Color::Normal
    }
}

/// Wraps another event formatter and paints its output by level
///
/// The inner formatter must not emit ANSI codes of its own.
#[derive(Debug, Clone)]
pub struct ColoredFormat<F> {
    inner: F,
    enabled: bool,
}

impl<F> ColoredFormat<F> {
    /// Wrap `inner`; with `enabled == false` lines pass through unchanged
    pub fn new(inner: F, enabled: bool) -> Self {
        Self { inner, enabled }
    }
}

impl<S, N, F> FormatEvent<S, N> for ColoredFormat<F>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    F: FormatEvent<S, N>,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        if !self.enabled {
            return self.inner.format_event(ctx, writer, event);
        }

        let mut line = String::new();
        self.inner.format_event(ctx, Writer::new(&mut line), event)?;
        let color = level_color(*event.metadata().level());
        writeln!(writer, "{}", color.paint(line.trim_end_matches('\n')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_colors() {
        assert_eq!(level_color(Level::ERROR), Color::Red);
        assert_eq!(level_color(Level::WARN), Color::Yellow);
        assert_eq!(level_color(Level::INFO), Color::Green);
        assert_eq!(level_color(Level::DEBUG), Color::PurpleBr);
        assert_eq!(level_color(Level::TRACE), Color::Normal);
    }
}
