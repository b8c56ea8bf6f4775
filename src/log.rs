use tracing_subscriber::prelude::*;

pub const TRACE_ENV: &str = "FIND_UP_TRACE";

/// Installs a stderr subscriber when `FIND_UP_TRACE` names a level.
pub fn enable_by_env() {
    let is_enabled = std::env::var(TRACE_ENV).map_or(false, |var| {
        matches!(
            var.to_ascii_uppercase().as_str(),
            "TRACE" | "DEBUG" | "INFO" | "WARN" | "ERROR"
        )
    });
    if !is_enabled {
        return;
    }
    let formatter = Formatter::default();
    let _ = tracing_subscriber::Registry::default()
        .with(formatter)
        .with(tracing_subscriber::EnvFilter::from_env(TRACE_ENV))
        .try_init();
}

#[derive(Default)]
struct Formatter {}

impl<S> tracing_subscriber::Layer<S> for Formatter
where
    S: tracing::Subscriber + std::fmt::Debug,
{
    fn on_event(&self, event: &tracing::Event<'_>, _: tracing_subscriber::layer::Context<'_, S>) {
        let level = event.metadata().level();
        let mut data = Data::default();
        event.record(&mut data);
        eprintln!("{} {}", color::level(level), data.fields.join(" "));
    }
}

#[derive(Default)]
struct Data {
    fields: Vec<String>,
}

impl tracing::field::Visit for Data {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.fields.insert(0, format!("{value:?}"));
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }
}

pub mod color {
    const BOLD: &str = "1";
    const RED: &str = "31";
    const GREEN: &str = "32";
    const BLUE: &str = "34";
    const CYAN: &str = "36";

    fn paint<T: core::fmt::Display>(code: &str, s: &T) -> String {
        format!("\u{001b}[{code}m{s}\u{001b}[0m")
    }

    pub fn bold<T: core::fmt::Display>(s: &T) -> String {
        paint(BOLD, s)
    }

    pub fn red<T: core::fmt::Display>(s: &T) -> String {
        paint(RED, s)
    }

    pub fn level(level: &tracing::Level) -> String {
        let code = match *level {
            tracing::Level::ERROR => RED,
            tracing::Level::WARN => BOLD,
            tracing::Level::INFO => GREEN,
            tracing::Level::DEBUG => BLUE,
            tracing::Level::TRACE => CYAN,
        };
        paint(code, level)
    }
}

#[test]
fn test_level_is_colored() {
    assert_eq!(
        color::level(&tracing::Level::INFO),
        "\u{001b}[32mINFO\u{001b}[0m"
    );
    assert_eq!(color::red(&"error:"), "\u{001b}[31merror:\u{001b}[0m");
}
