//! Colorful console output for allocation events.
//!
//! Provides a `tracing` layer that prints engine events as one-line,
//! colored summaries. Available with the `console` feature.

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const ENGINE_TARGET: &str = "teamsplit_engine";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Respects
/// `RUST_LOG`, defaulting engine events to `info`.
pub fn init() {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = format!("{}=info", ENGINE_TARGET).parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        // Another subscriber may already be installed by the host application.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(AllocationConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats allocation events with colors.
pub struct AllocationConsoleLayer;

impl<S: Subscriber> Layer<S> for AllocationConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with(ENGINE_TARGET) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    members: Option<u64>,
    total_teams: Option<u64>,
    rules: Option<u64>,
    reserved_teams: Option<u64>,
    remaining: Option<u64>,
    teams: Option<u64>,
    error: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "error" => self.error = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "members" => self.members = Some(value),
            "total_teams" => self.total_teams = Some(value),
            "rules" => self.rules = Some(value),
            "reserved_teams" => self.reserved_teams = Some(value),
            "remaining" => self.remaining = Some(value),
            "teams" => self.teams = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "allocate_start" => format!(
            "{} {} {} members ({}), teams ({}), rules ({})",
            timestamp().bright_black(),
            "INFO".bright_green(),
            "[Allocate]".bright_cyan(),
            v.members.unwrap_or(0).bright_yellow(),
            v.total_teams.unwrap_or(0).bright_yellow(),
            v.rules.unwrap_or(0).bright_yellow(),
        ),
        "rules_applied" => format!(
            "{} {} {} reserved teams ({}), members left ({})",
            timestamp().bright_black(),
            "INFO".bright_green(),
            "[Rules]".bright_cyan(),
            v.reserved_teams.unwrap_or(0).yellow(),
            v.remaining.unwrap_or(0).yellow(),
        ),
        "allocate_end" => format!(
            "{} {} {} {} teams ({} reserved)",
            timestamp().bright_black(),
            "INFO".bright_green(),
            "[Allocate]".bright_cyan(),
            v.teams.unwrap_or(0).bright_magenta().bold(),
            v.reserved_teams.unwrap_or(0),
        ),
        "allocate_rejected" => format!(
            "{} {} {} {}",
            timestamp().bright_black(),
            "WARN".bright_yellow(),
            "[Validate]".bright_cyan(),
            v.error.as_deref().unwrap_or("request rejected").bright_red(),
        ),
        _ => String::new(),
    }
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}
