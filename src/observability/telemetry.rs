//! Structured logging via `tracing-subscriber`.
//!
//! - Compact single-line output on stderr
//! - Filter taken from `RUST_LOG` when set, otherwise from the caller
//! - Installed at most once per process

use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when the requested directive does not parse.
pub const FALLBACK_FILTER: &str = "warn";

/// Initialize tracing, preferring `RUST_LOG` over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    match std::env::var("RUST_LOG") {
        Ok(filter) if !filter.trim().is_empty() => init_tracing_with_filter(&filter),
        _ => init_tracing_with_filter(default_filter),
    }
}

/// Initialize tracing for `--verbose` runs.
pub fn init_tracing_verbose() {
    init_tracing_with_filter("debug")
}

/// Initialize with custom filter string
pub fn init_tracing_with_filter(filter: &str) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .with_level(true)
            .compact()
            .with_writer(std::io::stderr);

        let filter_layer =
            EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));

        // Another subscriber may already be installed (e.g. by a test harness).
        let _ = tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init();
    });
}

/// Escape control characters so user-supplied values cannot forge log lines.
pub fn sanitize_for_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x1b' => out.push_str("\\e"),
            '\x00' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push(c),
        }
    }
    out
}
