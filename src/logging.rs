use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::eval::Decision;

/// Longest input prefix carried into a decision record.
const MAX_LOGGED_CHARS: usize = 200;

/// Install a stderr logger. stdout stays reserved for the JSON decision.
/// Calling this twice is harmless; the second logger is ignored.
pub fn init(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .build();
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Never);
}

/// Emit a one-line record of a decision at info level.
pub fn log_decision(text: &str, decision: &Decision) {
    log::info!(
        "{reason}\t{input}",
        reason = decision.reason(),
        input = oneline(text),
    );
}

/// Collapse newlines to "; " and cut to the first `MAX_LOGGED_CHARS` chars.
fn oneline(text: &str) -> String {
    let truncated: String = text.trim().chars().take(MAX_LOGGED_CHARS).collect();
    truncated.replace("\r\n", "; ").replace('\n', "; ")
}
