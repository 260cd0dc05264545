//! GiveMeASong client library
//!
//! Turns a song link from any one streaming platform into a canonical song record
//! that carries equivalent links for every supported platform. The heavy lifting
//! (matching tracks across services) happens server-side; this crate owns the
//! client half: resolving a raw link to a song id, fetching the aggregated record,
//! normalizing per-platform display data, and driving the loading/ready/failed
//! lifecycle together with the host document's title and favicon.
//!
//! # Modules
//!
//! - `backend` - HTTP clients for the resolve and song endpoints
//! - `cli` - Command-line interface and the terminal renderer
//! - `config` - Configuration management and environment variables
//! - `errors` - Typed failures of the backend clients and configuration
//! - `logging` - Diagnostic tracing setup
//! - `management` - Workflow state machine and document metadata synchronizer
//! - `platforms` - Platform display metadata and renderable link projection
//! - `types` - Song record model and wire envelopes
//! - `utils` - Small shared helpers

pub mod backend;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod management;
pub mod platforms;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Resolving {}", url);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal errors: the process terminates with exit code 1 right after
/// the message is printed.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems the user should see, such as a failed lookup
/// in the interactive search where the prompt stays usable afterwards.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
