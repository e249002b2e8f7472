// CLI module
// Server configuration from command-line arguments

mod args;

pub use args::ServerArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., invalid port or --help flag), clap displays an
/// error message or help text and exits the process.
pub fn parse_args() -> ServerArgs {
    ServerArgs::parse()
}
