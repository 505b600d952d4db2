//! Command-line interface.
//!
//! Parsed before the terminal is touched, so `--version`, `--help` and
//! argument errors print to a normal stdout/stderr:
//!
//! ```ignore
//! use portal::cli::{parse_args, run_cli_command};
//!
//! let options = match run_cli_command(parse_args(std::env::args())) {
//!     Ok(Some(options)) => options,
//!     Ok(None) => return Ok(()),
//!     Err(e) => { eprintln!("{}", e); std::process::exit(2) }
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOptions};
pub use version::{version_line, VERSION};

pub const HELP: &str = "\
Usage: portal [OPTIONS]

Options:
      --dark                Start in high contrast (dark) mode
      --font <sm|base|lg>   Initial font size
      --load-delay-ms <N>   Simulated load delay per screen
      --toast-ms <N>        How long toasts stay visible
  -h, --help                Print help
  -V, --version             Print version

Environment:
  PORTAL_LOAD_DELAY_MS, PORTAL_TOAST_MS, PORTAL_LOG_FILE, PORTAL_LOG
";

/// Handle informational commands.
///
/// Returns the options to run with, `None` if the command was fully
/// handled here, or the usage error.
pub fn run_cli_command(command: CliCommand) -> Result<Option<CliOptions>, String> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Ok(None)
        }
        CliCommand::Help => {
            print!("{}", HELP);
            Ok(None)
        }
        CliCommand::Run(options) => Ok(Some(options)),
        CliCommand::Invalid { message } => Err(format!("{}\n\n{}", message, HELP)),
    }
}
