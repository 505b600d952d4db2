//! Command-line argument parsing.
//!
//! Flags only adjust [`PortalConfig`]; anything else is either an
//! informational command (`--version`, `--help`) or an error.

use std::time::Duration;

use crate::startup::PortalConfig;
use crate::state::FontSize;

/// Overrides collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub dark_mode: bool,
    pub font_size: Option<FontSize>,
    pub load_delay: Option<Duration>,
    pub toast_duration: Option<Duration>,
}

impl CliOptions {
    /// Layer these options over `config`.
    pub fn apply(&self, mut config: PortalConfig) -> PortalConfig {
        if self.dark_mode {
            config = config.with_dark_mode(true);
        }
        if let Some(size) = self.font_size {
            config = config.with_font_size(size);
        }
        if let Some(delay) = self.load_delay {
            config = config.with_load_delay(delay);
        }
        if let Some(duration) = self.toast_duration {
            config = config.with_toast_duration(duration);
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Run the portal with the given overrides
    Run(CliOptions),
    /// Bad arguments
    Invalid { message: String },
}

fn millis(flag: &str, value: Option<String>) -> Result<Duration, String> {
    let value = value.ok_or_else(|| format!("{} requires a value", flag))?;
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| format!("{} expects milliseconds, got {:?}", flag, value))
}

/// Parse command-line arguments. The first item is the program name.
///
/// ```
/// use portal::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["portal".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let parsed = match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--dark" => {
                options.dark_mode = true;
                Ok(())
            }
            "--font" => match args.next().as_deref().map(FontSize::parse) {
                Some(Some(size)) => {
                    options.font_size = Some(size);
                    Ok(())
                }
                Some(None) => Err("--font expects sm, base or lg".to_string()),
                None => Err("--font requires a value".to_string()),
            },
            "--load-delay-ms" => millis(&arg, args.next()).map(|d| options.load_delay = Some(d)),
            "--toast-ms" => millis(&arg, args.next()).map(|d| options.toast_duration = Some(d)),
            other => Err(format!("unknown argument: {}", other)),
        };
        if let Err(message) = parsed {
            return CliCommand::Invalid { message };
        }
    }
    CliCommand::Run(options)
}
