use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Tee-Time Forecast Page Builder
///
/// Fetches your latest tee-time JSON from a secret source URL, picks the
/// applicable tee time, and writes a static HTML page that opens a Ventusky
/// weather embed at that hour (UTC) over your course.
///
/// Meant to run on a schedule (e.g. from CI before publishing a Pages site):
/// one fetch, one resolution, one page write per run. If the fetch or the
/// tee-time resolution fails, nothing is written and the run exits non-zero.
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Write the generated site into this directory instead of the configured one.
    #[arg(
        short = 'o',
        long = "output",
        help_heading = "Build Options",
        value_name = "DIR"
    )]
    pub output: Option<String>,

    /// Resolve the tee time and print the embed URL to stdout without writing any files.
    /// Useful for checking what the next run would target.
    #[arg(long = "print-url", help_heading = "Build Options")]
    pub print_url: bool,

    /// Update the tee-time source URL in config. Will prompt for the URL if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "SOURCE_URL",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_source_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings. The source URL is shown redacted.
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Log to stdout in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path for this run only.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
