//! Logging to stderr.

use anyhow::Context as _;

/// A [`clap::Args`] struct for options controlling log output to stderr.
#[derive(Clone, Debug, Default, clap::Args)]
#[expect(clippy::module_name_repetitions)]
pub struct LoggingArgs {
    /// Additional logging to stderr. Give twice for a trace of every merge.
    #[arg(long = "verbose", short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Remove timestamps from logs so that they are deterministic.
    ///
    /// This option is intended for internal tests only.
    #[arg(long = "simplify-log-format", hide = true)]
    pub(crate) simplify_log_format: bool,
}

impl LoggingArgs {
    /// The most detailed level of log message which will be written.
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Install a [`log`] global logger based on user-provided `options`.
pub fn install(options: &LoggingArgs) -> Result<(), anyhow::Error> {
    use log::LevelFilter::{Error, Off};

    simplelog::WriteLogger::init(
        options.level(),
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .set_thread_level(Off)
            .set_time_level(if options.simplify_log_format {
                Off
            } else {
                Error
            })
            .build(),
        std::io::stderr(),
    )
    .context("failed to initialize logging")
}
