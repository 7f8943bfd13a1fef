use crate::commands::CommandLine;

/// Runtime options collected from the command line.
pub struct Config {
    /// Suppresses headers and summaries. `-qq` also silences diagnostics.
    pub quiet: u8,
    /// Raises the log level: `-v` for debug, `-vv` for trace.
    pub verbose: u8,
    /// Caps the number of addresses printed by `expand`.
    pub limit: Option<usize>,
    pub no_color: bool,
}

impl From<&CommandLine> for Config {
    fn from(commands: &CommandLine) -> Self {
        Self {
            quiet: commands.quiet,
            verbose: commands.verbose,
            limit: commands.limit,
            no_color: commands.no_color,
        }
    }
}

impl Config {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        if self.quiet > 1 {
            return "off";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
