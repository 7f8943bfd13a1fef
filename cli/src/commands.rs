pub mod cidr;
pub mod compare;
pub mod expand;
pub mod parse;
pub mod sort;

use clap::{ArgAction, Parser, Subcommand};
use ipvx_core::{IpAddress, IpRange};

#[derive(Parser)]
#[command(name = "ipvx")]
#[command(about = "Parse, compare and expand IPv4 and IPv6 addresses.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output (repeat to silence diagnostics)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// More diagnostics (repeat for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print at most this many addresses when expanding
    #[arg(short, long, global = true)]
    pub limit: Option<usize>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the canonical form of each literal
    #[command(alias = "p")]
    Parse {
        #[arg(required = true)]
        literals: Vec<String>,
    },
    /// Compare two addresses
    #[command(alias = "c")]
    Compare { a: IpAddress, b: IpAddress },
    /// Show the network block of an address
    #[command(alias = "n")]
    Cidr { addr: IpAddress, prefix: u32 },
    /// List every address in a range, CIDR block or span
    #[command(alias = "e")]
    Expand { range: IpRange },
    /// Sort addresses (IPv4 before IPv6)
    #[command(alias = "s")]
    Sort {
        #[arg(required = true)]
        addrs: Vec<IpAddress>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
