mod commands;
mod config;
mod terminal;

use commands::{CommandLine, Commands, cidr, compare, expand, parse, sort};
use config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = Config::from(&commands);

    logging::init_logging(&cfg);
    print::initialize(&cfg);

    match commands.command {
        Commands::Parse { literals } => {
            print::header("canonical forms", cfg.quiet);
            parse::parse(&literals)
        }
        Commands::Compare { a, b } => {
            print::header("comparison", cfg.quiet);
            Ok(compare::compare(&a, &b))
        }
        Commands::Cidr { addr, prefix } => {
            print::header("network block", cfg.quiet);
            cidr::cidr(&addr, prefix)
        }
        Commands::Expand { range } => {
            print::header("range expansion", cfg.quiet);
            Ok(expand::expand(&range, &cfg))
        }
        Commands::Sort { addrs } => {
            print::header("sorted addresses", cfg.quiet);
            Ok(sort::sort(addrs))
        }
    }
}
