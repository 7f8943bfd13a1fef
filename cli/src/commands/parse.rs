use colored::*;
use tracing::error;

use ipvx_core::parse_ip;

use crate::terminal::print;

/// Prints `v4`/`v6` and the canonical form of every literal.
///
/// All literals are reported before failing on the invalid ones.
pub fn parse(literals: &[String]) -> anyhow::Result<()> {
    let mut invalid: usize = 0;

    for literal in literals {
        match parse_ip(literal) {
            Some(addr) => {
                let family = format!("v{}", addr.version());
                print::aligned_line(&family, addr.as_str());
            }
            None => {
                error!("{} is not a valid IP address", literal.red());
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        anyhow::bail!("{invalid} of {} literals could not be parsed", literals.len());
    }
    Ok(())
}
