use colored::*;

use crate::config::Config;

pub const TOTAL_WIDTH: usize = 64;
pub const KEY_WIDTH: usize = 8;

pub fn initialize(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }
}

/// Prints a result line to stdout, uncoloured so it can be piped.
pub fn plain<T: AsRef<str>>(msg: T) {
    println!("{}", msg.as_ref());
}

/// Prints a section header to stderr.
pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    eprintln!("{}", header_line(msg));
}

fn header_line(msg: &str) -> String {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black()
    .to_string()
}

pub fn aligned_line<V: AsRef<str>>(key: &str, value: V) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.chars().count()));
    let colon: String = format!("{}{}", dots.bright_black(), ":".bright_black());
    print_status(format!("{}{} {}", key.cyan(), colon, value.as_ref()));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".bright_black();
    println!("{} {}", prefix, msg.as_ref());
}

/// Prints a closing summary to stderr.
pub fn summary(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    eprintln!("{}", sep);
    eprintln!("{} {}", ">".bright_black(), msg.green());
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
