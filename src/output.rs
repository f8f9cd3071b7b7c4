//! User-facing terminal output
//!
//! Status lines follow a fixed convention: `[+]` (green) for progress on
//! stdout and `[-]` (red) for failures on stderr.

use colored::Colorize;

const LOGO: &str = r"
 ______   ______   __  __     ______     _____
/\  ___\ /\  ___\ /\ \_\ \   /\  == \   /\  __-.
\ \  __\ \ \  __\ \ \  __ \  \ \  __<   \ \ \/\ \
 \ \_\    \ \_\    \ \_\ \_\  \ \_\ \_\  \ \____-
  \/_/     \/_/     \/_/\/_/   \/_/ /_/   \/____/
";

const WARNING: &str = "WARNING: Hardening settings may break some site functionalities..\n\
Review the generated user.js and comment out settings you don't want to use.";

/// Force colors off regardless of terminal detection
pub fn disable_color() {
    colored::control::set_override(false);
}

/// `[+] message` in green
pub fn success_line(message: &str) -> String {
    format!("[+] {}", message).green().to_string()
}

/// `[-] message` in red
pub fn failure_line(message: &str) -> String {
    format!("[-] {}", message).red().to_string()
}

pub fn failure(message: &str) {
    eprintln!("{}", failure_line(message));
}

pub fn print_banner() {
    println!("{}", LOGO);
    println!("{}\n", WARNING);
}
