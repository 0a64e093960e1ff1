//! Terminal output helpers shared by the command handlers.

use std::io::{self, IsTerminal, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::ColorMode;

/// Color only when asked to, or when stdout is a terminal and `NO_COLOR`
/// is unset.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

/// Rounded table of `rows`.
pub fn table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Write one rendered result to stdout unless `quiet`.
pub fn print_output(rendered: &str, quiet: bool) {
    let rendered = rendered.trim_end_matches('\n');
    if quiet || rendered.is_empty() {
        return;
    }
    let _ = writeln!(io::stdout().lock(), "{rendered}");
}
