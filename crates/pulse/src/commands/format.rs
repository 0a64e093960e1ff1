//! `pulse format`: thousands grouping without touching the network.

use pulse_core::add_commas;

use crate::cli::FormatArgs;
use crate::output;

pub fn handle(args: &FormatArgs, quiet: bool) {
    let out = args
        .values
        .iter()
        .map(add_commas)
        .collect::<Vec<_>>()
        .join("\n");
    output::print_output(&out, quiet);
}
