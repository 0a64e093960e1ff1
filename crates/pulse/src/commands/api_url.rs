//! `pulse api-url`: show the API base a page location maps to.

use pulse_core::compute_api_base_url;

use crate::cli::ApiUrlArgs;
use crate::output;

pub fn handle(args: &ApiUrlArgs, quiet: bool) {
    let url = compute_api_base_url(&args.protocol, &args.hostname, &args.port);
    tracing::debug!(%url, "computed API base");
    output::print_output(&url, quiet);
}
