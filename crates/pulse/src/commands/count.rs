//! `pulse count`: the bootstrap that owns the page's single widget.

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::Tabled;

use pulse_core::{
    CoreError, DashboardWidget, Delimiters, DisplayState, PlayerCountClient, WidgetConfig,
    add_commas, render_template,
};

use crate::cli::{CountArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

/// Structured form of the rendered widget.
#[derive(Debug, Serialize)]
struct CountReport {
    mount: String,
    online_users: i64,
    online_users_formatted: String,
    loaded: bool,
}

impl CountReport {
    fn new(mount: &str, state: DisplayState) -> Self {
        Self {
            mount: mount.to_owned(),
            online_users: state.online_users,
            online_users_formatted: add_commas(state.online_users),
            loaded: state.is_loaded(),
        }
    }
}

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Mount")]
    mount: String,
    #[tabled(rename = "Players online")]
    online: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl CountRow {
    fn new(report: &CountReport, color: bool) -> Self {
        let status = if report.loaded { "loaded" } else { "unavailable" };
        let status = match (color, report.loaded) {
            (false, _) => status.to_owned(),
            (true, true) => status.green().to_string(),
            (true, false) => status.yellow().to_string(),
        };
        Self {
            mount: report.mount.clone(),
            online: report.online_users_formatted.clone(),
            status,
        }
    }
}

fn render(report: &CountReport, format: OutputFormat, color: bool) -> Result<String, CliError> {
    let rendered = match format {
        OutputFormat::Table => output::table(&[CountRow::new(report, color)]),
        OutputFormat::Plain => report.online_users_formatted.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(report).map_err(CliError::render)?,
        OutputFormat::JsonCompact => serde_json::to_string(report).map_err(CliError::render)?,
        OutputFormat::Yaml => serde_yaml::to_string(report).map_err(CliError::render)?,
    };
    Ok(rendered)
}

pub async fn handle(
    args: CountArgs,
    settings: &WidgetConfig,
    format: OutputFormat,
    color: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let widget = if args.strict {
        let client = PlayerCountClient::new(settings.api_base.clone(), &settings.transport())
            .map_err(CoreError::from)?;
        let widget = DashboardWidget::new(settings.mount.clone(), client);
        widget.refresh().await?;
        widget
    } else {
        let widget = DashboardWidget::from_config(settings)?;
        widget.settled().await;
        widget
    };

    let out = match args.template {
        Some(template) => render_template(&template, &Delimiters::default(), &widget.view())?,
        None => {
            let report = CountReport::new(widget.mount().as_str(), widget.state());
            render(&report, format, color)?
        }
    };

    output::print_output(&out, quiet);
    Ok(())
}
