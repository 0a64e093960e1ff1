//! Binding between the widget and its hosting template.
//!
//! Templates interpolate with `<% expr %>` so they can sit inside pages that
//! already use `{{ }}` for server-side rendering. Supported expressions:
//! `online_users`, `addCommas(online_users)` (alias `add_commas`), and
//! numeric literals in either position.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::CoreError;
use crate::format::add_commas;
use crate::state::DisplayState;

const BOUND_VARIABLE: &str = "online_users";

static CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:addCommas|add_commas)\(\s*(?P<arg>[^()]*?)\s*\)$").expect("valid call regex")
});
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(?:\.[0-9]+)?$").expect("valid number regex"));

/// Values exposed to the template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WidgetView {
    pub online_users: i64,
}

impl WidgetView {
    /// `online_users` with thousands separators.
    pub fn formatted_online_users(&self) -> String {
        add_commas(self.online_users)
    }
}

impl From<DisplayState> for WidgetView {
    fn from(state: DisplayState) -> Self {
        Self {
            online_users: state.online_users,
        }
    }
}

/// Interpolation delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            open: "<%".into(),
            close: "%>".into(),
        }
    }
}

/// Render `template`, replacing every delimited expression with its value.
pub fn render_template(
    template: &str,
    delimiters: &Delimiters,
    view: &WidgetView,
) -> Result<String, CoreError> {
    if delimiters.open.is_empty() || delimiters.close.is_empty() {
        return Err(CoreError::Template {
            message: "delimiters must not be empty".into(),
        });
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(&delimiters.open) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + delimiters.open.len()..];
        let Some(end) = after_open.find(&delimiters.close) else {
            return Err(CoreError::Template {
                message: format!("unterminated '{}' placeholder", delimiters.open),
            });
        };
        out.push_str(&evaluate(after_open[..end].trim(), view)?);
        rest = &after_open[end + delimiters.close.len()..];
    }
    out.push_str(rest);

    Ok(out)
}

fn evaluate(expr: &str, view: &WidgetView) -> Result<String, CoreError> {
    if let Some(caps) = CALL.captures(expr) {
        let arg = caps.name("arg").map_or("", |m| m.as_str());
        return Ok(add_commas(operand(arg, view)?));
    }
    operand(expr, view)
}

fn operand(expr: &str, view: &WidgetView) -> Result<String, CoreError> {
    if expr == BOUND_VARIABLE {
        Ok(view.online_users.to_string())
    } else if NUMBER.is_match(expr) {
        Ok(expr.to_owned())
    } else {
        Err(CoreError::Template {
            message: format!("unknown expression '{expr}'"),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn view(n: i64) -> WidgetView {
        WidgetView { online_users: n }
    }

    #[test]
    fn renders_formatted_count() {
        let out =
            render_template("<% addCommas(online_users) %> online", &Delimiters::default(), &view(1234))
                .unwrap();
        assert_eq!(out, "1,234 online");
    }

    #[test]
    fn renders_raw_variable_and_snake_case_alias() {
        let out = render_template(
            "<%online_users%> / <% add_commas( online_users ) %>",
            &Delimiters::default(),
            &view(1_000_000),
        )
        .unwrap();
        assert_eq!(out, "1000000 / 1,000,000");
    }

    #[test]
    fn formats_numeric_literals() {
        let out = render_template("<% addCommas(1234567.891) %>", &Delimiters::default(), &view(0))
            .unwrap();
        assert_eq!(out, "1,234,567.891");
    }

    #[test]
    fn leaves_server_side_syntax_alone() {
        let out = render_template(
            "{{ title }}: <% online_users %>",
            &Delimiters::default(),
            &view(3),
        )
        .unwrap();
        assert_eq!(out, "{{ title }}: 3");
    }

    #[test]
    fn custom_delimiters() {
        let delimiters = Delimiters {
            open: "[[".into(),
            close: "]]".into(),
        };
        let out = render_template("[[ addCommas(online_users) ]]", &delimiters, &view(4321)).unwrap();
        assert_eq!(out, "4,321");
    }

    #[test]
    fn unknown_expression_is_an_error() {
        let err = render_template("<% total_users %>", &Delimiters::default(), &view(1)).unwrap_err();
        assert!(matches!(err, CoreError::Template { .. }));
    }

    #[test]
    fn unterminated_placeholder_is_an_error() {
        let err = render_template("<% online_users", &Delimiters::default(), &view(1)).unwrap_err();
        assert!(err.to_string().contains("unterminated"));
    }

    #[test]
    fn template_without_placeholders_is_returned_verbatim() {
        let out = render_template("players", &Delimiters::default(), &view(1)).unwrap();
        assert_eq!(out, "players");
    }

    #[test]
    fn view_from_state() {
        let v = WidgetView::from(DisplayState::with_count(98765));
        assert_eq!(v.formatted_online_users(), "98,765");
    }
}
