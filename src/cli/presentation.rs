//! CLI presentation: resolution reports and config validation output.

use crate::config::ValidationError;
use crate::params::QueryParameters;
use crate::resolve::{NetworkOrigin, ResolvedConfiguration};
use crate::types::NetworkId;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layer a resolved field was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOrigin {
    Call,
    Scope,
    Ambient,
    Unset,
}

impl fmt::Display for FieldOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldOrigin::Call => "call",
            FieldOrigin::Scope => "scope",
            FieldOrigin::Ambient => "ambient",
            FieldOrigin::Unset => "unset",
        };
        f.write_str(label)
    }
}

impl From<NetworkOrigin> for FieldOrigin {
    fn from(origin: NetworkOrigin) -> Self {
        match origin {
            NetworkOrigin::CallOverride => FieldOrigin::Call,
            NetworkOrigin::ScopeDefault => FieldOrigin::Scope,
            NetworkOrigin::Ambient => FieldOrigin::Ambient,
            NetworkOrigin::Unresolved => FieldOrigin::Unset,
        }
    }
}

/// One row of a resolution report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRow {
    pub key: String,
    pub value: Option<String>,
    pub origin: FieldOrigin,
}

/// Resolved parameters with the origin of every field, for `dappql resolve`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionReport {
    pub resolved: QueryParameters,
    pub fields: Vec<FieldRow>,
}

fn origin_of<T>(call: &Option<T>, scope: &Option<T>) -> FieldOrigin {
    if call.is_some() {
        FieldOrigin::Call
    } else if scope.is_some() {
        FieldOrigin::Scope
    } else {
        FieldOrigin::Unset
    }
}

fn row<T: ToString>(key: &str, value: &Option<T>, origin: FieldOrigin) -> FieldRow {
    FieldRow {
        key: key.to_string(),
        value: value.as_ref().map(ToString::to_string),
        origin,
    }
}

fn describe_network(id: NetworkId) -> String {
    match id.name() {
        Some(name) => format!("{} ({})", id, name),
        None => id.to_string(),
    }
}

/// Explain a resolution given the two parameter layers it was built from.
pub fn build_resolution_report(
    scope_defaults: &QueryParameters,
    overrides: &QueryParameters,
    resolved: &ResolvedConfiguration,
) -> ResolutionReport {
    let params = resolved.params();
    let (call_cache, scope_cache) = (&overrides.cache, &scope_defaults.cache);

    let fields = vec![
        FieldRow {
            key: "network_id".to_string(),
            value: params.network_id.map(describe_network),
            origin: resolved.network_origin().into(),
        },
        row(
            "is_static",
            &params.is_static,
            origin_of(&overrides.is_static, &scope_defaults.is_static),
        ),
        row(
            "refresh",
            &params.refresh,
            origin_of(&overrides.refresh, &scope_defaults.refresh),
        ),
        row(
            "cache.max_age_ms",
            &params.cache.max_age_ms,
            origin_of(&call_cache.max_age_ms, &scope_cache.max_age_ms),
        ),
        row(
            "cache.persist",
            &params.cache.persist,
            origin_of(&call_cache.persist, &scope_cache.persist),
        ),
        row(
            "cache.disabled",
            &params.cache.disabled,
            origin_of(&call_cache.disabled, &scope_cache.disabled),
        ),
    ];

    ResolutionReport {
        resolved: *params,
        fields,
    }
}

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format a resolution report as a table.
pub fn format_resolution_text(report: &ResolutionReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Resolved query parameters")));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Key", "Value", "Origin"]);
    for field in &report.fields {
        table.add_row(vec![
            field.key.clone(),
            field.value.clone().unwrap_or_else(|| "-".to_string()),
            field.origin.to_string(),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

/// Format the outcome of `config validate`.
pub fn format_config_validation_text(result: &Result<(), Vec<ValidationError>>) -> String {
    match result {
        Ok(()) => format!("{} Configuration is valid\n", "✓".green()),
        Err(errors) => {
            let mut out = format!(
                "{} Configuration has {} error(s):\n",
                "✗".red(),
                errors.len()
            );
            for error in errors {
                out.push_str(&format!("  - {}\n", error));
            }
            out
        }
    }
}
