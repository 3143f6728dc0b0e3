use thiserror::Error;

use crate::components::GearStatus;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScenarioError {
    #[error("{key}: missing {field}")]
    MissingField {
        key: &'static str,
        field: &'static str,
    },
    #[error("{key}: invalid {field} '{value}'")]
    InvalidField {
        key: &'static str,
        field: &'static str,
        value: String,
    },
}

/// Which vessel-specific keys a variant reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScenarioKeys {
    pub skin: bool,
    pub engines: bool,
}

/// One decoded scenario line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioLine<'a> {
    Gear { status: GearStatus, fraction: f64 },
    Engines(bool),
    Skin(&'a str),
    /// Not a vessel key; belongs to the host parser.
    Other(&'a str),
}

pub const GEAR_KEY: &str = "GEAR";
pub const ENGINES_KEY: &str = "ENGINES";
pub const SKIN_KEY: &str = "SKIN";

/// Returns the text after `key` if `line` starts with it, ignoring ASCII case.
fn strip_key<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let head = line.get(..key.len())?;
    if head.eq_ignore_ascii_case(key) {
        line.get(key.len()..)
    } else {
        None
    }
}

/// Decodes one line of a vessel scenario block.
pub fn parse_line(line: &str, keys: ScenarioKeys) -> Result<ScenarioLine<'_>, ScenarioError> {
    let trimmed = line.trim_start();

    if let Some(rest) = strip_key(trimmed, GEAR_KEY) {
        return parse_gear(rest);
    }
    if keys.skin {
        if let Some(rest) = strip_key(trimmed, SKIN_KEY) {
            return rest
                .split_whitespace()
                .next()
                .map(ScenarioLine::Skin)
                .ok_or(ScenarioError::MissingField {
                    key: SKIN_KEY,
                    field: "name",
                });
        }
    }
    if keys.engines {
        if let Some(rest) = strip_key(trimmed, ENGINES_KEY) {
            return parse_engines(rest);
        }
    }
    Ok(ScenarioLine::Other(line))
}

fn parse_gear(rest: &str) -> Result<ScenarioLine<'_>, ScenarioError> {
    let mut fields = rest.split_whitespace();
    let status_field = fields.next().ok_or(ScenarioError::MissingField {
        key: GEAR_KEY,
        field: "status",
    })?;
    let status = status_field
        .parse::<i64>()
        .ok()
        .and_then(GearStatus::from_index)
        .ok_or_else(|| ScenarioError::InvalidField {
            key: GEAR_KEY,
            field: "status",
            value: status_field.to_string(),
        })?;

    let fraction_field = fields.next().ok_or(ScenarioError::MissingField {
        key: GEAR_KEY,
        field: "fraction",
    })?;
    let fraction = fraction_field
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .ok_or_else(|| ScenarioError::InvalidField {
            key: GEAR_KEY,
            field: "fraction",
            value: fraction_field.to_string(),
        })?;

    Ok(ScenarioLine::Gear { status, fraction })
}

fn parse_engines(rest: &str) -> Result<ScenarioLine<'_>, ScenarioError> {
    let field = rest.split_whitespace().next().ok_or(ScenarioError::MissingField {
        key: ENGINES_KEY,
        field: "flag",
    })?;
    match field {
        "0" => Ok(ScenarioLine::Engines(false)),
        "1" => Ok(ScenarioLine::Engines(true)),
        other => Err(ScenarioError::InvalidField {
            key: ENGINES_KEY,
            field: "flag",
            value: other.to_string(),
        }),
    }
}

/// Value written after the `GEAR` key.
pub fn format_gear(status: GearStatus, fraction: f64) -> String {
    format!("{} {:.4}", status.index(), fraction)
}
