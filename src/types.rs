// src/types.rs

use std::str::FromStr;
use serde::Deserialize;

/// Canonical task name type used throughout the crate.
pub type TaskName = String;

/// How forgiving input loading is.
///
/// - `Lenient`: unparseable dates become the zero date, dangling dependency
///   names are ignored by the cycle check, unknown roles contribute nothing
///   duplicate task names resolve to the first occurrence and duplicate
///   developer rows are dropped after the first. Each case is logged as a
///   warning.
/// - `Strict`: every one of those conditions is rejected at load time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    #[default]
    Lenient,
    Strict,
}

impl ParseMode {
    pub fn is_strict(self) -> bool {
        matches!(self, ParseMode::Strict)
    }
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(ParseMode::Lenient),
            "strict" => Ok(ParseMode::Strict),
            other => Err(format!(
                "invalid mode: {other} (expected \"lenient\" or \"strict\")"
            )),
        }
    }
}
