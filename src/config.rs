//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/tscore/tscore.toml`
//! 3. Explicit config: `--config <file>`
//! 4. Environment variables: `TSCORE_*` prefix
//!
//! Settings are loaded once at startup and handed to the handlers as
//! immutable lookup tables.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::event::{INDIVIDUAL_EVENT_LABEL, INVALID_EVENT_LABEL, TEAM_EVENT_LABEL};
use crate::domain::{EventTypeTable, PointsTable};

/// What a whole-number prompt does with text that is not a number.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvalidNumberPolicy {
    /// End the program with a data error.
    #[default]
    Abort,
    /// Warn and ask the same prompt again.
    Reprompt,
}

impl std::str::FromStr for InvalidNumberPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "reprompt" => Ok(Self::Reprompt),
            other => Err(format!(
                "unknown on_invalid_number '{other}' (expected abort or reprompt)"
            )),
        }
    }
}

/// Prompt behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    pub on_invalid_number: InvalidNumberPolicy,
}

/// One selectable event type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventTypeEntry {
    pub selector: i64,
    pub label: String,
}

/// Lookup tables used by "Add Event" and "View Score".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Label shown for a selector not listed in `event_types`
    pub invalid_event_label: String,
    /// Selector -> label entries
    pub event_types: Vec<EventTypeEntry>,
    /// Outcome label -> bonus points (empty: no bonus for any outcome)
    pub outcome_points: BTreeMap<String, i64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            invalid_event_label: INVALID_EVENT_LABEL.into(),
            event_types: vec![
                EventTypeEntry {
                    selector: 1,
                    label: TEAM_EVENT_LABEL.into(),
                },
                EventTypeEntry {
                    selector: 2,
                    label: INDIVIDUAL_EVENT_LABEL.into(),
                },
            ],
            outcome_points: BTreeMap::new(),
        }
    }
}

/// Raw scoring config for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawScoringConfig {
    pub invalid_event_label: Option<String>,
    pub event_types: Option<Vec<EventTypeEntry>>,
    pub outcome_points: Option<BTreeMap<String, i64>>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub input: RawInputConfig,
    pub scoring: RawScoringConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawInputConfig {
    pub on_invalid_number: Option<InvalidNumberPolicy>,
}

/// Unified configuration for tscore.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub input: InputConfig,
    pub scoring: ScoringConfig,
}

/// Get the XDG config directory for tscore.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tscore").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("tscore.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay a file layer: scalars win if set, tables replace wholesale.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            input: InputConfig {
                on_invalid_number: overlay
                    .input
                    .on_invalid_number
                    .unwrap_or(self.input.on_invalid_number),
            },
            scoring: ScoringConfig {
                invalid_event_label: overlay
                    .scoring
                    .invalid_event_label
                    .clone()
                    .unwrap_or_else(|| self.scoring.invalid_event_label.clone()),
                event_types: overlay
                    .scoring
                    .event_types
                    .clone()
                    .unwrap_or_else(|| self.scoring.event_types.clone()),
                outcome_points: overlay
                    .scoring
                    .outcome_points
                    .clone()
                    .unwrap_or_else(|| self.scoring.outcome_points.clone()),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; it must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/tscore/tscore.toml`
    /// 3. Explicit config file
    /// 4. Environment variables: `TSCORE_*` prefix
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_with_env(explicit, Environment::with_prefix("TSCORE"))
    }

    /// Same as [`Settings::load`] with a caller-supplied environment source.
    pub fn load_with_env(
        explicit: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = explicit {
            let path = expand_path(path);
            if !path.is_file() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            let raw = load_raw_settings(&path)?;
            current = current.merge_with(&raw);
        }

        current = Self::apply_env_overrides(current, env)?;
        current.validate()?;

        Ok(current)
    }

    /// Apply TSCORE_* environment variables as explicit overrides.
    ///
    /// Only scalar settings can be set this way; tables come from files.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env.prefix_separator("_").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Some(val) = optional_string(&config, "input.on_invalid_number")? {
            settings.input.on_invalid_number = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Some(val) = optional_string(&config, "scoring.invalid_event_label")? {
            settings.scoring.invalid_event_label = val;
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        self.event_type_table().map(|_| ())
    }

    /// Build the immutable selector -> label table.
    pub fn event_type_table(&self) -> Result<EventTypeTable, ApplicationError> {
        EventTypeTable::new(
            self.scoring
                .event_types
                .iter()
                .map(|e| (e.selector, e.label.clone())),
            self.scoring.invalid_event_label.clone(),
        )
        .map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }

    /// Build the immutable outcome -> bonus table.
    pub fn points_table(&self) -> PointsTable {
        PointsTable::new(
            self.scoring
                .outcome_points
                .iter()
                .map(|(label, points)| (label.clone(), *points)),
        )
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# tscore configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/tscore/tscore.toml
#   Explicit: tscore --config <file>
#   Env:      TSCORE_* environment variables, e.g.
#             TSCORE_INPUT__ON_INVALID_NUMBER=reprompt
#
# A table given in a file replaces the one from the layer below.

[input]
# What a number prompt does with text that is not a number:
#   "abort"    end the program (exit code 65)
#   "reprompt" warn and ask again
# on_invalid_number = "abort"

[scoring]
# Label shown for an unknown event type selector
# invalid_event_label = "Invalid Event Type"

# Event types offered by "Add Event"
# event_types = [
#     { selector = 1, label = "Team Event" },
#     { selector = 2, label = "Individual Event" },
# ]

# Bonus points per outcome, matched case-insensitively (empty: no bonus)
# [scoring.outcome_points]
# Win = 3
# Draw = 1
# Lose = 0
"#
        .to_string()
    }
}

/// A string key that may be absent; any other lookup failure is an error.
fn optional_string(config: &Config, key: &str) -> Result<Option<String>, ApplicationError> {
    match config.get_string(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env() -> Environment {
        Environment::with_prefix("TSCORE").source(Some(HashMap::new()))
    }

    #[test]
    fn given_defaults_when_building_tables_then_match_original_behaviour() {
        let settings = Settings::default();
        let table = settings.event_type_table().expect("default table");
        assert_eq!(table.label_for(1), "Team Event");
        assert_eq!(table.label_for(2), "Individual Event");
        assert_eq!(table.label_for(3), "Invalid Event Type");
        assert!(settings.points_table().is_empty());
        assert_eq!(settings.input.on_invalid_number, InvalidNumberPolicy::Abort);
    }

    #[test]
    fn given_policy_strings_when_parsing_then_case_insensitive() {
        assert_eq!(
            "Reprompt".parse::<InvalidNumberPolicy>(),
            Ok(InvalidNumberPolicy::Reprompt)
        );
        assert_eq!(
            " abort ".parse::<InvalidNumberPolicy>(),
            Ok(InvalidNumberPolicy::Abort)
        );
        assert!("retry".parse::<InvalidNumberPolicy>().is_err());
    }

    #[test]
    fn given_env_override_when_loading_then_policy_replaced() {
        let env = Environment::with_prefix("TSCORE").source(Some(HashMap::from([(
            "TSCORE_INPUT__ON_INVALID_NUMBER".to_string(),
            "reprompt".to_string(),
        )])));
        let settings = Settings::apply_env_overrides(Settings::default(), env).unwrap();
        assert_eq!(
            settings.input.on_invalid_number,
            InvalidNumberPolicy::Reprompt
        );
    }

    #[test]
    fn given_bad_env_policy_when_loading_then_config_error() {
        let env = Environment::with_prefix("TSCORE").source(Some(HashMap::from([(
            "TSCORE_INPUT__ON_INVALID_NUMBER".to_string(),
            "sometimes".to_string(),
        )])));
        let result = Settings::apply_env_overrides(Settings::default(), env);
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_env_table_where_string_expected_when_loading_then_config_error() {
        let env = Environment::with_prefix("TSCORE").source(Some(HashMap::from([(
            "TSCORE_INPUT__ON_INVALID_NUMBER__MODE".to_string(),
            "reprompt".to_string(),
        )])));
        let result = Settings::apply_env_overrides(Settings::default(), env);
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_env_label_when_loading_then_fallback_label_replaced() {
        let env = Environment::with_prefix("TSCORE").source(Some(HashMap::from([(
            "TSCORE_SCORING__INVALID_EVENT_LABEL".to_string(),
            "Unknown".to_string(),
        )])));
        let settings = Settings::apply_env_overrides(Settings::default(), env).unwrap();
        assert_eq!(settings.scoring.invalid_event_label, "Unknown");
    }

    #[test]
    fn given_empty_env_when_applying_overrides_then_unchanged() {
        let settings = Settings::apply_env_overrides(Settings::default(), no_env()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_partial_overlay_when_merging_then_unset_fields_inherited() {
        let raw: RawSettings = toml::from_str(
            r#"
[scoring]
invalid_event_label = "Unknown"
"#,
        )
        .unwrap();
        let merged = Settings::default().merge_with(&raw);
        assert_eq!(merged.scoring.invalid_event_label, "Unknown");
        assert_eq!(merged.scoring.event_types.len(), 2);
        assert_eq!(merged.input.on_invalid_number, InvalidNumberPolicy::Abort);
    }

    #[test]
    fn given_template_when_parsed_then_yields_defaults() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("template parses");
        assert_eq!(Settings::default().merge_with(&raw), Settings::default());
    }

    #[test]
    fn given_settings_when_serialized_then_roundtrips_through_raw() {
        let text = Settings::default().to_toml().unwrap();
        let raw: RawSettings = toml::from_str(&text).unwrap();
        assert_eq!(Settings::default().merge_with(&raw), Settings::default());
    }
}
