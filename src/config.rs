use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::schemas::AppState;

/// Hourly kWh served when no profile is given: a household day with an evening peak
pub const DEFAULT_PREDICTION: [f64; 24] = [
    0.42, 0.38, 0.35, 0.34, 0.36, 0.48, 0.95, 1.32, 1.10, 0.86, 0.78, 0.92,
    1.05, 0.88, 0.80, 0.91, 1.24, 1.76, 2.31, 2.45, 1.98, 1.42, 0.87, 0.55,
];

/// How `GET /predict` answers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProfileMode {
    /// `200 {"prediction": [...]}`
    #[default]
    Valid,
    /// `200 {"prediction": "bad"}`
    Malformed,
    /// `200 {}`
    Missing,
    /// `500` with an error body
    ServerError,
}

impl ProfileMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileMode::Valid => "valid",
            ProfileMode::Malformed => "malformed",
            ProfileMode::Missing => "missing",
            ProfileMode::ServerError => "server_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastProfile {
    #[serde(default)]
    pub mode: ProfileMode,
    #[serde(default = "default_prediction")]
    pub prediction: Vec<f64>,
}

fn default_prediction() -> Vec<f64> {
    DEFAULT_PREDICTION.to_vec()
}

impl Default for ForecastProfile {
    fn default() -> Self {
        Self {
            mode: ProfileMode::default(),
            prediction: default_prediction(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid profile YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// JSON cannot carry NaN or infinities, so a valid profile must not either
    #[error("prediction[{index}] is not a finite number")]
    NonFinite { index: usize },
}

impl ForecastProfile {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ProfileError> {
        let profile: ForecastProfile = serde_yaml::from_str(yaml)?;
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> Result<(), ProfileError> {
        if self.mode != ProfileMode::Valid {
            return Ok(());
        }
        match self.prediction.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(ProfileError::NonFinite { index }),
            None => Ok(()),
        }
    }
}

/// Load the profile at `path`, or the built-in one when no path is given
pub fn load_profile(path: Option<&Path>) -> Result<ForecastProfile, ProfileError> {
    let Some(path) = path else {
        tracing::debug!("No profile given, using built-in forecast");
        return Ok(ForecastProfile::default());
    };

    tracing::info!("Loading forecast profile: {}", path.display());
    let yaml = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ForecastProfile::from_yaml_str(&yaml)
}

/// Initialize application state from an optional profile path
pub fn initialize_app_state(profile_path: Option<&Path>) -> Result<AppState, ProfileError> {
    let profile = load_profile(profile_path)?;
    tracing::debug!(
        "Forecast profile: mode={}, {} points",
        profile.mode.as_str(),
        profile.prediction.len()
    );
    Ok(AppState {
        profile: Arc::new(profile),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = ForecastProfile::default();
        assert_eq!(profile.mode, ProfileMode::Valid);
        assert_eq!(profile.prediction.len(), 24);
        assert!(profile.prediction.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_parse_full_profile() {
        let profile = ForecastProfile::from_yaml_str("mode: valid\nprediction: [0.5, 0.7, 0.9]\n")
            .expect("Should parse profile");
        assert_eq!(profile.mode, ProfileMode::Valid);
        assert_eq!(profile.prediction, vec![0.5, 0.7, 0.9]);
    }

    #[test]
    fn test_mode_only_keeps_default_prediction() {
        let profile = ForecastProfile::from_yaml_str("mode: server_error\n").unwrap();
        assert_eq!(profile.mode, ProfileMode::ServerError);
        assert_eq!(profile.prediction, DEFAULT_PREDICTION.to_vec());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result = ForecastProfile::from_yaml_str("mode: flaky\n");
        assert!(matches!(result, Err(ProfileError::Parse(_))));
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let result = ForecastProfile::from_yaml_str("prediction: [1.0, .nan]\n");
        assert!(matches!(result, Err(ProfileError::NonFinite { index: 1 })));

        let result = ForecastProfile::from_yaml_str("prediction: [.inf]\n");
        assert!(matches!(result, Err(ProfileError::NonFinite { index: 0 })));
    }

    #[test]
    fn test_non_finite_values_allowed_outside_valid_mode() {
        let profile = ForecastProfile::from_yaml_str("mode: malformed\nprediction: [.nan]\n");
        assert!(profile.is_ok());
    }

    #[test]
    fn test_missing_profile_file() {
        let result = load_profile(Some(Path::new("/nonexistent/energy-saver/profile.yaml")));
        match result {
            Err(ProfileError::Read { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/energy-saver/profile.yaml"));
            }
            other => panic!("Expected read error, got {:?}", other),
        }
    }

    #[test]
    fn test_shipped_profiles_parse() {
        let low = ForecastProfile::from_yaml_str(include_str!("../profiles/low.yaml")).unwrap();
        assert_eq!(low.prediction, vec![0.5, 0.7, 0.9]);

        let high = ForecastProfile::from_yaml_str(include_str!("../profiles/high.yaml")).unwrap();
        assert_eq!(high.prediction, vec![1.0, 2.5, 1.8]);

        for (yaml, mode) in [
            (include_str!("../profiles/malformed.yaml"), ProfileMode::Malformed),
            (include_str!("../profiles/missing.yaml"), ProfileMode::Missing),
            (include_str!("../profiles/server_error.yaml"), ProfileMode::ServerError),
        ] {
            assert_eq!(ForecastProfile::from_yaml_str(yaml).unwrap().mode, mode);
        }
    }

    #[test]
    fn test_no_path_uses_default() {
        assert_eq!(load_profile(None).unwrap(), ForecastProfile::default());
    }
}
