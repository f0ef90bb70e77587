use std::path::PathBuf;

use rewear_core::fit::{MeasurementProfile, PreferredFit};

use crate::error::CliError;

/// CLI configuration loaded from environment variables.
///
/// All fields have defaults, so an empty environment yields the bundled
/// catalog and the stock viewer profile.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Catalog JSON file. `None` means the bundled fixtures.
    pub catalog_path: Option<PathBuf>,
    /// Viewer measurements used for fit badges.
    pub viewer: MeasurementProfile,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default              |
    /// |------------------------|----------------------|
    /// | `REWEAR_CATALOG_PATH`  | bundled fixtures     |
    /// | `REWEAR_VIEWER_CHEST`  | `96`                 |
    /// | `REWEAR_VIEWER_WAIST`  | `81`                 |
    /// | `REWEAR_VIEWER_HIPS`   | `101`                |
    /// | `REWEAR_VIEWER_HEIGHT` | `175`                |
    /// | `REWEAR_PREFERRED_FIT` | `regular`            |
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let defaults = MeasurementProfile::default();

        let measurement = |key: &str, default: f64| -> Result<f64, CliError> {
            match lookup(key) {
                None => Ok(default),
                Some(raw) => {
                    let value: f64 = raw.trim().parse().map_err(|_| {
                        CliError::Config(format!("{key} must be a number, got '{raw}'"))
                    })?;
                    if !value.is_finite() || value <= 0.0 {
                        return Err(CliError::Config(format!(
                            "{key} must be a positive number, got '{raw}'"
                        )));
                    }
                    Ok(value)
                }
            }
        };

        let preferred_fit = match lookup("REWEAR_PREFERRED_FIT") {
            None => defaults.preferred_fit,
            Some(raw) => PreferredFit::from_str_value(raw.trim().to_lowercase().as_str())
                .map_err(CliError::Config)?,
        };

        let viewer = MeasurementProfile {
            chest: measurement("REWEAR_VIEWER_CHEST", defaults.chest)?,
            waist: measurement("REWEAR_VIEWER_WAIST", defaults.waist)?,
            hips: measurement("REWEAR_VIEWER_HIPS", defaults.hips)?,
            height: measurement("REWEAR_VIEWER_HEIGHT", defaults.height)?,
            preferred_fit,
        };

        let catalog_path = lookup("REWEAR_CATALOG_PATH")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            catalog_path,
            viewer,
        })
    }
}
