use serde::Deserialize;

/// Top-level Boreas simulation configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoreasConfig {
    /// Synthetic store catalog.
    #[serde(default)]
    pub store: StoreConfig,

    /// Initial map view, if any.
    #[serde(default)]
    pub view: Option<ViewConfig>,

    /// Reload schedule, applied in order.
    #[serde(default)]
    pub schedule: Vec<ScheduleStep>,
}

/// Catalog of weather parameters the synthetic store publishes.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default, rename = "parameter")]
    pub parameters: Vec<ParameterConfig>,
}

/// One weather parameter and its published time slices.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterConfig {
    /// Parameter id; 0 is reserved for terrain and may not appear here.
    pub id: u32,
    /// Human-readable field name.
    pub name: String,
    /// Published slice times as "HH:MM" or "HH:MM:SS" local strings.
    pub times: Vec<String>,
    /// Coverage radius of a loaded layer, kilometres.
    #[serde(default = "default_coverage_km")]
    pub coverage_km: f64,
    /// If set, every load of this parameter fails with this reason.
    #[serde(default)]
    pub fail: Option<String>,
}

/// Map view center and radius of interest.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
}

/// One step of the reload schedule.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleStep {
    /// Local time of day of this tick, "HH:MM" or "HH:MM:SS".
    pub at: String,

    /// Switch the desired parameter before reloading (0 = terrain).
    #[serde(default)]
    pub parameter: Option<u32>,

    /// Pin the requested time slice before reloading ("00:00" unpins).
    #[serde(default)]
    pub pin_time: Option<String>,

    /// Jump the view center before reloading (both must be present).
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

fn default_coverage_km() -> f64 {
    150.0
}

fn default_radius_km() -> f64 {
    50.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let toml = r#"
            [[store.parameter]]
            id = 1
            name = "thermal updraft velocity"
            times = ["06:00", "09:00", "12:00"]
            coverage_km = 80.0

            [view]
            latitude = 47.0
            longitude = 8.0

            [[schedule]]
            at = "09:30"
            parameter = 1

            [[schedule]]
            at = "12:15"
        "#;
        let config: BoreasConfig = toml::from_str(toml).expect("parse");
        assert_eq!(config.store.parameters.len(), 1);
        assert_eq!(config.store.parameters[0].id, 1);
        assert!((config.store.parameters[0].coverage_km - 80.0).abs() < f64::EPSILON);
        assert!(config.store.parameters[0].fail.is_none());
        let view = config.view.expect("view");
        assert!((view.radius_km - 50.0).abs() < f64::EPSILON, "default radius");
        assert_eq!(config.schedule.len(), 2);
        assert_eq!(config.schedule[0].parameter, Some(1));
        assert_eq!(config.schedule[1].parameter, None);
    }

    #[test]
    fn empty_config_is_valid() {
        let config: BoreasConfig = toml::from_str("").expect("parse");
        assert!(config.store.parameters.is_empty());
        assert!(config.view.is_none());
        assert!(config.schedule.is_empty());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let toml = r#"
            [view]
            latitude = 47.0
            longitude = 8.0
            altitude = 1200.0
        "#;
        assert!(toml::from_str::<BoreasConfig>(toml).is_err());
    }
}
