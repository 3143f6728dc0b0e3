use thiserror::Error;

use crate::components::aircraft::config::VesselConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid vessel configuration: {0}")]
    ValidationError(String),
}

impl VesselConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: VesselConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration so it can be edited and loaded back.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks every section for values the vessel cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "vessel name cannot be empty".to_string(),
            ));
        }
        if self.meshes.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one mesh is required".to_string(),
            ));
        }
        self.mass.validate()?;
        self.geometry.validate()?;
        self.aero_coef.vertical.validate("vertical lift")?;
        self.aero_coef.horizontal.validate("horizontal lift")?;
        self.propulsion.validate()?;
        self.gear.validate()?;
        if let Some(livery) = &self.livery {
            livery.validate()?;
        }
        if let Some(lighting) = &self.lighting {
            lighting.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::aircraft::config::VariantType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_variants_validate() {
        for variant in VariantType::builtin() {
            let config = VesselConfig::from_programmed(variant.clone());
            assert!(config.validate().is_ok(), "{:?} failed validation", variant);
        }
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = VesselConfig::from_programmed(VariantType::Supertanker);
        let yaml = config.to_yaml_string().unwrap();
        let loaded = VesselConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_yaml_is_reported() {
        let result = VesselConfig::from_yaml_str("name: [unterminated");
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_validation_runs_after_parse() {
        let mut config = VesselConfig::from_programmed(VariantType::B747_100);
        config.gear.operating_speed = 0.0;
        let yaml = config.to_yaml_string().unwrap();
        assert!(matches!(
            VesselConfig::from_yaml_str(&yaml),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
