use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;
use crate::utils::{
    CONTRAIL_MAX_ALTITUDE, CONTRAIL_MIN_ALTITUDE, CONTRAIL_MIN_MACH, ENGINE_ROTATION_SPEED,
    ENGINE_ROTATION_SPEED_SP, RETRO_THRUST_RATIO,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleLightType {
    Emissive,
    Diffuse,
}

/// Mapping from the stream level to particle alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LevelMap {
    Flat,
    Lin,
    Sqrt,
    PLin { lmin: f64, lmax: f64 },
}

/// Mapping from atmospheric density to particle alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AtmosphereMap {
    Flat,
    PLin { amin: f64, amax: f64 },
    PLog { amin: f64, amax: f64 },
}

/// Particle stream parameters, passed through to the host untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleStreamSpec {
    pub src_size: f64,
    pub src_rate: f64,
    pub v0: f64,
    pub src_spread: f64,
    pub lifetime: f64,
    pub growth_rate: f64,
    pub atm_slowdown: f64,
    pub light_type: ParticleLightType,
    pub level_map: LevelMap,
    pub atm_map: AtmosphereMap,
}

impl ParticleStreamSpec {
    pub fn engine_contrail() -> Self {
        Self {
            src_size: 0.5,
            src_rate: 0.95,
            v0: 120.0,
            src_spread: 0.03,
            lifetime: 10.0,
            growth_rate: 5.0,
            atm_slowdown: 3.0,
            light_type: ParticleLightType::Emissive,
            level_map: LevelMap::PLin {
                lmin: -1.0,
                lmax: 25.0,
            },
            atm_map: AtmosphereMap::PLin {
                amin: 0.0,
                amax: 0.0,
            },
        }
    }

    pub fn water_discharge() -> Self {
        Self {
            src_size: 2.0,
            src_rate: 20.0,
            v0: 200.0,
            src_spread: 0.05,
            lifetime: 2.5,
            growth_rate: 8.0,
            atm_slowdown: 1.0,
            light_type: ParticleLightType::Emissive,
            level_map: LevelMap::Sqrt,
            atm_map: AtmosphereMap::PLog {
                amin: 1e-5,
                amax: 0.1,
            },
        }
    }
}

/// When the contrail streams are lit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrailConfig {
    /// Mach number that must be exceeded.
    pub min_mach: f64,
    /// Altitude that must be exceeded (m).
    pub min_altitude: f64,
    /// Altitude that must not be reached (m); `None` leaves the band open.
    #[serde(default)]
    pub max_altitude: Option<f64>,
    pub stream: ParticleStreamSpec,
}

impl ContrailConfig {
    pub fn bounded() -> Self {
        Self {
            min_mach: CONTRAIL_MIN_MACH,
            min_altitude: CONTRAIL_MIN_ALTITUDE,
            max_altitude: Some(CONTRAIL_MAX_ALTITUDE),
            stream: ParticleStreamSpec::engine_contrail(),
        }
    }

    pub fn open_ended() -> Self {
        Self {
            max_altitude: None,
            ..Self::bounded()
        }
    }

    /// Whether the contrails should be visible at the given flight condition.
    pub fn is_active(&self, mach: f64, altitude: f64) -> bool {
        mach > self.min_mach
            && altitude > self.min_altitude
            && self.max_altitude.map_or(true, |max| altitude < max)
    }
}

/// Water tank and discharge nozzles of the Supertanker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterDischargeConfig {
    /// Water capacity (kg).
    pub mass: f64,
    /// Thrust per nozzle (N).
    pub max_thrust: f64,
    /// Specific impulse (m/s).
    pub isp: f64,
    pub nozzles: Vec<Vector3<f64>>,
    pub direction: Vector3<f64>,
    pub exhaust: ParticleStreamSpec,
}

impl WaterDischargeConfig {
    pub fn b747_supertanker() -> Self {
        Self {
            mass: 74_200.0,
            max_thrust: 100.0,
            isp: 0.0625,
            nozzles: vec![Vector3::new(-1.5, -4.5, -5.0), Vector3::new(1.5, -4.5, -5.0)],
            direction: Vector3::new(0.0, 1.0, 0.0),
            exhaust: ParticleStreamSpec::water_discharge(),
        }
    }
}

/// Engines, their contrails and the optional water discharge system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropulsionConfig {
    /// Thrust per engine (N).
    pub max_thrust: f64,
    /// Fuel specific impulse (m/s).
    pub isp: f64,
    /// Retro thrust as a fraction of `max_thrust`.
    #[serde(default = "default_retro_ratio")]
    pub retro_ratio: f64,
    /// One entry per engine, outboard left to outboard right.
    pub engines: Vec<Vector3<f64>>,
    pub contrail: ContrailConfig,
    /// Fan animation speed factor.
    pub fan_rotation_speed: f64,
    #[serde(default)]
    pub water: Option<WaterDischargeConfig>,
}

fn default_retro_ratio() -> f64 {
    RETRO_THRUST_RATIO
}

impl PropulsionConfig {
    /// Four engines on the 747 pylons.
    pub fn four_engine(max_thrust: f64, isp: f64, contrail: ContrailConfig, fan: f64) -> Self {
        Self {
            max_thrust,
            isp,
            retro_ratio: RETRO_THRUST_RATIO,
            engines: vec![
                Vector3::new(-21.1, -1.9, -1.0),
                Vector3::new(-12.1, -3.2, 4.6),
                Vector3::new(12.1, -3.2, 4.6),
                Vector3::new(21.1, -1.9, -1.0),
            ],
            contrail,
            fan_rotation_speed: fan,
            water: None,
        }
    }

    pub fn b747_100() -> Self {
        Self::four_engine(
            500e3,
            2e4,
            ContrailConfig::open_ended(),
            ENGINE_ROTATION_SPEED,
        )
    }

    pub fn b747_sp() -> Self {
        Self::four_engine(
            500e3,
            2e4,
            ContrailConfig::open_ended(),
            ENGINE_ROTATION_SPEED_SP,
        )
    }

    pub fn b747_400() -> Self {
        Self::four_engine(450e3, 1e5, ContrailConfig::bounded(), ENGINE_ROTATION_SPEED)
    }

    pub fn b747_8() -> Self {
        Self::four_engine(450e3, 1e5, ContrailConfig::bounded(), ENGINE_ROTATION_SPEED)
    }

    pub fn b747_supertanker() -> Self {
        Self {
            water: Some(WaterDischargeConfig::b747_supertanker()),
            ..Self::four_engine(400e3, 1e5, ContrailConfig::bounded(), ENGINE_ROTATION_SPEED)
        }
    }

    /// Retro thrust per engine (N).
    pub fn retro_thrust(&self) -> f64 {
        self.max_thrust * self.retro_ratio
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engines.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one engine is required".to_string(),
            ));
        }
        if self.max_thrust <= 0.0 || self.isp <= 0.0 {
            return Err(ConfigError::ValidationError(
                "engine thrust and isp must be positive".to_string(),
            ));
        }
        if let Some(max) = self.contrail.max_altitude {
            if max <= self.contrail.min_altitude {
                return Err(ConfigError::ValidationError(
                    "contrail band is empty".to_string(),
                ));
            }
        }
        if let Some(water) = &self.water {
            if water.nozzles.is_empty() {
                return Err(ConfigError::ValidationError(
                    "water discharge needs at least one nozzle".to_string(),
                ));
            }
        }
        Ok(())
    }
}
