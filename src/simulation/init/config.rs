use serde::{Deserialize, Serialize};

use crate::systems::behaviors::RuleParams;

/// Upper bound on `width * height` accepted from config.
const MAX_CELLS: u64 = 1 << 24;
/// Side limit for `with_size`; `MAX_SIDE * MAX_SIDE == MAX_CELLS`.
const MAX_SIDE: u32 = 1 << 12;

/// Engine configuration. Every field has a default, so `{}` is valid JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    /// Max lateral skim distance for liquids, in cells.
    pub liquid_dispersal: i32,
    /// Life generations advance at most this often (simulated ms).
    pub life_interval_ms: f64,
    /// Simulated ms per `tick()`.
    pub frame_ms: f64,
    pub explosion_force: i32,
    pub explosion_radius: i32,
    /// Painting brushes stop once the population reaches this.
    pub max_grains: Option<u32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            seed: 0x00D0_57ED,
            liquid_dispersal: 7,
            life_interval_ms: 50.0,
            frame_ms: 1000.0 / 60.0,
            explosion_force: 40,
            explosion_radius: 100,
            max_grains: None,
        }
    }
}

impl SimConfig {
    /// Default config at the given size. Each side is clamped to
    /// `1..=4096`, so the result always validates.
    pub fn with_size(width: u32, height: u32) -> Self {
        let (w, h) = (width.clamp(1, MAX_SIDE), height.clamp(1, MAX_SIDE));
        if (w, h) != (width, height) {
            log::warn!("grid {width}x{height} clamped to {w}x{h}");
        }
        Self {
            width: w,
            height: h,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        let result = self.check();
        if let Err(e) = &result {
            log::warn!("rejected config: {e}");
        }
        result
    }

    fn check(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("grid must be non-empty, got {}x{}", self.width, self.height));
        }
        if self.width as u64 * self.height as u64 > MAX_CELLS {
            return Err(format!("grid {}x{} exceeds {} cells", self.width, self.height, MAX_CELLS));
        }
        if self.liquid_dispersal <= 0 {
            return Err(format!("liquid_dispersal must be positive, got {}", self.liquid_dispersal));
        }
        if !self.life_interval_ms.is_finite() || self.life_interval_ms < 0.0 {
            return Err(format!("life_interval_ms must be >= 0, got {}", self.life_interval_ms));
        }
        if !self.frame_ms.is_finite() || self.frame_ms <= 0.0 {
            return Err(format!("frame_ms must be positive, got {}", self.frame_ms));
        }
        if self.explosion_force <= 0 || self.explosion_radius < 0 {
            return Err(format!(
                "explosion force/radius out of range: {}/{}",
                self.explosion_force, self.explosion_radius
            ));
        }
        Ok(())
    }

    pub fn rule_params(&self) -> RuleParams {
        RuleParams {
            liquid_dispersal: self.liquid_dispersal,
            explosion_force: self.explosion_force,
            explosion_radius: self.explosion_radius,
        }
    }
}
