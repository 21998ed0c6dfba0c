//! Static viewer configuration, loaded once at startup.
//!
//! Every section carries `#[serde(default)]`, so a config file only has
//! to name the values it changes. `validate()` runs on every load path;
//! nothing downstream re-checks these invariants.

use crate::{
    color::{BodyColor, Rgb, BLACK, GREEN, WHITE},
    error::{GalaxyError, GalaxyResult},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ── Generation ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Probability that a cell holds a body.
    pub density: f64,
    /// Probability that an existing body carries life.
    pub life_prob: f64,
    pub min_radius: u32,
    pub max_radius: u32,
    pub palette: Vec<BodyColor>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            density:    0.05,
            life_prob:  0.005,
            min_radius: 2,
            max_radius: 6,
            palette:    BodyColor::DEFAULT_PALETTE.to_vec(),
        }
    }
}

// ── Viewport ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Pixels per cell side.
    pub grid_size: i64,
    /// World units moved per input tick per held key.
    pub speed: f64,
    /// Logical screen size, in pixels.
    pub window_width: i64,
    pub window_height: i64,
    /// The logical screen is upscaled by this factor for presentation.
    pub scale_factor: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            grid_size:     16,
            speed:         4.0,
            window_width:  300,
            window_height: 300,
            scale_factor:  3.0,
        }
    }
}

impl ViewportConfig {
    /// Size of the presented window after upscaling.
    pub fn presented_size(&self) -> (u32, u32) {
        (
            (self.window_width as f64 * self.scale_factor).round() as u32,
            (self.window_height as f64 * self.scale_factor).round() as u32,
        )
    }
}

// ── Style ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    pub name: String,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Extra radius of the life ring beyond the body radius.
    /// `None` means a third of the grid size.
    pub life_ring_extra: Option<f64>,
    pub life_ring_width: u32,
    pub label_font: String,
    pub overlay_font: String,
    pub fonts: Vec<FontConfig>,
    pub background: Rgb,
    pub text_color: Rgb,
    pub life_color: Rgb,
    /// Top-left corner of the location overlay.
    pub overlay_origin: (i64, i64),
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            life_ring_extra: None,
            life_ring_width: 1,
            label_font:      "mono-medium".into(),
            overlay_font:    "mono-medium".into(),
            fonts: vec![
                FontConfig { name: "mono-small".into(),  size: 10 },
                FontConfig { name: "mono-medium".into(), size: 15 },
                FontConfig { name: "mono-large".into(),  size: 20 },
            ],
            background:      BLACK,
            text_color:      WHITE,
            life_color:      GREEN,
            overlay_origin:  (10, 10),
        }
    }
}

impl StyleConfig {
    pub fn font(&self, name: &str) -> Option<&FontConfig> {
        self.fonts.iter().find(|f| f.name == name)
    }
}

// ── Top level ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    pub generation: GenerationConfig,
    pub viewport:   ViewportConfig,
    pub style:      StyleConfig,
}

/// Preset names accepted by `GalaxyConfig::preset`.
pub const PRESETS: [&str; 2] = ["classic", "sparse"];

impl GalaxyConfig {
    /// Load from a JSON file and validate.
    pub fn load(path: impl AsRef<Path>) -> GalaxyResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse a JSON document and validate.
    pub fn from_json_str(content: &str) -> GalaxyResult<Self> {
        let config: GalaxyConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Named visual variants. Generation code is shared; only values differ.
    pub fn preset(name: &str) -> GalaxyResult<Self> {
        match name {
            "classic" => Ok(Self::default()),
            "sparse" => {
                let mut config = Self::default();
                config.generation.density = 0.02;
                config.generation.min_radius = 3;
                config.generation.max_radius = 7;
                config.style.life_ring_extra = Some(config.viewport.grid_size as f64 / 2.0);
                config.style.label_font = "mono-large".into();
                Ok(config)
            }
            other => Err(GalaxyError::UnknownPreset { name: other.to_string() }),
        }
    }

    /// Fail fast on any value the viewer cannot honour.
    pub fn validate(&self) -> GalaxyResult<()> {
        let g = &self.generation;
        check_probability("density", g.density)?;
        check_probability("life_prob", g.life_prob)?;
        if g.min_radius > g.max_radius {
            return Err(GalaxyError::InvalidRadiusRange { min: g.min_radius, max: g.max_radius });
        }
        if g.palette.is_empty() {
            return Err(GalaxyError::EmptyPalette);
        }

        let v = &self.viewport;
        if v.grid_size <= 0 {
            return Err(GalaxyError::NonPositiveGridSize(v.grid_size));
        }
        if v.window_width <= 0 || v.window_height <= 0 {
            return Err(GalaxyError::InvalidWindow {
                width:  v.window_width,
                height: v.window_height,
            });
        }
        // NaN fails both comparisons, hence the negated form.
        if !(v.scale_factor > 0.0) || !v.scale_factor.is_finite() {
            return Err(GalaxyError::NonPositiveScale(v.scale_factor));
        }
        if !(v.speed > 0.0) || !v.speed.is_finite() {
            return Err(GalaxyError::NonPositiveSpeed(v.speed));
        }

        let s = &self.style;
        if let Some(extra) = s.life_ring_extra {
            if !(extra >= 0.0) || !extra.is_finite() {
                return Err(GalaxyError::InvalidLifeRing(extra));
            }
        }
        for font in [&s.label_font, &s.overlay_font] {
            if s.font(font).is_none() {
                return Err(GalaxyError::UnknownFont { name: font.clone() });
            }
        }
        Ok(())
    }

    /// Ring radius beyond the body edge for life-bearing bodies.
    pub fn life_ring_extra(&self) -> f64 {
        self.style
            .life_ring_extra
            .unwrap_or(self.viewport.grid_size as f64 / 3.0)
    }
}

fn check_probability(name: &'static str, value: f64) -> GalaxyResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GalaxyError::ProbabilityOutOfRange { name, value })
    }
}
