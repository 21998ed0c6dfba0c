use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalaxyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid radius range: min_radius {min} > max_radius {max}")]
    InvalidRadiusRange { min: u32, max: u32 },

    #[error("Probability '{name}' must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("Grid size must be > 0, got {0}")]
    NonPositiveGridSize(i64),

    #[error("Window must be at least one pixel in each direction, got {width}x{height}")]
    InvalidWindow { width: i64, height: i64 },

    #[error("Scale factor must be > 0, got {0}")]
    NonPositiveScale(f64),

    #[error("Life ring extra radius must be finite and >= 0, got {0}")]
    InvalidLifeRing(f64),

    #[error("Camera speed must be > 0, got {0}")]
    NonPositiveSpeed(f64),

    #[error("Color palette is empty")]
    EmptyPalette,

    #[error("Font '{name}' is not configured")]
    UnknownFont { name: String },

    #[error("Preset '{name}' not found")]
    UnknownPreset { name: String },

    #[error("Collaborator '{collaborator}' failed: {source}")]
    Collaborator {
        collaborator: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GalaxyResult<T> = Result<T, GalaxyError>;
