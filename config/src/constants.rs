//! # Configuration Constants
//!
//! Centralized constants for sphere mesh generation. Resolution limits,
//! precision values and the geometric constants of the base polyhedra are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Valid subdivision levels
//! - **Geometry**: Constants of the base polyhedra

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Vectors shorter than this cannot be normalized onto the unit sphere and
/// are treated as degenerate.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance for checking that an exported `f32` position lies on the unit
/// sphere.
///
/// Positions are computed in `f64` and rounded to `f32` on export, so the
/// check is loose enough to absorb single-precision rounding.
///
/// # Example
///
/// ```rust
/// use config::constants::UNIT_LENGTH_TOLERANCE;
///
/// let length = 0.999_999_5_f64;
/// assert!((length - 1.0).abs() < UNIT_LENGTH_TOLERANCE);
/// ```
pub const UNIT_LENGTH_TOLERANCE: f64 = 1e-5;

/// Largest normalization tolerance [`GlobalConfig::new`] accepts.
///
/// Every pre-normalized midpoint and face centre of the base polyhedra is
/// longer than 0.5, so any tolerance up to this bound rejects only truly
/// degenerate vectors.
pub const MAX_TOLERANCE: f64 = UNIT_LENGTH_TOLERANCE;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Smallest valid resolution. Resolution 1 is the unsubdivided base
/// polyhedron.
pub const MIN_RESOLUTION: i32 = 1;

/// Largest resolution accepted by default.
///
/// Vertex and face counts grow as `4^resolution`; at 10 an icosphere already
/// holds 2,621,442 vertices and 5,242,880 triangles. Raising the limit is
/// possible through [`GlobalConfig::new`] up to [`HARD_MAX_RESOLUTION`].
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_RESOLUTION;
///
/// let vertices = 10 * 4usize.pow((MAX_RESOLUTION - 1) as u32) + 2;
/// assert_eq!(vertices, 2_621_442);
/// ```
pub const MAX_RESOLUTION: i32 = 10;

/// Absolute resolution ceiling.
///
/// An icosphere at this level holds 10,485,762 vertices and 20,971,520
/// triangles, roughly 1 GB of working memory including the midpoint cache.
pub const HARD_MAX_RESOLUTION: i32 = 11;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// The golden ratio `(1 + sqrt(5)) / 2`.
///
/// The twelve icosahedron vertices are the cyclic permutations of
/// `(±1, ±GOLDEN_RATIO, 0)`.
///
/// # Example
///
/// ```rust
/// use config::constants::GOLDEN_RATIO;
///
/// // phi^2 = phi + 1
/// assert!((GOLDEN_RATIO * GOLDEN_RATIO - (GOLDEN_RATIO + 1.0)).abs() < 1e-12);
/// ```
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a vector length is one within UNIT_LENGTH_TOLERANCE.
///
/// # Example
///
/// ```rust
/// use config::constants::is_unit_length;
///
/// assert!(is_unit_length(1.000_001));
/// assert!(!is_unit_length(1.01));
/// ```
#[inline]
pub fn is_unit_length(length: f64) -> bool {
    (length - 1.0).abs() < UNIT_LENGTH_TOLERANCE
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of generator settings that can be shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Minimum vector length accepted for normalization.
    pub tolerance: f64,
    /// Highest resolution a generator accepts.
    pub max_resolution: i32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and resolution limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-8, 6).expect("valid config");
    /// assert_eq!(cfg.max_resolution, 6);
    /// ```
    pub fn new(tolerance: f64, max_resolution: i32) -> Result<Self, ConfigError> {
        if tolerance.is_nan() || tolerance <= 0.0 || tolerance > MAX_TOLERANCE {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(MIN_RESOLUTION..=HARD_MAX_RESOLUTION).contains(&max_resolution) {
            return Err(ConfigError::InvalidMaxResolution(max_resolution));
        }
        Ok(Self {
            tolerance,
            max_resolution,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            max_resolution: MAX_RESOLUTION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is not in `(0, MAX_TOLERANCE]`.
    InvalidTolerance(f64),
    /// Raised when the resolution limit lies outside
    /// `MIN_RESOLUTION..=HARD_MAX_RESOLUTION`.
    InvalidMaxResolution(i32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be in (0, {MAX_TOLERANCE}]: {value}")
            }
            ConfigError::InvalidMaxResolution(value) => write!(
                f,
                "max_resolution must be in {MIN_RESOLUTION}..={HARD_MAX_RESOLUTION}: {value}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
