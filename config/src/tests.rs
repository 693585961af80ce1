//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_unit_length_tolerance_larger_than_epsilon() {
    assert!(
        UNIT_LENGTH_TOLERANCE >= EPSILON,
        "UNIT_LENGTH_TOLERANCE should be >= EPSILON"
    );
}

#[test]
fn test_unit_length_tolerance_absorbs_f32_rounding() {
    // Relative f32 precision is ~6e-8; the tolerance must be well above it
    assert!(UNIT_LENGTH_TOLERANCE > f32::EPSILON as f64 * 10.0);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_min_resolution_is_base_polyhedron() {
    assert_eq!(MIN_RESOLUTION, 1);
}

#[test]
fn test_resolution_bounds_ordered() {
    assert!(MIN_RESOLUTION <= MAX_RESOLUTION);
    assert!(MAX_RESOLUTION <= HARD_MAX_RESOLUTION);
}

#[test]
fn test_hard_max_resolution_fits_u32_indices() {
    // Icosphere vertex count at the ceiling must be addressable by u32
    let passes = (HARD_MAX_RESOLUTION - 1) as u32;
    let vertices = 10u64 * 4u64.pow(passes) + 2;
    assert!(vertices <= u32::MAX as u64);
}

#[test]
fn test_hard_max_resolution_stays_in_memory() {
    // 48 bytes of f64 position and normal per vertex while generating
    let passes = (HARD_MAX_RESOLUTION - 1) as u32;
    let vertices = 10u64 * 4u64.pow(passes) + 2;
    assert!(vertices * 48 < 1 << 30);
}

// =============================================================================
// GEOMETRY TESTS
// =============================================================================

#[test]
fn test_golden_ratio_matches_formula() {
    let expected = (1.0 + 5.0_f64.sqrt()) / 2.0;
    assert!(approx_equal(GOLDEN_RATIO, expected));
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_approx_equal_same_values() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(0.0, 0.0));
    assert!(approx_equal(-5.5, -5.5));
}

#[test]
fn test_approx_equal_different_values() {
    assert!(!approx_equal(1.0, 2.0));
    assert!(!approx_equal(0.0, 1e-5));
}

#[test]
fn test_is_unit_length() {
    assert!(is_unit_length(1.0));
    assert!(is_unit_length(0.999_995));
    assert!(!is_unit_length(0.5));
    assert!(!is_unit_length(0.0));
}

// =============================================================================
// GLOBAL CONFIG TESTS
// =============================================================================

#[test]
fn test_global_config_default() {
    let config = GlobalConfig::default();
    assert_eq!(config.tolerance, EPSILON);
    assert_eq!(config.max_resolution, MAX_RESOLUTION);
}

#[test]
fn test_global_config_accepts_valid_values() {
    let config = GlobalConfig::new(1e-6, 6).unwrap();
    assert_eq!(config.tolerance, 1e-6);
    assert_eq!(config.max_resolution, 6);
}

#[test]
fn test_global_config_rejects_non_positive_tolerance() {
    assert_eq!(
        GlobalConfig::new(0.0, 6),
        Err(ConfigError::InvalidTolerance(0.0))
    );
    assert!(GlobalConfig::new(-1.0, 6).is_err());
    assert!(GlobalConfig::new(f64::NAN, 6).is_err());
}

#[test]
fn test_global_config_rejects_tolerance_above_max() {
    assert!(GlobalConfig::new(MAX_TOLERANCE, 6).is_ok());
    assert_eq!(
        GlobalConfig::new(2.0, 6),
        Err(ConfigError::InvalidTolerance(2.0))
    );
    assert!(GlobalConfig::new(MAX_TOLERANCE * 2.0, 6).is_err());
    assert!(GlobalConfig::new(f64::INFINITY, 6).is_err());
}

#[test]
fn test_max_tolerance_below_shortest_midpoint() {
    // Face centre of the unit cube projected corners: 1/sqrt(3)
    assert!(MAX_TOLERANCE < 1.0 / 3.0_f64.sqrt());
    assert!(MAX_TOLERANCE >= EPSILON);
}

#[test]
fn test_global_config_rejects_out_of_range_max_resolution() {
    assert_eq!(
        GlobalConfig::new(1e-6, 0),
        Err(ConfigError::InvalidMaxResolution(0))
    );
    assert_eq!(
        GlobalConfig::new(1e-6, HARD_MAX_RESOLUTION + 1),
        Err(ConfigError::InvalidMaxResolution(HARD_MAX_RESOLUTION + 1))
    );
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidTolerance(2.0);
    assert!(err.to_string().contains("tolerance"));
    assert!(err.to_string().contains('2'));

    let err = ConfigError::InvalidMaxResolution(42);
    assert!(err.to_string().contains("max_resolution"));
    assert!(err.to_string().contains("42"));
}
