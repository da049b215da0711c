// Copyright 2025 Cowboy AI, LLC.

//! Distance measures and expansion-history quantities
//!
//! The distance definitions are grouped under one capability because they
//! are mutually determined in any metric cosmology (e.g. the luminosity
//! distance is (1+z)² times the angular diameter distance). No such relation
//! is declared structurally; each operation stands alone.

use crate::core::Cosmology;

/// Distance-measure capability of a metric cosmology
///
/// Every z-dependent operation maps redshift input to a quantity in the
/// implementation's numeric container, following the container's normal
/// shape/broadcast rules. Distances are conventionally in Mpc, times in Gyr.
pub trait DistanceMeasures: Cosmology {
    /// Scale factor at z=0, by convention 1.
    fn scale_factor0(&self) -> Self::Array;

    /// Scale factor a(z) = 1 / (1 + z).
    fn scale_factor(&self, z: Self::Redshift) -> Self::Array;

    /// Age of the universe at redshift z.
    fn age(&self, z: Self::Redshift) -> Self::Array;

    /// Lookback time from z=0 to redshift z.
    fn lookback_time(&self, z: Self::Redshift) -> Self::Array;

    /// Comoving line-of-sight distance to redshift z.
    fn comoving_distance(&self, z: Self::Redshift) -> Self::Array;

    /// Comoving transverse distance to redshift z.
    fn transverse_comoving_distance(&self, z: Self::Redshift) -> Self::Array;

    /// Angular diameter distance to redshift z.
    fn angular_diameter_distance(&self, z: Self::Redshift) -> Self::Array;

    /// Luminosity distance to redshift z.
    fn luminosity_distance(&self, z: Self::Redshift) -> Self::Array;

    /// Distance modulus μ(z), in magnitudes.
    fn distance_modulus(&self, z: Self::Redshift) -> Self::Array;
}
