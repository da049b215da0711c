// Copyright 2025 Cowboy AI, LLC.

//! Dimensional quantities: expansion rate and critical density
//!
//! Unlike the density-parameter components these return dimensional
//! quantities (velocity/distance, mass/volume). Units are a documentation
//! contract carried by the implementation, not encoded in the type; the
//! conventional choices are noted on each operation.

use crate::core::Cosmology;

/// Expansion-rate capability
pub trait HubbleParameter: Cosmology {
    /// Hubble parameter at z=0, conventionally in km s⁻¹ Mpc⁻¹.
    fn h0(&self) -> Self::Array;

    /// Redshift-dependent Hubble parameter H(z).
    fn h(&self, z: Self::Redshift) -> Self::Array;

    /// Hubble distance c / H0, conventionally in Mpc.
    fn hubble_distance(&self) -> Self::Array;

    /// Hubble time 1 / H0, conventionally in Gyr.
    fn hubble_time(&self) -> Self::Array;
}

/// Critical-density capability
///
/// Physically the critical density at z is fixed by H(z), but that relation
/// is not encoded structurally: this capability is independent of
/// [`HubbleParameter`].
pub trait CriticalDensity: Cosmology {
    /// Critical density at z=0, conventionally in Msun Mpc⁻³.
    fn critical_density0(&self) -> Self::Array;

    /// Redshift-dependent critical density ρ_crit(z).
    fn critical_density(&self, z: Self::Redshift) -> Self::Array;
}
