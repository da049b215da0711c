//! Density-parameter component capabilities
//!
//! Each trait here is one orthogonal capability: "provides the density
//! parameter Ω_x for constituent x, at z=0 and at arbitrary redshift". The
//! traits are independent of each other; an implementation picks up exactly
//! the constituents its model family has. Combining all of them (plus the
//! extras and distance measures) yields [`StandardCosmology`].
//!
//! Both operations of a pair are pure queries by contract, and the no-argument
//! form must equal the z-dependent form evaluated at zero redshift. Neither
//! property is structurally enforceable; [`crate::invariants`] exposes them
//! as named, testable checks.
//!
//! [`StandardCosmology`]: crate::StandardCosmology

use crate::core::Cosmology;

/// Baryon density capability
pub trait BaryonComponent: Cosmology {
    /// Baryon density parameter Ω_b at z=0.
    fn omega_b0(&self) -> Self::Array;

    /// Redshift-dependent baryon density parameter Ω_b(z).
    fn omega_b(&self, z: Self::Redshift) -> Self::Array;
}

/// Photon density capability
pub trait PhotonComponent: Cosmology {
    /// Photon density parameter Ω_γ at z=0.
    fn omega_gamma0(&self) -> Self::Array;

    /// Redshift-dependent photon density parameter Ω_γ(z).
    fn omega_gamma(&self, z: Self::Redshift) -> Self::Array;
}

/// Neutrino density capability
pub trait NeutrinoComponent: Cosmology {
    /// Neutrino density parameter Ω_ν at z=0.
    fn omega_nu0(&self) -> Self::Array;

    /// Redshift-dependent neutrino density parameter Ω_ν(z).
    fn omega_nu(&self, z: Self::Redshift) -> Self::Array;
}

/// Dark matter density capability
pub trait DarkMatterComponent: Cosmology {
    /// Dark matter density parameter Ω_dm at z=0.
    fn omega_dm0(&self) -> Self::Array;

    /// Redshift-dependent dark matter density parameter Ω_dm(z).
    fn omega_dm(&self, z: Self::Redshift) -> Self::Array;
}

/// Total matter density capability
///
/// By convention Ω_m = Ω_b + Ω_dm. The relation is conceptual, not
/// structural: this trait does not require the baryon or dark matter
/// capabilities, and nothing checks the sum.
pub trait MatterComponent: Cosmology {
    /// Matter density parameter Ω_m at z=0.
    fn omega_m0(&self) -> Self::Array;

    /// Redshift-dependent matter density parameter Ω_m(z).
    fn omega_m(&self, z: Self::Redshift) -> Self::Array;
}

/// Dark energy density capability
pub trait DarkEnergyComponent: Cosmology {
    /// Dark energy density parameter Ω_de at z=0.
    fn omega_de0(&self) -> Self::Array;

    /// Redshift-dependent dark energy density parameter Ω_de(z).
    fn omega_de(&self, z: Self::Redshift) -> Self::Array;
}

/// Curvature density capability
///
/// Ω_k is negative for closed geometries, so no sign or range restriction
/// applies.
pub trait CurvatureComponent: Cosmology {
    /// Curvature density parameter Ω_k at z=0.
    fn omega_k0(&self) -> Self::Array;

    /// Redshift-dependent curvature density parameter Ω_k(z).
    fn omega_k(&self, z: Self::Redshift) -> Self::Array;
}

/// Total density capability
///
/// For an object claiming the full [`StandardCosmology`] capability set, both
/// operations are defined to equal the sum over the constituent components:
/// Ω_tot = Ω_m + Ω_γ + Ω_ν + Ω_de + Ω_k. The equality cannot be enforced
/// here; [`crate::invariants::total_density_closure`] checks it against a
/// concrete implementation.
///
/// [`StandardCosmology`]: crate::StandardCosmology
pub trait TotalComponent: Cosmology {
    /// Total density parameter Ω_tot at z=0.
    fn omega_tot0(&self) -> Self::Array;

    /// Redshift-dependent total density parameter Ω_tot(z).
    fn omega_tot(&self, z: Self::Redshift) -> Self::Array;
}
