// Copyright 2025 Cowboy AI, LLC.

//! Named algebraic contracts of the standard cosmology
//!
//! The trait graph cannot express that the total density is the sum of its
//! constituents, or that each z=0 operation agrees with its z-dependent form
//! at zero redshift. Those contracts live here as explicit, opt-in check
//! functions. Nothing in the crate calls them: conforming implementations
//! are trusted at runtime, and their test suites invoke these checks to
//! enforce the contracts mechanically.

use std::fmt::Debug;

use serde::Serialize;

use crate::array::ApproxEq;
use crate::standard::StandardCosmology;

/// One operation that violated an invariant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvariantViolation {
    /// Operation whose value broke the contract.
    pub operation: &'static str,
    /// Human-readable description of the mismatch.
    pub message: String,
}

/// Outcome of checking one named invariant against a candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvariantCheckResult {
    /// Name of the checked invariant.
    pub invariant: &'static str,
    /// Whether the invariant held.
    pub satisfied: bool,
    /// Per-operation violations when it did not.
    pub violations: Vec<InvariantViolation>,
}

impl InvariantCheckResult {
    fn from_violations(invariant: &'static str, violations: Vec<InvariantViolation>) -> Self {
        Self {
            invariant,
            satisfied: violations.is_empty(),
            violations,
        }
    }
}

/// Check the total-density summation law at one redshift
///
/// For a conforming standard cosmology,
///
/// > Ω_tot(z) = Ω_m(z) + Ω_γ(z) + Ω_ν(z) + Ω_de(z) + Ω_k(z)
///
/// elementwise within `tol`. A failed check names `omega_tot` as the
/// violating operation, since the constituents are the definition.
pub fn total_density_closure<C>(cosmo: &C, z: C::Redshift, tol: f64) -> InvariantCheckResult
where
    C: StandardCosmology + ?Sized,
    C::Array: ApproxEq + Debug,
    C::Redshift: Clone,
{
    let total = cosmo.omega_tot(z.clone());
    let sum = cosmo.omega_m(z.clone())
        + cosmo.omega_gamma(z.clone())
        + cosmo.omega_nu(z.clone())
        + cosmo.omega_de(z.clone())
        + cosmo.omega_k(z);

    let mut violations = Vec::new();
    if !total.approx_eq(&sum, tol) {
        violations.push(InvariantViolation {
            operation: "omega_tot",
            message: format!(
                "omega_tot = {total:?} differs from the component sum {sum:?} beyond tolerance {tol}"
            ),
        });
    }
    InvariantCheckResult::from_violations("total_density_closure", violations)
}

/// Check that every z=0 operation agrees with its z-dependent form at z=0
///
/// The caller supplies the zero redshift in the candidate's own input type,
/// since this crate imposes no representation on redshift. Covers all eight
/// density components, the Hubble parameter, the critical density, and the
/// scale factor.
pub fn z0_consistency<C>(cosmo: &C, z0: C::Redshift, tol: f64) -> InvariantCheckResult
where
    C: StandardCosmology + ?Sized,
    C::Array: ApproxEq + Debug,
    C::Redshift: Clone,
{
    let mut violations = Vec::new();
    let mut check = |operation: &'static str, at_z0: C::Array, at_z: C::Array| {
        if !at_z0.approx_eq(&at_z, tol) {
            violations.push(InvariantViolation {
                operation,
                message: format!(
                    "{operation}0 = {at_z0:?} differs from {operation}(z=0) = {at_z:?} \
                     beyond tolerance {tol}"
                ),
            });
        }
    };

    check("omega_b", cosmo.omega_b0(), cosmo.omega_b(z0.clone()));
    check(
        "omega_gamma",
        cosmo.omega_gamma0(),
        cosmo.omega_gamma(z0.clone()),
    );
    check("omega_nu", cosmo.omega_nu0(), cosmo.omega_nu(z0.clone()));
    check("omega_dm", cosmo.omega_dm0(), cosmo.omega_dm(z0.clone()));
    check("omega_m", cosmo.omega_m0(), cosmo.omega_m(z0.clone()));
    check("omega_de", cosmo.omega_de0(), cosmo.omega_de(z0.clone()));
    check("omega_k", cosmo.omega_k0(), cosmo.omega_k(z0.clone()));
    check("omega_tot", cosmo.omega_tot0(), cosmo.omega_tot(z0.clone()));
    check("h", cosmo.h0(), cosmo.h(z0.clone()));
    check(
        "critical_density",
        cosmo.critical_density0(),
        cosmo.critical_density(z0.clone()),
    );
    check("scale_factor", cosmo.scale_factor0(), cosmo.scale_factor(z0));

    InvariantCheckResult::from_violations("z0_consistency", violations)
}
