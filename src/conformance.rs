// Copyright 2025 Cowboy AI, LLC.

//! Runtime structural conformance checking
//!
//! The trait graph in this crate is checked statically by the compiler. For
//! candidates that only exist at runtime (models loaded from a plugin, an
//! FFI boundary, or a manifest) the same capability graph is available as
//! declarative descriptors, and [`check_conformance`] is the explicit
//! predicate over them: given a candidate's operation surface and a list of
//! capability sets, report every required operation the candidate is
//! missing.
//!
//! The check is a pure function of its inputs. It never mutates the
//! candidate, and repeated checks against an unmodified candidate return
//! equal reports.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::errors::ConformanceError;

/// One required operation of a capability set
///
/// `arity` counts redshift arguments: 0 for the z=0 forms (`omega_b0`, `h0`)
/// and 1 for the z-dependent forms (`omega_b`, `h`). A candidate operation
/// matches only on both name and arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Operation {
    /// Operation name, matching the trait method name.
    pub name: &'static str,
    /// Number of redshift arguments.
    pub arity: u8,
}

impl Operation {
    /// A no-argument (z=0) operation.
    pub const fn property(name: &'static str) -> Self {
        Self { name, arity: 0 }
    }

    /// A single-redshift-argument operation.
    pub const fn method(name: &'static str) -> Self {
        Self { name, arity: 1 }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

/// A named group of required operations
///
/// One descriptor exists per capability trait in the crate; the standard
/// cosmology is their union, [`STANDARD_COSMOLOGY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapabilitySet {
    /// Capability name, matching the trait name.
    pub name: &'static str,
    /// Operations a candidate must expose to satisfy this capability.
    pub operations: &'static [Operation],
}

impl CapabilitySet {
    /// Operations of this set the candidate does not expose.
    pub fn missing_from<C>(&self, candidate: &C) -> Vec<Operation>
    where
        C: Introspect + ?Sized,
    {
        self.operations
            .iter()
            .filter(|op| !candidate.has_operation(op.name, op.arity))
            .copied()
            .collect()
    }

    /// Whether the candidate exposes every operation of this set.
    pub fn is_satisfied_by<C>(&self, candidate: &C) -> bool
    where
        C: Introspect + ?Sized,
    {
        self.operations
            .iter()
            .all(|op| candidate.has_operation(op.name, op.arity))
    }
}

/// Candidate side of the runtime check
///
/// A candidate is opaque except for this query. Types backed by a manifest
/// or registry answer it from their own bookkeeping; [`DeclaredSurface`] is
/// the ready-made implementation for the common case.
pub trait Introspect {
    /// Whether the candidate exposes an operation with this name and arity.
    fn has_operation(&self, name: &str, arity: u8) -> bool;
}

/// A dynamically described operation surface
///
/// Backed by a set of (name, arity) pairs. Useful both for real
/// runtime-described candidates and for constructing minimal stubs in tests.
///
/// # Examples
///
/// ```
/// use cosmology_api::conformance::{check_conformance, DeclaredSurface, STANDARD_COSMOLOGY};
///
/// let mut surface = DeclaredSurface::from_sets(STANDARD_COSMOLOGY);
/// assert!(check_conformance(&surface, STANDARD_COSMOLOGY).is_conforming());
///
/// surface.retract("h", 1);
/// assert!(!check_conformance(&surface, STANDARD_COSMOLOGY).is_conforming());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredSurface {
    operations: HashSet<(String, u8)>,
}

impl DeclaredSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface exposing every operation of the given sets.
    pub fn from_sets(sets: &[&CapabilitySet]) -> Self {
        let mut surface = Self::new();
        for set in sets {
            for op in set.operations {
                surface.declare(op.name, op.arity);
            }
        }
        surface
    }

    /// Declare an operation on this surface.
    pub fn declare(&mut self, name: impl Into<String>, arity: u8) -> &mut Self {
        self.operations.insert((name.into(), arity));
        self
    }

    /// Remove an operation; returns whether it was present.
    pub fn retract(&mut self, name: &str, arity: u8) -> bool {
        self.operations.remove(&(name.to_string(), arity))
    }

    /// Number of declared operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether no operations are declared.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Introspect for DeclaredSurface {
    fn has_operation(&self, name: &str, arity: u8) -> bool {
        self.operations.contains(&(name.to_string(), arity))
    }
}

/// An operation a candidate was required to expose but does not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MissingOperation {
    /// Capability set that requires the operation.
    pub capability: &'static str,
    /// The missing operation.
    pub operation: Operation,
}

impl fmt::Display for MissingOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.capability, self.operation)
    }
}

/// Outcome of a structural conformance check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConformanceReport {
    /// Total number of operations required by the checked sets.
    pub required: usize,
    /// Required operations the candidate does not expose, in set order.
    pub missing: Vec<MissingOperation>,
}

impl ConformanceReport {
    /// Whether the candidate exposed every required operation.
    pub fn is_conforming(&self) -> bool {
        self.missing.is_empty()
    }

    /// Convert the predicate result into a `Result` for propagation.
    ///
    /// # Errors
    ///
    /// Returns [`ConformanceError::NonConforming`] listing every missing
    /// operation when the candidate does not conform.
    pub fn into_result(self) -> Result<(), ConformanceError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ConformanceError::NonConforming {
                missing: self.missing,
            })
        }
    }
}

/// Check a candidate's operation surface against capability sets
///
/// Pure and idempotent: the candidate is only queried through
/// [`Introspect::has_operation`], never mutated.
pub fn check_conformance<C>(candidate: &C, sets: &[&CapabilitySet]) -> ConformanceReport
where
    C: Introspect + ?Sized,
{
    let mut required = 0;
    let mut missing = Vec::new();
    for set in sets {
        for op in set.operations {
            required += 1;
            if !candidate.has_operation(op.name, op.arity) {
                trace!(capability = set.name, operation = %op, "missing required operation");
                missing.push(MissingOperation {
                    capability: set.name,
                    operation: *op,
                });
            }
        }
    }
    debug!(
        required,
        missing = missing.len(),
        "structural conformance check complete"
    );
    ConformanceReport { required, missing }
}

/// Core cosmology capability: identification and constants.
pub const COSMOLOGY: CapabilitySet = CapabilitySet {
    name: "Cosmology",
    operations: &[Operation::property("name"), Operation::property("constants")],
};

/// Baryon density capability.
pub const BARYON_COMPONENT: CapabilitySet = CapabilitySet {
    name: "BaryonComponent",
    operations: &[
        Operation::property("omega_b0"),
        Operation::method("omega_b"),
    ],
};

/// Photon density capability.
pub const PHOTON_COMPONENT: CapabilitySet = CapabilitySet {
    name: "PhotonComponent",
    operations: &[
        Operation::property("omega_gamma0"),
        Operation::method("omega_gamma"),
    ],
};

/// Neutrino density capability.
pub const NEUTRINO_COMPONENT: CapabilitySet = CapabilitySet {
    name: "NeutrinoComponent",
    operations: &[
        Operation::property("omega_nu0"),
        Operation::method("omega_nu"),
    ],
};

/// Dark matter density capability.
pub const DARK_MATTER_COMPONENT: CapabilitySet = CapabilitySet {
    name: "DarkMatterComponent",
    operations: &[
        Operation::property("omega_dm0"),
        Operation::method("omega_dm"),
    ],
};

/// Matter density capability.
pub const MATTER_COMPONENT: CapabilitySet = CapabilitySet {
    name: "MatterComponent",
    operations: &[
        Operation::property("omega_m0"),
        Operation::method("omega_m"),
    ],
};

/// Dark energy density capability.
pub const DARK_ENERGY_COMPONENT: CapabilitySet = CapabilitySet {
    name: "DarkEnergyComponent",
    operations: &[
        Operation::property("omega_de0"),
        Operation::method("omega_de"),
    ],
};

/// Curvature density capability.
pub const CURVATURE_COMPONENT: CapabilitySet = CapabilitySet {
    name: "CurvatureComponent",
    operations: &[
        Operation::property("omega_k0"),
        Operation::method("omega_k"),
    ],
};

/// Total density capability.
pub const TOTAL_COMPONENT: CapabilitySet = CapabilitySet {
    name: "TotalComponent",
    operations: &[
        Operation::property("omega_tot0"),
        Operation::method("omega_tot"),
    ],
};

/// Expansion-rate capability.
pub const HUBBLE_PARAMETER: CapabilitySet = CapabilitySet {
    name: "HubbleParameter",
    operations: &[
        Operation::property("h0"),
        Operation::method("h"),
        Operation::property("hubble_distance"),
        Operation::property("hubble_time"),
    ],
};

/// Critical-density capability.
pub const CRITICAL_DENSITY: CapabilitySet = CapabilitySet {
    name: "CriticalDensity",
    operations: &[
        Operation::property("critical_density0"),
        Operation::method("critical_density"),
    ],
};

/// Distance-measure capability.
pub const DISTANCE_MEASURES: CapabilitySet = CapabilitySet {
    name: "DistanceMeasures",
    operations: &[
        Operation::property("scale_factor0"),
        Operation::method("scale_factor"),
        Operation::method("age"),
        Operation::method("lookback_time"),
        Operation::method("comoving_distance"),
        Operation::method("transverse_comoving_distance"),
        Operation::method("angular_diameter_distance"),
        Operation::method("luminosity_distance"),
        Operation::method("distance_modulus"),
    ],
};

/// The union descriptor for [`crate::StandardCosmology`]
///
/// Member order mirrors the supertrait list on the trait itself.
pub const STANDARD_COSMOLOGY: &[&CapabilitySet] = &[
    &NEUTRINO_COMPONENT,
    &BARYON_COMPONENT,
    &PHOTON_COMPONENT,
    &DARK_MATTER_COMPONENT,
    &MATTER_COMPONENT,
    &DARK_ENERGY_COMPONENT,
    &CURVATURE_COMPONENT,
    &TOTAL_COMPONENT,
    &HUBBLE_PARAMETER,
    &CRITICAL_DENSITY,
    &DISTANCE_MEASURES,
    &COSMOLOGY,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_display_includes_arity() {
        assert_eq!(Operation::property("omega_b0").to_string(), "omega_b0/0");
        assert_eq!(Operation::method("omega_b").to_string(), "omega_b/1");
    }

    #[test]
    fn standard_cosmology_requires_every_operation_once() {
        let total: usize = STANDARD_COSMOLOGY
            .iter()
            .map(|set| set.operations.len())
            .sum();
        assert_eq!(total, 33);

        let unique: std::collections::HashSet<_> = STANDARD_COSMOLOGY
            .iter()
            .flat_map(|set| set.operations.iter())
            .collect();
        assert_eq!(unique.len(), total);
    }

    #[test]
    fn empty_surface_misses_everything() {
        let surface = DeclaredSurface::new();
        let report = check_conformance(&surface, STANDARD_COSMOLOGY);
        assert!(!report.is_conforming());
        assert_eq!(report.required, 33);
        assert_eq!(report.missing.len(), 33);
    }

    #[test]
    fn full_surface_conforms() {
        let surface = DeclaredSurface::from_sets(STANDARD_COSMOLOGY);
        let report = check_conformance(&surface, STANDARD_COSMOLOGY);
        assert!(report.is_conforming());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn arity_mismatch_does_not_satisfy() {
        let mut surface = DeclaredSurface::from_sets(&[&BARYON_COMPONENT]);
        surface.retract("omega_b", 1);
        surface.declare("omega_b", 0);
        assert!(!BARYON_COMPONENT.is_satisfied_by(&surface));
        assert_eq!(
            BARYON_COMPONENT.missing_from(&surface),
            vec![Operation::method("omega_b")]
        );
    }

    #[test]
    fn non_conforming_report_converts_to_error() {
        let mut surface = DeclaredSurface::from_sets(STANDARD_COSMOLOGY);
        surface.retract("h", 1);
        let err = check_conformance(&surface, STANDARD_COSMOLOGY)
            .into_result()
            .unwrap_err();
        assert!(err.to_string().contains("HubbleParameter::h/1"));
    }
}
