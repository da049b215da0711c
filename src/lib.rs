//! # Cosmology API
//!
//! Capability traits and structural conformance checks that let generic
//! numerical code work against any cosmology implementation, independent of
//! which array backend or numerics library produced the values.
//!
//! This crate performs no numerical computation. It provides the contract:
//! - **Components**: one trait per density-parameter family (baryons,
//!   photons, neutrinos, dark matter, matter, dark energy, curvature, total)
//! - **Extras**: Hubble parameter and critical density as dimensional
//!   quantities
//! - **Distance measures**: the family of cosmological distance definitions
//! - **Core**: model identification and base physical constants
//! - **StandardCosmology**: the intersection of all of the above, with a
//!   blanket impl so conformance is purely additive
//! - **Conformance**: the capability graph as declarative descriptors, with
//!   an explicit runtime predicate for candidates only known at runtime
//! - **Invariants**: the summation law and z=0 consistency as named,
//!   opt-in checks
//!
//! ## Design Principles
//!
//! 1. **Structural composition**: capabilities combine by trait
//!    intersection, never by inheritance chains
//! 2. **Backend agnostic**: quantities are expressed in an abstract numeric
//!    container with elementwise arithmetic
//! 3. **Two independent type parameters**: the result container and the
//!    accepted redshift input vary independently
//! 4. **Pure queries**: every operation is a side-effect-free function of
//!    its inputs
//! 5. **Advisory algebra**: the total-density summation law is documented
//!    and mechanically checkable, not enforced in any call path

#![warn(missing_docs)]

mod array;
mod components;
pub mod conformance;
mod core;
mod distances;
mod errors;
mod extras;
pub mod invariants;
mod standard;

// Re-export core types
pub use array::{ApproxEq, Array};
pub use components::{
    BaryonComponent, CurvatureComponent, DarkEnergyComponent, DarkMatterComponent,
    MatterComponent, NeutrinoComponent, PhotonComponent, TotalComponent,
};
pub use conformance::{
    check_conformance, CapabilitySet, ConformanceReport, DeclaredSurface, Introspect,
    MissingOperation, Operation,
};
pub use self::core::{Cosmology, PhysicalConstants};
pub use distances::DistanceMeasures;
pub use errors::ConformanceError;
pub use extras::{CriticalDensity, HubbleParameter};
pub use invariants::{InvariantCheckResult, InvariantViolation};
pub use standard::StandardCosmology;
