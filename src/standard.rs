//! The standard (FLRW-like) cosmology capability set

use crate::components::{
    BaryonComponent, CurvatureComponent, DarkEnergyComponent, DarkMatterComponent,
    MatterComponent, NeutrinoComponent, PhotonComponent, TotalComponent,
};
use crate::core::Cosmology;
use crate::distances::DistanceMeasures;
use crate::extras::{CriticalDensity, HubbleParameter};

/// The full capability set of a standard (FLRW-like) cosmology
///
/// Structurally this is nothing but the intersection of every component,
/// extra, and distance capability plus the [`Cosmology`] root, with no new
/// operations. The blanket impl makes conformance purely additive: any type
/// implementing all the member traits is a `StandardCosmology`, with no
/// registration or explicit opt-in.
///
/// One algebraic contract is bound to this capability set: for any object
/// claiming it, the total density is the sum of the constituents,
///
/// > Ω_tot(z) = Ω_m(z) + Ω_γ(z) + Ω_ν(z) + Ω_de(z) + Ω_k(z)
///
/// at every redshift, and likewise at z=0. The trait system cannot enforce
/// this; an implementation violating it is non-conforming in the documented
/// sense, and [`crate::invariants::total_density_closure`] makes the check
/// mechanical. The runtime counterpart of the structural check is
/// [`crate::conformance::STANDARD_COSMOLOGY`].
///
/// # Examples
///
/// A constant-valued model conforms with nothing beyond the member impls:
///
/// ```
/// use cosmology_api::{
///     BaryonComponent, Cosmology, CriticalDensity, CurvatureComponent,
///     DarkEnergyComponent, DarkMatterComponent, DistanceMeasures,
///     HubbleParameter, MatterComponent, NeutrinoComponent, PhotonComponent,
///     PhysicalConstants, StandardCosmology, TotalComponent,
/// };
///
/// struct Toy;
///
/// impl Cosmology for Toy {
///     type Array = f64;
///     type Redshift = f64;
///     fn name(&self) -> Option<&str> { Some("toy") }
///     fn constants(&self) -> PhysicalConstants { PhysicalConstants::default() }
/// }
/// impl BaryonComponent for Toy {
///     fn omega_b0(&self) -> f64 { 0.05 }
///     fn omega_b(&self, _z: f64) -> f64 { 0.05 }
/// }
/// impl PhotonComponent for Toy {
///     fn omega_gamma0(&self) -> f64 { 0.0 }
///     fn omega_gamma(&self, _z: f64) -> f64 { 0.0 }
/// }
/// impl NeutrinoComponent for Toy {
///     fn omega_nu0(&self) -> f64 { 0.0 }
///     fn omega_nu(&self, _z: f64) -> f64 { 0.0 }
/// }
/// impl DarkMatterComponent for Toy {
///     fn omega_dm0(&self) -> f64 { 0.25 }
///     fn omega_dm(&self, _z: f64) -> f64 { 0.25 }
/// }
/// impl MatterComponent for Toy {
///     fn omega_m0(&self) -> f64 { 0.30 }
///     fn omega_m(&self, _z: f64) -> f64 { 0.30 }
/// }
/// impl DarkEnergyComponent for Toy {
///     fn omega_de0(&self) -> f64 { 0.70 }
///     fn omega_de(&self, _z: f64) -> f64 { 0.70 }
/// }
/// impl CurvatureComponent for Toy {
///     fn omega_k0(&self) -> f64 { 0.0 }
///     fn omega_k(&self, _z: f64) -> f64 { 0.0 }
/// }
/// impl TotalComponent for Toy {
///     fn omega_tot0(&self) -> f64 { 1.0 }
///     fn omega_tot(&self, _z: f64) -> f64 { 1.0 }
/// }
/// impl HubbleParameter for Toy {
///     fn h0(&self) -> f64 { 70.0 }
///     fn h(&self, _z: f64) -> f64 { 70.0 }
///     fn hubble_distance(&self) -> f64 { 4283.0 }
///     fn hubble_time(&self) -> f64 { 13.97 }
/// }
/// impl CriticalDensity for Toy {
///     fn critical_density0(&self) -> f64 { 1.27e11 }
///     fn critical_density(&self, _z: f64) -> f64 { 1.27e11 }
/// }
/// impl DistanceMeasures for Toy {
///     fn scale_factor0(&self) -> f64 { 1.0 }
///     fn scale_factor(&self, z: f64) -> f64 { 1.0 / (1.0 + z) }
///     fn age(&self, _z: f64) -> f64 { 13.8 }
///     fn lookback_time(&self, _z: f64) -> f64 { 0.0 }
///     fn comoving_distance(&self, _z: f64) -> f64 { 0.0 }
///     fn transverse_comoving_distance(&self, _z: f64) -> f64 { 0.0 }
///     fn angular_diameter_distance(&self, _z: f64) -> f64 { 0.0 }
///     fn luminosity_distance(&self, _z: f64) -> f64 { 0.0 }
///     fn distance_modulus(&self, _z: f64) -> f64 { 0.0 }
/// }
///
/// // Generic algorithms take any conforming model.
/// fn total_at<C: StandardCosmology>(cosmo: &C, z: C::Redshift) -> C::Array {
///     cosmo.omega_tot(z)
/// }
///
/// assert_eq!(total_at(&Toy, 0.5), 1.0);
/// ```
pub trait StandardCosmology:
    NeutrinoComponent
    + BaryonComponent
    + PhotonComponent
    + DarkMatterComponent
    + MatterComponent
    + DarkEnergyComponent
    + CurvatureComponent
    + TotalComponent
    + HubbleParameter
    + CriticalDensity
    + DistanceMeasures
    + Cosmology
{
}

impl<T> StandardCosmology for T where
    T: NeutrinoComponent
        + BaryonComponent
        + PhotonComponent
        + DarkMatterComponent
        + MatterComponent
        + DarkEnergyComponent
        + CurvatureComponent
        + TotalComponent
        + HubbleParameter
        + CriticalDensity
        + DistanceMeasures
        + Cosmology
{
}
