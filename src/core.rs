//! Root cosmology capability: identification and base physical constants

use serde::{Deserialize, Serialize};

use crate::array::Array;

/// The minimal capability any cosmology-like object exposes
///
/// Every other capability in the crate extends this trait. It fixes the two
/// type parameters the whole contract is expressed in:
///
/// - [`Cosmology::Array`], the numeric container every quantity is returned
///   in (producer side; implementations may only return this type),
/// - [`Cosmology::Redshift`], the redshift input every z-dependent operation
///   accepts (consumer side; implementations are free to accept a broader
///   type than callers strictly need, never a narrower one).
///
/// Nothing here is model-family specific: a non-FLRW model is still a
/// [`Cosmology`] as long as it can identify itself and state the constants
/// its quantities are expressed in.
pub trait Cosmology {
    /// Numeric container type for every returned quantity.
    type Array: Array;

    /// Redshift input type accepted by every z-dependent operation.
    type Redshift;

    /// Name identifying the model, if it has one (e.g. "Planck18").
    fn name(&self) -> Option<&str>;

    /// Base physical constants the model's quantities are expressed in.
    fn constants(&self) -> PhysicalConstants;
}

/// Base physical constants carried by every cosmology
///
/// Values are SI. `Default` yields the CODATA 2018 recommended values, which
/// is what most implementations will return unchanged.
///
/// # Examples
///
/// ```
/// use cosmology_api::PhysicalConstants;
///
/// let constants = PhysicalConstants::default();
/// assert_eq!(constants.speed_of_light, 299_792_458.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Newtonian constant of gravitation G, in m³ kg⁻¹ s⁻².
    pub gravitational_constant: f64,
    /// Speed of light in vacuum c, in m s⁻¹.
    pub speed_of_light: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gravitational_constant: 6.674_30e-11,
            speed_of_light: 299_792_458.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_roundtrip_through_serde() {
        let constants = PhysicalConstants::default();
        let json = serde_json::to_string(&constants).unwrap();
        let back: PhysicalConstants = serde_json::from_str(&json).unwrap();
        assert_eq!(constants, back);
    }
}
