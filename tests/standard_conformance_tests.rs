//! Structural conformance scenarios against the standard cosmology graph

use pretty_assertions::assert_eq;
use test_case::test_case;

use cosmology_api::conformance::{
    check_conformance, CapabilitySet, DeclaredSurface, BARYON_COMPONENT, COSMOLOGY,
    CRITICAL_DENSITY, CURVATURE_COMPONENT, DARK_ENERGY_COMPONENT, DARK_MATTER_COMPONENT,
    DISTANCE_MEASURES, HUBBLE_PARAMETER, MATTER_COMPONENT, NEUTRINO_COMPONENT, PHOTON_COMPONENT,
    STANDARD_COSMOLOGY, TOTAL_COMPONENT,
};
use cosmology_api::invariants::{total_density_closure, z0_consistency};
use cosmology_api::{
    BaryonComponent, Cosmology, CriticalDensity, CurvatureComponent, DarkEnergyComponent,
    DarkMatterComponent, DistanceMeasures, HubbleParameter, MatterComponent, NeutrinoComponent,
    PhotonComponent, PhysicalConstants, TotalComponent,
};

/// Concordance-valued stub: every operation returns a constant built from
/// the z=0 parameters, with the total computed per the summation law.
struct ConcordanceStub;

impl ConcordanceStub {
    const OMEGA_B0: f64 = 0.05;
    const OMEGA_GAMMA0: f64 = 0.0001;
    const OMEGA_NU0: f64 = 0.0;
    const OMEGA_DM0: f64 = 0.25;
    const OMEGA_DE0: f64 = 0.69;
    const OMEGA_K0: f64 = 0.0;
}

impl Cosmology for ConcordanceStub {
    type Array = f64;
    type Redshift = f64;

    fn name(&self) -> Option<&str> {
        Some("concordance-stub")
    }

    fn constants(&self) -> PhysicalConstants {
        PhysicalConstants::default()
    }
}

impl BaryonComponent for ConcordanceStub {
    fn omega_b0(&self) -> f64 {
        Self::OMEGA_B0
    }
    fn omega_b(&self, _z: f64) -> f64 {
        Self::OMEGA_B0
    }
}

impl PhotonComponent for ConcordanceStub {
    fn omega_gamma0(&self) -> f64 {
        Self::OMEGA_GAMMA0
    }
    fn omega_gamma(&self, _z: f64) -> f64 {
        Self::OMEGA_GAMMA0
    }
}

impl NeutrinoComponent for ConcordanceStub {
    fn omega_nu0(&self) -> f64 {
        Self::OMEGA_NU0
    }
    fn omega_nu(&self, _z: f64) -> f64 {
        Self::OMEGA_NU0
    }
}

impl DarkMatterComponent for ConcordanceStub {
    fn omega_dm0(&self) -> f64 {
        Self::OMEGA_DM0
    }
    fn omega_dm(&self, _z: f64) -> f64 {
        Self::OMEGA_DM0
    }
}

impl MatterComponent for ConcordanceStub {
    fn omega_m0(&self) -> f64 {
        Self::OMEGA_B0 + Self::OMEGA_DM0
    }
    fn omega_m(&self, _z: f64) -> f64 {
        self.omega_m0()
    }
}

impl DarkEnergyComponent for ConcordanceStub {
    fn omega_de0(&self) -> f64 {
        Self::OMEGA_DE0
    }
    fn omega_de(&self, _z: f64) -> f64 {
        Self::OMEGA_DE0
    }
}

impl CurvatureComponent for ConcordanceStub {
    fn omega_k0(&self) -> f64 {
        Self::OMEGA_K0
    }
    fn omega_k(&self, _z: f64) -> f64 {
        Self::OMEGA_K0
    }
}

impl TotalComponent for ConcordanceStub {
    fn omega_tot0(&self) -> f64 {
        self.omega_m0() + Self::OMEGA_GAMMA0 + Self::OMEGA_NU0 + Self::OMEGA_DE0 + Self::OMEGA_K0
    }
    fn omega_tot(&self, z: f64) -> f64 {
        self.omega_m(z)
            + self.omega_gamma(z)
            + self.omega_nu(z)
            + self.omega_de(z)
            + self.omega_k(z)
    }
}

impl HubbleParameter for ConcordanceStub {
    fn h0(&self) -> f64 {
        70.0
    }
    fn h(&self, _z: f64) -> f64 {
        70.0
    }
    fn hubble_distance(&self) -> f64 {
        4282.7
    }
    fn hubble_time(&self) -> f64 {
        13.97
    }
}

impl CriticalDensity for ConcordanceStub {
    fn critical_density0(&self) -> f64 {
        1.27e11
    }
    fn critical_density(&self, _z: f64) -> f64 {
        1.27e11
    }
}

impl DistanceMeasures for ConcordanceStub {
    fn scale_factor0(&self) -> f64 {
        1.0
    }
    fn scale_factor(&self, z: f64) -> f64 {
        1.0 / (1.0 + z)
    }
    fn age(&self, _z: f64) -> f64 {
        13.8
    }
    fn lookback_time(&self, _z: f64) -> f64 {
        0.0
    }
    fn comoving_distance(&self, _z: f64) -> f64 {
        0.0
    }
    fn transverse_comoving_distance(&self, _z: f64) -> f64 {
        0.0
    }
    fn angular_diameter_distance(&self, _z: f64) -> f64 {
        0.0
    }
    fn luminosity_distance(&self, _z: f64) -> f64 {
        0.0
    }
    fn distance_modulus(&self, _z: f64) -> f64 {
        0.0
    }
}

#[test]
fn concordance_stub_total_follows_the_summation_law() {
    let stub = ConcordanceStub;
    assert!((stub.omega_tot0() - 0.9901).abs() < 1e-12);
    assert!(total_density_closure(&stub, 0.0, 1e-12).satisfied);
    assert!(total_density_closure(&stub, 3.5, 1e-12).satisfied);
    assert!(z0_consistency(&stub, 0.0, 1e-12).satisfied);
}

#[test]
fn concordance_surface_conforms() {
    // The stub's operation surface, as a runtime-described candidate.
    let surface = DeclaredSurface::from_sets(STANDARD_COSMOLOGY);
    let report = check_conformance(&surface, STANDARD_COSMOLOGY);
    assert!(report.is_conforming());
    assert_eq!(report.required, 33);
}

#[test]
fn removing_hubble_at_z_breaks_conformance_but_not_the_components() {
    let mut surface = DeclaredSurface::from_sets(STANDARD_COSMOLOGY);
    assert!(surface.retract("h", 1));

    let report = check_conformance(&surface, STANDARD_COSMOLOGY);
    assert!(!report.is_conforming());
    assert_eq!(report.missing.len(), 1);
    assert_eq!(report.missing[0].capability, "HubbleParameter");
    assert_eq!(report.missing[0].operation.name, "h");

    // The component capabilities are untouched by the missing extra.
    let components: &[&CapabilitySet] = &[
        &BARYON_COMPONENT,
        &PHOTON_COMPONENT,
        &NEUTRINO_COMPONENT,
        &DARK_MATTER_COMPONENT,
        &MATTER_COMPONENT,
        &DARK_ENERGY_COMPONENT,
        &CURVATURE_COMPONENT,
        &TOTAL_COMPONENT,
    ];
    assert!(check_conformance(&surface, components).is_conforming());
}

#[test]
fn adding_the_missing_operation_restores_conformance() {
    let mut surface = DeclaredSurface::new();
    surface.declare("omega_b0", 0);
    assert!(!BARYON_COMPONENT.is_satisfied_by(&surface));

    surface.declare("omega_b", 1);
    assert!(BARYON_COMPONENT.is_satisfied_by(&surface));
}

#[test]
fn repeated_checks_are_idempotent_and_do_not_alter_the_candidate() {
    let surface = DeclaredSurface::from_sets(STANDARD_COSMOLOGY);
    let before = surface.clone();

    let first = check_conformance(&surface, STANDARD_COSMOLOGY);
    let second = check_conformance(&surface, STANDARD_COSMOLOGY);
    assert_eq!(first, second);
    assert_eq!(surface, before);
}

#[test_case(&COSMOLOGY, 2; "core")]
#[test_case(&BARYON_COMPONENT, 2; "baryon")]
#[test_case(&PHOTON_COMPONENT, 2; "photon")]
#[test_case(&NEUTRINO_COMPONENT, 2; "neutrino")]
#[test_case(&DARK_MATTER_COMPONENT, 2; "dark matter")]
#[test_case(&MATTER_COMPONENT, 2; "matter")]
#[test_case(&DARK_ENERGY_COMPONENT, 2; "dark energy")]
#[test_case(&CURVATURE_COMPONENT, 2; "curvature")]
#[test_case(&TOTAL_COMPONENT, 2; "total")]
#[test_case(&HUBBLE_PARAMETER, 4; "hubble parameter")]
#[test_case(&CRITICAL_DENSITY, 2; "critical density")]
#[test_case(&DISTANCE_MEASURES, 9; "distance measures")]
fn capability_sets_declare_the_expected_operations(set: &CapabilitySet, expected: usize) {
    assert_eq!(set.operations.len(), expected);
    let surface = DeclaredSurface::from_sets(STANDARD_COSMOLOGY);
    assert!(set.is_satisfied_by(&surface));
}

#[test]
fn report_serializes_with_capability_and_operation_names() {
    let mut surface = DeclaredSurface::from_sets(STANDARD_COSMOLOGY);
    surface.retract("critical_density", 1);

    let report = check_conformance(&surface, STANDARD_COSMOLOGY);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["required"], 33);
    assert_eq!(json["missing"][0]["capability"], "CriticalDensity");
    assert_eq!(json["missing"][0]["operation"]["name"], "critical_density");
    assert_eq!(json["missing"][0]["operation"]["arity"], 1);
}
