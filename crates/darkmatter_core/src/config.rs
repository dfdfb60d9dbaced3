use serde::{Deserialize, Serialize};

/// Parameters for the demonstration and showcase runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Random seed for deterministic particle ensembles
    pub seed: u64,
    /// Number of particles in a generated ensemble
    pub particle_count: u32,
    /// Particle mass range in GeV/c² (min, max)
    pub mass_range_gev: (f64, f64),
    /// Radius of the sphere particles are placed in (kpc)
    pub spawn_radius_kpc: f64,
    /// Upper bound on particle speed (km/s)
    pub max_speed_kms: f64,
    /// Reference halo mass (M☉)
    pub halo_mass: f64,
    /// Reference halo scale radius (kpc)
    pub halo_scale_radius: f64,
    /// Radii sampled for rotation curves (kpc)
    pub curve_radii: Vec<f64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            particle_count: 1_000,
            mass_range_gev: (10.0, 10_000.0),
            spawn_radius_kpc: 50.0,
            max_speed_kms: 300.0,
            halo_mass: 1e12,
            halo_scale_radius: 20.0,
            curve_radii: vec![5.0, 10.0, 20.0, 40.0, 80.0],
        }
    }
}
