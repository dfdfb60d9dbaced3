// Physical constants and reference values.
// Units follow galactic-dynamics conventions:
// - Distance: kiloparsecs (kpc)
// - Halo mass: solar masses (M☉)
// - Velocity: km/s
// - Particle mass: GeV/c²

/// Gravitational constant in kpc * (km/s)^2 / M☉
pub const G_KPC: f64 = 4.302e-6;

/// Galactocentric radius of the Solar System (kpc)
pub const SOLAR_RADIUS_KPC: f64 = 8.5;

/// Beyond this radius a halo sample counts as outer halo (kpc)
pub const OUTER_HALO_RADIUS_KPC: f64 = 30.0;

/// Share of the universe's energy budget in dark energy (percent)
pub const DARK_ENERGY_PERCENT: f64 = 68.3;

/// Share of the universe's energy budget in dark matter (percent)
pub const DARK_MATTER_PERCENT: f64 = 26.8;

/// Share of the universe's energy budget in baryons (percent)
pub const ORDINARY_MATTER_PERCENT: f64 = 4.9;

pub const WIMP_MASS_RANGE: &str = "10 GeV/c² to 10 TeV/c²";
pub const WIMP_INTERACTION: &str = "Weak nuclear force";
pub const WIMP_STABILITY: &str = "Stable or very long-lived";
pub const WIMP_DETECTION: &str =
    "Direct detection experiments, indirect detection, collider searches";
