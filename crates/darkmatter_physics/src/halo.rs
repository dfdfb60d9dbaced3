use std::f64::consts::PI;
use std::fmt;

use darkmatter_core::constants::{G_KPC, OUTER_HALO_RADIUS_KPC, SOLAR_RADIUS_KPC};
use serde::{Deserialize, Serialize};

/// A dark matter halo with a Navarro-Frenk-White (NFW) profile.
///
/// `total_mass` is in solar masses, `scale_radius` in kpc. Neither is
/// validated. A zero scale radius makes every query at a positive radius
/// evaluate to NaN (see [`NfwHalo::is_degenerate`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NfwHalo {
    total_mass: f64,
    scale_radius: f64,
}

impl NfwHalo {
    pub fn new(total_mass: f64, scale_radius: f64) -> Self {
        Self {
            total_mass,
            scale_radius,
        }
    }

    pub fn total_mass(&self) -> f64 {
        self.total_mass
    }

    pub fn scale_radius(&self) -> f64 {
        self.scale_radius
    }

    /// True when the scale radius cannot be used as a divisor
    pub fn is_degenerate(&self) -> bool {
        self.scale_radius == 0.0 || !self.scale_radius.is_finite()
    }

    /// NFW density at `radius` (kpc):
    /// rho(r) = rho_0 / (x * (1 + x)^2), x = r / r_s, rho_0 = M / (4 pi r_s^3)
    ///
    /// The profile diverges at the center, so any `radius <= 0` returns
    /// positive infinity.
    pub fn density_profile(&self, radius: f64) -> f64 {
        if radius <= 0.0 {
            return f64::INFINITY;
        }

        let x = radius / self.scale_radius;
        let rho_0 = self.total_mass / (4.0 * PI * self.scale_radius.powi(3));
        rho_0 / (x * (1.0 + x).powi(2))
    }

    /// Mass enclosed within `radius`: M(x) = M * (ln(1 + x) - x / (1 + x))
    pub fn enclosed_mass(&self, radius: f64) -> f64 {
        if radius <= 0.0 {
            return 0.0;
        }

        let x = radius / self.scale_radius;
        self.total_mass * ((1.0 + x).ln() - x / (1.0 + x))
    }

    /// Circular velocity (km/s) at `radius`: v = sqrt(G * M(x) / r).
    /// Returns 0 for `radius <= 0`.
    pub fn rotation_curve(&self, radius: f64) -> f64 {
        if radius <= 0.0 {
            return 0.0;
        }

        (G_KPC * self.enclosed_mass(radius) / radius).sqrt()
    }

    /// (radius, velocity) pairs for each radius, in input order
    pub fn rotation_curve_table(&self, radii: &[f64]) -> Vec<(f64, f64)> {
        radii.iter().map(|&r| (r, self.rotation_curve(r))).collect()
    }

    /// Densities at `radii` divided by the largest finite one.
    ///
    /// Non-positive radii keep their infinite sentinel. If no finite density
    /// is present the raw densities are returned.
    pub fn relative_density_profile(&self, radii: &[f64]) -> Vec<f64> {
        let densities: Vec<f64> = radii.iter().map(|&r| self.density_profile(r)).collect();
        let max = densities
            .iter()
            .copied()
            .filter(|d| d.is_finite())
            .fold(f64::NEG_INFINITY, f64::max);

        if !max.is_finite() || max == 0.0 {
            return densities;
        }
        densities.into_iter().map(|d| d / max).collect()
    }
}

impl fmt::Display for NfwHalo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DarkMatterHalo(total_mass={} M☉, scale_radius={} kpc)",
            self.total_mass, self.scale_radius
        )
    }
}

/// Representative halos for different galaxy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GalaxyKind {
    Dwarf,
    MilkyWay,
    GiantElliptical,
}

impl GalaxyKind {
    pub const ALL: [GalaxyKind; 3] = [Self::Dwarf, Self::MilkyWay, Self::GiantElliptical];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dwarf => "Dwarf Galaxy",
            Self::MilkyWay => "Spiral Galaxy (Milky Way-like)",
            Self::GiantElliptical => "Giant Elliptical",
        }
    }

    pub fn halo(&self) -> NfwHalo {
        match self {
            Self::Dwarf => NfwHalo::new(1e9, 5.0),
            Self::MilkyWay => NfwHalo::new(1.5e12, 25.0),
            Self::GiantElliptical => NfwHalo::new(1e13, 50.0),
        }
    }
}

/// Where a galactocentric radius sits relative to the Solar System
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadialZone {
    Inner,
    Solar,
    Disk,
    Outer,
}

impl RadialZone {
    pub fn classify(radius: f64) -> Self {
        if radius == SOLAR_RADIUS_KPC {
            Self::Solar
        } else if radius < SOLAR_RADIUS_KPC {
            Self::Inner
        } else if radius > OUTER_HALO_RADIUS_KPC {
            Self::Outer
        } else {
            Self::Disk
        }
    }

    pub fn note(&self) -> &'static str {
        match self {
            Self::Inner => "Inner galaxy",
            Self::Solar => "← Solar System position",
            Self::Disk => "",
            Self::Outer => "Outer halo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_halo() -> NfwHalo {
        NfwHalo::new(1e12, 20.0)
    }

    #[test]
    fn test_construction_stores_values() {
        let halo = reference_halo();
        assert_eq!(halo.total_mass(), 1e12);
        assert_eq!(halo.scale_radius(), 20.0);
        assert!(!halo.is_degenerate());
    }

    #[test]
    fn test_density_decreases_with_radius() {
        let halo = reference_halo();
        assert!(halo.density_profile(1.0) > halo.density_profile(100.0));

        let radii = [0.01, 0.5, 1.0, 5.0, 10.0, 20.0, 40.0, 80.0, 160.0, 1e4];
        for pair in radii.windows(2) {
            let inner = halo.density_profile(pair[0]);
            let outer = halo.density_profile(pair[1]);
            assert!(inner > outer, "rho({}) = {} <= rho({}) = {}", pair[0], inner, pair[1], outer);
        }
    }

    #[test]
    fn test_density_at_scale_radius() {
        // x = 1: rho = rho_0 / 4
        let halo = reference_halo();
        let rho_0 = 1e12 / (4.0 * PI * 20.0f64.powi(3));
        let rho = halo.density_profile(20.0);
        assert!((rho - rho_0 / 4.0).abs() / rho < 1e-12, "rho = {}", rho);
    }

    #[test]
    fn test_density_infinite_at_or_below_center() {
        for halo in [reference_halo(), NfwHalo::new(-5.0, 0.0), NfwHalo::new(1.0, 3.0)] {
            assert_eq!(halo.density_profile(0.0), f64::INFINITY);
            assert_eq!(halo.density_profile(-1.0), f64::INFINITY);
        }
    }

    #[test]
    fn test_rotation_zero_at_or_below_center() {
        for halo in [reference_halo(), NfwHalo::new(-5.0, 0.0), NfwHalo::new(1.0, 3.0)] {
            assert_eq!(halo.rotation_curve(0.0), 0.0);
            assert_eq!(halo.rotation_curve(-10.0), 0.0);
        }
    }

    #[test]
    fn test_rotation_positive() {
        let halo = reference_halo();
        assert!(halo.rotation_curve(10.0) > 0.0);
        assert!(halo.rotation_curve(20.0) > 0.0);
    }

    #[test]
    fn test_rotation_at_scale_radius() {
        // M(1) = M * (ln 2 - 1/2), v = sqrt(G * M(1) / 20) ~ 203.8 km/s
        let halo = reference_halo();
        let v = halo.rotation_curve(20.0);
        assert!((v - 203.8).abs() < 0.5, "v(20) = {}", v);
    }

    #[test]
    fn test_enclosed_mass_grows() {
        let halo = reference_halo();
        assert_eq!(halo.enclosed_mass(0.0), 0.0);
        let m10 = halo.enclosed_mass(10.0);
        let m20 = halo.enclosed_mass(20.0);
        assert!(m10 > 0.0);
        assert!(m20 > m10);
    }

    #[test]
    fn test_zero_scale_radius_yields_nan() {
        let halo = NfwHalo::new(1e12, 0.0);
        assert!(halo.is_degenerate());
        assert!(halo.density_profile(10.0).is_nan());
        assert!(halo.rotation_curve(10.0).is_nan());
        // sentinels still apply
        assert_eq!(halo.density_profile(0.0), f64::INFINITY);
        assert_eq!(halo.rotation_curve(0.0), 0.0);
    }

    #[test]
    fn test_queries_idempotent() {
        let halo = reference_halo();
        let rho = halo.density_profile(7.3);
        let v = halo.rotation_curve(7.3);
        for _ in 0..10 {
            assert_eq!(halo.density_profile(7.3).to_bits(), rho.to_bits());
            assert_eq!(halo.rotation_curve(7.3).to_bits(), v.to_bits());
        }
    }

    #[test]
    fn test_rotation_curve_table() {
        let halo = reference_halo();
        let table = halo.rotation_curve_table(&[0.0, 10.0, 20.0]);
        assert_eq!(table.len(), 3);
        assert_eq!(table[0], (0.0, 0.0));
        assert_eq!(table[2].1, halo.rotation_curve(20.0));
    }

    #[test]
    fn test_relative_density_profile() {
        let halo = reference_halo();
        let rel = halo.relative_density_profile(&[1.0, 5.0, 10.0, 20.0, 40.0, 80.0, 160.0]);
        assert_eq!(rel[0], 1.0);
        for pair in rel.windows(2) {
            assert!(pair[0] > pair[1]);
        }
        assert!(rel.iter().all(|&d| d > 0.0 && d <= 1.0));

        let with_center = halo.relative_density_profile(&[0.0, 5.0]);
        assert_eq!(with_center[0], f64::INFINITY);
        assert_eq!(with_center[1], 1.0);

        assert!(halo.relative_density_profile(&[]).is_empty());
    }

    #[test]
    fn test_heavier_galaxies_rotate_faster() {
        let velocities: Vec<f64> = GalaxyKind::ALL
            .iter()
            .map(|g| g.halo().rotation_curve(20.0))
            .collect();
        assert!(velocities[0] < velocities[1]);
        assert!(velocities[1] < velocities[2]);
    }

    #[test]
    fn test_radial_zone() {
        assert_eq!(RadialZone::classify(2.0), RadialZone::Inner);
        assert_eq!(RadialZone::classify(8.5), RadialZone::Solar);
        assert_eq!(RadialZone::classify(15.0), RadialZone::Disk);
        assert_eq!(RadialZone::classify(30.0), RadialZone::Disk);
        assert_eq!(RadialZone::classify(50.0), RadialZone::Outer);
        assert_eq!(RadialZone::Disk.note(), "");
    }

    #[test]
    fn test_display() {
        let halo = NfwHalo::new(1.5e12, 25.0);
        assert_eq!(
            halo.to_string(),
            "DarkMatterHalo(total_mass=1500000000000 M☉, scale_radius=25 kpc)"
        );
    }
}
