use std::fmt;

use darkmatter_core::{Vec3, length_squared};
use serde::{Deserialize, Serialize};

/// A hypothetical dark matter particle.
///
/// Mass is in GeV/c², position in kpc and velocity in km/s. Values are stored
/// as given; a negative mass is accepted and yields a negative energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DarkMatterParticle {
    mass: f64,
    position: Vec3,
    velocity: Vec3,
}

impl DarkMatterParticle {
    /// A particle at rest at the origin
    pub fn new(mass: f64) -> Self {
        Self {
            mass,
            position: [0.0; 3],
            velocity: [0.0; 3],
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn speed(&self) -> f64 {
        length_squared(self.velocity).sqrt()
    }

    /// KE = 0.5 * m * |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * length_squared(self.velocity)
    }
}

impl fmt::Display for DarkMatterParticle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.position;
        let [vx, vy, vz] = self.velocity;
        write!(
            f,
            "DarkMatterParticle(mass={}, pos=({}, {}, {}), vel=({}, {}, {}))",
            self.mass, x, y, z, vx, vy, vz
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_stores_values() {
        let p = DarkMatterParticle::new(100.0)
            .with_position([1.0, 2.0, 3.0])
            .with_velocity([10.0, 20.0, 15.0]);
        assert_eq!(p.mass(), 100.0);
        assert_eq!(p.position(), [1.0, 2.0, 3.0]);
        assert_eq!(p.velocity(), [10.0, 20.0, 15.0]);
    }

    #[test]
    fn test_kinetic_energy_exact() {
        // 0.5 * 100 * (100 + 400 + 225)
        let p = DarkMatterParticle::new(100.0).with_velocity([10.0, 20.0, 15.0]);
        assert_eq!(p.kinetic_energy(), 36250.0);
    }

    #[test]
    fn test_stationary_particle_has_no_energy() {
        for mass in [50.0, 0.0, -3.0, 1e9] {
            let p = DarkMatterParticle::new(mass);
            assert_eq!(p.kinetic_energy(), 0.0, "mass={}", mass);
            assert_eq!(p.position(), [0.0; 3]);
        }
    }

    #[test]
    fn test_negative_mass_not_rejected() {
        let p = DarkMatterParticle::new(-2.0).with_velocity([3.0, 0.0, 0.0]);
        assert_eq!(p.kinetic_energy(), -9.0);
    }

    #[test]
    fn test_position_does_not_affect_energy() {
        let a = DarkMatterParticle::new(10.0).with_velocity([1.0, 2.0, 2.0]);
        let b = a.with_position([100.0, -50.0, 7.0]);
        assert_eq!(a.kinetic_energy(), b.kinetic_energy());
        assert_eq!(a.speed(), 3.0);
    }

    #[test]
    fn test_kinetic_energy_idempotent() {
        let p = DarkMatterParticle::new(0.3).with_velocity([0.1, 0.7, 1.3]);
        let first = p.kinetic_energy();
        for _ in 0..10 {
            assert_eq!(p.kinetic_energy().to_bits(), first.to_bits());
        }
    }

    #[test]
    fn test_display() {
        let p = DarkMatterParticle::new(100.0)
            .with_position([1.0, 2.0, 3.0])
            .with_velocity([10.0, 20.0, 15.0]);
        assert_eq!(
            p.to_string(),
            "DarkMatterParticle(mass=100, pos=(1, 2, 3), vel=(10, 20, 15))"
        );
    }
}
