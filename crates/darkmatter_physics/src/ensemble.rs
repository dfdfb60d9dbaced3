use darkmatter_core::DemoConfig;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::particle::DarkMatterParticle;

/// A fixed collection of dark matter particles.
/// Particles do not move; the system only aggregates their energies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleSystem {
    particles: Vec<DarkMatterParticle>,
}

impl ParticleSystem {
    pub fn from_particles(particles: Vec<DarkMatterParticle>) -> Self {
        Self { particles }
    }

    /// Three particles moving along the x, y and z axes
    pub fn reference() -> Self {
        Self::from_particles(vec![
            DarkMatterParticle::new(100.0)
                .with_position([0.0, 0.0, 0.0])
                .with_velocity([10.0, 0.0, 0.0]),
            DarkMatterParticle::new(150.0)
                .with_position([5.0, 5.0, 0.0])
                .with_velocity([0.0, 15.0, 0.0]),
            DarkMatterParticle::new(120.0)
                .with_position([10.0, 0.0, 5.0])
                .with_velocity([0.0, 0.0, 20.0]),
        ])
    }

    pub fn particles(&self) -> &[DarkMatterParticle] {
        &self.particles
    }

    pub fn iter(&self) -> impl Iterator<Item = &DarkMatterParticle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.particles.iter().map(|p| p.mass()).sum()
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.particles.iter().map(|p| p.kinetic_energy()).sum()
    }
}

/// Sample a particle ensemble from `config`.
/// Deterministic for a given rng state; pass a seeded `ChaCha8Rng` for
/// reproducible output.
pub fn generate_ensemble(config: &DemoConfig, rng: &mut impl Rng) -> ParticleSystem {
    let n = config.particle_count as usize;
    let mut particles = Vec::with_capacity(n);

    for _ in 0..n {
        particles.push(sample_particle(config, rng));
    }

    log::debug!(
        "Generated {} particles (seed {}, spawn radius {} kpc)",
        n,
        config.seed,
        config.spawn_radius_kpc
    );

    ParticleSystem::from_particles(particles)
}

/// Ensemble seeded from `config.seed`
pub fn seeded_ensemble(config: &DemoConfig) -> ParticleSystem {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    generate_ensemble(config, &mut rng)
}

fn sample_particle(config: &DemoConfig, rng: &mut impl Rng) -> DarkMatterParticle {
    let (min_mass, max_mass) = config.mass_range_gev;
    let mass = if max_mass > min_mass {
        rng.gen_range(min_mass..max_mass)
    } else {
        min_mass
    };

    // Uniform in a ball: r ~ R * u^(1/3)
    let r = config.spawn_radius_kpc.max(0.0) * rng.gen_range(0.0..1.0f64).cbrt();
    let position = scale(random_direction(rng), r);

    let speed = config.max_speed_kms.max(0.0) * rng.gen_range(0.0..1.0f64);
    let velocity = scale(random_direction(rng), speed);

    DarkMatterParticle::new(mass)
        .with_position(position)
        .with_velocity(velocity)
}

/// Uniform unit vector on the sphere
fn random_direction(rng: &mut impl Rng) -> [f64; 3] {
    let theta = rng.gen_range(0.0..std::f64::consts::TAU);
    let cos_phi = rng.gen_range(-1.0..1.0f64);
    let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();
    [sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi]
}

fn scale(v: [f64; 3], s: f64) -> [f64; 3] {
    [v[0] * s, v[1] * s, v[2] * s]
}
