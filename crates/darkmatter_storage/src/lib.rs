use darkmatter_core::DemoConfig;
use darkmatter_physics::ensemble::ParticleSystem;
use darkmatter_physics::halo::NfwHalo;
use darkmatter_physics::particle::DarkMatterParticle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// A saved set of halos and particles, with the config that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HaloSnapshot {
    pub id: Uuid,
    pub label: String,
    pub config: DemoConfig,
    pub halos: Vec<NfwHalo>,
    pub particles: Vec<DarkMatterParticle>,
}

impl HaloSnapshot {
    pub fn new(label: impl Into<String>, config: DemoConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            config,
            halos: Vec::new(),
            particles: Vec::new(),
        }
    }

    pub fn with_halos(mut self, halos: Vec<NfwHalo>) -> Self {
        self.halos = halos;
        self
    }

    pub fn with_particles(mut self, system: &ParticleSystem) -> Self {
        self.particles = system.particles().to_vec();
        self
    }

    pub fn particle_system(&self) -> ParticleSystem {
        ParticleSystem::from_particles(self.particles.clone())
    }
}

/// Save a snapshot to disk as bincode
pub fn save_snapshot(snapshot: &HaloSnapshot, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create dir: {e}"))?;
    }
    let data = bincode::serialize(snapshot).map_err(|e| format!("Serialize error: {e}"))?;
    fs::write(path, &data).map_err(|e| format!("Write error: {e}"))?;
    log::debug!(
        "Saved snapshot {} ({} halos, {} particles, {} bytes) to {}",
        snapshot.id,
        snapshot.halos.len(),
        snapshot.particles.len(),
        data.len(),
        path.display()
    );
    Ok(())
}

/// Load a snapshot from disk
pub fn load_snapshot(path: &Path) -> Result<HaloSnapshot, String> {
    let data = fs::read(path).map_err(|e| format!("Read error: {e}"))?;
    let snapshot: HaloSnapshot =
        bincode::deserialize(&data).map_err(|e| format!("Deserialize error: {e}"))?;
    log::debug!("Loaded snapshot {} from {}", snapshot.id, path.display());
    Ok(snapshot)
}
