//! Walk-through of the toolkit: particle systems, halo rotation curves,
//! density profiles and reference data.

use darkmatter_core::{DemoConfig, TableKey};
use darkmatter_physics::cosmology;
use darkmatter_physics::ensemble::{self, ParticleSystem};
use darkmatter_physics::halo::{GalaxyKind, NfwHalo, RadialZone};
use darkmatter_storage::{HaloSnapshot, load_snapshot, save_snapshot};

const WIDTH: usize = 70;

fn banner(title: &str) {
    println!("\n{}", "=".repeat(WIDTH));
    println!("{title}");
    println!("{}", "=".repeat(WIDTH));
}

fn rule() {
    println!("{}", "-".repeat(WIDTH));
}

fn bar(len: usize) -> String {
    "█".repeat(len)
}

fn particle_system(config: &DemoConfig) {
    banner("EXAMPLE 1: Dark Matter Particle System");

    let system = ParticleSystem::reference();
    println!("\nParticle System:");
    for (i, p) in system.iter().enumerate() {
        println!(
            "  Particle {}: mass={} GeV/c², KE={:.2} GeV",
            i + 1,
            p.mass(),
            p.kinetic_energy()
        );
    }
    println!("\nTotal System Energy: {:.2} GeV", system.total_kinetic_energy());

    let sampled = ensemble::seeded_ensemble(config);
    println!(
        "\nSampled ensemble (seed {}): {} particles, {:.3e} GeV/c² total, KE = {:.3e} GeV",
        config.seed,
        sampled.len(),
        sampled.total_mass(),
        sampled.total_kinetic_energy()
    );
}

fn milky_way_halo() {
    banner("EXAMPLE 2: Milky Way Dark Matter Halo");

    let halo = GalaxyKind::MilkyWay.halo();
    println!("\n{halo}");
    println!("\nRotation Curve Analysis:");
    rule();
    println!("{:<15} {:<20} Note", "Radius (kpc)", "Velocity (km/s)");
    rule();

    for (r, v) in halo.rotation_curve_table(&[2.0, 5.0, 8.5, 15.0, 30.0, 50.0, 100.0]) {
        println!("{:<15.1} {:<20.2} {}", r, v, RadialZone::classify(r).note());
    }
}

fn compare_halos() {
    banner("EXAMPLE 3: Comparing Different Galaxy Halos");

    let test_radius = 20.0;
    println!("\nRotation velocity at {test_radius} kpc from center:");
    rule();
    for kind in GalaxyKind::ALL {
        let v = kind.halo().rotation_curve(test_radius);
        println!("{:<35} {:>8.2} km/s", kind.label(), v);
    }
}

fn density_profile(config: &DemoConfig) {
    banner("EXAMPLE 4: Dark Matter Density Profile");

    let halo = NfwHalo::new(config.halo_mass, config.halo_scale_radius);
    println!("\n{halo}");
    println!("\nDensity vs Radius (NFW Profile):");
    rule();
    println!("{:<15} {:<20} Visualization", "Radius (kpc)", "Relative Density");
    rule();

    let radii = [1.0, 5.0, 10.0, 20.0, 40.0, 80.0, 160.0];
    for (r, rel) in radii.iter().zip(halo.relative_density_profile(&radii)) {
        println!("{:<15.0} {:<20.6} {}", r, rel, bar((rel * 40.0) as usize));
    }
}

fn universe_composition() {
    banner("EXAMPLE 5: Universe Composition");

    let composition = cosmology::universe_composition();
    println!("\nEnergy/Matter Distribution in the Universe:");
    rule();
    for (component, pct) in composition.iter() {
        println!("{:<20} {:>5.1}%  {}", component.label(), pct, bar((pct * 0.5) as usize));
    }
    let total: f64 = composition.values().sum();
    println!("\n{:<20} {:>5.1}%", "Total", total);

    println!("\nKey Insights:");
    println!("  • Dark energy dominates the universe, causing accelerated expansion");
    println!(
        "  • Dark matter is {:.1} times more abundant than ordinary matter",
        cosmology::dark_to_ordinary_ratio()
    );
    println!("  • Only ~5% of the universe is made of atoms (stars, planets, us)");
}

fn wimp_detection() {
    banner("EXAMPLE 6: WIMP Detection Methods");

    println!("\nWeakly Interacting Massive Particles (WIMPs):");
    rule();
    for (prop, value) in cosmology::wimp_properties().iter() {
        println!("\n{}:", prop.label());
        println!("  {value}");
    }

    println!("\n\nDetection Challenges:");
    println!("  • Very weak interaction cross-section (10^-36 cm²)");
    println!("  • Requires massive detectors deep underground");
    println!("  • Must distinguish signal from background radiation");
    println!("  • Decades of searching with no confirmed detection yet");
}

fn snapshot_round_trip(config: &DemoConfig) -> Result<(), String> {
    banner("EXAMPLE 7: Saving a Halo Catalogue");

    let snapshot = HaloSnapshot::new("galaxy presets", config.clone())
        .with_halos(GalaxyKind::ALL.iter().map(|g| g.halo()).collect())
        .with_particles(&ParticleSystem::reference());
    let path = std::env::temp_dir()
        .join("darkmatter")
        .join(format!("{}.bin", snapshot.id));

    save_snapshot(&snapshot, &path)?;
    let loaded = load_snapshot(&path)?;
    println!(
        "\nSnapshot {} '{}': {} halos, {} particles",
        loaded.id,
        loaded.label,
        loaded.halos.len(),
        loaded.particles.len()
    );
    println!("Written to {}", path.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::default();
    let edge = bar(WIDTH);
    let blank = format!("█{}█", " ".repeat(WIDTH - 2));

    println!("\n{edge}");
    println!("{blank}");
    println!("█{}DARK MATTER EXAMPLES{}█", " ".repeat(20), " ".repeat(28));
    println!("{blank}");
    println!("{edge}");

    particle_system(&config);
    milky_way_halo();
    compare_halos();
    density_profile(&config);
    universe_composition();
    wimp_detection();
    if let Err(e) = snapshot_round_trip(&config) {
        log::error!("Snapshot example failed: {e}");
    }

    println!("\n{}", "=".repeat(WIDTH));
    println!("Examples completed successfully!");
    println!("{}\n", "=".repeat(WIDTH));
}
