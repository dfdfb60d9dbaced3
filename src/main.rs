use darkmatter_core::{DemoConfig, TableKey};
use darkmatter_physics::cosmology;
use darkmatter_physics::halo::NfwHalo;
use darkmatter_physics::particle::DarkMatterParticle;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::default();
    let rule = "=".repeat(60);
    let thin = "-".repeat(60);

    println!("{rule}");
    println!("Dark Matter Simulation");
    println!("{rule}");

    let particle = DarkMatterParticle::new(100.0)
        .with_position([1.0, 2.0, 3.0])
        .with_velocity([10.0, 20.0, 15.0]);
    println!("\n{particle}");
    println!("Kinetic Energy: {:.2} GeV", particle.kinetic_energy());

    println!("\n{thin}");
    let halo = NfwHalo::new(config.halo_mass, config.halo_scale_radius);
    if halo.is_degenerate() {
        log::warn!("Halo scale radius {} is degenerate; curve values will be NaN", halo.scale_radius());
    }
    println!("\n{halo}");

    println!("\nRotation Curve:");
    for (r, v) in halo.rotation_curve_table(&config.curve_radii) {
        println!("  r = {:3} kpc: v = {:.2} km/s", r, v);
    }

    println!("\n{thin}");
    println!("\nUniverse Composition:");
    for (component, percentage) in cosmology::universe_composition().iter() {
        println!("  {}: {}%", component.label(), percentage);
    }

    println!("\n{thin}");
    println!("\nWIMP Properties:");
    for (prop, value) in cosmology::wimp_properties().iter() {
        println!("  {}: {}", prop.label(), value);
    }

    println!("\n{rule}");
}
