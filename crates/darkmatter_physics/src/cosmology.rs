use darkmatter_core::constants::*;
use darkmatter_core::{ReferenceTable, UniverseComponent, WimpProperty};

/// Estimated composition of the universe, in percent.
/// Ordered: dark energy, dark matter, ordinary matter.
pub fn universe_composition() -> ReferenceTable<UniverseComponent, f64> {
    ReferenceTable::from_entries(vec![
        (UniverseComponent::DarkEnergy, DARK_ENERGY_PERCENT),
        (UniverseComponent::DarkMatter, DARK_MATTER_PERCENT),
        (UniverseComponent::OrdinaryMatter, ORDINARY_MATTER_PERCENT),
    ])
}

/// How many times more dark matter than ordinary matter there is
pub fn dark_to_ordinary_ratio() -> f64 {
    DARK_MATTER_PERCENT / ORDINARY_MATTER_PERCENT
}

/// Properties of WIMPs (Weakly Interacting Massive Particles)
pub fn wimp_properties() -> ReferenceTable<WimpProperty, &'static str> {
    ReferenceTable::from_entries(vec![
        (WimpProperty::MassRange, WIMP_MASS_RANGE),
        (WimpProperty::Interaction, WIMP_INTERACTION),
        (WimpProperty::Stability, WIMP_STABILITY),
        (WimpProperty::Detection, WIMP_DETECTION),
    ])
}
