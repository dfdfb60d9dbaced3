use serde::{Deserialize, Serialize};

/// Cartesian 3-vector (x, y, z)
pub type Vec3 = [f64; 3];

/// Squared Euclidean length
pub fn length_squared(v: Vec3) -> f64 {
    v[0] * v[0] + v[1] * v[1] + v[2] * v[2]
}

/// Key type of a [`ReferenceTable`]
pub trait TableKey: Copy + PartialEq {
    /// snake_case identifier, e.g. "dark_matter"
    fn name(&self) -> &'static str;

    /// Human-readable title, e.g. "Dark Matter"
    fn label(&self) -> &'static str;
}

/// Ordered, read-only key/value table.
///
/// Entries keep their construction order. There is no mutable access, so a
/// table handed out by a lookup function cannot drift from its source data.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: TableKey, V> ReferenceTable<K, V> {
    pub fn from_entries(entries: Vec<(K, V)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Look up an entry by its snake_case name
    pub fn get_by_name(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k.name() == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Components of the universe's energy/matter budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UniverseComponent {
    DarkEnergy,
    DarkMatter,
    OrdinaryMatter,
}

impl TableKey for UniverseComponent {
    fn name(&self) -> &'static str {
        match self {
            Self::DarkEnergy => "dark_energy",
            Self::DarkMatter => "dark_matter",
            Self::OrdinaryMatter => "ordinary_matter",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::DarkEnergy => "Dark Energy",
            Self::DarkMatter => "Dark Matter",
            Self::OrdinaryMatter => "Ordinary Matter",
        }
    }
}

/// Descriptive properties of WIMP dark-matter candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WimpProperty {
    MassRange,
    Interaction,
    Stability,
    Detection,
}

impl TableKey for WimpProperty {
    fn name(&self) -> &'static str {
        match self {
            Self::MassRange => "mass_range",
            Self::Interaction => "interaction",
            Self::Stability => "stability",
            Self::Detection => "detection",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::MassRange => "Mass Range",
            Self::Interaction => "Interaction",
            Self::Stability => "Stability",
            Self::Detection => "Detection",
        }
    }
}
