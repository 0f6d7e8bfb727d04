// Resolution of raw device names to device families

use super::mapping::DeviceFamily;
use std::collections::HashMap;

/// Catalogue of name-matched device families
///
/// Built once from a fixed registration order. The keyboard is never
/// resolved through here.
#[derive(Debug, Clone)]
pub struct MappingRegistry {
    /// Raw device name -> claiming family
    lookup: HashMap<&'static str, DeviceFamily>,

    /// Families in registration order
    families: Vec<DeviceFamily>,

    /// Family assumed for unrecognized names
    fallback: DeviceFamily,
}

impl MappingRegistry {
    /// Create the registry of built-in gamepad families
    pub fn new() -> Self {
        Self::from_families(&DeviceFamily::GAMEPADS, DeviceFamily::FALLBACK)
    }

    /// Create a registry from an explicit registration order
    ///
    /// When two families claim the same name, the first registered keeps it.
    pub fn from_families(families: &[DeviceFamily], fallback: DeviceFamily) -> Self {
        let mut lookup = HashMap::new();
        for &family in families {
            for &alias in family.declared_aliases() {
                lookup.entry(alias).or_insert(family);
            }
        }

        Self {
            lookup,
            families: families.to_vec(),
            fallback,
        }
    }

    /// Family claiming `name`, if any
    pub fn lookup(&self, name: &str) -> Option<DeviceFamily> {
        self.lookup.get(name).copied()
    }

    /// Family to bind for `name`, falling back for unknown devices
    pub fn resolve(&self, name: &str) -> DeviceFamily {
        match self.lookup(name) {
            Some(family) => family,
            None => {
                log::warn!(
                    "Unknown controller device {:?}, treating it as {}",
                    name,
                    self.fallback
                );
                self.fallback
            }
        }
    }

    /// Registered families, in registration order
    pub fn families(&self) -> &[DeviceFamily] {
        &self.families
    }

    pub fn fallback(&self) -> DeviceFamily {
        self.fallback
    }

    /// Number of distinct names recognized
    pub fn alias_count(&self) -> usize {
        self.lookup.len()
    }
}

impl Default for MappingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
