//! Every family, indexed by legacy id and namespaced id.
//!
//! World storage and the network layer only know `(family id, code)` pairs;
//! [`Catalog::describe`] turns such a pair into a [`VariantInfo`] without the
//! caller naming the concrete family type. Code that does know the family
//! uses the typed registry fields directly.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use log::debug;
use serde::Serialize;

use crate::codec::{DurableFamily, Family, VariantCode};
use crate::family::{
    Anvil, Comparator, DaylightDetector, DiamondPickaxe, IronSword, Lever, Log, Piston, RedstoneWire, Repeater,
    StoneButton, StonePressurePlate, Torch, WoodenButton,
};
use crate::registry::{DurabilityRegistry, RegistryError, VariantRegistry};
use crate::variant::MaterialVariant;

lazy_static! {
    /// The vanilla catalog, built on first use.
    pub static ref VANILLA: Catalog = Catalog::vanilla()
        .unwrap_or_else(|err| panic!("invalid vanilla material table: {}", err));
}

/// Family-independent description of one variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantInfo {
    pub family_id: u16,
    pub namespaced_id: &'static str,
    pub name: String,
    pub code: VariantCode,
    pub properties: Vec<(&'static str, String)>,
    /// False for durability variants synthesized on request.
    pub registered: bool,
}

impl VariantInfo {
    fn of<F: Family>(variant: &MaterialVariant<F>, registered: bool) -> VariantInfo {
        VariantInfo {
            family_id: F::ID,
            namespaced_id: F::NAMESPACED_ID,
            name: variant.name().to_owned(),
            code: variant.code(),
            properties: variant.properties(),
            registered,
        }
    }
}

impl fmt::Display for VariantInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{} ({}) {}", self.namespaced_id, self.code, self.family_id, self.name)?;
        if !self.properties.is_empty() {
            let props: Vec<String> = self
                .properties
                .iter()
                .map(|(key, val)| format!("{}={}", key, val))
                .collect();
            write!(f, " [{}]", props.join(","))?;
        }
        Ok(())
    }
}

/// Type-erased view of one family's registry.
pub trait FamilyView: Send + Sync {
    fn family_id(&self) -> u16;
    fn namespaced_id(&self) -> &'static str;
    /// Number of registered variants.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn describe(&self, code: VariantCode) -> Option<VariantInfo>;
    fn describe_by_name(&self, name: &str) -> Option<VariantInfo>;
    /// The registered variants, sorted by code.
    fn describe_all(&self) -> Vec<VariantInfo>;
    fn verify(&self) -> Result<(), RegistryError>;
}

impl<F: Family> FamilyView for VariantRegistry<F> {
    fn family_id(&self) -> u16 {
        F::ID
    }

    fn namespaced_id(&self) -> &'static str {
        F::NAMESPACED_ID
    }

    fn len(&self) -> usize {
        VariantRegistry::len(self)
    }

    fn describe(&self, code: VariantCode) -> Option<VariantInfo> {
        self.get_by_code(code).map(|v| VariantInfo::of(v, true))
    }

    fn describe_by_name(&self, name: &str) -> Option<VariantInfo> {
        self.get_by_name(name).map(|v| VariantInfo::of(v, true))
    }

    fn describe_all(&self) -> Vec<VariantInfo> {
        self.variants().iter().map(|v| VariantInfo::of(v, true)).collect()
    }

    fn verify(&self) -> Result<(), RegistryError> {
        VariantRegistry::verify(self)
    }
}

impl<F: DurableFamily> FamilyView for DurabilityRegistry<F> {
    fn family_id(&self) -> u16 {
        F::ID
    }

    fn namespaced_id(&self) -> &'static str {
        F::NAMESPACED_ID
    }

    fn len(&self) -> usize {
        self.variants().len()
    }

    fn describe(&self, code: VariantCode) -> Option<VariantInfo> {
        let registered = self.is_registered(code);
        self.get_by_code(code).map(|v| VariantInfo::of(&*v, registered))
    }

    fn describe_by_name(&self, name: &str) -> Option<VariantInfo> {
        self.get_by_name(name).map(|v| VariantInfo::of(v, true))
    }

    fn describe_all(&self) -> Vec<VariantInfo> {
        self.variants().iter().map(|v| VariantInfo::of(v, true)).collect()
    }

    fn verify(&self) -> Result<(), RegistryError> {
        DurabilityRegistry::verify(self)
    }
}

#[derive(Default)]
struct FamilyIndex {
    by_id: HashMap<u16, Arc<dyn FamilyView>>,
    by_namespaced_id: HashMap<&'static str, u16>,
}

impl FamilyIndex {
    fn add<R: FamilyView + 'static>(&mut self, registry: R) -> Result<Arc<R>, RegistryError> {
        let id = registry.family_id();
        let namespaced_id = registry.namespaced_id();
        if let Some(existing) = self.by_id.get(&id) {
            return Err(RegistryError::DuplicateFamily {
                id,
                first: existing.namespaced_id(),
                second: namespaced_id,
            });
        }
        if let Some(&other) = self.by_namespaced_id.get(namespaced_id) {
            return Err(RegistryError::DuplicateFamily {
                id: other,
                first: namespaced_id,
                second: namespaced_id,
            });
        }
        let registry = Arc::new(registry);
        let view: Arc<dyn FamilyView> = registry.clone();
        self.by_id.insert(id, view);
        self.by_namespaced_id.insert(namespaced_id, id);
        Ok(registry)
    }
}

/// All vanilla families. Built once, then read-only.
pub struct Catalog {
    pub torch: Arc<VariantRegistry<Torch>>,
    pub lever: Arc<VariantRegistry<Lever>>,
    pub stone_button: Arc<VariantRegistry<StoneButton>>,
    pub wooden_button: Arc<VariantRegistry<WoodenButton>>,
    pub redstone_wire: Arc<VariantRegistry<RedstoneWire>>,
    pub stone_pressure_plate: Arc<VariantRegistry<StonePressurePlate>>,
    pub piston: Arc<VariantRegistry<Piston>>,
    pub repeater: Arc<VariantRegistry<Repeater>>,
    pub comparator: Arc<VariantRegistry<Comparator>>,
    pub anvil: Arc<VariantRegistry<Anvil>>,
    pub log: Arc<VariantRegistry<Log>>,
    pub daylight_detector: Arc<VariantRegistry<DaylightDetector>>,
    pub diamond_pickaxe: Arc<DurabilityRegistry<DiamondPickaxe>>,
    pub iron_sword: Arc<DurabilityRegistry<IronSword>>,
    index: FamilyIndex,
}

impl Catalog {
    pub fn vanilla() -> Result<Catalog, RegistryError> {
        let mut index = FamilyIndex::default();
        let catalog = Catalog {
            torch: index.add(VariantRegistry::<Torch>::standard()?)?,
            lever: index.add(VariantRegistry::<Lever>::standard()?)?,
            stone_button: index.add(VariantRegistry::<StoneButton>::standard()?)?,
            wooden_button: index.add(VariantRegistry::<WoodenButton>::standard()?)?,
            redstone_wire: index.add(VariantRegistry::<RedstoneWire>::standard()?)?,
            stone_pressure_plate: index.add(VariantRegistry::<StonePressurePlate>::standard()?)?,
            piston: index.add(VariantRegistry::<Piston>::standard()?)?,
            repeater: index.add(VariantRegistry::<Repeater>::standard()?)?,
            comparator: index.add(VariantRegistry::<Comparator>::standard()?)?,
            anvil: index.add(VariantRegistry::<Anvil>::standard()?)?,
            log: index.add(VariantRegistry::<Log>::standard()?)?,
            daylight_detector: index.add(VariantRegistry::<DaylightDetector>::standard()?)?,
            diamond_pickaxe: index.add(DurabilityRegistry::<DiamondPickaxe>::standard()?)?,
            iron_sword: index.add(DurabilityRegistry::<IronSword>::standard()?)?,
            index,
        };
        debug!("Built material catalog with {} families", catalog.index.by_id.len());
        Ok(catalog)
    }

    pub fn family(&self, id: u16) -> Option<&dyn FamilyView> {
        self.index.by_id.get(&id).map(|view| view.as_ref())
    }

    pub fn family_by_namespaced_id(&self, namespaced_id: &str) -> Option<&dyn FamilyView> {
        self.index
            .by_namespaced_id
            .get(namespaced_id)
            .and_then(|id| self.family(*id))
    }

    /// Every family, sorted by legacy id.
    pub fn families(&self) -> Vec<&dyn FamilyView> {
        let mut families: Vec<&dyn FamilyView> = self.index.by_id.values().map(|view| view.as_ref()).collect();
        families.sort_by_key(|view| view.family_id());
        families
    }

    pub fn describe(&self, family_id: u16, code: VariantCode) -> Option<VariantInfo> {
        self.family(family_id)?.describe(code)
    }

    pub fn describe_by_name(&self, family_id: u16, name: &str) -> Option<VariantInfo> {
        self.family(family_id)?.describe_by_name(name)
    }

    /// Re-checks every family's invariants, stopping at the first violation.
    pub fn verify(&self) -> Result<(), RegistryError> {
        for family in self.families() {
            family.verify()?;
        }
        Ok(())
    }
}
