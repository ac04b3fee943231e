//! Per-family variant registries.
//!
//! A [`RegistryBuilder`] collects variants and checks every registration;
//! [`RegistryBuilder::build`] freezes it into a [`VariantRegistry`] that has
//! no mutating API at all. Frozen registries are plain data and can be read
//! from any number of threads.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};
use thiserror::Error;

use crate::attribute::Durability;
use crate::codec::{CodecError, DurableFamily, Family, VariantCode};
use crate::variant::MaterialVariant;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("tried to register {name} to {family}:{code} but {existing} was already registered")]
    DuplicateCode {
        family: &'static str,
        code: VariantCode,
        name: String,
        existing: String,
    },
    #[error("{family} already has a variant named {name}")]
    DuplicateName { family: &'static str, name: String },
    #[error("{family}:{code} ({name}) does not fit in {bits} bits")]
    CodeTooWide {
        family: &'static str,
        code: VariantCode,
        name: String,
        bits: u32,
    },
    #[error("{family}:{code} ({name}) does not decode back to its own attributes")]
    RoundTrip {
        family: &'static str,
        code: VariantCode,
        name: String,
    },
    #[error("{family}: index entry for {name} does not point at the registered variant")]
    IndexMismatch { family: &'static str, name: String },
    #[error("family id {id} is claimed by both {first} and {second}")]
    DuplicateFamily {
        id: u16,
        first: &'static str,
        second: &'static str,
    },
    #[error("cannot register {name}: {source}")]
    Codec {
        name: String,
        #[source]
        source: CodecError,
    },
}

/// Collects the variants of one family before freezing them.
pub struct RegistryBuilder<F: Family> {
    variants: BTreeMap<VariantCode, MaterialVariant<F>>,
    names: HashMap<String, VariantCode>,
}

impl<F: Family> RegistryBuilder<F> {
    pub fn new() -> RegistryBuilder<F> {
        RegistryBuilder {
            variants: BTreeMap::new(),
            names: HashMap::new(),
        }
    }

    /// Encodes `attributes` and adds the resulting variant under `name`.
    ///
    /// Fails if the codec rejects the attributes, if the code does not decode
    /// back to the same attributes, or if the code or the (case-insensitive)
    /// name is already taken. Nothing is ever overwritten.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        attributes: F::Attributes,
    ) -> Result<VariantCode, RegistryError> {
        let name = name.into();
        let code = match F::encode(&attributes) {
            Ok(code) => code,
            Err(source) => return Err(RegistryError::Codec { name, source }),
        };
        if !code.fits(F::CODE_BITS) {
            return Err(RegistryError::CodeTooWide {
                family: F::NAMESPACED_ID,
                code,
                name,
                bits: F::CODE_BITS,
            });
        }
        if F::decode(code).ok() != Some(attributes) {
            return Err(RegistryError::RoundTrip {
                family: F::NAMESPACED_ID,
                code,
                name,
            });
        }
        if let Some(existing) = self.variants.get(&code) {
            return Err(RegistryError::DuplicateCode {
                family: F::NAMESPACED_ID,
                code,
                name,
                existing: existing.name().to_owned(),
            });
        }
        let key = name.to_lowercase();
        if self.names.contains_key(&key) {
            return Err(RegistryError::DuplicateName {
                family: F::NAMESPACED_ID,
                name,
            });
        }
        self.names.insert(key, code);
        self.variants.insert(code, MaterialVariant::new(name, code, attributes));
        Ok(code)
    }

    /// Registers every combination in the family's declared domain under its
    /// standard name.
    pub fn register_domain(&mut self) -> Result<&mut RegistryBuilder<F>, RegistryError> {
        for attributes in F::domain() {
            self.register(F::variant_name(&attributes), attributes)?;
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Freezes the registry. Variants are stored sorted by code.
    pub fn build(self) -> VariantRegistry<F> {
        let variants: Vec<MaterialVariant<F>> = self.variants.into_values().collect();
        let by_code = variants
            .iter()
            .enumerate()
            .map(|(idx, v)| (v.code(), idx))
            .collect();
        let by_name = variants
            .iter()
            .enumerate()
            .map(|(idx, v)| (v.name().to_lowercase(), idx))
            .collect();
        debug!("Registered {} variants for {} ({})", variants.len(), F::NAMESPACED_ID, F::ID);
        VariantRegistry {
            variants,
            by_code,
            by_name,
        }
    }
}

impl<F: Family> Default for RegistryBuilder<F> {
    fn default() -> RegistryBuilder<F> {
        RegistryBuilder::new()
    }
}

/// The frozen, closed set of variants of one family.
pub struct VariantRegistry<F: Family> {
    variants: Vec<MaterialVariant<F>>,
    by_code: HashMap<VariantCode, usize>,
    by_name: HashMap<String, usize>,
}

impl<F: Family> VariantRegistry<F> {
    pub fn builder() -> RegistryBuilder<F> {
        RegistryBuilder::new()
    }

    /// Builds the registry holding the family's whole declared domain.
    pub fn standard() -> Result<VariantRegistry<F>, RegistryError> {
        let mut builder = RegistryBuilder::new();
        builder.register_domain()?;
        Ok(builder.build())
    }

    pub fn family_id(&self) -> u16 {
        F::ID
    }

    pub fn namespaced_id(&self) -> &'static str {
        F::NAMESPACED_ID
    }

    pub fn get_by_code(&self, code: VariantCode) -> Option<&MaterialVariant<F>> {
        self.by_code.get(&code).map(|&idx| &self.variants[idx])
    }

    /// Case-insensitive lookup by enum-style name.
    pub fn get_by_name(&self, name: &str) -> Option<&MaterialVariant<F>> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| &self.variants[idx])
    }

    /// Finds the variant for a fully specified attribute tuple.
    ///
    /// Attributes the codec cannot represent are an error; a representable
    /// combination that was never registered is `Ok(None)`.
    pub fn lookup(&self, attributes: &F::Attributes) -> Result<Option<&MaterialVariant<F>>, CodecError> {
        let code = F::encode(attributes)?;
        Ok(self.get_by_code(code))
    }

    /// Finds the sibling of `variant` whose attributes differ by `change`.
    pub fn transition(
        &self,
        variant: &MaterialVariant<F>,
        change: impl FnOnce(&mut F::Attributes),
    ) -> Result<Option<&MaterialVariant<F>>, CodecError> {
        let mut attributes = *variant.attributes();
        change(&mut attributes);
        self.lookup(&attributes)
    }

    /// Every registered variant, sorted by code.
    pub fn variants(&self) -> &[MaterialVariant<F>] {
        &self.variants
    }

    pub fn codes(&self) -> impl Iterator<Item = VariantCode> + '_ {
        self.variants.iter().map(|v| v.code())
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Re-checks the registry invariants over every variant: codes round trip
    /// through the codec, codes are unique, and both indices point at the
    /// stored instance.
    pub fn verify(&self) -> Result<(), RegistryError> {
        let mut last: Option<VariantCode> = None;
        for variant in &self.variants {
            let code = variant.code();
            if last.map_or(false, |last| last >= code) {
                return Err(RegistryError::DuplicateCode {
                    family: F::NAMESPACED_ID,
                    code,
                    name: variant.name().to_owned(),
                    existing: self.get_by_code(code).map_or_else(String::new, |v| v.name().to_owned()),
                });
            }
            last = Some(code);

            let round_trips = F::decode(code).ok() == Some(*variant.attributes())
                && F::encode(variant.attributes()).ok() == Some(code);
            if !round_trips {
                return Err(RegistryError::RoundTrip {
                    family: F::NAMESPACED_ID,
                    code,
                    name: variant.name().to_owned(),
                });
            }

            let by_code = self.get_by_code(code);
            let by_name = self.get_by_name(&variant.name().to_uppercase());
            let indexed = by_code.map_or(false, |v| std::ptr::eq(v, variant))
                && by_name.map_or(false, |v| std::ptr::eq(v, variant));
            if !indexed {
                return Err(RegistryError::IndexMismatch {
                    family: F::NAMESPACED_ID,
                    name: variant.name().to_owned(),
                });
            }
        }
        Ok(())
    }
}

/// Registry for durability-keyed item families.
///
/// The registered set is frozen like any other registry, but codes inside
/// `1..MAX_DURABILITY` that were never registered are still legal: they are
/// synthesized on request as owned values. Only registered variants are
/// guaranteed to be shared instances.
pub struct DurabilityRegistry<F: DurableFamily> {
    registered: VariantRegistry<F>,
}

impl<F: DurableFamily> DurabilityRegistry<F> {
    pub fn new(registered: VariantRegistry<F>) -> DurabilityRegistry<F> {
        DurabilityRegistry { registered }
    }

    pub fn standard() -> Result<DurabilityRegistry<F>, RegistryError> {
        Ok(DurabilityRegistry::new(VariantRegistry::standard()?))
    }

    pub fn family_id(&self) -> u16 {
        F::ID
    }

    pub fn namespaced_id(&self) -> &'static str {
        F::NAMESPACED_ID
    }

    pub fn max_durability(&self) -> u16 {
        F::MAX_DURABILITY
    }

    pub fn get_by_code(&self, code: VariantCode) -> Option<Cow<'_, MaterialVariant<F>>> {
        if let Some(variant) = self.registered.get_by_code(code) {
            return Some(Cow::Borrowed(variant));
        }
        if code.get() == 0 || code.get() >= F::MAX_DURABILITY {
            return None;
        }
        let attributes = F::decode(code).ok()?;
        trace!("Synthesized {}:{}", F::NAMESPACED_ID, code);
        Some(Cow::Owned(MaterialVariant::new(
            F::variant_name(&attributes),
            code,
            attributes,
        )))
    }

    /// Name lookup only covers the registered variants.
    pub fn get_by_name(&self, name: &str) -> Option<&MaterialVariant<F>> {
        self.registered.get_by_name(name)
    }

    pub fn get_by_damage(&self, damage: Durability) -> Option<Cow<'_, MaterialVariant<F>>> {
        self.get_by_code(VariantCode(damage.get()))
    }

    pub fn is_registered(&self, code: VariantCode) -> bool {
        self.registered.get_by_code(code).is_some()
    }

    /// The registered variants only.
    pub fn variants(&self) -> &[MaterialVariant<F>] {
        self.registered.variants()
    }

    pub fn registered(&self) -> &VariantRegistry<F> {
        &self.registered
    }

    pub fn verify(&self) -> Result<(), RegistryError> {
        self.registered.verify()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Power;
    use crate::capability::{Directional, Powerable};
    use crate::family::button::{ButtonAttributes, StoneButton};
    use crate::family::redstone_wire::RedstoneWire;
    use crate::family::tool::DiamondPickaxe;
    use crate::family::torch::{Torch, TorchAttributes};
    use crate::shared::Direction;

    fn button(facing: Direction, powered: bool) -> ButtonAttributes {
        ButtonAttributes { facing, powered }
    }

    #[test]
    fn duplicate_code_is_rejected() {
        let mut builder = VariantRegistry::<StoneButton>::builder();
        builder.register("EAST", button(Direction::East, false)).unwrap();
        let err = builder
            .register("ALSO_EAST", button(Direction::East, false))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateCode {
                family: "minecraft:stone_button",
                code: VariantCode(1),
                name: "ALSO_EAST".to_owned(),
                existing: "EAST".to_owned(),
            }
        );
        assert_eq!(builder.len(), 1);
        let registry = builder.build();
        assert_eq!(registry.get_by_code(VariantCode(1)).unwrap().name(), "EAST");
    }

    #[test]
    fn duplicate_name_is_case_insensitive() {
        let mut builder = VariantRegistry::<StoneButton>::builder();
        builder.register("east", button(Direction::East, false)).unwrap();
        let err = builder.register("EAST", button(Direction::West, false)).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { .. }));
    }

    #[test]
    fn codec_rejection_surfaces_at_registration() {
        let mut builder = VariantRegistry::<Torch>::builder();
        builder.register("NORTH", TorchAttributes { facing: Direction::North }).unwrap();
        let err = builder
            .register("DOWN", TorchAttributes { facing: Direction::Down })
            .unwrap_err();
        assert!(matches!(err, RegistryError::Codec { source: CodecError::Unsupported { .. }, .. }));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn power_levels_register_in_order() {
        let mut builder = VariantRegistry::<RedstoneWire>::builder();
        builder.register("FULL", Power::MAX).unwrap();
        builder.register("OFF", Power::OFF).unwrap();
        let registry = builder.build();
        let names: Vec<&str> = registry.variants().iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["OFF", "FULL"]);
    }

    #[test]
    fn isolated_registry_only_knows_its_own_variants() {
        let mut builder = VariantRegistry::<StoneButton>::builder();
        builder.register("NORTH", button(Direction::North, false)).unwrap();
        let registry = builder.build();
        let north = registry.get_by_name("north").unwrap();
        assert_eq!(north.facing(), Direction::North);
        assert!(!north.powered());
        // Representable but never registered.
        assert_eq!(registry.transition(north, |a| a.powered = true), Ok(None));
        assert_eq!(registry.len(), 1);
        assert!(registry.verify().is_ok());
    }

    #[test]
    fn snapshot_is_sorted_and_complete() {
        let mut builder = VariantRegistry::<StoneButton>::builder();
        let mut registered = 0;
        for facing in [Direction::Up, Direction::Down, Direction::West] {
            for powered in [true, false] {
                builder.register(format!("{}_{}", facing, powered), button(facing, powered)).unwrap();
                registered += 1;
            }
        }
        let registry = builder.build();
        let codes: Vec<u16> = registry.codes().map(VariantCode::get).collect();
        assert_eq!(codes.len(), registered);
        assert_eq!(codes, vec![0, 2, 5, 8, 10, 13]);
        // The snapshot can be walked again with the same result.
        assert_eq!(registry.variants().len(), registry.variants().iter().count());
    }

    #[test]
    fn lookups_are_identity() {
        let registry = VariantRegistry::<StoneButton>::standard().unwrap();
        for variant in registry.variants() {
            let again = registry.get_by_code(variant.code()).unwrap();
            assert!(std::ptr::eq(variant, again));
        }
    }

    #[test]
    fn durability_synthesizes_inside_the_range() {
        let registry = DurabilityRegistry::<DiamondPickaxe>::standard().unwrap();
        assert_eq!(registry.variants().len(), 1);

        let fresh = registry.get_by_code(VariantCode(0)).unwrap();
        assert!(matches!(fresh, Cow::Borrowed(_)));
        assert_eq!(fresh.name(), "DIAMOND_PICKAXE");

        let worn = registry.get_by_code(VariantCode(100)).unwrap();
        assert!(matches!(worn, Cow::Owned(_)));
        assert_eq!(worn.name(), "DIAMOND_PICKAXE_100");
        assert_eq!(worn.attributes().get(), 100);
        assert!(!registry.is_registered(VariantCode(100)));

        assert!(registry.get_by_code(VariantCode(1560)).is_some());
        assert!(registry.get_by_code(VariantCode(1561)).is_none());
        assert!(registry.get_by_name("diamond_pickaxe_100").is_none());
    }
}
