use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::codec::{Attributes, Family, VariantCode};

/// One immutable attribute combination of family `F`.
///
/// Variants are owned by their registry and handed out by reference, so two
/// lookups of the same code yield the same instance. Equality compares the
/// code only: the family is part of the type.
pub struct MaterialVariant<F: Family> {
    name: String,
    code: VariantCode,
    attributes: F::Attributes,
    family: PhantomData<fn() -> F>,
}

impl<F: Family> MaterialVariant<F> {
    pub(crate) fn new(name: String, code: VariantCode, attributes: F::Attributes) -> MaterialVariant<F> {
        MaterialVariant {
            name,
            code,
            attributes,
            family: PhantomData,
        }
    }

    pub fn family_id(&self) -> u16 {
        F::ID
    }

    pub fn namespaced_id(&self) -> &'static str {
        F::NAMESPACED_ID
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> VariantCode {
        self.code
    }

    pub fn attributes(&self) -> &F::Attributes {
        &self.attributes
    }

    pub fn hardness(&self) -> f32 {
        F::HARDNESS
    }

    pub fn blast_resistance(&self) -> f32 {
        F::BLAST_RESISTANCE
    }

    /// The `(family id, code)` pair that storage and the wire carry.
    pub fn key(&self) -> (u16, VariantCode) {
        (F::ID, self.code)
    }

    pub fn properties(&self) -> Vec<(&'static str, String)> {
        self.attributes.properties()
    }
}

impl<F: Family> Clone for MaterialVariant<F> {
    fn clone(&self) -> MaterialVariant<F> {
        MaterialVariant {
            name: self.name.clone(),
            code: self.code,
            attributes: self.attributes,
            family: PhantomData,
        }
    }
}

impl<F: Family> PartialEq for MaterialVariant<F> {
    fn eq(&self, other: &MaterialVariant<F>) -> bool {
        self.code == other.code
    }
}

impl<F: Family> Eq for MaterialVariant<F> {}

impl<F: Family> Hash for MaterialVariant<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        F::ID.hash(state);
        self.code.hash(state);
    }
}

impl<F: Family> fmt::Debug for MaterialVariant<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MaterialVariant")
            .field("family", &F::NAMESPACED_ID)
            .field("name", &self.name)
            .field("code", &self.code)
            .field("attributes", &self.attributes)
            .finish()
    }
}

impl<F: Family> fmt::Display for MaterialVariant<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{} {}", F::NAMESPACED_ID, self.code, self.name)
    }
}
