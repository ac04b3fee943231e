//! Legacy material variant tables.
//!
//! Each family maps a legacy content id and a small numeric code (the data
//! value) to a typed attribute tuple and back. Families are defined once,
//! registered into frozen per-family registries, and looked up by code, by
//! case-insensitive name, or by changing one attribute of an existing
//! variant.

#![allow(clippy::identity_op)]

extern crate steven_shared as shared;

#[macro_use]
mod macros;

pub mod attribute;
pub mod capability;
pub mod catalog;
pub mod codec;
pub mod family;
pub mod registry;
pub mod variant;

pub use crate::shared::{Axis, Direction};
pub use self::attribute::{
    AttachedFace, AttributeError, ComparatorMode, DamageStage, Delay, Durability, Power, WoodVariant,
};
pub use self::capability::{Attachable, ChangeablePower, Directional, Powerable, Rotatable};
pub use self::catalog::{Catalog, FamilyView, VariantInfo, VANILLA};
pub use self::codec::{AttributeCodec, Attributes, CodecError, DurableFamily, Family, VariantCode};
pub use self::registry::{DurabilityRegistry, RegistryBuilder, RegistryError, VariantRegistry};
pub use self::variant::MaterialVariant;
