//! The contract between a family's attribute tuple and its numeric code.

use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr};

use serde::Serialize;
use thiserror::Error;

use crate::attribute::{AttributeError, Durability};

/// Width of the legacy block data value.
pub const NIBBLE: u32 = 4;
/// Width used by item families whose code is a damage counter.
pub const WIDE: u32 = 16;

/// The packed wire/storage form of one attribute combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VariantCode(pub u16);

impl VariantCode {
    pub fn get(self) -> u16 {
        self.0
    }

    /// Whether the code can be stored in `bits` bits.
    pub fn fits(self, bits: u32) -> bool {
        bits >= 16 || self.0 >> bits == 0
    }
}

impl From<u16> for VariantCode {
    fn from(code: u16) -> VariantCode {
        VariantCode(code)
    }
}

impl BitOr<u16> for VariantCode {
    type Output = VariantCode;

    fn bitor(self, flag: u16) -> VariantCode {
        VariantCode(self.0 | flag)
    }
}

impl BitAnd<u16> for VariantCode {
    type Output = u16;

    fn bitand(self, mask: u16) -> u16 {
        self.0 & mask
    }
}

impl fmt::Display for VariantCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("{family} has no code for {attribute}={value}")]
    Unsupported {
        family: &'static str,
        attribute: &'static str,
        value: String,
    },
    #[error("{family} has no variant with code {code}")]
    UnknownCode {
        family: &'static str,
        code: VariantCode,
    },
    #[error(transparent)]
    Attribute(#[from] AttributeError),
}

impl CodecError {
    pub fn unsupported<F: Family>(attribute: &'static str, value: impl fmt::Display) -> CodecError {
        CodecError::Unsupported {
            family: F::NAMESPACED_ID,
            attribute,
            value: value.to_string(),
        }
    }

    pub fn unknown_code<F: Family>(code: VariantCode) -> CodecError {
        CodecError::UnknownCode {
            family: F::NAMESPACED_ID,
            code,
        }
    }
}

/// A family's decoded attribute tuple.
pub trait Attributes: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// `name=value` pairs in declaration order, used for display and dumps.
    fn properties(&self) -> Vec<(&'static str, String)>;
}

/// Packs and unpacks a family's attributes.
///
/// `encode` must reject every attribute combination the family has no bit
/// pattern for and `decode` must reject every code that does not name a
/// supported combination; neither may substitute a nearby valid value.
pub trait AttributeCodec {
    type Attributes: Attributes;
    /// Number of low bits the code may occupy.
    const CODE_BITS: u32;

    fn encode(attributes: &Self::Attributes) -> Result<VariantCode, CodecError>;
    fn decode(code: VariantCode) -> Result<Self::Attributes, CodecError>;
}

/// A complete family: its codec plus the constants shared by every variant.
///
/// Family types are never instantiated; they only name the family at the
/// type level.
pub trait Family: AttributeCodec + Sized + Send + Sync + 'static {
    /// Legacy numeric content id.
    const ID: u16;
    const NAMESPACED_ID: &'static str;
    const HARDNESS: f32;
    const BLAST_RESISTANCE: f32;

    /// Every attribute combination the family registers.
    fn domain() -> Vec<Self::Attributes>;
    /// Enum-style display name of a variant, unique within the family.
    fn variant_name(attributes: &Self::Attributes) -> String;
}

/// An item family whose code is its damage counter. Codes in
/// `1..MAX_DURABILITY` are legal even when no variant was registered for them.
pub trait DurableFamily: Family<Attributes = Durability> {
    const BASE_NAME: &'static str;
    const MAX_DURABILITY: u16;
}
