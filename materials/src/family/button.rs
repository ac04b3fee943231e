use std::marker::PhantomData;

use crate::capability::{Attachable, Directional, Powerable};
use crate::codec::{AttributeCodec, Attributes, CodecError, Family, VariantCode, NIBBLE};
use crate::family::upper;
use crate::registry::VariantRegistry;
use crate::shared::Direction;
use crate::variant::MaterialVariant;

/// Constants that tell the button families apart. They share one codec.
pub trait ButtonKind: Send + Sync + 'static {
    const ID: u16;
    const NAMESPACED_ID: &'static str;
    const HARDNESS: f32;
}

pub enum Stone {}

impl ButtonKind for Stone {
    const ID: u16 = 77;
    const NAMESPACED_ID: &'static str = "minecraft:stone_button";
    const HARDNESS: f32 = 0.5;
}

pub enum Wood {}

impl ButtonKind for Wood {
    const ID: u16 = 143;
    const NAMESPACED_ID: &'static str = "minecraft:wooden_button";
    const HARDNESS: f32 = 0.5;
}

pub struct Button<K: ButtonKind> {
    kind: PhantomData<fn() -> K>,
}

pub type StoneButton = Button<Stone>;
pub type WoodenButton = Button<Wood>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonAttributes {
    pub facing: Direction,
    pub powered: bool,
}

impl Attributes for ButtonAttributes {
    fn properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("facing", self.facing.to_string()),
            ("powered", self.powered.to_string()),
        ]
    }
}

impl Directional for ButtonAttributes {
    fn facing(&self) -> Direction {
        self.facing
    }
}

impl Powerable for ButtonAttributes {
    fn powered(&self) -> bool {
        self.powered
    }
}

impl Attachable for ButtonAttributes {
    fn attached_face(&self) -> Direction {
        self.facing.opposite()
    }
}

impl<K: ButtonKind> Button<K> {
    pub const POWERED_FLAG: u16 = 0x8;

    /// Packs a facing and a pressed state into a button code.
    pub fn combine(facing: Direction, powered: bool) -> Result<VariantCode, CodecError> {
        Self::encode(&ButtonAttributes { facing, powered })
    }
}

impl<K: ButtonKind> AttributeCodec for Button<K> {
    type Attributes = ButtonAttributes;
    const CODE_BITS: u32 = NIBBLE;

    fn encode(attributes: &ButtonAttributes) -> Result<VariantCode, CodecError> {
        let facing = match attributes.facing {
            Direction::Down => 0,
            Direction::East => 1,
            Direction::West => 2,
            Direction::South => 3,
            Direction::North => 4,
            Direction::Up => 5,
        };
        let powered = if attributes.powered { Self::POWERED_FLAG } else { 0x0 };
        Ok(VariantCode(facing | powered))
    }

    fn decode(code: VariantCode) -> Result<ButtonAttributes, CodecError> {
        if !code.fits(NIBBLE) {
            return Err(CodecError::unknown_code::<Self>(code));
        }
        let facing = match code & 0x7 {
            0 => Direction::Down,
            1 => Direction::East,
            2 => Direction::West,
            3 => Direction::South,
            4 => Direction::North,
            5 => Direction::Up,
            _ => return Err(CodecError::unknown_code::<Self>(code)),
        };
        Ok(ButtonAttributes {
            facing,
            powered: code & Self::POWERED_FLAG != 0,
        })
    }
}

impl<K: ButtonKind> Family for Button<K> {
    const ID: u16 = K::ID;
    const NAMESPACED_ID: &'static str = K::NAMESPACED_ID;
    const HARDNESS: f32 = K::HARDNESS;
    const BLAST_RESISTANCE: f32 = 2.5;

    fn domain() -> Vec<ButtonAttributes> {
        let mut domain = vec![];
        for powered in [false, true] {
            for facing in Direction::all() {
                domain.push(ButtonAttributes { facing, powered });
            }
        }
        domain
    }

    fn variant_name(attributes: &ButtonAttributes) -> String {
        let name = upper(attributes.facing.as_string());
        if attributes.powered {
            name + "_POWERED"
        } else {
            name
        }
    }
}

impl<K: ButtonKind> VariantRegistry<Button<K>> {
    pub fn get_variant(&self, facing: Direction, powered: bool) -> Option<&MaterialVariant<Button<K>>> {
        // Every direction has a button code.
        self.lookup(&ButtonAttributes { facing, powered }).ok().flatten()
    }

    pub fn with_powered(&self, variant: &MaterialVariant<Button<K>>, powered: bool) -> Option<&MaterialVariant<Button<K>>> {
        self.get_variant(variant.attributes().facing, powered)
    }

    pub fn with_facing(&self, variant: &MaterialVariant<Button<K>>, facing: Direction) -> Option<&MaterialVariant<Button<K>>> {
        self.get_variant(facing, variant.attributes().powered)
    }
}
