use crate::capability::{Directional, Powerable};
use crate::codec::{AttributeCodec, Attributes, CodecError, Family, VariantCode, NIBBLE};
use crate::family::upper;
use crate::registry::VariantRegistry;
use crate::shared::Direction;
use crate::variant::MaterialVariant;

/// Piston base. A piston is powered exactly when its arm is extended.
pub enum Piston {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PistonAttributes {
    pub facing: Direction,
    pub extended: bool,
}

impl Piston {
    pub const EXTENDED_FLAG: u16 = 0x8;
}

impl Attributes for PistonAttributes {
    fn properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("facing", self.facing.to_string()),
            ("extended", self.extended.to_string()),
        ]
    }
}

impl Directional for PistonAttributes {
    fn facing(&self) -> Direction {
        self.facing
    }
}

impl Powerable for PistonAttributes {
    fn powered(&self) -> bool {
        self.extended
    }
}

impl AttributeCodec for Piston {
    type Attributes = PistonAttributes;
    const CODE_BITS: u32 = NIBBLE;

    fn encode(attributes: &PistonAttributes) -> Result<VariantCode, CodecError> {
        let facing = match attributes.facing {
            Direction::Down => 0,
            Direction::Up => 1,
            Direction::North => 2,
            Direction::South => 3,
            Direction::West => 4,
            Direction::East => 5,
        };
        let extended = if attributes.extended { Piston::EXTENDED_FLAG } else { 0x0 };
        Ok(VariantCode(facing | extended))
    }

    fn decode(code: VariantCode) -> Result<PistonAttributes, CodecError> {
        if !code.fits(NIBBLE) {
            return Err(CodecError::unknown_code::<Piston>(code));
        }
        let facing = match code & 0x7 {
            0 => Direction::Down,
            1 => Direction::Up,
            2 => Direction::North,
            3 => Direction::South,
            4 => Direction::West,
            5 => Direction::East,
            _ => return Err(CodecError::unknown_code::<Piston>(code)),
        };
        Ok(PistonAttributes {
            facing,
            extended: code & Piston::EXTENDED_FLAG != 0,
        })
    }
}

impl Family for Piston {
    const ID: u16 = 33;
    const NAMESPACED_ID: &'static str = "minecraft:piston";
    const HARDNESS: f32 = 0.5;
    const BLAST_RESISTANCE: f32 = 2.5;

    fn domain() -> Vec<PistonAttributes> {
        let mut domain = vec![];
        for extended in [false, true] {
            for facing in Direction::all() {
                domain.push(PistonAttributes { facing, extended });
            }
        }
        domain
    }

    fn variant_name(attributes: &PistonAttributes) -> String {
        let name = upper(attributes.facing.as_string());
        if attributes.extended {
            name + "_EXTENDED"
        } else {
            name
        }
    }
}

impl VariantRegistry<Piston> {
    pub fn with_extended(&self, variant: &MaterialVariant<Piston>, extended: bool) -> Option<&MaterialVariant<Piston>> {
        self.transition(variant, |a| a.extended = extended).ok().flatten()
    }

    pub fn with_facing(&self, variant: &MaterialVariant<Piston>, facing: Direction) -> Option<&MaterialVariant<Piston>> {
        self.transition(variant, |a| a.facing = facing).ok().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extending_keeps_facing() {
        let pistons = VariantRegistry::<Piston>::standard().unwrap();
        let west = pistons.get_by_name("west").unwrap();
        assert_eq!(west.code(), VariantCode(4));
        assert!(!west.powered());
        let pushed = pistons.with_extended(west, true).unwrap();
        assert_eq!(pushed.code(), VariantCode(12));
        assert_eq!(pushed.facing(), Direction::West);
        assert!(pushed.powered());
        let turned = pistons.with_facing(pushed, Direction::Up).unwrap();
        assert_eq!(turned.name(), "UP_EXTENDED");
    }

    #[test]
    fn two_unused_facings_per_state() {
        let pistons = VariantRegistry::<Piston>::standard().unwrap();
        assert_eq!(pistons.len(), 12);
        for gap in [6, 7, 14, 15] {
            assert!(Piston::decode(VariantCode(gap)).is_err());
        }
    }
}
