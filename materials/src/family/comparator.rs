use crate::attribute::ComparatorMode;
use crate::capability::{Directional, Powerable};
use crate::codec::{AttributeCodec, Attributes, CodecError, Family, VariantCode, NIBBLE};
use crate::family::upper;
use crate::registry::VariantRegistry;
use crate::shared::Direction;
use crate::variant::MaterialVariant;

pub enum Comparator {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComparatorAttributes {
    pub facing: Direction,
    pub mode: ComparatorMode,
    pub powered: bool,
}

impl Comparator {
    pub const SUBTRACT_FLAG: u16 = 0x4;
    pub const POWERED_FLAG: u16 = 0x8;
}

impl Attributes for ComparatorAttributes {
    fn properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("facing", self.facing.to_string()),
            ("mode", self.mode.to_string()),
            ("powered", self.powered.to_string()),
        ]
    }
}

impl Directional for ComparatorAttributes {
    fn facing(&self) -> Direction {
        self.facing
    }
}

impl Powerable for ComparatorAttributes {
    fn powered(&self) -> bool {
        self.powered
    }
}

impl AttributeCodec for Comparator {
    type Attributes = ComparatorAttributes;
    const CODE_BITS: u32 = NIBBLE;

    fn encode(attributes: &ComparatorAttributes) -> Result<VariantCode, CodecError> {
        let facing = match attributes.facing {
            Direction::North => 0x0,
            Direction::East => 0x1,
            Direction::South => 0x2,
            Direction::West => 0x3,
            other => return Err(CodecError::unsupported::<Comparator>("facing", other)),
        };
        let mode = match attributes.mode {
            ComparatorMode::Compare => 0x0,
            ComparatorMode::Subtract => Comparator::SUBTRACT_FLAG,
        };
        let powered = if attributes.powered { Comparator::POWERED_FLAG } else { 0x0 };
        Ok(VariantCode(facing | mode | powered))
    }

    fn decode(code: VariantCode) -> Result<ComparatorAttributes, CodecError> {
        if !code.fits(NIBBLE) {
            return Err(CodecError::unknown_code::<Comparator>(code));
        }
        let facing = match code & 0x3 {
            0x0 => Direction::North,
            0x1 => Direction::East,
            0x2 => Direction::South,
            _ => Direction::West,
        };
        let mode = if code & Comparator::SUBTRACT_FLAG != 0 {
            ComparatorMode::Subtract
        } else {
            ComparatorMode::Compare
        };
        Ok(ComparatorAttributes {
            facing,
            mode,
            powered: code & Comparator::POWERED_FLAG != 0,
        })
    }
}

impl Family for Comparator {
    const ID: u16 = 149;
    const NAMESPACED_ID: &'static str = "minecraft:unpowered_comparator";
    const HARDNESS: f32 = 0.0;
    const BLAST_RESISTANCE: f32 = 0.0;

    fn domain() -> Vec<ComparatorAttributes> {
        let mut domain = vec![];
        for powered in [false, true] {
            for &mode in ComparatorMode::ALL {
                for facing in [Direction::North, Direction::East, Direction::South, Direction::West] {
                    domain.push(ComparatorAttributes { facing, mode, powered });
                }
            }
        }
        domain
    }

    fn variant_name(attributes: &ComparatorAttributes) -> String {
        let name = format!("{}_{}", upper(attributes.facing.as_string()), upper(attributes.mode.as_string()));
        if attributes.powered {
            name + "_POWERED"
        } else {
            name
        }
    }
}

impl VariantRegistry<Comparator> {
    pub fn with_mode(&self, variant: &MaterialVariant<Comparator>, mode: ComparatorMode) -> Option<&MaterialVariant<Comparator>> {
        self.transition(variant, |a| a.mode = mode).ok().flatten()
    }

    pub fn with_powered(&self, variant: &MaterialVariant<Comparator>, powered: bool) -> Option<&MaterialVariant<Comparator>> {
        self.transition(variant, |a| a.powered = powered).ok().flatten()
    }

    pub fn with_facing(
        &self,
        variant: &MaterialVariant<Comparator>,
        facing: Direction,
    ) -> Result<Option<&MaterialVariant<Comparator>>, CodecError> {
        self.transition(variant, |a| a.facing = facing)
    }
}

impl MaterialVariant<Comparator> {
    pub fn mode(&self) -> ComparatorMode {
        self.attributes().mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_compose() {
        let comparators = VariantRegistry::<Comparator>::standard().unwrap();
        let plain = comparators.get_by_name("SOUTH_COMPARE").unwrap();
        assert_eq!(plain.code(), VariantCode(2));
        let subtract = comparators.with_mode(plain, ComparatorMode::Subtract).unwrap();
        let lit = comparators.with_powered(subtract, true).unwrap();
        assert_eq!(lit.code(), VariantCode(2 | Comparator::SUBTRACT_FLAG | Comparator::POWERED_FLAG));
        assert_eq!(lit.mode(), ComparatorMode::Subtract);
        assert_eq!(lit.facing(), Direction::South);
        assert!(lit.powered());
        assert_eq!(lit.name(), "SOUTH_SUBTRACT_POWERED");
    }

    #[test]
    fn every_nibble_is_a_comparator() {
        let comparators = VariantRegistry::<Comparator>::standard().unwrap();
        assert_eq!(comparators.codes().count(), 16);
        assert!(Comparator::decode(VariantCode(16)).is_err());
        let north = comparators.get_by_code(VariantCode(0)).unwrap();
        assert!(comparators.with_facing(north, Direction::Down).is_err());
    }
}
