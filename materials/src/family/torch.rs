use crate::capability::{Attachable, Directional};
use crate::codec::{AttributeCodec, Attributes, CodecError, Family, VariantCode, NIBBLE};
use crate::family::upper;
use crate::registry::VariantRegistry;
use crate::shared::Direction;
use crate::variant::MaterialVariant;

pub enum Torch {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TorchAttributes {
    pub facing: Direction,
}

impl Attributes for TorchAttributes {
    fn properties(&self) -> Vec<(&'static str, String)> {
        vec![("facing", self.facing.to_string())]
    }
}

impl Directional for TorchAttributes {
    fn facing(&self) -> Direction {
        self.facing
    }
}

impl Attachable for TorchAttributes {
    fn attached_face(&self) -> Direction {
        self.facing.opposite()
    }
}

impl AttributeCodec for Torch {
    type Attributes = TorchAttributes;
    const CODE_BITS: u32 = NIBBLE;

    fn encode(attributes: &TorchAttributes) -> Result<VariantCode, CodecError> {
        Ok(VariantCode(match attributes.facing {
            Direction::East => 1,
            Direction::West => 2,
            Direction::South => 3,
            Direction::North => 4,
            Direction::Up => 5,
            Direction::Down => return Err(CodecError::unsupported::<Torch>("facing", Direction::Down)),
        }))
    }

    fn decode(code: VariantCode) -> Result<TorchAttributes, CodecError> {
        let facing = match code.get() {
            1 => Direction::East,
            2 => Direction::West,
            3 => Direction::South,
            4 => Direction::North,
            5 => Direction::Up,
            _ => return Err(CodecError::unknown_code::<Torch>(code)),
        };
        Ok(TorchAttributes { facing })
    }
}

impl Family for Torch {
    const ID: u16 = 50;
    const NAMESPACED_ID: &'static str = "minecraft:torch";
    const HARDNESS: f32 = 0.0;
    const BLAST_RESISTANCE: f32 = 0.0;

    fn domain() -> Vec<TorchAttributes> {
        [Direction::East, Direction::West, Direction::South, Direction::North, Direction::Up]
            .iter()
            .map(|&facing| TorchAttributes { facing })
            .collect()
    }

    fn variant_name(attributes: &TorchAttributes) -> String {
        upper(attributes.facing.as_string())
    }
}

impl VariantRegistry<Torch> {
    pub fn get_by_facing(&self, facing: Direction) -> Result<Option<&MaterialVariant<Torch>>, CodecError> {
        self.lookup(&TorchAttributes { facing })
    }

    pub fn with_facing(
        &self,
        variant: &MaterialVariant<Torch>,
        facing: Direction,
    ) -> Result<Option<&MaterialVariant<Torch>>, CodecError> {
        self.transition(variant, |a| a.facing = facing)
    }
}
