use crate::attribute::AttachedFace;
use crate::capability::{Attachable, Directional, Powerable};
use crate::codec::{AttributeCodec, Attributes, CodecError, Family, VariantCode, NIBBLE};
use crate::family::upper;
use crate::registry::VariantRegistry;
use crate::shared::Direction;
use crate::variant::MaterialVariant;

pub enum Lever {}

/// For floor and ceiling levers `facing` is the alignment of the handle,
/// either east or south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeverAttributes {
    pub face: AttachedFace,
    pub facing: Direction,
    pub powered: bool,
}

impl Lever {
    pub const POWERED_FLAG: u16 = 0x8;
}

impl Attributes for LeverAttributes {
    fn properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("face", self.face.to_string()),
            ("facing", self.facing.to_string()),
            ("powered", self.powered.to_string()),
        ]
    }
}

impl Directional for LeverAttributes {
    fn facing(&self) -> Direction {
        self.facing
    }
}

impl Attachable for LeverAttributes {
    fn attached_face(&self) -> Direction {
        self.face.support_side(self.facing)
    }
}

impl Powerable for LeverAttributes {
    fn powered(&self) -> bool {
        self.powered
    }
}

impl AttributeCodec for Lever {
    type Attributes = LeverAttributes;
    const CODE_BITS: u32 = NIBBLE;

    fn encode(attributes: &LeverAttributes) -> Result<VariantCode, CodecError> {
        let orientation = match attributes.face.data_with_facing(attributes.facing) {
            Some(data) => data,
            None => {
                return Err(CodecError::unsupported::<Lever>(
                    "facing",
                    format!("{} on {}", attributes.facing, attributes.face),
                ))
            }
        };
        let powered = if attributes.powered { Lever::POWERED_FLAG } else { 0x0 };
        Ok(VariantCode(orientation | powered))
    }

    fn decode(code: VariantCode) -> Result<LeverAttributes, CodecError> {
        if !code.fits(NIBBLE) {
            return Err(CodecError::unknown_code::<Lever>(code));
        }
        let (face, facing) = AttachedFace::from_data_with_facing(code & 0x7)
            .ok_or_else(|| CodecError::unknown_code::<Lever>(code))?;
        Ok(LeverAttributes {
            face,
            facing,
            powered: code & Lever::POWERED_FLAG != 0,
        })
    }
}

impl Family for Lever {
    const ID: u16 = 69;
    const NAMESPACED_ID: &'static str = "minecraft:lever";
    const HARDNESS: f32 = 0.5;
    const BLAST_RESISTANCE: f32 = 2.5;

    fn domain() -> Vec<LeverAttributes> {
        let mut domain = vec![];
        for powered in [false, true] {
            for data in 0..8 {
                if let Some((face, facing)) = AttachedFace::from_data_with_facing(data) {
                    domain.push(LeverAttributes { face, facing, powered });
                }
            }
        }
        domain
    }

    fn variant_name(attributes: &LeverAttributes) -> String {
        let name = format!("{}_{}", upper(attributes.face.as_string()), upper(attributes.facing.as_string()));
        if attributes.powered {
            name + "_POWERED"
        } else {
            name
        }
    }
}

impl VariantRegistry<Lever> {
    pub fn get_variant(
        &self,
        face: AttachedFace,
        facing: Direction,
        powered: bool,
    ) -> Result<Option<&MaterialVariant<Lever>>, CodecError> {
        self.lookup(&LeverAttributes { face, facing, powered })
    }

    /// Flipping the handle never changes how the lever is mounted.
    pub fn with_powered(&self, variant: &MaterialVariant<Lever>, powered: bool) -> Option<&MaterialVariant<Lever>> {
        self.transition(variant, |a| a.powered = powered).ok().flatten()
    }

    pub fn with_orientation(
        &self,
        variant: &MaterialVariant<Lever>,
        face: AttachedFace,
        facing: Direction,
    ) -> Result<Option<&MaterialVariant<Lever>>, CodecError> {
        self.transition(variant, |a| {
            a.face = face;
            a.facing = facing;
        })
    }
}

impl MaterialVariant<Lever> {
    pub fn face(&self) -> AttachedFace {
        self.attributes().face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_every_nibble() {
        let levers = VariantRegistry::<Lever>::standard().unwrap();
        assert_eq!(levers.len(), 16);
        for code in 0..16 {
            assert!(levers.get_by_code(VariantCode(code)).is_some());
        }
        assert_eq!(Lever::decode(VariantCode(16)), Err(CodecError::unknown_code::<Lever>(VariantCode(16))));
    }

    #[test]
    fn wall_lever_hangs_on_the_opposite_side() {
        let levers = VariantRegistry::<Lever>::standard().unwrap();
        let lever = levers
            .get_variant(AttachedFace::Wall, Direction::North, false)
            .unwrap()
            .unwrap();
        assert_eq!(lever.code(), VariantCode(4));
        assert_eq!(lever.attached_face(), Direction::South);
        assert_eq!(lever.name(), "WALL_NORTH");

        let on = levers.with_powered(lever, true).unwrap();
        assert_eq!(on.code(), VariantCode(12));
        assert_eq!(on.face(), AttachedFace::Wall);
        assert_eq!(on.facing(), Direction::North);
        assert!(on.powered());
    }

    #[test]
    fn floor_lever_cannot_point_north() {
        let levers = VariantRegistry::<Lever>::standard().unwrap();
        let floor = levers.get_by_name("floor_south").unwrap();
        assert_eq!(floor.attached_face(), Direction::Down);
        assert!(levers
            .with_orientation(floor, AttachedFace::Floor, Direction::North)
            .is_err());
        let ceiling = levers
            .with_orientation(floor, AttachedFace::Ceiling, Direction::South)
            .unwrap()
            .unwrap();
        assert_eq!(ceiling.code(), VariantCode(7));
    }
}
