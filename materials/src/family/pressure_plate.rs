use crate::capability::Powerable;
use crate::codec::{AttributeCodec, Attributes, CodecError, Family, VariantCode, NIBBLE};
use crate::registry::VariantRegistry;
use crate::variant::MaterialVariant;

pub enum StonePressurePlate {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PressurePlateAttributes {
    pub powered: bool,
}

impl StonePressurePlate {
    pub const POWERED_FLAG: u16 = 0x1;
}

impl Attributes for PressurePlateAttributes {
    fn properties(&self) -> Vec<(&'static str, String)> {
        vec![("powered", self.powered.to_string())]
    }
}

impl Powerable for PressurePlateAttributes {
    fn powered(&self) -> bool {
        self.powered
    }
}

impl AttributeCodec for StonePressurePlate {
    type Attributes = PressurePlateAttributes;
    const CODE_BITS: u32 = NIBBLE;

    fn encode(attributes: &PressurePlateAttributes) -> Result<VariantCode, CodecError> {
        Ok(VariantCode(if attributes.powered { StonePressurePlate::POWERED_FLAG } else { 0x0 }))
    }

    fn decode(code: VariantCode) -> Result<PressurePlateAttributes, CodecError> {
        match code.get() {
            0x0 => Ok(PressurePlateAttributes { powered: false }),
            StonePressurePlate::POWERED_FLAG => Ok(PressurePlateAttributes { powered: true }),
            _ => Err(CodecError::unknown_code::<StonePressurePlate>(code)),
        }
    }
}

impl Family for StonePressurePlate {
    const ID: u16 = 70;
    const NAMESPACED_ID: &'static str = "minecraft:stone_pressure_plate";
    const HARDNESS: f32 = 0.5;
    const BLAST_RESISTANCE: f32 = 2.5;

    fn domain() -> Vec<PressurePlateAttributes> {
        vec![
            PressurePlateAttributes { powered: false },
            PressurePlateAttributes { powered: true },
        ]
    }

    fn variant_name(attributes: &PressurePlateAttributes) -> String {
        let name = if attributes.powered { "PRESSED" } else { "RELEASED" };
        name.to_owned()
    }
}

impl VariantRegistry<StonePressurePlate> {
    pub fn with_powered(
        &self,
        variant: &MaterialVariant<StonePressurePlate>,
        powered: bool,
    ) -> Option<&MaterialVariant<StonePressurePlate>> {
        self.transition(variant, |a| a.powered = powered).ok().flatten()
    }
}
