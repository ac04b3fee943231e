use crate::attribute::Power;
use crate::codec::{AttributeCodec, CodecError, Family, VariantCode, NIBBLE};
use crate::registry::VariantRegistry;
use crate::variant::MaterialVariant;

/// Redstone dust. The whole code is the carried power level.
pub enum RedstoneWire {}

impl AttributeCodec for RedstoneWire {
    type Attributes = Power;
    const CODE_BITS: u32 = NIBBLE;

    fn encode(power: &Power) -> Result<VariantCode, CodecError> {
        Ok(VariantCode(u16::from(power.get())))
    }

    fn decode(code: VariantCode) -> Result<Power, CodecError> {
        u8::try_from(code.get())
            .ok()
            .and_then(|level| Power::new(level).ok())
            .ok_or_else(|| CodecError::unknown_code::<RedstoneWire>(code))
    }
}

impl Family for RedstoneWire {
    const ID: u16 = 55;
    const NAMESPACED_ID: &'static str = "minecraft:redstone_wire";
    const HARDNESS: f32 = 0.0;
    const BLAST_RESISTANCE: f32 = 0.0;

    fn domain() -> Vec<Power> {
        Power::all().collect()
    }

    fn variant_name(power: &Power) -> String {
        if *power == Power::OFF {
            "OFF".to_owned()
        } else {
            format!("POWER_{}", power)
        }
    }
}

impl VariantRegistry<RedstoneWire> {
    pub fn get_by_power_level(&self, level: u8) -> Result<Option<&MaterialVariant<RedstoneWire>>, CodecError> {
        self.lookup(&Power::new(level)?)
    }

    pub fn with_power(&self, variant: &MaterialVariant<RedstoneWire>, power: Power) -> Option<&MaterialVariant<RedstoneWire>> {
        self.transition(variant, |p| *p = power).ok().flatten()
    }
}
