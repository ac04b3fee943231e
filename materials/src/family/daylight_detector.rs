use crate::attribute::Power;
use crate::codec::{AttributeCodec, CodecError, Family, VariantCode, NIBBLE};
use crate::registry::VariantRegistry;
use crate::variant::MaterialVariant;

/// Emits a power level that follows the sky light. The code is the level.
pub enum DaylightDetector {}

impl AttributeCodec for DaylightDetector {
    type Attributes = Power;
    const CODE_BITS: u32 = NIBBLE;

    fn encode(power: &Power) -> Result<VariantCode, CodecError> {
        Ok(VariantCode(u16::from(power.get())))
    }

    fn decode(code: VariantCode) -> Result<Power, CodecError> {
        u8::try_from(code.get())
            .ok()
            .and_then(|level| Power::new(level).ok())
            .ok_or_else(|| CodecError::unknown_code::<DaylightDetector>(code))
    }
}

impl Family for DaylightDetector {
    const ID: u16 = 151;
    const NAMESPACED_ID: &'static str = "minecraft:daylight_detector";
    const HARDNESS: f32 = 0.2;
    const BLAST_RESISTANCE: f32 = 1.0;

    fn domain() -> Vec<Power> {
        Power::all().collect()
    }

    fn variant_name(power: &Power) -> String {
        format!("LEVEL_{}", power)
    }
}

impl VariantRegistry<DaylightDetector> {
    pub fn get_by_power_level(&self, level: u8) -> Result<Option<&MaterialVariant<DaylightDetector>>, CodecError> {
        self.lookup(&Power::new(level)?)
    }

    pub fn with_power(
        &self,
        variant: &MaterialVariant<DaylightDetector>,
        power: Power,
    ) -> Option<&MaterialVariant<DaylightDetector>> {
        self.transition(variant, |p| *p = power).ok().flatten()
    }
}
