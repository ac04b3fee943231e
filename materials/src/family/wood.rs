use crate::attribute::WoodVariant;
use crate::capability::Rotatable;
use crate::codec::{AttributeCodec, Attributes, CodecError, Family, VariantCode, NIBBLE};
use crate::family::upper;
use crate::registry::VariantRegistry;
use crate::shared::Axis;
use crate::variant::MaterialVariant;

/// Logs of the first four wood species.
pub enum Log {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogAttributes {
    pub wood: WoodVariant,
    pub axis: Axis,
}

impl Attributes for LogAttributes {
    fn properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("variant", self.wood.to_string()),
            ("axis", self.axis.to_string()),
        ]
    }
}

impl Rotatable for LogAttributes {
    fn axis(&self) -> Axis {
        self.axis
    }
}

impl AttributeCodec for Log {
    type Attributes = LogAttributes;
    const CODE_BITS: u32 = NIBBLE;

    fn encode(attributes: &LogAttributes) -> Result<VariantCode, CodecError> {
        let axis = match attributes.axis {
            Axis::Y => 0x0,
            Axis::X => 0x4,
            Axis::Z => 0x8,
            Axis::None => 0xC,
        };
        Ok(VariantCode(attributes.wood.data() | axis))
    }

    fn decode(code: VariantCode) -> Result<LogAttributes, CodecError> {
        if !code.fits(NIBBLE) {
            return Err(CodecError::unknown_code::<Log>(code));
        }
        let wood = WoodVariant::from_data(code & 0x3).ok_or_else(|| CodecError::unknown_code::<Log>(code))?;
        let axis = match code & 0xC {
            0x0 => Axis::Y,
            0x4 => Axis::X,
            0x8 => Axis::Z,
            _ => Axis::None,
        };
        Ok(LogAttributes { wood, axis })
    }
}

impl Family for Log {
    const ID: u16 = 17;
    const NAMESPACED_ID: &'static str = "minecraft:log";
    const HARDNESS: f32 = 2.0;
    const BLAST_RESISTANCE: f32 = 10.0;

    fn domain() -> Vec<LogAttributes> {
        let mut domain = vec![];
        for axis in Axis::all() {
            for &wood in WoodVariant::ALL {
                domain.push(LogAttributes { wood, axis });
            }
        }
        domain
    }

    fn variant_name(attributes: &LogAttributes) -> String {
        format!("{}_{}", upper(attributes.wood.as_string()), upper(attributes.axis.as_string()))
    }
}

impl VariantRegistry<Log> {
    pub fn with_axis(&self, variant: &MaterialVariant<Log>, axis: Axis) -> Option<&MaterialVariant<Log>> {
        self.transition(variant, |a| a.axis = axis).ok().flatten()
    }

    pub fn with_wood(&self, variant: &MaterialVariant<Log>, wood: WoodVariant) -> Option<&MaterialVariant<Log>> {
        self.transition(variant, |a| a.wood = wood).ok().flatten()
    }
}

impl MaterialVariant<Log> {
    pub fn wood(&self) -> WoodVariant {
        self.attributes().wood
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_and_axis_are_independent() {
        let logs = VariantRegistry::<Log>::standard().unwrap();
        assert_eq!(logs.len(), 16);
        let birch = logs.get_by_name("birch_y").unwrap();
        assert_eq!(birch.code(), VariantCode(2));
        let sideways = logs.with_axis(birch, Axis::Z).unwrap();
        assert_eq!(sideways.code(), VariantCode(0xA));
        assert_eq!(sideways.wood(), WoodVariant::Birch);
        let bark = logs.with_axis(sideways, Axis::None).unwrap();
        assert_eq!(bark.axis(), Axis::None);
        let jungle = logs.with_wood(bark, WoodVariant::Jungle).unwrap();
        assert_eq!(jungle.code(), VariantCode(0xF));
        assert_eq!(jungle.name(), "JUNGLE_NONE");
    }
}
