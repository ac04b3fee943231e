use crate::attribute::Delay;
use crate::capability::Directional;
use crate::codec::{AttributeCodec, Attributes, CodecError, Family, VariantCode, NIBBLE};
use crate::family::upper;
use crate::registry::VariantRegistry;
use crate::shared::Direction;
use crate::variant::MaterialVariant;

/// Unpowered redstone repeater. The powered repeater is a separate legacy id.
pub enum Repeater {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepeaterAttributes {
    pub facing: Direction,
    pub delay: Delay,
}

impl Attributes for RepeaterAttributes {
    fn properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("facing", self.facing.to_string()),
            ("delay", self.delay.to_string()),
        ]
    }
}

impl Directional for RepeaterAttributes {
    fn facing(&self) -> Direction {
        self.facing
    }
}

impl AttributeCodec for Repeater {
    type Attributes = RepeaterAttributes;
    const CODE_BITS: u32 = NIBBLE;

    fn encode(attributes: &RepeaterAttributes) -> Result<VariantCode, CodecError> {
        let facing = match attributes.facing {
            Direction::North => 0x0,
            Direction::East => 0x1,
            Direction::South => 0x2,
            Direction::West => 0x3,
            other => return Err(CodecError::unsupported::<Repeater>("facing", other)),
        };
        let delay = match attributes.delay.get() {
            1 => 0x0,
            2 => 0x4,
            3 => 0x8,
            4 => 0xC,
            other => return Err(CodecError::unsupported::<Repeater>("delay", other)),
        };
        Ok(VariantCode(facing | delay))
    }

    fn decode(code: VariantCode) -> Result<RepeaterAttributes, CodecError> {
        if !code.fits(NIBBLE) {
            return Err(CodecError::unknown_code::<Repeater>(code));
        }
        let facing = match code & 0x3 {
            0x0 => Direction::North,
            0x1 => Direction::East,
            0x2 => Direction::South,
            _ => Direction::West,
        };
        let ticks = match code & 0xC {
            0x0 => 1,
            0x4 => 2,
            0x8 => 3,
            _ => 4,
        };
        Ok(RepeaterAttributes {
            facing,
            delay: Delay::new(ticks)?,
        })
    }
}

impl Family for Repeater {
    const ID: u16 = 93;
    const NAMESPACED_ID: &'static str = "minecraft:unpowered_repeater";
    const HARDNESS: f32 = 0.0;
    const BLAST_RESISTANCE: f32 = 0.0;

    fn domain() -> Vec<RepeaterAttributes> {
        let mut domain = vec![];
        for delay in Delay::all() {
            for facing in [Direction::North, Direction::East, Direction::South, Direction::West] {
                domain.push(RepeaterAttributes { facing, delay });
            }
        }
        domain
    }

    fn variant_name(attributes: &RepeaterAttributes) -> String {
        format!("{}_DELAY_{}", upper(attributes.facing.as_string()), attributes.delay)
    }
}

impl VariantRegistry<Repeater> {
    pub fn with_delay(&self, variant: &MaterialVariant<Repeater>, delay: Delay) -> Option<&MaterialVariant<Repeater>> {
        self.transition(variant, |a| a.delay = delay).ok().flatten()
    }

    pub fn with_facing(
        &self,
        variant: &MaterialVariant<Repeater>,
        facing: Direction,
    ) -> Result<Option<&MaterialVariant<Repeater>>, CodecError> {
        self.transition(variant, |a| a.facing = facing)
    }
}

impl MaterialVariant<Repeater> {
    pub fn delay(&self) -> Delay {
        self.attributes().delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_occupies_the_high_bits() {
        let repeaters = VariantRegistry::<Repeater>::standard().unwrap();
        assert_eq!(repeaters.len(), 16);
        let east = repeaters.get_by_name("east_delay_1").unwrap();
        assert_eq!(east.code(), VariantCode(1));
        let slow = repeaters.with_delay(east, Delay::MAX).unwrap();
        assert_eq!(slow.code(), VariantCode(0xD));
        assert_eq!(slow.delay().get(), 4);
        assert_eq!(slow.facing(), Direction::East);
    }

    #[test]
    fn vertical_facing_is_rejected() {
        let repeaters = VariantRegistry::<Repeater>::standard().unwrap();
        let north = repeaters.get_by_code(VariantCode(0)).unwrap();
        assert!(matches!(
            repeaters.with_facing(north, Direction::Up),
            Err(CodecError::Unsupported { attribute: "facing", .. })
        ));
        assert_eq!(repeaters.with_facing(north, Direction::West).unwrap().map(|v| v.code()), Some(VariantCode(3)));
    }
}
