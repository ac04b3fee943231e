//! Attribute domains shared between families.
//!
//! Every type here is closed: bounded integers can only be built through
//! their checked constructors and enumerations list their legal values
//! explicitly. A family picks the attributes it needs and its codec decides
//! how each one is laid out in the variant code.

use std::fmt;

use thiserror::Error;

use crate::capability::{ChangeablePower, Powerable};
use crate::codec::Attributes;
use crate::shared::Direction;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("{attribute} must be within {min}..={max}, got {value}")]
    OutOfRange {
        attribute: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// Redstone power level, `0..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Power(u8);

impl Power {
    pub const OFF: Power = Power(0);
    pub const MAX: Power = Power(15);

    pub fn new(level: u8) -> Result<Power, AttributeError> {
        if level > Power::MAX.0 {
            return Err(AttributeError::OutOfRange {
                attribute: "power",
                value: u32::from(level),
                min: 0,
                max: u32::from(Power::MAX.0),
            });
        }
        Ok(Power(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Power> {
        (Power::OFF.0..=Power::MAX.0).map(Power)
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Attributes for Power {
    fn properties(&self) -> Vec<(&'static str, String)> {
        vec![("power", self.to_string())]
    }
}

impl ChangeablePower for Power {
    fn power_strength(&self) -> u8 {
        self.0
    }
}

impl Powerable for Power {
    fn powered(&self) -> bool {
        self.0 > 0
    }
}

/// Repeater delay in redstone ticks, `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Delay(u8);

impl Delay {
    pub const MIN: Delay = Delay(1);
    pub const MAX: Delay = Delay(4);

    pub fn new(ticks: u8) -> Result<Delay, AttributeError> {
        if ticks < Delay::MIN.0 || ticks > Delay::MAX.0 {
            return Err(AttributeError::OutOfRange {
                attribute: "delay",
                value: u32::from(ticks),
                min: u32::from(Delay::MIN.0),
                max: u32::from(Delay::MAX.0),
            });
        }
        Ok(Delay(ticks))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Delay> {
        (Delay::MIN.0..=Delay::MAX.0).map(Delay)
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Damage accumulated by a tool or weapon. The upper bound belongs to the
/// item family, so it is checked by the family codec rather than here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Durability(pub u16);

impl Durability {
    pub const UNDAMAGED: Durability = Durability(0);

    pub fn get(self) -> u16 {
        self.0
    }

    pub fn is_damaged(self) -> bool {
        self.0 > 0
    }
}

impl Attributes for Durability {
    fn properties(&self) -> Vec<(&'static str, String)> {
        vec![("damage", self.0.to_string())]
    }
}

attribute_enum! {
    /// Wear stage of an anvil.
    pub enum DamageStage {
        Undamaged = (0, "undamaged"),
        SlightlyDamaged = (1, "slightly_damaged"),
        VeryDamaged = (2, "very_damaged"),
    }
}

attribute_enum! {
    pub enum ComparatorMode {
        Compare = (0, "compare"),
        Subtract = (1, "subtract"),
    }
}

attribute_enum! {
    /// Wood species that fit in the two low bits of a log code.
    pub enum WoodVariant {
        Oak = (0, "oak"),
        Spruce = (1, "spruce"),
        Birch = (2, "birch"),
        Jungle = (3, "jungle"),
    }
}

attribute_enum! {
    /// Which kind of surface a lever hangs from.
    pub enum AttachedFace {
        Floor = (0, "floor"),
        Wall = (1, "wall"),
        Ceiling = (2, "ceiling"),
    }
}

impl AttachedFace {
    /// Legacy lever orientation for a surface and facing. Floor and ceiling
    /// levers only distinguish the east-west and north-south alignments.
    pub fn data_with_facing(self, facing: Direction) -> Option<u16> {
        Some(match (self, facing) {
            (AttachedFace::Ceiling, Direction::East) => 0,
            (AttachedFace::Wall, Direction::East) => 1,
            (AttachedFace::Wall, Direction::West) => 2,
            (AttachedFace::Wall, Direction::South) => 3,
            (AttachedFace::Wall, Direction::North) => 4,
            (AttachedFace::Floor, Direction::South) => 5,
            (AttachedFace::Floor, Direction::East) => 6,
            (AttachedFace::Ceiling, Direction::South) => 7,
            _ => return None,
        })
    }

    pub fn from_data_with_facing(data: u16) -> Option<(AttachedFace, Direction)> {
        Some(match data {
            0 => (AttachedFace::Ceiling, Direction::East),
            1 => (AttachedFace::Wall, Direction::East),
            2 => (AttachedFace::Wall, Direction::West),
            3 => (AttachedFace::Wall, Direction::South),
            4 => (AttachedFace::Wall, Direction::North),
            5 => (AttachedFace::Floor, Direction::South),
            6 => (AttachedFace::Floor, Direction::East),
            7 => (AttachedFace::Ceiling, Direction::South),
            _ => return None,
        })
    }

    /// The side of the lever's own block that touches its support.
    pub fn support_side(self, facing: Direction) -> Direction {
        match self {
            AttachedFace::Floor => Direction::Down,
            AttachedFace::Ceiling => Direction::Up,
            AttachedFace::Wall => facing.opposite(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn power_accepts_exactly_one_nibble(level in any::<u8>()) {
            prop_assert_eq!(Power::new(level).is_ok(), level <= 15);
        }

        #[test]
        fn delay_accepts_one_to_four(ticks in any::<u8>()) {
            prop_assert_eq!(Delay::new(ticks).is_ok(), (1..=4).contains(&ticks));
        }
    }

    #[test]
    fn out_of_range_reports_bounds() {
        let err = Delay::new(0).unwrap_err();
        assert_eq!(
            err,
            AttributeError::OutOfRange { attribute: "delay", value: 0, min: 1, max: 4 }
        );
        assert_eq!(err.to_string(), "delay must be within 1..=4, got 0");
    }

    #[test]
    fn power_capabilities() {
        assert!(!Power::OFF.powered());
        assert!(Power::new(1).unwrap().powered());
        assert_eq!(Power::MAX.power_strength(), 15);
        assert_eq!(Power::all().count(), 16);
    }

    #[test]
    fn enum_tables_are_bijective() {
        for stage in DamageStage::ALL {
            assert_eq!(DamageStage::from_data(stage.data()), Some(*stage));
            assert_eq!(DamageStage::from_string(stage.as_string()), Some(*stage));
        }
        for wood in WoodVariant::ALL {
            assert_eq!(WoodVariant::from_data(wood.data()), Some(*wood));
        }
        assert_eq!(DamageStage::from_data(3), None);
        assert_eq!(WoodVariant::from_string("acacia"), None);
    }

    #[test]
    fn lever_orientation_table_inverts() {
        let mut seen = 0;
        for face in AttachedFace::ALL {
            for facing in Direction::all() {
                if let Some(data) = face.data_with_facing(facing) {
                    assert_eq!(AttachedFace::from_data_with_facing(data), Some((*face, facing)));
                    seen += 1;
                }
            }
        }
        assert_eq!(seen, 8);
        assert_eq!(AttachedFace::Floor.data_with_facing(Direction::North), None);
        assert_eq!(AttachedFace::from_data_with_facing(8), None);
    }

    #[test]
    fn support_side() {
        assert_eq!(AttachedFace::Floor.support_side(Direction::East), Direction::Down);
        assert_eq!(AttachedFace::Ceiling.support_side(Direction::South), Direction::Up);
        assert_eq!(AttachedFace::Wall.support_side(Direction::North), Direction::South);
    }
}
