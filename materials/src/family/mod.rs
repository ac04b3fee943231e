//! Concrete families: each one declares its attribute struct, its codec and
//! the typed transitions callers use instead of raw attribute edits.

pub mod anvil;
pub mod button;
pub mod comparator;
pub mod daylight_detector;
pub mod lever;
pub mod piston;
pub mod pressure_plate;
pub mod redstone_wire;
pub mod repeater;
pub mod tool;
pub mod torch;
pub mod wood;

pub use self::anvil::{Anvil, AnvilAttributes};
pub use self::button::{Button, ButtonAttributes, ButtonKind, StoneButton, WoodenButton};
pub use self::comparator::{Comparator, ComparatorAttributes};
pub use self::daylight_detector::DaylightDetector;
pub use self::lever::{Lever, LeverAttributes};
pub use self::piston::{Piston, PistonAttributes};
pub use self::pressure_plate::{PressurePlateAttributes, StonePressurePlate};
pub use self::redstone_wire::RedstoneWire;
pub use self::repeater::{Repeater, RepeaterAttributes};
pub use self::tool::{DiamondPickaxe, IronSword};
pub use self::torch::{Torch, TorchAttributes};
pub use self::wood::{Log, LogAttributes};

/// Upper-case form of a lowercase attribute name, for variant names.
pub(crate) fn upper(val: &str) -> String {
    val.to_uppercase()
}
