//! Accessor contracts a family opts into.
//!
//! A family implements these on its attribute struct; the blanket impls
//! below make them available on every variant of that family.

use crate::codec::Family;
use crate::shared::{Axis, Direction};
use crate::variant::MaterialVariant;

pub trait Directional {
    fn facing(&self) -> Direction;
}

pub trait Powerable {
    fn powered(&self) -> bool;
}

pub trait Attachable {
    /// Side of the variant's own block that rests against its support.
    fn attached_face(&self) -> Direction;
}

pub trait Rotatable {
    fn axis(&self) -> Axis;
}

pub trait ChangeablePower {
    fn power_strength(&self) -> u8;
}

impl<F: Family> Directional for MaterialVariant<F>
where
    F::Attributes: Directional,
{
    fn facing(&self) -> Direction {
        self.attributes().facing()
    }
}

impl<F: Family> Powerable for MaterialVariant<F>
where
    F::Attributes: Powerable,
{
    fn powered(&self) -> bool {
        self.attributes().powered()
    }
}

impl<F: Family> Attachable for MaterialVariant<F>
where
    F::Attributes: Attachable,
{
    fn attached_face(&self) -> Direction {
        self.attributes().attached_face()
    }
}

impl<F: Family> Rotatable for MaterialVariant<F>
where
    F::Attributes: Rotatable,
{
    fn axis(&self) -> Axis {
        self.attributes().axis()
    }
}

impl<F: Family> ChangeablePower for MaterialVariant<F>
where
    F::Attributes: ChangeablePower,
{
    fn power_strength(&self) -> u8 {
        self.attributes().power_strength()
    }
}
