use crate::attribute::DamageStage;
use crate::capability::Rotatable;
use crate::codec::{AttributeCodec, Attributes, CodecError, Family, VariantCode, NIBBLE};
use crate::family::upper;
use crate::registry::VariantRegistry;
use crate::shared::Axis;
use crate::variant::MaterialVariant;

pub enum Anvil {}

/// An anvil lies along the X or Z axis; `rotated` flips it end for end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnvilAttributes {
    pub axis: Axis,
    pub rotated: bool,
    pub damage: DamageStage,
}

impl Anvil {
    pub const ROTATED_FLAG: u16 = 0x2;
}

impl Attributes for AnvilAttributes {
    fn properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("axis", self.axis.to_string()),
            ("rotated", self.rotated.to_string()),
            ("damage", self.damage.to_string()),
        ]
    }
}

impl Rotatable for AnvilAttributes {
    fn axis(&self) -> Axis {
        self.axis
    }
}

impl AttributeCodec for Anvil {
    type Attributes = AnvilAttributes;
    const CODE_BITS: u32 = NIBBLE;

    fn encode(attributes: &AnvilAttributes) -> Result<VariantCode, CodecError> {
        let axis = match attributes.axis {
            Axis::Z => 0x0,
            Axis::X => 0x1,
            other => return Err(CodecError::unsupported::<Anvil>("axis", other)),
        };
        let rotated = if attributes.rotated { Anvil::ROTATED_FLAG } else { 0x0 };
        let damage = match attributes.damage {
            DamageStage::Undamaged => 0x0,
            DamageStage::SlightlyDamaged => 0x4,
            DamageStage::VeryDamaged => 0x8,
        };
        Ok(VariantCode(axis | rotated | damage))
    }

    fn decode(code: VariantCode) -> Result<AnvilAttributes, CodecError> {
        if !code.fits(NIBBLE) {
            return Err(CodecError::unknown_code::<Anvil>(code));
        }
        let damage = match code & 0xC {
            0x0 => DamageStage::Undamaged,
            0x4 => DamageStage::SlightlyDamaged,
            0x8 => DamageStage::VeryDamaged,
            _ => return Err(CodecError::unknown_code::<Anvil>(code)),
        };
        let axis = if code & 0x1 != 0 { Axis::X } else { Axis::Z };
        Ok(AnvilAttributes {
            axis,
            rotated: code & Anvil::ROTATED_FLAG != 0,
            damage,
        })
    }
}

impl Family for Anvil {
    const ID: u16 = 145;
    const NAMESPACED_ID: &'static str = "minecraft:anvil";
    const HARDNESS: f32 = 5.0;
    const BLAST_RESISTANCE: f32 = 6000.0;

    fn domain() -> Vec<AnvilAttributes> {
        let mut domain = vec![];
        for &damage in DamageStage::ALL {
            for rotated in [false, true] {
                for axis in [Axis::Z, Axis::X] {
                    domain.push(AnvilAttributes { axis, rotated, damage });
                }
            }
        }
        domain
    }

    fn variant_name(attributes: &AnvilAttributes) -> String {
        let mut name = format!("{}_{}", upper(attributes.damage.as_string()), upper(attributes.axis.as_string()));
        if attributes.rotated {
            name.push_str("_ROTATED");
        }
        name
    }
}

impl VariantRegistry<Anvil> {
    /// The same anvil, worn down (or repaired) to `damage`.
    pub fn get_by_damage(&self, variant: &MaterialVariant<Anvil>, damage: DamageStage) -> Option<&MaterialVariant<Anvil>> {
        self.transition(variant, |a| a.damage = damage).ok().flatten()
    }

    pub fn with_rotation(
        &self,
        variant: &MaterialVariant<Anvil>,
        axis: Axis,
        rotated: bool,
    ) -> Result<Option<&MaterialVariant<Anvil>>, CodecError> {
        self.transition(variant, |a| {
            a.axis = axis;
            a.rotated = rotated;
        })
    }
}

impl MaterialVariant<Anvil> {
    pub fn damage(&self) -> DamageStage {
        self.attributes().damage
    }

    pub fn rotated(&self) -> bool {
        self.attributes().rotated
    }
}
