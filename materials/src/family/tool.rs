//! Durability-keyed tools. Their codes are damage counters rather than
//! packed attributes, so the families are served by
//! [`DurabilityRegistry`](crate::registry::DurabilityRegistry).

use crate::attribute::Durability;
use crate::codec::{CodecError, DurableFamily, VariantCode};
use crate::variant::MaterialVariant;

durable_item! {
    DiamondPickaxe {
        id: 278,
        namespaced_id: "minecraft:diamond_pickaxe",
        base_name: "DIAMOND_PICKAXE",
        max_durability: 1561,
    }
}

durable_item! {
    IronSword {
        id: 267,
        namespaced_id: "minecraft:iron_sword",
        base_name: "IRON_SWORD",
        max_durability: 250,
    }
}

pub(crate) fn encode_durability<F: DurableFamily>(durability: Durability) -> Result<VariantCode, CodecError> {
    if durability.get() >= F::MAX_DURABILITY {
        return Err(CodecError::unsupported::<F>("damage", durability.get()));
    }
    Ok(VariantCode(durability.get()))
}

pub(crate) fn decode_durability<F: DurableFamily>(code: VariantCode) -> Result<Durability, CodecError> {
    if code.get() >= F::MAX_DURABILITY {
        return Err(CodecError::unknown_code::<F>(code));
    }
    Ok(Durability(code.get()))
}

pub(crate) fn durability_name<F: DurableFamily>(durability: Durability) -> String {
    if durability.is_damaged() {
        format!("{}_{}", F::BASE_NAME, durability.get())
    } else {
        F::BASE_NAME.to_owned()
    }
}

impl<F: DurableFamily> MaterialVariant<F> {
    pub fn durability(&self) -> Durability {
        *self.attributes()
    }

    /// Uses left before the item breaks.
    pub fn remaining_uses(&self) -> u16 {
        F::MAX_DURABILITY - self.attributes().get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::AttributeCodec;
    use crate::registry::DurabilityRegistry;

    #[test]
    fn codes_stop_below_max_durability() {
        assert_eq!(IronSword::encode(&Durability(249)), Ok(VariantCode(249)));
        assert!(IronSword::encode(&Durability(250)).is_err());
        assert!(IronSword::decode(VariantCode(250)).is_err());
    }

    #[test]
    fn wear_is_tracked_per_code() {
        let swords = DurabilityRegistry::<IronSword>::standard().unwrap();
        assert_eq!(swords.max_durability(), 250);
        let fresh = swords.get_by_name("iron_sword").unwrap();
        assert_eq!(fresh.remaining_uses(), 250);
        let worn = swords.get_by_damage(Durability(200)).unwrap();
        assert_eq!(worn.durability(), Durability(200));
        assert_eq!(worn.remaining_uses(), 50);
        assert_eq!(worn.key(), (267, VariantCode(200)));
        assert!(swords.get_by_damage(Durability(250)).is_none());
    }
}
