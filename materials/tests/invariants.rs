use std::collections::HashSet;
use std::thread;

use proptest::prelude::*;
use steven_materials::family::{
    Anvil, AnvilAttributes, ButtonAttributes, LeverAttributes, LogAttributes, RepeaterAttributes, StoneButton, Torch,
    TorchAttributes,
};
use steven_materials::{
    AttachedFace, AttributeCodec, Axis, CodecError, ComparatorMode, DamageStage, Delay, Direction, Family,
    VariantCode, VariantRegistry, WoodVariant, VANILLA,
};

/// Applies every change to every variant and checks that the transition
/// either finds nothing or lands on the code of the substituted tuple.
fn check_transitions<F: Family>(registry: &VariantRegistry<F>, changes: &[Change<F::Attributes>]) {
    for variant in registry.variants() {
        for change in changes {
            let mut expected = *variant.attributes();
            change(&mut expected);
            match registry.transition(variant, |a| change(a)) {
                Ok(Some(next)) => {
                    assert_eq!(Ok(next.code()), F::encode(&expected), "{} -> {:?}", variant, expected);
                    assert_eq!(next.attributes(), &expected);
                }
                Ok(None) => assert!(registry.lookup(&expected).unwrap().is_none()),
                Err(err) => assert_eq!(F::encode(&expected), Err(err)),
            }
        }
    }
}

#[test]
fn every_family_round_trips() {
    for family in VANILLA.families() {
        let infos = family.describe_all();
        assert_eq!(infos.len(), family.len());
        let mut codes = HashSet::new();
        for info in &infos {
            assert!(codes.insert(info.code), "{} reuses code {}", family.namespaced_id(), info.code);
            assert_eq!(family.describe(info.code).as_ref(), Some(info));
            assert_eq!(family.describe_by_name(&info.name.to_lowercase()).as_ref(), Some(info));
            assert_eq!(family.describe_by_name(&info.name.to_uppercase()).as_ref(), Some(info));
        }
        family.verify().unwrap();
    }
}

#[test]
fn snapshots_are_sorted_by_code() {
    for family in VANILLA.families() {
        let codes: Vec<VariantCode> = family.describe_all().iter().map(|info| info.code).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(codes, sorted, "{}", family.namespaced_id());
    }
}

#[test]
fn registered_variants_are_singletons() {
    for variant in VANILLA.anvil.variants() {
        let again = VANILLA.anvil.get_by_code(variant.code()).unwrap();
        let by_name = VANILLA.anvil.get_by_name(variant.name()).unwrap();
        assert!(std::ptr::eq(variant, again));
        assert!(std::ptr::eq(variant, by_name));
        assert_eq!(Anvil::decode(variant.code()).as_ref(), Ok(variant.attributes()));
    }
}

type Change<A> = Box<dyn Fn(&mut A)>;

#[test]
fn torch_transitions() {
    let mut changes: Vec<Change<TorchAttributes>> = vec![];
    for facing in Direction::all() {
        changes.push(Box::new(move |a: &mut TorchAttributes| a.facing = facing));
    }
    check_transitions(&VANILLA.torch, &changes);
}

#[test]
fn button_transitions() {
    let mut changes: Vec<Change<ButtonAttributes>> = vec![
        Box::new(|a: &mut ButtonAttributes| a.powered = true),
        Box::new(|a: &mut ButtonAttributes| a.powered = false),
    ];
    for facing in Direction::all() {
        changes.push(Box::new(move |a: &mut ButtonAttributes| a.facing = facing));
    }
    check_transitions(&VANILLA.stone_button, &changes);
}

#[test]
fn lever_transitions() {
    let mut changes: Vec<Change<LeverAttributes>> = vec![Box::new(|a: &mut LeverAttributes| a.powered = !a.powered)];
    for &face in AttachedFace::ALL {
        for facing in Direction::all() {
            changes.push(Box::new(move |a: &mut LeverAttributes| {
                a.face = face;
                a.facing = facing;
            }));
        }
    }
    check_transitions(&VANILLA.lever, &changes);
}

#[test]
fn repeater_transitions() {
    let mut changes: Vec<Change<RepeaterAttributes>> = vec![];
    for delay in Delay::all() {
        changes.push(Box::new(move |a: &mut RepeaterAttributes| a.delay = delay));
    }
    for facing in Direction::all() {
        changes.push(Box::new(move |a: &mut RepeaterAttributes| a.facing = facing));
    }
    check_transitions(&VANILLA.repeater, &changes);
}

#[test]
fn anvil_transitions() {
    let mut changes: Vec<Change<AnvilAttributes>> = vec![Box::new(|a: &mut AnvilAttributes| a.rotated = !a.rotated)];
    for &damage in DamageStage::ALL {
        changes.push(Box::new(move |a: &mut AnvilAttributes| a.damage = damage));
    }
    for axis in Axis::all() {
        changes.push(Box::new(move |a: &mut AnvilAttributes| a.axis = axis));
    }
    check_transitions(&VANILLA.anvil, &changes);
}

#[test]
fn log_transitions() {
    let mut changes: Vec<Change<LogAttributes>> = vec![];
    for &wood in WoodVariant::ALL {
        changes.push(Box::new(move |a: &mut LogAttributes| a.wood = wood));
    }
    for axis in Axis::all() {
        changes.push(Box::new(move |a: &mut LogAttributes| a.axis = axis));
    }
    check_transitions(&VANILLA.log, &changes);
}

#[test]
fn comparator_mode_round_trip() {
    let comparators = &VANILLA.comparator;
    for variant in comparators.variants() {
        for &mode in ComparatorMode::ALL {
            let next = comparators.with_mode(variant, mode).unwrap();
            assert_eq!(next.mode(), mode);
            assert_eq!(next.attributes().facing, variant.attributes().facing);
        }
    }
}

#[test]
fn unsupported_encodes_are_errors_not_substitutes() {
    let err = Torch::encode(&TorchAttributes { facing: Direction::Down }).unwrap_err();
    assert!(matches!(err, CodecError::Unsupported { family: "minecraft:torch", attribute: "facing", .. }));
}

#[test]
fn concurrent_readers_share_one_catalog() {
    let catalog = &*VANILLA;
    thread::scope(|scope| {
        for worker in 0..8u16 {
            scope.spawn(move || {
                for code in 0..16 {
                    let code = VariantCode((code + worker) % 16);
                    let wire = catalog.redstone_wire.get_by_code(code).unwrap();
                    assert_eq!(wire.code(), code);
                    let info = catalog.describe(55, code).unwrap();
                    assert_eq!(info.name, wire.name());
                    let _ = catalog.describe(50, code);
                }
            });
        }
    });
}

#[test]
fn variant_info_serializes() {
    let info = VANILLA.describe(69, VariantCode(9)).unwrap();
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["family_id"], 69);
    assert_eq!(json["namespaced_id"], "minecraft:lever");
    assert_eq!(json["name"], "WALL_EAST_POWERED");
    assert_eq!(json["code"], 9);
    assert_eq!(json["registered"], true);
}

proptest! {
    #[test]
    fn durability_codes_resolve_inside_the_range(code in any::<u16>()) {
        let found = VANILLA.diamond_pickaxe.get_by_code(VariantCode(code));
        prop_assert_eq!(found.is_some(), code < 1561);
        if let Some(variant) = found {
            prop_assert_eq!(variant.code(), VariantCode(code));
            prop_assert_eq!(variant.durability().get(), code);
        }
    }

    #[test]
    fn nibble_codes_decode_or_miss(code in 0u16..16) {
        let code = VariantCode(code);
        let decoded = StoneButton::decode(code);
        let registered = VANILLA.stone_button.get_by_code(code);
        prop_assert_eq!(decoded.is_ok(), registered.is_some());
    }
}
