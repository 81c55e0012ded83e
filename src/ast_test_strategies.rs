use proptest::prelude::*;
use crate::{DiceRoll, DiceSegment, Modifier, Operator, RollStatement};


pub(crate) fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

pub(crate) fn dice_roll_strategy() -> impl Strategy<Value = DiceRoll> {
    (1..=100u32, 1..=100u32)
        .prop_map(|(count, sides)| DiceRoll::new(count, sides).unwrap())
}

pub(crate) fn modifier_strategy() -> impl Strategy<Value = Modifier> {
    (operator_strategy(), 1..=1000u32)
        .prop_map(|(operator, value)| Modifier { operator, value })
}

pub(crate) fn damage_type_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2,8}".prop_filter("the keyword is never a damage type", |word| word != "roll")
}

pub(crate) fn segment_strategy() -> impl Strategy<Value = DiceSegment> {
    (
        prop::collection::vec(dice_roll_strategy(), 1..=3),
        prop::option::of(modifier_strategy()),
        prop::option::of(damage_type_strategy())
    ).prop_map(|(rolls, modifier, damage_type)| DiceSegment { rolls, modifier, damage_type })
}

// A closed segment ends in a modifier or a damage type, so its boundary
// survives a render and reparse. Open segments are only safe in final
// position; anything after them merges in.
pub(crate) fn closed_segment_strategy() -> impl Strategy<Value = DiceSegment> {
    (
        prop::collection::vec(dice_roll_strategy(), 1..=3),
        prop_oneof![
            (modifier_strategy().prop_map(Some), prop::option::of(damage_type_strategy())),
            (prop::option::of(modifier_strategy()), damage_type_strategy().prop_map(Some)),
        ]
    ).prop_map(|(rolls, (modifier, damage_type))| DiceSegment { rolls, modifier, damage_type })
}

pub(crate) fn roundtrip_statement_strategy() -> impl Strategy<Value = RollStatement> {
    (
        prop::collection::vec(closed_segment_strategy(), 0..=2),
        segment_strategy()
    ).prop_map(|(mut segments, last)| {
        segments.push(last);
        RollStatement { segments }
    })
}
