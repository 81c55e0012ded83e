use proptest::prelude::*;


pub(crate) fn dice_str_strategy() -> impl Strategy<Value = String> {
    (prop::option::of(1u32..=100), "[dD]", 1u32..=100)
        .prop_map(|(count, d, sides)| match count {
            None => format!("{}{}", d, sides),
            Some(count) => format!("{}{}{}", count, d, sides)
        })
}

pub(crate) fn modifier_str_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("+"), Just("-"), Just("*"), Just("/")],
        1u32..=1000
    ).prop_map(|(operator, value)| format!("{}{}", operator, value))
}

pub(crate) fn damage_str_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2,8}"
        .prop_filter("tags containing the keyword suppress prefixing", |word| {
            !word.contains("roll")
        })
        .prop_map(|word| format!("({})", word))
}

pub(crate) fn segment_str_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(dice_str_strategy(), 1..=3),
        prop::option::of(modifier_str_strategy()),
        prop::option::of(damage_str_strategy())
    ).prop_map(|(rolls, modifier, damage_type)| {
        let mut segment = rolls.join("+");
        if let Some(modifier) = modifier {
            segment.push_str(&modifier);
        }
        if let Some(damage_type) = damage_type {
            segment.push_str(&damage_type);
        }
        segment
    })
}

pub(crate) fn separator_strategy() -> impl Strategy<Value = String> {
    (
        "[ ]{0,2}",
        prop_oneof![Just("+"), Just("-"), Just("*"), Just("/")],
        "[ ]{0,2}"
    ).prop_map(|(before, operator, after)| format!("{}{}{}", before, operator, after))
}

pub(crate) fn command_body_strategy() -> impl Strategy<Value = String> {
    (
        segment_str_strategy(),
        prop::collection::vec((separator_strategy(), segment_str_strategy()), 0..=2)
    ).prop_map(|(first, rest)| {
        let mut body = first;
        for (separator, segment) in rest {
            body.push_str(&separator);
            body.push_str(&segment);
        }
        body
    })
}

pub(crate) fn command_strategy() -> impl Strategy<Value = String> {
    ("[rR][oO][lL][lL]", command_body_strategy())
        .prop_map(|(keyword, body)| format!("{} {}", keyword, body))
}
