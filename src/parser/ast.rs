use std::fmt::Display;

use crate::Error;


/// The parse result: one full command, an ordered sequence of segments
/// evaluated left to right by the downstream roller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollStatement {
    /// Segments in command order, never empty.
    pub segments: Vec<DiceSegment>,
}

/// One additive unit of a roll: a run of dice, an optional flat modifier
/// and an optional damage tag ("2d6+1d4-2(fire)").
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceSegment {
    /// Dice rolls summed together, never empty.
    pub rolls: Vec<DiceRoll>,
    /// Flat arithmetic adjustment applied once per segment.
    pub modifier: Option<Modifier>,
    /// Free-text tag such as "fire", uninterpreted by the parser.
    pub damage_type: Option<String>,
}

/// A quantity of identical dice, "2d6" style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceRoll {
    /// How many dice to roll, at least 1.
    pub count: u32,
    /// Sides per die, at least 1.
    pub sides: u32,
}

/// A flat modifier: operator plus constant, "+3" style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    /// How the constant combines with the segment's dice total.
    pub operator: Operator,
    /// The constant itself.
    pub value: u32,
}

/// Arithmetic operator attached to a flat modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl DiceRoll {
    /// Builds a dice roll, rejecting zero dice or zero sides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroValue`] when `count` or `sides` is 0.
    pub fn new(count: u32, sides: u32) -> Result<Self, Error> {
        if count == 0 || sides == 0 {
            return Err(Error::ZeroValue);
        }

        Ok(Self { count, sides })
    }
}

impl Operator {
    pub(crate) fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Subtract => write!(f, "-"),
            Operator::Multiply => write!(f, "*"),
            Operator::Divide => write!(f, "/"),
        }
    }
}

impl Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

impl Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.operator, self.value)
    }
}

impl Display for DiceSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, roll) in self.rolls.iter().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            write!(f, "{roll}")?;
        }

        if let Some(modifier) = &self.modifier {
            write!(f, "{modifier}")?;
        }

        if let Some(damage_type) = &self.damage_type {
            write!(f, "({damage_type})")?;
        }

        Ok(())
    }
}

impl Display for RollStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "roll ")?;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            write!(f, "{segment}")?;
        }

        Ok(())
    }
}
