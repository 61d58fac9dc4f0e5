/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/workspace
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
use std::fmt;
use std::ops::RangeInclusive;

pub const SPOT_COUNT: u8 = 40;
pub const LEVEL_A_LAST_SPOT: u8 = 20;

/// A warning is logged when fewer spots than this remain free.
pub const CAPACITY_WARNING_THRESHOLD: usize = 5;

pub const SPOT_RANGE: RangeInclusive<u8> = 1..=SPOT_COUNT;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Level {
    A,
    B,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// A numbered spot in the lot. Always within [`SPOT_RANGE`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Spot(u8);

impl Spot {
    pub fn new(value: u8) -> Option<Self> {
        SPOT_RANGE.contains(&value).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn level(&self) -> Level {
        if self.0 <= LEVEL_A_LAST_SPOT {
            Level::A
        } else {
            Level::B
        }
    }
}

impl fmt::Display for Spot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a vehicle is parked.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Assignment {
    pub level: Level,
    pub spot: Spot,
}

impl From<Spot> for Assignment {
    fn from(spot: Spot) -> Self {
        Self {
            level: spot.level(),
            spot,
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}, spot {}", self.level, self.spot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_follows_spot_range() {
        for value in SPOT_RANGE {
            let spot = Spot::new(value).expect("in range");
            let expected = if (1..=20).contains(&value) {
                Level::A
            } else {
                Level::B
            };
            assert_eq!(spot.level(), expected, "spot {value}");
        }
    }

    #[test]
    fn out_of_range_spots_are_rejected() {
        assert_eq!(Spot::new(0), None);
        assert_eq!(Spot::new(41), None);
        assert_eq!(Spot::new(40).map(|spot| spot.value()), Some(40));
    }
}
