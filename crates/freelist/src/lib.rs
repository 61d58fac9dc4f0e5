/*----------------------------------------------------------------------------------------------------------
 *  Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/workspace
 *  Licensed under the MIT License. See LICENSE in the project root for license information.
 *--------------------------------------------------------------------------------------------------------*/
use std::fmt;
use std::ops::RangeInclusive;

#[derive(Debug, Eq, PartialEq)]
pub enum FreeListError {
    OutOfRange(u8),
    Duplicate(u8),
}

impl fmt::Display for FreeListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(number) => write!(f, "number {number} is outside of the free list range"),
            Self::Duplicate(number) => write!(f, "number {number} is listed as free more than once"),
        }
    }
}

impl std::error::Error for FreeListError {} // it implements Debug and Display

/// Pool of free numbers within an inclusive range.
///
/// `allocate` always hands out the lowest free number, so the allocation order
/// is deterministic. Numbers are never given back to the pool.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FreeList {
    range: RangeInclusive<u8>,
    free_numbers: Vec<u8>, // sorted descending, lowest number last
}

impl FreeList {
    pub fn new(range: RangeInclusive<u8>) -> Self {
        let free_numbers = range.clone().rev().collect();
        Self {
            range,
            free_numbers,
        }
    }

    /// Rebuilds a pool from a previously stored list of free numbers.
    pub fn from_numbers(
        range: RangeInclusive<u8>,
        numbers: impl IntoIterator<Item = u8>,
    ) -> Result<Self, FreeListError> {
        let mut free_numbers: Vec<u8> = Vec::new();
        for number in numbers {
            if !range.contains(&number) {
                return Err(FreeListError::OutOfRange(number));
            }
            free_numbers.push(number);
        }

        free_numbers.sort_unstable_by(|a, b| b.cmp(a));
        if let Some(pair) = free_numbers.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(FreeListError::Duplicate(pair[0]));
        }

        Ok(Self {
            range,
            free_numbers,
        })
    }

    pub fn allocate(&mut self) -> Option<u8> {
        self.free_numbers.pop()
    }

    pub fn contains(&self, number: u8) -> bool {
        self.free_numbers
            .binary_search_by(|probe| number.cmp(probe))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.free_numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free_numbers.is_empty()
    }

    pub fn range(&self) -> &RangeInclusive<u8> {
        &self.range
    }

    /// Free numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.free_numbers.iter().rev().copied()
    }
}
