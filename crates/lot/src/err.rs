/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/workspace
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
use crate::spot::Assignment;
use crate::store::StoreError;
use err_rs::{ErrorLevel, ErrorLevelProvider};
use parkade_freelist::FreeListError;
use std::fmt;

#[derive(Debug)]
pub enum LotError {
    LotFull,
    AlreadyParked(String),
    NotFound(String),
    /// The spot was assigned in memory, but the new state could not be stored.
    Persistence {
        assignment: Assignment,
        reason: StoreError,
    },
}

impl ErrorLevelProvider for LotError {
    fn error_level(&self) -> ErrorLevel {
        match self {
            Self::LotFull => ErrorLevel::Warning,
            Self::AlreadyParked(_) => ErrorLevel::Info,
            Self::NotFound(_) => ErrorLevel::Info,
            Self::Persistence { .. } => ErrorLevel::Critical,
        }
    }
}

impl fmt::Display for LotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LotFull => write!(f, "parking is full"),
            Self::AlreadyParked(vehicle) => write!(f, "vehicle '{vehicle}' is already parked"),
            Self::NotFound(vehicle) => write!(f, "vehicle '{vehicle}' not found in parking"),
            Self::Persistence { assignment, reason } => write!(
                f,
                "assigned {assignment}, but the lot state could not be saved: {reason}"
            ),
        }
    }
}

impl std::error::Error for LotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Persistence { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Reasons a stored snapshot can not be restored into a lot.
#[derive(Debug, Eq, PartialEq)]
pub enum SnapshotError {
    FreeSpots(FreeListError),
    SpotOutOfRange { vehicle: String, spot: u8 },
    SpotFreeAndOccupied(u8),
    SpotSharedByVehicles(u8),
    SpotsMissing { found: usize, expected: usize },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FreeSpots(err) => write!(f, "free spots: {err}"),
            Self::SpotOutOfRange { vehicle, spot } => {
                write!(f, "vehicle '{vehicle}' is parked on unknown spot {spot}")
            }
            Self::SpotFreeAndOccupied(spot) => write!(f, "spot {spot} is both free and occupied"),
            Self::SpotSharedByVehicles(spot) => {
                write!(f, "spot {spot} is occupied by more than one vehicle")
            }
            Self::SpotsMissing { found, expected } => {
                write!(f, "snapshot accounts for {found} spots, expected {expected}")
            }
        }
    }
}

impl std::error::Error for SnapshotError {} // it implements Debug and Display

impl From<FreeListError> for SnapshotError {
    fn from(err: FreeListError) -> Self {
        Self::FreeSpots(err)
    }
}
