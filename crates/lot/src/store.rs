/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/workspace
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
use crate::spot::SPOT_RANGE;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::{fmt, io};

/// Plain copy of the lot state, as handed to and from a [`LotStore`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LotSnapshot {
    pub available_spots: Vec<u8>,
    pub vehicle_spot_map: BTreeMap<String, u8>,
}

impl LotSnapshot {
    /// Every spot free, no vehicles parked.
    pub fn empty_lot() -> Self {
        Self {
            available_spots: SPOT_RANGE.collect(),
            vehicle_spot_map: BTreeMap::new(),
        }
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Decode(String),
    Encode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Decode(msg) => write!(f, "stored lot could not be decoded: {msg}"),
            Self::Encode(msg) => write!(f, "lot could not be encoded: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Persistence adapter injected into [`crate::SpotAllocator`].
pub trait LotStore: Debug {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&mut self) -> Result<Option<LotSnapshot>, StoreError>;

    fn save(&mut self, snapshot: &LotSnapshot) -> Result<(), StoreError>;
}

impl<S: LotStore + ?Sized> LotStore for Box<S> {
    fn load(&mut self) -> Result<Option<LotSnapshot>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, snapshot: &LotSnapshot) -> Result<(), StoreError> {
        (**self).save(snapshot)
    }
}

/// Keeps the last saved snapshot in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Option<LotSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: LotSnapshot) -> Self {
        Self {
            saved: Some(snapshot),
        }
    }

    pub fn saved(&self) -> Option<&LotSnapshot> {
        self.saved.as_ref()
    }
}

impl LotStore for MemoryStore {
    fn load(&mut self) -> Result<Option<LotSnapshot>, StoreError> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, snapshot: &LotSnapshot) -> Result<(), StoreError> {
        self.saved = Some(snapshot.clone());
        Ok(())
    }
}
