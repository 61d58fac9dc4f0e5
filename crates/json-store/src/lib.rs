/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/workspace
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
mod atomic_write;

use crate::atomic_write::atomic_write;
use log::{debug, info};
use parkade_lot::store::{LotSnapshot, LotStore, StoreError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILENAME: &str = "parking_data.json";

/// On-disk layout of the lot.
#[derive(Debug, Serialize, Deserialize)]
struct StoredLot {
    available_spots: Vec<u8>,
    vehicle_spot_map: BTreeMap<String, u8>,
}

impl From<&LotSnapshot> for StoredLot {
    fn from(snapshot: &LotSnapshot) -> Self {
        Self {
            available_spots: snapshot.available_spots.clone(),
            vehicle_spot_map: snapshot.vehicle_spot_map.clone(),
        }
    }
}

impl From<StoredLot> for LotSnapshot {
    fn from(stored: StoredLot) -> Self {
        Self {
            available_spots: stored.available_spots,
            vehicle_spot_map: stored.vehicle_spot_map,
        }
    }
}

/// Stores the lot as a JSON document in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LotStore for JsonFileStore {
    fn load(&mut self) -> Result<Option<LotSnapshot>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no lot file at {}", self.path.display());
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let stored: StoredLot =
            serde_json::from_str(&text).map_err(|err| StoreError::Decode(err.to_string()))?;
        info!(
            "loaded lot from {}. parked vehicles: {}",
            self.path.display(),
            stored.vehicle_spot_map.len()
        );

        Ok(Some(stored.into()))
    }

    fn save(&mut self, snapshot: &LotSnapshot) -> Result<(), StoreError> {
        let octets = serde_json::to_vec_pretty(&StoredLot::from(snapshot))
            .map_err(|err| StoreError::Encode(err.to_string()))?;
        atomic_write(&self.path, &octets)?;
        debug!("saved lot to {}", self.path.display());
        Ok(())
    }
}
