/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/workspace
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
pub mod err;
pub mod prelude;
pub mod spot;
pub mod store;

use crate::err::{LotError, SnapshotError};
use crate::spot::{Assignment, Spot, CAPACITY_WARNING_THRESHOLD, SPOT_COUNT, SPOT_RANGE};
use crate::store::{LotSnapshot, LotStore, MemoryStore};
use log::{debug, info, trace, warn};
use parkade_freelist::FreeList;
use std::collections::HashMap;

/// Assigns free spots to vehicles and remembers where each vehicle is parked.
///
/// Spots are handed out lowest number first. An assigned spot is never
/// released again. Every successful [`SpotAllocator::assign`] is followed by a
/// save through the injected [`LotStore`].
#[derive(Debug)]
pub struct SpotAllocator<Store: LotStore> {
    free_spots: FreeList,
    occupied: HashMap<String, Spot>,
    store: Store,
}

impl SpotAllocator<MemoryStore> {
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl<Store: LotStore> SpotAllocator<Store> {
    /// Restores the lot from `store`. Missing, unreadable or inconsistent
    /// stored state results in an empty lot.
    pub fn new(mut store: Store) -> Self {
        let (free_spots, occupied) = match store.load() {
            Ok(Some(snapshot)) => match restore(snapshot) {
                Ok(restored) => restored,
                Err(err) => {
                    warn!("stored lot state is inconsistent ({err}), starting with an empty lot");
                    empty_lot()
                }
            },
            Ok(None) => {
                debug!("no stored lot state, starting with an empty lot");
                empty_lot()
            }
            Err(err) => {
                warn!("could not load lot state ({err}), starting with an empty lot");
                empty_lot()
            }
        };

        info!(
            "lot ready. free spots: {}, parked vehicles: {}",
            free_spots.len(),
            occupied.len()
        );

        Self {
            free_spots,
            occupied,
            store,
        }
    }

    pub fn assign(&mut self, vehicle_id: &str) -> Result<Assignment, LotError> {
        if self.free_spots.is_empty() {
            return Err(LotError::LotFull);
        }

        if self.occupied.contains_key(vehicle_id) {
            return Err(LotError::AlreadyParked(vehicle_id.to_string()));
        }

        let spot = self
            .free_spots
            .allocate()
            .and_then(Spot::new)
            .ok_or(LotError::LotFull)?;
        self.occupied.insert(vehicle_id.to_string(), spot);

        let assignment = Assignment::from(spot);
        info!("assigned '{vehicle_id}' to {assignment}");

        let snapshot = self.snapshot();
        let saved = self.store.save(&snapshot);
        self.check_capacity();

        saved.map_err(|reason| LotError::Persistence { assignment, reason })?;

        Ok(assignment)
    }

    pub fn lookup(&self, vehicle_id: &str) -> Result<Assignment, LotError> {
        trace!("lookup '{vehicle_id}'");
        self.occupied
            .get(vehicle_id)
            .map(|spot| Assignment::from(*spot))
            .ok_or_else(|| LotError::NotFound(vehicle_id.to_string()))
    }

    /// True when fewer than [`CAPACITY_WARNING_THRESHOLD`] spots are free.
    pub fn is_nearing_capacity(&self) -> bool {
        self.free_spots.len() < CAPACITY_WARNING_THRESHOLD
    }

    fn check_capacity(&self) {
        if self.is_nearing_capacity() {
            warn!(
                "parking lot nearing full capacity! {} spots left",
                self.free_spots.len()
            );
        }
    }

    pub fn available_count(&self) -> usize {
        self.free_spots.len()
    }

    pub fn parked_count(&self) -> usize {
        self.occupied.len()
    }

    pub fn capacity(&self) -> usize {
        SPOT_COUNT as usize
    }

    pub fn is_parked(&self, vehicle_id: &str) -> bool {
        self.occupied.contains_key(vehicle_id)
    }

    pub fn snapshot(&self) -> LotSnapshot {
        LotSnapshot {
            available_spots: self.free_spots.iter().collect(),
            vehicle_spot_map: self
                .occupied
                .iter()
                .map(|(vehicle, spot)| (vehicle.clone(), spot.value()))
                .collect(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

fn empty_lot() -> (FreeList, HashMap<String, Spot>) {
    (FreeList::new(SPOT_RANGE), HashMap::new())
}

fn restore(snapshot: LotSnapshot) -> Result<(FreeList, HashMap<String, Spot>), SnapshotError> {
    let free_spots = FreeList::from_numbers(SPOT_RANGE, snapshot.available_spots)?;

    let mut occupied = HashMap::with_capacity(snapshot.vehicle_spot_map.len());
    let mut taken = Vec::with_capacity(snapshot.vehicle_spot_map.len());
    for (vehicle, value) in snapshot.vehicle_spot_map {
        let Some(spot) = Spot::new(value) else {
            return Err(SnapshotError::SpotOutOfRange {
                vehicle,
                spot: value,
            });
        };
        if free_spots.contains(value) {
            return Err(SnapshotError::SpotFreeAndOccupied(value));
        }
        if taken.contains(&spot) {
            return Err(SnapshotError::SpotSharedByVehicles(value));
        }
        taken.push(spot);
        occupied.insert(vehicle, spot);
    }

    let found = free_spots.len() + occupied.len();
    if found != SPOT_COUNT as usize {
        return Err(SnapshotError::SpotsMissing {
            found,
            expected: SPOT_COUNT as usize,
        });
    }

    Ok((free_spots, occupied))
}
