/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/workspace
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
pub use crate::{
    err::LotError,
    spot::{Assignment, Level, Spot},
    store::{LotSnapshot, LotStore, MemoryStore, StoreError},
    SpotAllocator,
};
