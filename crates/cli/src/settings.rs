/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/workspace
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
use anyhow::bail;
use log::info;
use parkade_json_store::{JsonFileStore, DEFAULT_FILENAME};
use parkade_lot::prelude::{LotStore, MemoryStore};
use std::path::PathBuf;

#[derive(Debug, Eq, PartialEq)]
pub enum Storage {
    InMemory,
    File(PathBuf),
}

impl Storage {
    /// `parkade [--in-memory | <data file>]`
    pub fn from_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut storage = None;
        for arg in args {
            let next = match arg.as_str() {
                "--in-memory" => Self::InMemory,
                flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
                path => Self::File(PathBuf::from(path)),
            };
            if storage.replace(next).is_some() {
                bail!("expected at most one of '--in-memory' or a data file path");
            }
        }

        Ok(storage.unwrap_or_else(|| Self::File(PathBuf::from(DEFAULT_FILENAME))))
    }

    pub fn open(&self) -> Box<dyn LotStore> {
        match self {
            Self::InMemory => Box::new(MemoryStore::new()),
            Self::File(path) => {
                let store = JsonFileStore::new(path);
                info!("lot data file: {}", store.path().display());
                Box::new(store)
            }
        }
    }
}
