/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/workspace
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
use log::trace;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Writes `data` to `{path}.tmp`, flushes it and renames it over `path`.
///
/// A crash before the rename leaves the previous file at `path` untouched.
pub(crate) fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(&tmp, path)?;
    trace!("wrote {} octets to {}", data.len(), path.display());

    Ok(())
}
