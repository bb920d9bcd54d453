//! Reading a resource pack from a directory tree.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::pack::ResourcePack;

use super::error::{PackIoError, PackIoResult};
use super::layout;

/// Read a directory laid out as a resource pack into a [`ResourcePack`].
///
/// Every regular file below `root` is captured: typed entries are parsed,
/// everything else lands in the unknown-file bucket. Entries are visited in
/// sorted name order so reads are deterministic across filesystems.
///
/// # Errors
///
/// Returns [`PackIoError::InvalidPath`] if `root` is not a directory,
/// [`PackIoError::ReadFailed`] on filesystem errors, and
/// [`PackIoError::MalformedPack`] when a typed JSON file fails to parse.
pub fn read_pack_directory(root: &Path) -> PackIoResult<ResourcePack> {
    if !root.is_dir() {
        return Err(PackIoError::InvalidPath(format!(
            "not a directory: {}",
            root.display()
        )));
    }

    let mut pack = ResourcePack::new();
    read_dir_into(&mut pack, root, String::new())?;
    debug!(
        root = %root.display(),
        files = pack.file_count(),
        "read pack directory"
    );
    Ok(pack)
}

fn read_dir_into(pack: &mut ResourcePack, dir: &Path, prefix: String) -> PackIoResult<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(|e| PackIoError::ReadFailed {
            path: dir.to_path_buf(),
            source: e,
        })?
        .collect::<Result<_, _>>()
        .map_err(|e| PackIoError::ReadFailed {
            path: dir.to_path_buf(),
            source: e,
        })?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let rel = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", prefix, name)
        };

        if path.is_dir() {
            read_dir_into(pack, &path, rel)?;
        } else {
            let bytes = fs::read(&path).map_err(|e| PackIoError::ReadFailed {
                path: path.clone(),
                source: e,
            })?;
            layout::insert_entry(pack, &rel, bytes)?;
        }
    }

    Ok(())
}
