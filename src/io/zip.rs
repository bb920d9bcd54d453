//! Reading and writing resource packs as zip archives.

use std::fs::{self, File};
use std::io::{Cursor, Read, Write};
use std::path::Path;

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::pack::ResourcePack;

use super::error::{PackIoError, PackIoResult};
use super::layout;

/// Read a zip archive laid out as a resource pack into a [`ResourcePack`].
///
/// # Errors
///
/// Returns [`PackIoError::ReadFailed`] if the archive cannot be opened,
/// [`PackIoError::Zip`] if it cannot be traversed, and
/// [`PackIoError::MalformedPack`] when a typed JSON entry fails to parse.
pub fn read_pack_zip(path: &Path) -> PackIoResult<ResourcePack> {
    let file = File::open(path).map_err(|e| PackIoError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut archive = ZipArchive::new(file).map_err(|e| PackIoError::Zip {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut pack = ResourcePack::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| PackIoError::Zip {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if entry.is_dir() {
            continue;
        }

        let name = entry.name().replace('\\', "/");
        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| PackIoError::ReadFailed {
                path: path.join(&name),
                source: e,
            })?;
        layout::insert_entry(&mut pack, &name, bytes)?;
    }

    debug!(archive = %path.display(), files = pack.file_count(), "read pack archive");
    Ok(pack)
}

/// Serialize a pack to zip archive bytes, in memory.
pub fn pack_to_zip_bytes(pack: &ResourcePack) -> PackIoResult<Vec<u8>> {
    let entries = layout::flatten(pack)?;
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    // Fixed entry timestamps: identical pack contents must produce
    // byte-identical archives across runs.
    let options = SimpleFileOptions::default().last_modified_time(zip::DateTime::default());

    for (name, bytes) in entries {
        writer
            .start_file(name.as_str(), options)
            .map_err(|e| PackIoError::Zip {
                path: name.clone().into(),
                reason: e.to_string(),
            })?;
        writer.write_all(&bytes).map_err(|e| PackIoError::WriteFailed {
            path: name.clone().into(),
            source: e,
        })?;
    }

    let cursor = writer.finish().map_err(|e| PackIoError::Zip {
        path: "<archive>".into(),
        reason: e.to_string(),
    })?;
    Ok(cursor.into_inner())
}

/// Serialize a pack and write it to `path` as a zip archive.
///
/// The write is atomic from the caller's perspective: bytes go to a `.tmp`
/// sibling first and are renamed into place, so a failed write never leaves
/// a truncated archive behind at `path`. Returns the archive bytes so the
/// caller can build an in-memory handle without serializing twice.
pub fn write_pack_zip(pack: &ResourcePack, path: &Path) -> PackIoResult<Vec<u8>> {
    let bytes = pack_to_zip_bytes(pack)?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PackIoError::InvalidPath(format!("no file name in {}", path.display())))?;
    let tmp_path = path.with_file_name(format!("{}.tmp", file_name));

    fs::write(&tmp_path, &bytes).map_err(|e| PackIoError::WriteFailed {
        path: tmp_path.clone(),
        source: e,
    })?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        // Best effort: don't leave the temp file around on failure.
        let _ = fs::remove_file(&tmp_path);
        return Err(PackIoError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        });
    }

    debug!(archive = %path.display(), bytes = bytes.len(), "wrote pack archive");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::PackMeta;
    use tempfile::TempDir;

    fn sample_pack() -> ResourcePack {
        let mut pack = ResourcePack::new();
        pack.meta = Some(PackMeta::new(34, "sample"));
        pack.textures
            .insert("item/ruby.png".parse().unwrap(), vec![1, 2, 3]);
        pack.insert_unknown_file("credits.txt", b"packmill".to_vec());
        pack
    }

    #[test]
    fn test_zip_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pack.zip");

        let pack = sample_pack();
        write_pack_zip(&pack, &path).unwrap();

        let read_back = read_pack_zip(&path).unwrap();
        assert_eq!(pack, read_back);
    }

    #[test]
    fn test_serialization_is_reproducible() {
        let pack = sample_pack();
        let first = pack_to_zip_bytes(&pack).unwrap();
        let second = pack_to_zip_bytes(&pack).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_returns_written_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pack.zip");

        let bytes = write_pack_zip(&sample_pack(), &path).unwrap();
        assert_eq!(bytes, fs::read(&path).unwrap());
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pack.zip");

        write_pack_zip(&sample_pack(), &path).unwrap();
        assert!(path.exists());
        assert!(!temp.path().join("pack.zip.tmp").exists());
    }

    #[test]
    fn test_failed_write_leaves_no_artifact() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing_dir").join("pack.zip");

        let result = write_pack_zip(&sample_pack(), &path);
        assert!(matches!(result, Err(PackIoError::WriteFailed { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_read_missing_archive_fails() {
        let result = read_pack_zip(Path::new("/nonexistent.zip"));
        assert!(matches!(result, Err(PackIoError::ReadFailed { .. })));
    }

    #[test]
    fn test_read_non_zip_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("not_a.zip");
        fs::write(&path, b"plain text").unwrap();

        let result = read_pack_zip(&path);
        assert!(matches!(result, Err(PackIoError::Zip { .. })));
    }
}
