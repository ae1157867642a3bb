use super::types::{PersistenceError, Result};
use crate::core::StudentRecord;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;
use tracing::{debug, warn};

const MAGIC: &[u8; 8] = b"ROSTER01";
const SNAPSHOT_VERSION: u8 = 1;

/// Write the full record sequence to `path`, overwriting any previous file
///
/// Layout: magic + version + record count, then one length-prefixed
/// bincode-encoded record per entry, then a CRC32 over everything prior.
/// The overwrite is direct (no temp-file-and-rename); a crash mid-write
/// can leave a truncated file, which the checksum catches on load.
pub fn write_snapshot(path: &Path, records: &[StudentRecord]) -> Result<()> {
    debug!("writing snapshot with {} records to {:?}", records.len(), path);

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let mut checksum = crc32fast::Hasher::new();

    writer.write_all(MAGIC)?;
    checksum.update(MAGIC);

    writer.write_all(&[SNAPSHOT_VERSION])?;
    checksum.update(&[SNAPSHOT_VERSION]);

    let count = records.len() as u64;
    writer.write_all(&count.to_le_bytes())?;
    checksum.update(&count.to_le_bytes());

    for record in records {
        let encoded = bincode::serialize(record)?;
        let len = encoded.len() as u32;

        writer.write_all(&len.to_le_bytes())?;
        checksum.update(&len.to_le_bytes());

        writer.write_all(&encoded)?;
        checksum.update(&encoded);
    }

    writer.write_all(&checksum.finalize().to_le_bytes())?;

    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| e.into_error())?
        .sync_all()?;

    Ok(())
}

/// Read the record sequence back from `path`
///
/// Returns `Ok(None)` when the file does not exist; a missing snapshot
/// is an empty roster, not an error.
pub fn read_snapshot(path: &Path) -> Result<Option<Vec<StudentRecord>>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no snapshot at {:?}", path);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let mut reader = BufReader::new(file);
    let mut checksum = crc32fast::Hasher::new();

    let mut magic = [0u8; 8];
    reader.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(PersistenceError::SnapshotCorrupted(path.to_path_buf()));
    }
    checksum.update(&magic);

    let mut version = [0u8; 1];
    reader.read_exact(&mut version)?;
    if version[0] != SNAPSHOT_VERSION {
        warn!(
            "snapshot version mismatch: expected {}, got {}",
            SNAPSHOT_VERSION, version[0]
        );
        return Err(PersistenceError::VersionMismatch(version[0]));
    }
    checksum.update(&version);

    let mut count_bytes = [0u8; 8];
    reader.read_exact(&mut count_bytes)?;
    checksum.update(&count_bytes);
    let count = u64::from_le_bytes(count_bytes);

    let mut records = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let mut len_bytes = [0u8; 4];
        reader.read_exact(&mut len_bytes)?;
        checksum.update(&len_bytes);
        let len = u32::from_le_bytes(len_bytes) as usize;

        let mut encoded = vec![0u8; len];
        reader.read_exact(&mut encoded)?;
        checksum.update(&encoded);

        let record: StudentRecord = bincode::deserialize(&encoded)?;
        records.push(record);
    }

    let mut crc_bytes = [0u8; 4];
    reader.read_exact(&mut crc_bytes)?;
    let expected = u32::from_le_bytes(crc_bytes);
    let actual = checksum.finalize();

    if expected != actual {
        return Err(PersistenceError::ChecksumMismatch { expected, actual });
    }

    debug!("loaded snapshot with {} records from {:?}", records.len(), path);
    Ok(Some(records))
}
