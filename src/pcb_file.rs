//! Binary process control block (PCB) files.
//!
//! # Layout
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 4 | record count `N` (u32, little-endian) |
//! | 4 + 12k | 4 | burst time of record k |
//! | 8 + 12k | 4 | priority of record k |
//! | 12 + 12k | 4 | arrival time of record k |
//!
//! The `started` flag is not stored and is `false` on load. A file must end
//! right after its last declared record.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::{debug, warn};

use crate::models::ProcessDescriptor;

const RECORD_FIELDS: usize = 3;
const FIELD_BYTES: usize = 4;

/// PCB file loading or writing failure.
#[derive(Debug)]
pub enum PcbFileError {
    /// Underlying I/O failure (including a missing file).
    Io(io::Error),
    /// The file ended before the declared number of records was read.
    Truncated {
        /// Records declared in the header.
        expected: u32,
        /// Complete records actually present.
        found: u32,
    },
    /// Data follows the last declared record.
    TrailingBytes {
        /// Records declared in the header.
        declared: u32,
        /// Bytes left over after them.
        extra: u64,
    },
    /// More records than the 32-bit header can describe.
    TooManyRecords(usize),
}

impl fmt::Display for PcbFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PcbFileError::Io(err) => write!(f, "pcb file i/o error: {err}"),
            PcbFileError::Truncated { expected, found } => write!(
                f,
                "pcb file truncated: header declares {expected} records, found {found}"
            ),
            PcbFileError::TrailingBytes { declared, extra } => write!(
                f,
                "pcb file has {extra} bytes after the {declared} declared records"
            ),
            PcbFileError::TooManyRecords(count) => {
                write!(f, "{count} records exceed the pcb file limit of {}", u32::MAX)
            }
        }
    }
}

impl std::error::Error for PcbFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PcbFileError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PcbFileError {
    fn from(err: io::Error) -> Self {
        PcbFileError::Io(err)
    }
}

/// Loads a process batch from a PCB file.
pub fn load_process_control_blocks(
    path: impl AsRef<Path>,
) -> Result<Vec<ProcessDescriptor>, PcbFileError> {
    let path = path.as_ref();
    let batch = read_from(BufReader::new(File::open(path)?))?;
    debug!("loaded {} processes from {}", batch.len(), path.display());
    Ok(batch)
}

/// Reads a process batch in PCB layout from any reader.
///
/// The reader is drained: bytes after the last declared record fail with
/// [`PcbFileError::TrailingBytes`].
pub fn read_from(mut reader: impl Read) -> Result<Vec<ProcessDescriptor>, PcbFileError> {
    let count = read_u32(&mut reader)?;
    // Header is untrusted: cap the up-front allocation
    let mut batch = Vec::with_capacity(count.min(1 << 16) as usize);

    for found in 0..count {
        let mut record = [0u8; RECORD_FIELDS * FIELD_BYTES];
        if let Err(err) = reader.read_exact(&mut record) {
            if err.kind() == io::ErrorKind::UnexpectedEof {
                warn!("pcb data ends after {found} of {count} records");
                return Err(PcbFileError::Truncated {
                    expected: count,
                    found,
                });
            }
            return Err(err.into());
        }

        let field = |i: usize| {
            let start = i * FIELD_BYTES;
            u32::from_le_bytes([
                record[start],
                record[start + 1],
                record[start + 2],
                record[start + 3],
            ])
        };
        batch.push(ProcessDescriptor::new(field(0), field(1), field(2)));
    }

    let extra = io::copy(&mut reader, &mut io::sink())?;
    if extra > 0 {
        warn!("pcb data has {extra} bytes after {count} records");
        return Err(PcbFileError::TrailingBytes {
            declared: count,
            extra,
        });
    }

    Ok(batch)
}

/// Writes a process batch in PCB layout.
pub fn write_to(mut writer: impl Write, batch: &[ProcessDescriptor]) -> Result<(), PcbFileError> {
    let count =
        u32::try_from(batch.len()).map_err(|_| PcbFileError::TooManyRecords(batch.len()))?;
    writer.write_all(&count.to_le_bytes())?;
    for process in batch {
        writer.write_all(&process.burst_time.to_le_bytes())?;
        writer.write_all(&process.priority.to_le_bytes())?;
        writer.write_all(&process.arrival_time.to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Saves a process batch to a PCB file, replacing any existing file.
pub fn save(path: impl AsRef<Path>, batch: &[ProcessDescriptor]) -> Result<(), PcbFileError> {
    write_to(BufWriter::new(File::create(path)?), batch)
}

fn read_u32(reader: &mut impl Read) -> Result<u32, PcbFileError> {
    let mut bytes = [0u8; FIELD_BYTES];
    reader.read_exact(&mut bytes)?;
    Ok(u32::from_le_bytes(bytes))
}
