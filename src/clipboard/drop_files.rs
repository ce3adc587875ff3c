//! Dropped-file-list (CF_HDROP) payload encoding.
//!
//! The payload is a `DROPFILES` header of five little-endian 32-bit fields,
//! followed by the file paths as UTF-16LE, separated by null units and ended
//! by a double null.

use std::path::{Path, PathBuf};

use super::error::PayloadError;

/// Standard clipboard format identifier for a dropped file list.
pub const CF_HDROP: u32 = 15;

/// Size of the `DROPFILES` header in bytes. Also the offset of the path block.
pub const DROPFILES_SIZE: usize = 20;

/// Decoded `DROPFILES` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropFilesHeader {
    /// Byte offset from the start of the payload to the path block
    pub files_offset: u32,
    /// Drop point x coordinate
    pub point_x: i32,
    /// Drop point y coordinate
    pub point_y: i32,
    /// Whether the drop point is in screen coordinates
    pub non_client: bool,
    /// Whether the path block is UTF-16 rather than ANSI
    pub wide: bool,
}

impl DropFilesHeader {
    /// Header for a UTF-16 path block placed directly after it.
    pub fn wide() -> Self {
        Self {
            files_offset: DROPFILES_SIZE as u32,
            point_x: 0,
            point_y: 0,
            non_client: false,
            wide: true,
        }
    }

    pub fn to_bytes(&self) -> [u8; DROPFILES_SIZE] {
        let mut out = [0u8; DROPFILES_SIZE];
        out[0..4].copy_from_slice(&self.files_offset.to_le_bytes());
        out[4..8].copy_from_slice(&self.point_x.to_le_bytes());
        out[8..12].copy_from_slice(&self.point_y.to_le_bytes());
        out[12..16].copy_from_slice(&u32::from(self.non_client).to_le_bytes());
        out[16..20].copy_from_slice(&u32::from(self.wide).to_le_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PayloadError> {
        if bytes.len() < DROPFILES_SIZE {
            return Err(PayloadError::TooShort { len: bytes.len() });
        }
        let field = |i: usize| {
            let mut buf = [0u8; 4];
            buf.copy_from_slice(&bytes[i * 4..i * 4 + 4]);
            buf
        };
        Ok(Self {
            files_offset: u32::from_le_bytes(field(0)),
            point_x: i32::from_le_bytes(field(1)),
            point_y: i32::from_le_bytes(field(2)),
            non_client: u32::from_le_bytes(field(3)) != 0,
            wide: u32::from_le_bytes(field(4)) != 0,
        })
    }
}

/// Encode a list of paths as a complete CF_HDROP payload.
///
/// An empty list yields the header followed by a lone double null. An empty
/// path would read back as the end of the list, so every path must be
/// non-empty; collected photos always are.
pub fn encode_file_list<P: AsRef<Path>>(paths: &[P]) -> Vec<u8> {
    let mut units: Vec<u16> = Vec::new();
    for (i, path) in paths.iter().enumerate() {
        if i > 0 {
            units.push(0);
        }
        units.extend(path_units(path.as_ref()));
    }
    units.extend([0, 0]);

    let mut payload = Vec::with_capacity(DROPFILES_SIZE + units.len() * 2);
    payload.extend_from_slice(&DropFilesHeader::wide().to_bytes());
    for unit in units {
        payload.extend_from_slice(&unit.to_le_bytes());
    }
    payload
}

/// Parse a CF_HDROP payload back into its paths, in order.
pub fn decode_file_list(bytes: &[u8]) -> Result<Vec<PathBuf>, PayloadError> {
    let header = DropFilesHeader::from_bytes(bytes)?;
    let offset = header.files_offset as usize;
    if offset < DROPFILES_SIZE || offset > bytes.len() {
        return Err(PayloadError::InvalidOffset {
            offset: header.files_offset,
            len: bytes.len(),
        });
    }
    let block = &bytes[offset..];

    if header.wide {
        if block.len() % 2 != 0 {
            return Err(PayloadError::OddLength { len: block.len() });
        }
        let units: Vec<u16> = block
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Ok(split_on_nulls(&units)?
            .into_iter()
            .map(path_from_units)
            .collect())
    } else {
        // ANSI blocks are read byte-for-byte; non-ASCII code pages are not mapped.
        Ok(split_on_nulls(block)?
            .into_iter()
            .map(|entry| PathBuf::from(entry.iter().map(|&b| b as char).collect::<String>()))
            .collect())
    }
}

/// Split a null-separated, double-null-terminated block into its entries.
fn split_on_nulls<T: Copy + Default + PartialEq>(units: &[T]) -> Result<Vec<&[T]>, PayloadError> {
    let zero = T::default();
    let mut entries = Vec::new();
    let mut start = 0;

    for (i, unit) in units.iter().enumerate() {
        if *unit != zero {
            continue;
        }
        if i == start {
            return Ok(entries);
        }
        entries.push(&units[start..i]);
        start = i + 1;
    }

    Err(PayloadError::Unterminated)
}

#[cfg(windows)]
fn path_units(path: &Path) -> Vec<u16> {
    use std::os::windows::ffi::OsStrExt;
    path.as_os_str().encode_wide().collect()
}

#[cfg(not(windows))]
fn path_units(path: &Path) -> Vec<u16> {
    path.to_string_lossy().encode_utf16().collect()
}

#[cfg(windows)]
fn path_from_units(units: &[u16]) -> PathBuf {
    use std::os::windows::ffi::OsStringExt;
    PathBuf::from(std::ffi::OsString::from_wide(units))
}

#[cfg(not(windows))]
fn path_from_units(units: &[u16]) -> PathBuf {
    PathBuf::from(String::from_utf16_lossy(units))
}
