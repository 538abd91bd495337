//! Reading and writing matrices as NumPy `.npy` files
//!
//! Only the subset the simulation needs is supported: 2-d arrays of
//! little-endian `f64` (`<f8`) in C order. Files are written as format
//! version 1.0 with the header padded to a 64-byte boundary; versions
//! 1.0 through 3.0 are accepted on read

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{Matrix, MatrixError};

const MAGIC: &[u8] = b"\x93NUMPY";

/// Read a 2-d `<f8` C-order `.npy` file into a [`Matrix`]
pub fn read_npy(path: &Path) -> Result<Matrix, MatrixError> {
    let bytes = fs::read(path)?;
    if bytes.len() < MAGIC.len() + 2 || &bytes[..MAGIC.len()] != MAGIC {
        return Err(MatrixError::BadMagic);
    }
    let (major, minor) = (bytes[6], bytes[7]);

    // Header length field is u16 for v1.0, u32 for v2.0/v3.0
    let (header_len, header_start): (usize, usize) = match major {
        1 => {
            if bytes.len() < 10 {
                return Err(MatrixError::Truncated);
            }
            (u16::from_le_bytes([bytes[8], bytes[9]]) as usize, 10)
        }
        2 | 3 => {
            if bytes.len() < 12 {
                return Err(MatrixError::Truncated);
            }
            let len = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
            (len as usize, 12)
        }
        _ => return Err(MatrixError::UnsupportedVersion(major, minor)),
    };
    let data_start = header_start
        .checked_add(header_len)
        .ok_or(MatrixError::BadHeader)?;
    if bytes.len() < data_start {
        return Err(MatrixError::Truncated);
    }

    let header = std::str::from_utf8(&bytes[header_start..data_start])
        .map_err(|_| MatrixError::BadHeader)?;

    let descr = field(header, "'descr'")?.trim_matches('\'');
    if descr != "<f8" {
        return Err(MatrixError::UnsupportedDtype(descr.to_string()));
    }
    match field(header, "'fortran_order'")? {
        "False" => {}
        "True" => return Err(MatrixError::FortranOrder),
        _ => return Err(MatrixError::BadHeader),
    }
    let shape = parse_shape(field(header, "'shape'")?)?;
    if shape.len() != 2 {
        return Err(MatrixError::NotTwoDim(shape));
    }
    let (rows, cols) = (shape[0], shape[1]);

    let len = rows
        .checked_mul(cols)
        .ok_or(MatrixError::TooLarge { rows, cols })?;
    let byte_len = len.checked_mul(8).ok_or(MatrixError::TooLarge { rows, cols })?;
    let payload = &bytes[data_start..];
    if payload.len() < byte_len {
        return Err(MatrixError::Truncated);
    }

    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MatrixError::Alloc { rows, cols })?;
    for chunk in payload[..byte_len].chunks_exact(8) {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(chunk);
        data.push(f64::from_le_bytes(raw));
    }

    Ok(Matrix { rows, cols, data })
}

/// Write a [`Matrix`] as a version 1.0 `.npy` file
pub fn write_npy(path: &Path, matrix: &Matrix) -> Result<(), MatrixError> {
    let mut header = format!(
        "{{'descr': '<f8', 'fortran_order': False, 'shape': ({}, {}), }}",
        matrix.rows, matrix.cols
    )
    .into_bytes();

    // Pad so the payload starts on a 64-byte boundary, trailing newline last
    let unpadded = MAGIC.len() + 2 + 2 + header.len() + 1;
    let pad = (64 - unpadded % 64) % 64;
    header.extend(std::iter::repeat(b' ').take(pad));
    header.push(b'\n');

    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(MAGIC)?;
    out.write_all(&[1, 0])?;
    out.write_all(&(header.len() as u16).to_le_bytes())?;
    out.write_all(&header)?;
    for value in &matrix.data {
        out.write_all(&value.to_le_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Extract the value of one key from the header dict
///
/// Values are either a parenthesized tuple or run to the next comma
fn field<'a>(header: &'a str, key: &str) -> Result<&'a str, MatrixError> {
    let start = header.find(key).ok_or(MatrixError::BadHeader)?;
    let rest = header[start + key.len()..].trim_start();
    let rest = rest
        .strip_prefix(':')
        .ok_or(MatrixError::BadHeader)?
        .trim_start();
    let end = if rest.starts_with('(') {
        rest.find(')').map(|i| i + 1)
    } else {
        rest.find(|c| c == ',' || c == '}')
    };
    let end = end.ok_or(MatrixError::BadHeader)?;
    Ok(rest[..end].trim())
}

fn parse_shape(value: &str) -> Result<Vec<usize>, MatrixError> {
    let inner = value
        .strip_prefix('(')
        .and_then(|v| v.strip_suffix(')'))
        .ok_or(MatrixError::BadHeader)?;
    inner
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<usize>().map_err(|_| MatrixError::BadHeader))
        .collect()
}
