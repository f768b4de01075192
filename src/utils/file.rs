use crate::error::{Error, ErrorType, Result};

use std::convert::AsRef;
use std::fs::{create_dir_all, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut file = OpenOptions::new().read(true).open(path).map_err(|e| {
        Error::convert(
            ErrorType::IoError,
            &format!("cannot open {}", path.display()),
            &e,
        )
    })?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    Ok(data)
}

/// Writes `data` to `path`, creating missing parent directories first.
pub fn save_to_file<P: AsRef<Path>>(data: &[u8], path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            create_dir_all(parent).map_err(|e| {
                Error::convert(
                    ErrorType::IoError,
                    &format!("cannot create directory {}", parent.display()),
                    &e,
                )
            })?;
        }
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| {
            Error::convert(
                ErrorType::IoError,
                &format!("cannot create {}", path.display()),
                &e,
            )
        })?;
    file.write_all(data)?;
    Ok(())
}
