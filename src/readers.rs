//! Loading arrays from the flat data directory.

use std::io::ErrorKind;

use ndarray::prelude::*;
use ndarray_npy::ReadNpyError;

use crate::prelude::*;

/// Joins the data location and a file name by plain concatenation.
///
/// The stored file names are appended verbatim, so `location` is expected to
/// end with a path separator.
pub fn data_path(location: &str, file_name: &str) -> String {
    format!("{location}{file_name}")
}

/// Reads the 2-d `.npy` array stored as `file_name` under `location`.
///
/// # Errors
/// - `DatasetError::MissingFile` if there is no such file.
/// - `DatasetError::Npy` if the file is not a 2-d array of `T` (double
///   precision also accepts single precision files, which are widened).
pub fn read_array<T: Number>(location: &str, file_name: &str) -> Result<Array2<T>> {
    let path = data_path(location, file_name);
    log::debug!("Reading {path} ...");

    let array = T::read_npy(&path).map_err(|source| match source {
        ReadNpyError::Io(error) if error.kind() == ErrorKind::NotFound => {
            DatasetError::MissingFile { path: path.clone() }
        }
        source => DatasetError::Npy {
            path: path.clone(),
            source,
        },
    })?;

    log::trace!("Read {path} with shape {:?}", array.dim());
    Ok(array)
}
