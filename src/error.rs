use std::error::Error;
use std::fmt;

use ndarray_npy::ReadNpyError;

use crate::variant::{DatasetVariant, Layout};

pub type Result<T> = std::result::Result<T, DatasetError>;

/// Everything that can go wrong while assembling a dataset.
///
/// None of these are recovered from locally; they are handed straight back
/// to the caller.
#[derive(Debug)]
pub enum DatasetError {
    /// No file exists at `path`.
    MissingFile { path: String },
    /// The file exists but could not be read as a 2-d array of the requested dtype.
    Npy { path: String, source: ReadNpyError },
    /// The reference band is not a column of the reflectance array.
    BandOutOfRange { band: usize, bands: usize },
    /// A parameter array has fewer columns than the variant keeps.
    Shape { expected_columns: usize, columns: usize },
    /// Parameter and reflectance arrays of the same split disagree on the number of samples.
    RowMismatch {
        split: &'static str,
        parameters: usize,
        reflectances: usize,
    },
    UnknownVariant(String),
    /// The variant does not store its files in the requested layout.
    WrongLayout { variant: DatasetVariant, expected: Layout },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingFile { path } => write!(f, "No such data file: {path}"),
            Self::Npy { path, source } => write!(f, "Failed to read array at {path}: {source}"),
            Self::BandOutOfRange { band, bands } => {
                write!(
                    f,
                    "Reference band {band} is out of range for reflectances with {bands} bands"
                )
            }
            Self::Shape {
                expected_columns,
                columns,
            } => write!(
                f,
                "Expected at least {expected_columns} parameter columns but found {columns}"
            ),
            Self::RowMismatch {
                split,
                parameters,
                reflectances,
            } => write!(
                f,
                "The {split} split has {parameters} parameter rows but {reflectances} reflectance rows"
            ),
            Self::UnknownVariant(name) => write!(f, "Unknown dataset variant: {name}"),
            Self::WrongLayout { variant, expected } => {
                write!(f, "Dataset variant {variant} is not stored as {}", expected.name())
            }
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Npy { source, .. } => Some(source),
            _ => None,
        }
    }
}
