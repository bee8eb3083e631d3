//! Provides the `Number` trait for the element types of parameter and
//! reflectance arrays.

use std::path::Path;

use ndarray::Array2;
use ndarray_npy::{ReadNpyError, ReadableElement};
use num_traits::Float;

/// Element type of an array stored in a `.npy` file.
///
/// Implemented for `f32` and `f64`, the two dtypes the simulation pipeline
/// writes.
pub trait Number:
    Float + ReadableElement + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
    /// Reads the 2-d array stored at `path`.
    fn read_npy<P: AsRef<Path>>(path: P) -> Result<Array2<Self>, ReadNpyError> {
        ndarray_npy::read_npy(path)
    }
}

impl Number for f32 {}

impl Number for f64 {
    /// Single precision files are widened to double precision. Any other
    /// dtype keeps the original descriptor error.
    fn read_npy<P: AsRef<Path>>(path: P) -> Result<Array2<Self>, ReadNpyError> {
        let path = path.as_ref();
        match ndarray_npy::read_npy(path) {
            Err(error @ ReadNpyError::WrongDescriptor(_)) => {
                ndarray_npy::read_npy::<_, Array2<f32>>(path)
                    .map(|array| array.mapv(f64::from))
                    .map_err(|_| error)
            }
            result => result,
        }
    }
}
