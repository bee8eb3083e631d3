//! Writes synthetic stored datasets into temporary directories.

use ndarray::prelude::*;
use ndarray_npy::write_npy;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tempfile::TempDir;

use biophotonics_data::data_path;

/// A temporary data directory and its location string, ending with a separator.
pub struct DataDir {
    pub dir: TempDir,
    pub location: String,
}

impl DataDir {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let dir = tempfile::tempdir().unwrap();
        let location = format!("{}/", dir.path().display());
        Self { dir, location }
    }

    pub fn write<T: ndarray_npy::WritableElement>(&self, file_name: &str, array: &Array2<T>) {
        write_npy(data_path(&self.location, file_name), array).unwrap();
    }
}

/// Strictly positive values, so no reference band is ever zero.
pub fn gen_array(rows: usize, cols: usize, seed: u64) -> Array2<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Array2::from_shape_simple_fn((rows, cols), || rng.gen_range(0.01..1.0))
}
