//! Dataset assembly for the biophotonics Monte Carlo workflow.
//!
//! Every dataset variant binds a fixed set of precomputed `.npy` files to a
//! fixed quotient-normalization band, so that every caller building, say, the
//! "perfect artificial" dataset gets the same files, the same parameter
//! columns and the same normalization.

mod number;
mod error;
mod variant;
mod normalize;
mod readers;
mod assemble;

pub mod prelude;
pub mod constants;
pub mod helpers;

pub use number::Number;
pub use error::{DatasetError, Result};
pub use variant::{DatasetVariant, Layout, SplitFiles, VariantSpec};
pub use normalize::{normalize_quotient, par_normalize_quotient};
pub use readers::{data_path, read_array};
pub use assemble::{
    assemble_train_test,
    assemble_uniform_gauss,
    setup_logistic_regression_artificial_data,
    setup_perfect_artificial_data,
    setup_two_dimensional_data,
    TrainTestData,
    UniformGaussData,
};
