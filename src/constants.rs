//! Hard-coded file names and normalization bands of the stored datasets.
//!
//! The file names are part of the on-disk contract and must match the stored
//! files byte for byte, including the `paramters` spelling.

/// Training parameters of the two-dimensional parametric data.
pub const TWO_D_TRAINING_PARAMETERS: &str = "2015February0511:02PMparamters2D.npy";
/// Training reflectances of the two-dimensional parametric data.
pub const TWO_D_TRAINING_REFLECTANCES: &str = "2015February0511:02PMreflectances2D.npy";
/// Test parameters of the two-dimensional parametric data.
pub const TWO_D_TEST_PARAMETERS: &str = "2015February1107:43PMparamtersRandom2D.npy";
/// Test reflectances of the two-dimensional parametric data.
pub const TWO_D_TEST_REFLECTANCES: &str = "2015February1107:43PMreflectancesRandom2D.npy";
/// Band the two-dimensional reflectances are divided by.
pub const TWO_D_REFERENCE_BAND: usize = 4;

pub const PERFECT_TRAINING_PARAMETERS: &str = "2015February1612:04AMparamtersPerfectArtificial.npy";
pub const PERFECT_TRAINING_REFLECTANCES: &str =
    "2015February1612:04AMreflectancesPerfectArtificial1000000photons.npy";
pub const PERFECT_TEST_PARAMETERS: &str = "2015February1702:02AMparamtersRandom.npy";
pub const PERFECT_TEST_REFLECTANCES: &str = "2015February1702:02AMreflectancesRandom.npy";
pub const PERFECT_REFERENCE_BAND: usize = 1;
/// Only blood volume fraction and vessel saturation were varied for the
/// perfect data simulations.
pub const PERFECT_PARAMETER_COLUMNS: usize = 2;

/// Reflectances sampled from uniformly distributed parameters.
pub const LOGISTIC_UNIFORM_REFLECTANCES: &str =
    "2015February1704:00PMreflectancesRandom1000000photons.npy";
/// Reflectances sampled from gaussian distributed parameters.
pub const LOGISTIC_GAUSS_REFLECTANCES: &str =
    "2015February1703:56PMreflectancesRandomNonUniform1000000photons.npy";
pub const LOGISTIC_REFERENCE_BAND: usize = 1;
