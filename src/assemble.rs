//! Assembling normalized datasets from the stored arrays.

use ndarray::prelude::*;

use crate::helpers;
use crate::normalize::normalize_quotient;
use crate::prelude::*;
use crate::readers::read_array;
use crate::variant::SplitFiles;

/// A training and a test split with normalized reflectances.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestData<T: Number> {
    pub training_parameters: Array2<T>,
    pub training_reflectances: Array2<T>,
    pub test_parameters: Array2<T>,
    pub test_reflectances: Array2<T>,
}

impl<T: Number> TrainTestData<T> {
    /// Returns `(training_parameters, training_reflectances, test_parameters, test_reflectances)`.
    pub fn into_tuple(self) -> (Array2<T>, Array2<T>, Array2<T>, Array2<T>) {
        (
            self.training_parameters,
            self.training_reflectances,
            self.test_parameters,
            self.test_reflectances,
        )
    }
}

/// Normalized reflectances simulated from uniformly and from gaussian
/// distributed parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformGaussData<T: Number> {
    pub uniform_reflectances: Array2<T>,
    pub gauss_reflectances: Array2<T>,
}

impl<T: Number> UniformGaussData<T> {
    /// Returns `(uniform_reflectances, gauss_reflectances)`.
    pub fn into_tuple(self) -> (Array2<T>, Array2<T>) {
        (self.uniform_reflectances, self.gauss_reflectances)
    }
}

/// Two-dimensional parametric data, normalized at band 4.
pub fn setup_two_dimensional_data(location: &str) -> Result<TrainTestData<f64>> {
    assemble_train_test(DatasetVariant::TwoDimensional, location)
}

/// Perfect artificial data, normalized at band 1, keeping only the blood
/// volume fraction and vessel saturation parameter columns.
pub fn setup_perfect_artificial_data(location: &str) -> Result<TrainTestData<f64>> {
    assemble_train_test(DatasetVariant::PerfectArtificial, location)
}

/// Uniform and gaussian artificial reflectances, normalized at band 1.
pub fn setup_logistic_regression_artificial_data(location: &str) -> Result<UniformGaussData<f64>> {
    assemble_uniform_gauss(DatasetVariant::LogisticRegressionArtificial, location)
}

/// Loads the training and test splits of `variant` from `location`.
///
/// Files are read in the order training parameters, training reflectances,
/// test parameters, test reflectances. The first failure is returned and
/// nothing is assembled.
///
/// # Errors
/// - `DatasetError::WrongLayout` if `variant` has no train/test splits.
/// - `DatasetError::MissingFile` or `DatasetError::Npy` if a file cannot be read.
/// - `DatasetError::Shape` if a parameter array is too narrow for the variant.
/// - `DatasetError::BandOutOfRange` if a reflectance array is too narrow for
///   the reference band.
/// - `DatasetError::RowMismatch` if a split's parameters and reflectances
///   disagree on the number of samples.
pub fn assemble_train_test<T: Number>(
    variant: DatasetVariant,
    location: &str,
) -> Result<TrainTestData<T>> {
    let spec = variant.spec();

    // Only train/test variants name parameter files for both splits.
    let [training, test] = spec.splits;
    let (Some(training_file), Some(test_file)) = (training.parameters, test.parameters) else {
        return Err(DatasetError::WrongLayout {
            variant,
            expected: Layout::TrainTest,
        });
    };

    let (training_parameters, training_reflectances) =
        load_split(&spec, location, training_file, &training)?;
    let (test_parameters, test_reflectances) = load_split(&spec, location, test_file, &test)?;

    log::info!(
        "Assembled {variant} from {location}: training {:?} / {:?}, test {:?} / {:?}",
        training_parameters.dim(),
        training_reflectances.dim(),
        test_parameters.dim(),
        test_reflectances.dim(),
    );

    Ok(TrainTestData {
        training_parameters,
        training_reflectances,
        test_parameters,
        test_reflectances,
    })
}

/// Loads the two reflectance-only sets of `variant` from `location`.
///
/// # Errors
/// Same as `assemble_train_test`, minus the parameter checks.
pub fn assemble_uniform_gauss<T: Number>(
    variant: DatasetVariant,
    location: &str,
) -> Result<UniformGaussData<T>> {
    let spec = variant.spec();
    if spec.layout != Layout::UniformGauss {
        return Err(DatasetError::WrongLayout {
            variant,
            expected: Layout::UniformGauss,
        });
    }

    let [uniform, gauss] = spec.splits;
    let uniform_reflectances = load_reflectances(&spec, location, &uniform)?;
    let gauss_reflectances = load_reflectances(&spec, location, &gauss)?;

    log::info!(
        "Assembled {variant} from {location}: uniform {:?}, gauss {:?}",
        uniform_reflectances.dim(),
        gauss_reflectances.dim(),
    );

    Ok(UniformGaussData {
        uniform_reflectances,
        gauss_reflectances,
    })
}

fn load_split<T: Number>(
    spec: &VariantSpec,
    location: &str,
    parameters_file: &str,
    split: &SplitFiles,
) -> Result<(Array2<T>, Array2<T>)> {
    let parameters = read_array::<T>(location, parameters_file)?;
    let parameters = match spec.parameter_columns {
        Some(n) => helpers::leading_columns(parameters, n)?,
        None => parameters,
    };

    let reflectances = load_reflectances(spec, location, split)?;
    helpers::check_aligned(split.label, &parameters, &reflectances)?;

    Ok((parameters, reflectances))
}

fn load_reflectances<T: Number>(
    spec: &VariantSpec,
    location: &str,
    split: &SplitFiles,
) -> Result<Array2<T>> {
    let reflectances: Array2<T> = read_array(location, split.reflectances)?;
    normalize_quotient(&reflectances, spec.reference_band)
}

#[cfg(test)]
mod tests {
    use ndarray::prelude::*;

    use super::*;

    #[test]
    fn test_wrong_layout() {
        let variant = DatasetVariant::LogisticRegressionArtificial;
        let error = assemble_train_test::<f64>(variant, "/data/").unwrap_err();
        assert!(matches!(
            error,
            DatasetError::WrongLayout {
                variant: DatasetVariant::LogisticRegressionArtificial,
                expected: Layout::TrainTest
            }
        ));

        let variant = DatasetVariant::PerfectArtificial;
        let error = assemble_uniform_gauss::<f32>(variant, "/data/").unwrap_err();
        assert!(matches!(
            error,
            DatasetError::WrongLayout {
                variant: DatasetVariant::PerfectArtificial,
                expected: Layout::UniformGauss
            }
        ));
        assert_eq!(
            error.to_string(),
            "Dataset variant perfect-artificial is not stored as uniform-gauss"
        );
    }

    #[test]
    fn test_into_tuple_order() {
        let data = TrainTestData {
            training_parameters: Array2::<f64>::zeros((1, 1)),
            training_reflectances: Array2::zeros((1, 2)),
            test_parameters: Array2::zeros((1, 3)),
            test_reflectances: Array2::zeros((1, 4)),
        };
        let (a, b, c, d) = data.into_tuple();
        assert_eq!([a.ncols(), b.ncols(), c.ncols(), d.ncols()], [1, 2, 3, 4]);

        let data = UniformGaussData {
            uniform_reflectances: Array2::<f32>::zeros((2, 5)),
            gauss_reflectances: Array2::zeros((3, 5)),
        };
        let (uniform, gauss) = data.into_tuple();
        assert_eq!((uniform.nrows(), gauss.nrows()), (2, 3));
    }
}
