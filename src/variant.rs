//! The declarative table of dataset variants.
//!
//! A variant fixes which files are read, which reflectance band they are
//! normalized by and how many parameter columns survive.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::DatasetError;
use crate::readers::data_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetVariant {
    /// Two-dimensional parametric data.
    TwoDimensional,
    /// Artificial data where only blood volume fraction and vessel saturation vary.
    PerfectArtificial,
    /// Uniform vs. gaussian sampled reflectances for a logistic regression setup.
    LogisticRegressionArtificial,
}

/// How the files of a variant are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// A training and a test split, each with parameters and reflectances.
    TrainTest,
    /// Two reflectance-only sets from different parameter distributions.
    UniformGauss,
}

impl Layout {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TrainTest => "train-test",
            Self::UniformGauss => "uniform-gauss",
        }
    }
}

/// The files of one split, e.g. the training half of a train/test variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitFiles {
    pub label: &'static str,
    pub parameters: Option<&'static str>,
    pub reflectances: &'static str,
}

/// Everything needed to assemble one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantSpec {
    pub variant: DatasetVariant,
    pub layout: Layout,
    /// Splits in the order they are loaded and returned.
    pub splits: [SplitFiles; 2],
    pub reference_band: usize,
    /// Keep only this many leading parameter columns.
    pub parameter_columns: Option<usize>,
}

impl VariantSpec {
    /// Every file the variant reads, in load order.
    pub fn files(&self) -> Vec<&'static str> {
        self.splits
            .iter()
            .flat_map(|split| {
                split
                    .parameters
                    .into_iter()
                    .chain(std::iter::once(split.reflectances))
            })
            .collect()
    }

    /// Full paths of the files under `location` that do not exist.
    pub fn missing_files(&self, location: &str) -> Vec<String> {
        self.files()
            .into_iter()
            .map(|name| data_path(location, name))
            .filter(|path| !Path::new(path).exists())
            .collect()
    }
}

impl DatasetVariant {
    pub const ALL: [DatasetVariant; 3] = [
        Self::TwoDimensional,
        Self::PerfectArtificial,
        Self::LogisticRegressionArtificial,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TwoDimensional => "two-dimensional",
            Self::PerfectArtificial => "perfect-artificial",
            Self::LogisticRegressionArtificial => "logistic-regression-artificial",
        }
    }

    pub fn spec(&self) -> VariantSpec {
        match self {
            Self::TwoDimensional => VariantSpec {
                variant: *self,
                layout: Layout::TrainTest,
                splits: [
                    SplitFiles {
                        label: "training",
                        parameters: Some(TWO_D_TRAINING_PARAMETERS),
                        reflectances: TWO_D_TRAINING_REFLECTANCES,
                    },
                    SplitFiles {
                        label: "test",
                        parameters: Some(TWO_D_TEST_PARAMETERS),
                        reflectances: TWO_D_TEST_REFLECTANCES,
                    },
                ],
                reference_band: TWO_D_REFERENCE_BAND,
                parameter_columns: None,
            },
            Self::PerfectArtificial => VariantSpec {
                variant: *self,
                layout: Layout::TrainTest,
                splits: [
                    SplitFiles {
                        label: "training",
                        parameters: Some(PERFECT_TRAINING_PARAMETERS),
                        reflectances: PERFECT_TRAINING_REFLECTANCES,
                    },
                    SplitFiles {
                        label: "test",
                        parameters: Some(PERFECT_TEST_PARAMETERS),
                        reflectances: PERFECT_TEST_REFLECTANCES,
                    },
                ],
                reference_band: PERFECT_REFERENCE_BAND,
                parameter_columns: Some(PERFECT_PARAMETER_COLUMNS),
            },
            Self::LogisticRegressionArtificial => VariantSpec {
                variant: *self,
                layout: Layout::UniformGauss,
                splits: [
                    SplitFiles {
                        label: "uniform",
                        parameters: None,
                        reflectances: LOGISTIC_UNIFORM_REFLECTANCES,
                    },
                    SplitFiles {
                        label: "gauss",
                        parameters: None,
                        reflectances: LOGISTIC_GAUSS_REFLECTANCES,
                    },
                ],
                reference_band: LOGISTIC_REFERENCE_BAND,
                parameter_columns: None,
            },
        }
    }
}

impl fmt::Display for DatasetVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DatasetVariant {
    type Err = DatasetError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name() == name)
            .ok_or_else(|| DatasetError::UnknownVariant(name.to_string()))
    }
}
