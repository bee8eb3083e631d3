//! Common imports for assembling datasets.

pub use crate::error::{DatasetError, Result};
pub use crate::number::Number;
pub use crate::variant::{DatasetVariant, Layout, VariantSpec};

pub use crate::assemble::{TrainTestData, UniformGaussData};
