//! Utility functions for shaping loaded arrays.

use ndarray::prelude::*;

use crate::prelude::*;

/// Keeps only the first `n` columns of `array`.
pub fn leading_columns<T: Number>(array: Array2<T>, n: usize) -> Result<Array2<T>> {
    let columns = array.ncols();
    if columns < n {
        return Err(DatasetError::Shape {
            expected_columns: n,
            columns,
        });
    }
    if columns == n {
        return Ok(array);
    }
    Ok(array.slice(s![.., ..n]).to_owned())
}

/// Checks that the parameters and reflectances of one split describe the same samples.
pub fn check_aligned<T: Number>(
    split: &'static str,
    parameters: &Array2<T>,
    reflectances: &Array2<T>,
) -> Result<()> {
    if parameters.nrows() != reflectances.nrows() {
        return Err(DatasetError::RowMismatch {
            split,
            parameters: parameters.nrows(),
            reflectances: reflectances.nrows(),
        });
    }
    Ok(())
}
