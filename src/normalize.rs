//! Quotient normalization of reflectance spectra.
//!
//! Dividing every band of a spectrum by one reference band removes the
//! unknown multiplicative illumination factor, leaving a scale-invariant
//! representation.

use ndarray::prelude::*;
use ndarray::Zip;

use crate::prelude::*;

/// Returns a copy of `reflectances` in which every row is divided by its value
/// at column `band`.
///
/// The source array is left untouched. A row whose reference value is zero is
/// divided anyway and ends up with `inf`/`NaN` entries; those rows are counted
/// and reported as a warning.
///
/// # Errors
/// `DatasetError::BandOutOfRange` if `band` is not a column of `reflectances`.
pub fn normalize_quotient<T: Number>(reflectances: &Array2<T>, band: usize) -> Result<Array2<T>> {
    let reference = reference_band(reflectances, band)?;
    let mut normalized = reflectances.to_owned();
    Zip::from(normalized.rows_mut())
        .and(&reference)
        .for_each(|mut row, &r| row.mapv_inplace(|v| v / r));
    Ok(normalized)
}

/// Same as `normalize_quotient` with the rows divided in parallel.
pub fn par_normalize_quotient<T: Number>(
    reflectances: &Array2<T>,
    band: usize,
) -> Result<Array2<T>> {
    let reference = reference_band(reflectances, band)?;
    let mut normalized = reflectances.to_owned();
    Zip::from(normalized.rows_mut())
        .and(&reference)
        .par_for_each(|mut row, &r| row.mapv_inplace(|v| v / r));
    Ok(normalized)
}

fn reference_band<T: Number>(reflectances: &Array2<T>, band: usize) -> Result<Array1<T>> {
    let bands = reflectances.ncols();
    if band >= bands {
        return Err(DatasetError::BandOutOfRange { band, bands });
    }

    let reference = reflectances.column(band).to_owned();
    let degenerate = reference.iter().filter(|&&r| r == T::zero() || !r.is_finite()).count();
    if degenerate > 0 {
        log::warn!(
            "{degenerate} of {} rows have a zero or non-finite value at reference band {band}",
            reference.len()
        );
    }
    Ok(reference)
}
