//! Copy-vs-view report.
//!
//! Reshaping, transposing, raveling and squeezing a contiguous array in
//! `ndarray` yields views over the same buffer, as does reading its bytes as
//! a narrower integer type. This module derives those views from a base array
//! and checks, by address range, which of them still point into the base
//! allocation.

use std::mem;

use ndarray::{Array1, ArrayBase, ArrayView1, Axis, Data, Dimension};

use crate::error::DrillError;

/// One derived array and whether it overlaps the base allocation.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewEntry {
    pub name: String,
    pub shape: Vec<usize>,
    /// False for deliberate copies included as a control.
    pub is_view: bool,
    pub shares_memory: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewReport {
    pub entries: Vec<ViewEntry>,
}

impl ViewReport {
    /// True when every derived view shares memory with the base.
    pub fn all_views_share_memory(&self) -> bool {
        self.entries
            .iter()
            .filter(|e| e.is_view)
            .all(|e| e.shares_memory)
    }

    pub fn get(&self, name: &str) -> Option<&ViewEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    fn push<S, D>(&mut self, name: &str, base: &ArrayView1<'_, i64>, derived: &ArrayBase<S, D>, is_view: bool)
    where
        S: Data,
        D: Dimension,
    {
        let shares = shares_memory(base, derived);
        log::debug!("{} shares memory with A: {}", name, shares);
        self.entries.push(ViewEntry {
            name: name.to_string(),
            shape: derived.shape().to_vec(),
            is_view,
            shares_memory: shares,
        });
    }
}

/// Half-open byte range `[start, end)` spanned by the elements of `a`.
fn byte_span<S, D>(a: &ArrayBase<S, D>) -> Option<(usize, usize)>
where
    S: Data,
    D: Dimension,
{
    if a.is_empty() {
        return None;
    }
    let elem = mem::size_of::<S::Elem>() as isize;
    let base = a.as_ptr() as isize;
    let (mut lo, mut hi) = (0isize, 0isize);
    for (&len, &stride) in a.shape().iter().zip(a.strides()) {
        let reach = (len as isize - 1) * stride * elem;
        if reach < 0 {
            lo += reach;
        } else {
            hi += reach;
        }
    }
    Some(((base + lo) as usize, (base + hi + elem) as usize))
}

/// Whether the memory spanned by `a` and `b` overlaps.
///
/// This is a bounds check, not an exact element check: two interleaved
/// strided views of one buffer count as sharing.
pub fn shares_memory<S1, D1, S2, D2>(a: &ArrayBase<S1, D1>, b: &ArrayBase<S2, D2>) -> bool
where
    S1: Data,
    S2: Data,
    D1: Dimension,
    D2: Dimension,
{
    match (byte_span(a), byte_span(b)) {
        (Some((a_start, a_end)), Some((b_start, b_end))) => a_start < b_end && b_start < a_end,
        _ => false,
    }
}

/// Derive reshaped, transposed, raveled, squeezed and reinterpreted views of
/// `base` and report which share its memory. `base` must be contiguous and
/// `rows * cols` must equal `base.len()`.
pub fn view_report(base: ArrayView1<'_, i64>, rows: usize, cols: usize) -> Result<ViewReport, DrillError> {
    let reshape_err = || DrillError::invalid_shape(format!("{} elements", rows * cols), base.shape());
    if rows * cols != base.len() {
        return Err(reshape_err());
    }
    let words = base
        .to_slice()
        .ok_or_else(|| DrillError::invalid_shape("a contiguous sequence", base.shape()))?;
    // each i64 reads back as two i32 halves
    let halves: ArrayView1<'_, i32> = ArrayView1::from(bytemuck::cast_slice::<i64, i32>(words));

    let grid = base.into_shape((rows, cols)).map_err(|_| reshape_err())?;
    let row = base.into_shape((1, base.len())).map_err(|_| reshape_err())?;
    let col = base.into_shape((base.len(), 1)).map_err(|_| reshape_err())?;
    let raveled = grid.into_shape(rows * cols).map_err(|_| reshape_err())?;
    let squeezed = col.remove_axis(Axis(1));
    let copy = base.to_owned();

    let grid_name = format!("A{}x{}", rows, cols);
    let mut report = ViewReport::default();
    report.push(&grid_name, &base, &grid, true);
    report.push("Arow", &base, &row, true);
    report.push("Acol", &base, &col, true);
    report.push(&format!("{}.ravel()", grid_name), &base, &raveled, true);
    report.push("Acol.squeeze()", &base, &squeezed, true);
    report.push(&format!("{}.T", grid_name), &base, &grid.t(), true);
    report.push("A.view(i32)", &base, &halves, true);
    report.push("A.to_owned()", &base, &copy, false);

    if report.all_views_share_memory() {
        log::info!("All operations are copy-free.");
    } else {
        log::warn!("Some operations are not copy-free.");
    }
    Ok(report)
}

/// The classic demonstration: `arange(12)` viewed as a 4x3 grid.
pub fn arange_report() -> Result<ViewReport, DrillError> {
    let base: Array1<i64> = (0..12).collect();
    view_report(base.view(), 4, 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{s, Array2};

    #[test]
    fn disjoint_slices_do_not_share() {
        let a: Array1<i64> = (0..10).collect();
        let left = a.slice(s![..5]);
        let right = a.slice(s![5..]);
        assert!(!shares_memory(&left, &right));
        assert!(shares_memory(&a, &right));
    }

    #[test]
    fn reversed_view_still_shares() {
        let a = Array2::<i64>::zeros((3, 4));
        let flipped = a.slice(s![..;-1, ..]);
        assert!(shares_memory(&a, &flipped));
    }

    #[test]
    fn empty_arrays_share_nothing() {
        let a: Array1<i64> = Array1::zeros(0);
        assert!(!shares_memory(&a, &a));
    }

    #[test]
    fn report_rejects_bad_grid() {
        let a: Array1<i64> = (0..12).collect();
        assert!(view_report(a.view(), 5, 3).is_err());
    }

    #[test]
    fn report_rejects_strided_base() {
        let a: Array1<i64> = (0..24).collect();
        let every_other = a.slice(s![..;2]);
        assert!(matches!(
            view_report(every_other, 4, 3),
            Err(DrillError::InvalidInputShape { .. })
        ));
    }
}
