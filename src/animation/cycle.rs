/// Index selected at `frame` when stepping through `len` candidates every `period` frames.
///
/// Computes `floor(frame / period) mod len` with Euclidean division, so the selection is stable
/// for any frame (negative included) and wraps without bound. A `period` of 0 behaves like 1 and
/// an empty candidate list always selects 0.
pub fn cycle_index(frame: i64, period: u64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let period = i128::from(period.max(1));
    let step = i128::from(frame).div_euclid(period);
    step.rem_euclid(len as i128) as usize
}

/// Candidate selected at `frame` from a fixed, non-empty table.
pub fn cycle<T, const N: usize>(frame: i64, period: u64, items: &[T; N]) -> &T {
    const { assert!(N > 0, "cycle needs at least one candidate") };
    &items[cycle_index(frame, period, N)]
}

#[cfg(test)]
#[path = "../../tests/unit/animation/cycle.rs"]
mod tests;
