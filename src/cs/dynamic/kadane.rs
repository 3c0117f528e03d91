/// Kadane's linear scan for the maximum subarray sum in a slice of `i32`.
///
/// A subarray is a contiguous, non-empty run of elements. If the input slice
/// is empty there is no such run and the function returns `None`.
///
/// # Examples
///
/// ```
/// use katas::cs::dynamic::kadane::max_subarray_sum;
///
/// let values = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
/// // The subarray [4, -1, 2, 1] has the largest sum, 6
/// assert_eq!(max_subarray_sum(&values), Some(6));
/// ```
pub fn max_subarray_sum(values: &[i32]) -> Option<i32> {
    let (&first, rest) = values.split_first()?;

    // best_ending_here is the largest sum of a subarray ending at the current
    // index: either the previous run extended, or a fresh run starting here.
    let mut best_ending_here = first;
    let mut best = first;

    for &val in rest {
        best_ending_here = val.max(best_ending_here + val);
        best = best.max(best_ending_here);
    }

    Some(best)
}

/// Brute-force draft of the same exercise: accumulates the sum over every
/// start index in O(n^2). The tests cross-check the linear scan against it.
///
/// # Examples
///
/// ```
/// use katas::cs::dynamic::kadane::max_subarray_sum_brute;
///
/// assert_eq!(max_subarray_sum_brute(&[1, -2, 3, 5, -1]), Some(8));
/// ```
pub fn max_subarray_sum_brute(values: &[i32]) -> Option<i32> {
    if values.is_empty() {
        return None;
    }

    let mut best = values[0];
    for start in 0..values.len() {
        let mut running = 0;
        for &val in &values[start..] {
            running += val;
            best = best.max(running);
        }
    }

    Some(best)
}
