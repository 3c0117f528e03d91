/// Counts the monotone lattice paths through a `rows x cols` grid.
///
/// A robot starts in the top-left cell and may only step right or down; the
/// count is the number of distinct routes to the bottom-right cell. A grid
/// with zero rows or zero columns has no cells and therefore no paths.
///
/// Uses a single rolling row: each cell is reachable from its left and upper
/// neighbor, so one in-place sweep per row accumulates the counts. The
/// exercise constraints (dimensions up to 100, answer at most 2 * 10^9) fit
/// comfortably in `u64`.
///
/// # Examples
///
/// ```
/// use katas::cs::dynamic::unique_paths::unique_paths;
///
/// assert_eq!(unique_paths(3, 7), 28);
/// assert_eq!(unique_paths(3, 2), 3);
/// ```
pub fn unique_paths(rows: usize, cols: usize) -> u64 {
    if rows == 0 || cols == 0 {
        return 0;
    }

    // The first row is all ones: only rightward moves reach it.
    let mut paths = vec![1_u64; cols];

    for _ in 1..rows {
        for col in 1..cols {
            // paths[col] still holds the count from the row above,
            // paths[col - 1] already holds the count to the left.
            paths[col] += paths[col - 1];
        }
    }

    paths[cols - 1]
}
