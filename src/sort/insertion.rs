//! In-place insertion sort.

/// Sorts the slice in place, ascending, and returns the number of
/// inversions in the original input.
///
/// An inversion is a pair of positions `(i, j)` with `i < j` and
/// `arr[i] > arr[j]` (strict, so equal elements never count). Each
/// adjacent swap performed by the sort removes exactly one inversion,
/// which is why the swap count and the inversion count coincide.
///
/// The sort is stable: equal elements keep their relative order.
///
/// Runs in `O(n + inversions)` time, worst case `O(n^2)` for a
/// reverse-sorted input. Allocation-free.
///
/// # Examples
///
/// ```
/// use u_exact::sort::insertion_sort;
///
/// let mut arr = [3, 1, 2];
/// let inversions = insertion_sort(&mut arr);
///
/// assert_eq!(arr, [1, 2, 3]);
/// assert_eq!(inversions, 2);
/// ```
pub fn insertion_sort<T: Ord>(arr: &mut [T]) -> u64 {
    let mut inversions = 0u64;

    for i in 1..arr.len() {
        let mut j = i;

        // Shift the key left past every strictly greater predecessor.
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            inversions += 1;
            j -= 1;
        }
    }

    inversions
}

/// Counts the inversions in a slice without modifying it.
///
/// Sorts a scratch copy and returns the shift count. Same strictness
/// rule as [`insertion_sort`]: ties are not inversions.
///
/// # Examples
///
/// ```
/// use u_exact::sort::count_inversions;
///
/// assert_eq!(count_inversions(&[5, 4, 3, 2, 1]), 10);
/// assert_eq!(count_inversions(&[1, 2, 3]), 0);
/// ```
pub fn count_inversions<T: Ord + Clone>(arr: &[T]) -> u64 {
    let mut scratch = arr.to_vec();
    insertion_sort(&mut scratch)
}
