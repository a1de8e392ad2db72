//! Lomuto partition with the last element as pivot.

/// Partitions `v` around its last element and returns the pivot's final index.
///
/// Afterwards every element at an index `<=` the returned one is `<=` the pivot, and every
/// element after it is `>` the pivot. Ties end up on the left side.
///
/// A single element slice returns `0`. An empty slice has no pivot, it is left untouched and `0`
/// is returned.
#[inline]
pub fn partition<T: Ord>(v: &mut [T]) -> usize {
    lomuto_partition(v, &mut |a: &T, b: &T| a.lt(b))
}

pub(crate) fn lomuto_partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let Some((pivot, v_without_pivot)) = v.split_last_mut() else {
        return 0;
    };
    let pivot = &*pivot;

    // Number of elements found `<=` pivot so far, also the next slot for one.
    let mut le_count = 0;
    for r in 0..v_without_pivot.len() {
        // `a <= pivot` expressed with the strict ordering only.
        if !is_less(pivot, &v_without_pivot[r]) {
            v_without_pivot.swap(le_count, r);
            le_count += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(le_count, len - 1);

    le_count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_partitioned(v: &[i32], pivot_pos: usize) {
        let pivot = v[pivot_pos];
        assert!(v[..pivot_pos].iter().all(|x| *x <= pivot), "{v:?} @ {pivot_pos}");
        assert!(v[pivot_pos + 1..].iter().all(|x| *x > pivot), "{v:?} @ {pivot_pos}");
    }

    #[test]
    fn empty() {
        let mut v: [i32; 0] = [];
        assert_eq!(partition(&mut v), 0);
    }

    #[test]
    fn single() {
        let mut v = [42];
        assert_eq!(partition(&mut v), 0);
        assert_eq!(v, [42]);
    }

    #[test]
    fn mixed() {
        let mut v = [10, 7, 8, 9, 1, 5];
        let pivot_pos = partition(&mut v);

        assert_eq!(pivot_pos, 1);
        assert_eq!(v[pivot_pos], 5);
        check_partitioned(&v, pivot_pos);
    }

    #[test]
    fn pivot_is_max() {
        let mut v = [3, 1, 2, 9];
        let pivot_pos = partition(&mut v);

        assert_eq!(pivot_pos, 3);
        assert_eq!(v, [3, 1, 2, 9]);
    }

    #[test]
    fn pivot_is_min() {
        let mut v = [5, 4, 3, 2, 1];
        let pivot_pos = partition(&mut v);

        assert_eq!(pivot_pos, 0);
        assert_eq!(v[0], 1);
        check_partitioned(&v, pivot_pos);
    }

    #[test]
    fn ties_go_left() {
        let mut v = [3, 3, 3, 3];
        assert_eq!(partition(&mut v), 3);

        let mut v = [2, 4, 2, 1, 2];
        let pivot_pos = partition(&mut v);
        assert_eq!(pivot_pos, 3);
        check_partitioned(&v, pivot_pos);
    }

    #[test]
    fn counts_comparisons() {
        let mut v = [4, 8, 1, 6, 5];
        let mut comps = 0;
        let pivot_pos = lomuto_partition(&mut v, &mut |a: &i32, b: &i32| {
            comps += 1;
            a < b
        });

        assert_eq!(comps, 4);
        check_partitioned(&v, pivot_pos);
    }
}
