//! Top-down merge sort. Stable: the merge takes the left element on ties, so
//! equal elements keep their relative input order.

pub struct SortImpl;

impl crate::Sort for SortImpl {
    fn name() -> String {
        "mergesort".into()
    }

    fn sort<T>(input: &[T]) -> Vec<T>
    where
        T: Ord + Clone,
    {
        sort(input)
    }
}

pub fn sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut v = input.to_vec();
    if v.len() > 1 {
        let end = v.len() - 1;
        merge_sort(&mut v, 0, end);
    }
    v
}

/// Sorts `v[left..=right]` by recursive midpoint split.
fn merge_sort<T: Ord + Clone>(v: &mut [T], left: usize, right: usize) {
    if left < right {
        let mid = left + (right - left) / 2;
        merge_sort(v, left, mid);
        merge_sort(v, mid + 1, right);
        merge(v, left, mid, right);
    }
}

/// Merges the sorted sub-ranges `v[left..=mid]` and `v[mid+1..=right]` using
/// two temporary buffers. Buffers are released when the merge returns, so
/// live auxiliary storage stays O(n).
fn merge<T: Ord + Clone>(v: &mut [T], left: usize, mid: usize, right: usize) {
    let lhs = v[left..=mid].to_vec();
    let rhs = v[mid + 1..=right].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < lhs.len() && j < rhs.len() {
        // `<=` keeps the merge stable.
        if lhs[i] <= rhs[j] {
            v[k] = lhs[i].clone();
            i += 1;
        } else {
            v[k] = rhs[j].clone();
            j += 1;
        }
        k += 1;
    }

    while i < lhs.len() {
        v[k] = lhs[i].clone();
        i += 1;
        k += 1;
    }

    while j < rhs.len() {
        v[k] = rhs[j].clone();
        j += 1;
        k += 1;
    }
}
