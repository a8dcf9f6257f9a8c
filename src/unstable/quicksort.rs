//! Quicksort with the Lomuto partition scheme and the last element of the
//! active range as pivot. The fixed pivot choice makes pre-sorted and
//! reverse-sorted inputs degrade to O(n^2) with O(n) recursion depth; that
//! degradation is part of what the benchmark measures, so no randomized or
//! median-of-three pivoting here.

pub struct SortImpl;

impl crate::Sort for SortImpl {
    fn name() -> String {
        "quicksort".into()
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
    quicksort(&mut v);
    v
}

fn quicksort<T: Ord>(mut v: &mut [T]) {
    // Recurse into the left side, loop on the right.
    while v.len() > 1 {
        let pivot_pos = partition(v);

        let (left, right) = v.split_at_mut(pivot_pos);
        quicksort(left);
        v = &mut right[1..];
    }
}

/// Lomuto partition of the whole slice around its last element.
///
/// Scans left to right, swapping elements strictly below the pivot into the
/// boundary region, then swaps the pivot behind that region. Returns the
/// pivot's final index; everything before it compares below the pivot,
/// everything after it compares greater or equal.
fn partition<T: Ord>(v: &mut [T]) -> usize {
    let end = v.len() - 1;
    let mut boundary = 0;

    for j in 0..end {
        if v[j] < v[end] {
            v.swap(boundary, j);
            boundary += 1;
        }
    }

    v.swap(boundary, end);
    boundary
}
