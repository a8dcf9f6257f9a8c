//! Canonical unoptimized bubble sort. Deliberately no no-swap early exit, the
//! full quadratic pass structure is the behavior being benchmarked.

pub struct SortImpl;

impl crate::Sort for SortImpl {
    fn name() -> String {
        "bubblesort".into()
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
    let n = v.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..(n - i - 1) {
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
            }
        }
    }

    v
}
