//! Shell sort with the halving gap sequence `n/2, n/4, .., 1`.

pub struct SortImpl;

impl crate::Sort for SortImpl {
    fn name() -> String {
        "shellsort".into()
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

    let mut gap = n / 2;
    while gap > 0 {
        // Gapped insertion sort: shift gapped predecessors right until the
        // held value fits.
        for i in gap..n {
            let value = v[i].clone();
            let mut j = i;
            while j >= gap && v[j - gap] > value {
                v[j] = v[j - gap].clone();
                j -= gap;
            }
            v[j] = value;
        }
        gap /= 2;
    }

    v
}
