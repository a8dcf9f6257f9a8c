//! Testbed for comparing classic in-memory sorting algorithms on integer
//! sequences: bubble sort, shell sort, merge sort and quicksort, each kept in
//! its canonical textbook form so the measured characteristics stay honest.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub mod patterns;
pub mod stable;
pub mod unstable;

// Re-exported for `instantiate_sort_tests!`.
pub use paste::paste;

/// The integer sequence every strategy consumes and produces.
pub type Sequence = Vec<i32>;

/// One concrete sorting strategy.
///
/// A strategy never mutates its input. It sorts a private working copy and
/// returns it, so the result is an independent, non-decreasing permutation of
/// the input. The generic bound lets tests observe stability with elements
/// that carry a tag outside their ordering key; the driver-facing surface
/// ([`sort`]) stays fixed to integer sequences.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(input: &[T]) -> Vec<T>
    where
        T: Ord + Clone;
}

/// Selector for the four strategies. Closed by design, the dispatch in
/// [`sort`] is an exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortingType {
    Bubble,
    Shell,
    Merge,
    Quick,
}

impl SortingType {
    /// All strategies in canonical benchmark order.
    pub const ALL: [SortingType; 4] = [
        SortingType::Bubble,
        SortingType::Shell,
        SortingType::Merge,
        SortingType::Quick,
    ];

    /// The label used by the driver CLI and benchmark reports.
    pub fn label(self) -> &'static str {
        match self {
            SortingType::Bubble => "bubble",
            SortingType::Shell => "shell",
            SortingType::Merge => "merge",
            SortingType::Quick => "quick",
        }
    }
}

impl fmt::Display for SortingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortingType {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(SortingType::Bubble),
            "shell" => Ok(SortingType::Shell),
            "merge" => Ok(SortingType::Merge),
            "quick" => Ok(SortingType::Quick),
            other => Err(SortError::UnsupportedVariant(other.to_string())),
        }
    }
}

/// Failures a single sort invocation can surface. Local to that invocation,
/// never retried, never swallowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// No input sequence was supplied. An absent sequence is rejected rather
    /// than treated as empty.
    #[error("no input sequence was supplied")]
    InvalidInput,
    /// Unknown algorithm label. Only reachable at the string boundary; the
    /// enumeration itself is closed.
    #[error("unknown sorting type `{0}`")]
    UnsupportedVariant(String),
}

/// Sorts a copy of `input` with the selected strategy.
pub fn sort(ty: SortingType, input: &[i32]) -> Sequence {
    match ty {
        SortingType::Bubble => unstable::bubblesort::sort(input),
        SortingType::Shell => unstable::shellsort::sort(input),
        SortingType::Merge => stable::mergesort::sort(input),
        SortingType::Quick => unstable::quicksort::sort(input),
    }
}

/// Like [`sort`], for callers whose configuration may fail to produce an
/// input sequence at all.
pub fn try_sort(ty: SortingType, input: Option<&[i32]>) -> Result<Sequence, SortError> {
    let input = input.ok_or(SortError::InvalidInput)?;
    Ok(sort(ty, input))
}

/// Instantiates the full per-strategy test suite for a [`Sort`]
/// implementation. Meant to be invoked once per strategy, each inside its own
/// module.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!(
            @gen $sort_impl;
            empty,
            single_element,
            all_equal,
            known_sequence,
            reverse_sorted,
            random_uniform_matches_std,
            random_zipf_matches_std,
            is_permutation,
            idempotent,
            input_not_mutated,
        );
    };
    (@gen $sort_impl:ty; $($test_name:ident),+ $(,)?) => {
        $crate::paste! {
            $(
                #[test]
                fn [<test_ $test_name>]() {
                    $crate::tests::$test_name::<$sort_impl>();
                }
            )+
        }
    };
}
