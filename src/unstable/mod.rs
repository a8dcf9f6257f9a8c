pub mod bubblesort;
pub mod quicksort;
pub mod shellsort;
