pub mod mergesort;
