pub(crate) mod common;
pub(crate) mod merge_sort;
#[cfg(feature = "rayon")]
pub(crate) mod par;
pub(crate) mod quick_sort;
