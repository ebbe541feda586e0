// Reductions: full or single-axis sum, and sum-to (the reverse of broadcast).
pub mod sum;
pub mod sum_to;

pub use sum::sum_op;
pub use sum_to::sum_to_op;
