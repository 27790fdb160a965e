pub mod algorithms;

pub use algorithms::longest_path_ranks;
