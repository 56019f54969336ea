pub mod random_values;

pub use random_values::{generate_random_values, generate_unique_values};
