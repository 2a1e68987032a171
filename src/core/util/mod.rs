pub mod round;

pub use round::{round_half_up, round_to_decimals};
