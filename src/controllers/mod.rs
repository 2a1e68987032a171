pub mod cafe_wall;
pub mod cli;
pub mod ports;
