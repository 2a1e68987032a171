pub mod generate_palette;
pub mod ports;
