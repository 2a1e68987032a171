pub mod pixel_format;
pub mod rand_source;
