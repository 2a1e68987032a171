pub mod colour;
pub mod colour_mode;
pub mod palette;
pub mod pixel_buffer;
pub mod render_parameters;
pub mod resolved_colours;
pub mod viewport;
