pub mod generate_palette;
pub mod randomize_parameters;
pub mod rasterize_wall;
pub mod resolve_colours;
