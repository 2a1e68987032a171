pub mod plan_wall;
pub mod rasterize_plan;
pub mod render;
