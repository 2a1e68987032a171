pub mod errors;
pub mod resolve_colours;
