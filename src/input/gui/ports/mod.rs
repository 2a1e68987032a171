pub mod presenter;
pub mod presenter_factory;
