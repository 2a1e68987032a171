pub mod randomize_parameters;
