pub mod render_command;
