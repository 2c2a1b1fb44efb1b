pub mod forms;
pub mod io;
pub mod output;
pub mod summary;
pub mod test_mode;
mod shell;

pub use shell::run_cli;
