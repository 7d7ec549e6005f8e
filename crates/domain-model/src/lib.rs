pub mod object_record;
pub mod script_command;
pub mod sort;

pub use object_record::*;
pub use script_command::*;
pub use sort::*;
