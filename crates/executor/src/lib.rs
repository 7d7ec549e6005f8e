pub mod results;
pub mod scripts;

pub use results::*;
pub use scripts::*;
