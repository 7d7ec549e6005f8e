pub mod humanize;
pub mod report;

pub use humanize::*;
pub use report::*;
