pub mod content_timestamp;
pub mod parser;

pub use content_timestamp::{extract_content_timestamp, CONTENT_TIMESTAMP_FORMAT};
pub use parser::{open_listing, parse_line, parse_listing, ParseOptions, ParsedListing, LISTING_TIMESTAMP_FORMAT};
pub use s3_listing_domain::ObjectRecord;
