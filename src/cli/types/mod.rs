//! Type-safe wrappers and enums for MLS data collection.

pub mod category;
pub mod time;


pub use category::StatCategory;
pub use time::Season;
