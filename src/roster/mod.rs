//! MLS Club Roster Profile PDF parsing.
//!
//! Pages are turned into positioned text lines ([`layout`]), team details and
//! player tables are recovered from those lines ([`parser`]), and the
//! resulting [`RosterRecord`]s are written one CSV per season.

pub mod discovery;
pub mod layout;
pub mod parser;
pub mod summary;
pub mod types;

pub use discovery::{find_roster_pdfs, output_file_name};
pub use layout::{PageLayout, TextFragment, TextLine};
pub use parser::{ParserConfig, RosterParser};
pub use summary::{summarize, LabelCount, RosterSummary};
pub use types::{write_roster_csv, Designations, RosterCategory, RosterRecord};
