pub mod profile;
pub mod selection;

pub use profile::{Education, Header, Job, Profile};
pub use selection::SelectionSet;
