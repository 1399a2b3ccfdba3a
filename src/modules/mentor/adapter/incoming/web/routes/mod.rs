mod list_mentors;

pub use list_mentors::*;
