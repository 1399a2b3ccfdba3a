pub mod mentor_query;

pub use mentor_query::{MentorQuery, MentorQueryError};
