pub mod domain;
pub mod mentor_use_cases;
pub mod ports;
pub mod service;

pub use mentor_use_cases::MentorUseCases;
