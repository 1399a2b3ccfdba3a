mod list_mentors_service;

pub use list_mentors_service::ListMentorsService;
