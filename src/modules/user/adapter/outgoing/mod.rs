pub mod profile_mapper;
pub mod profile_query_postgres;
pub mod profile_repository_postgres;
