pub mod match_request_mapper;
pub mod match_request_query_postgres;
pub mod match_request_store_postgres;
pub mod sea_orm_entity;
