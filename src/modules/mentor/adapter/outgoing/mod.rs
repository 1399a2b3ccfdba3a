pub mod mentor_query_postgres;
