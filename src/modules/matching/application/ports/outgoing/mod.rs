pub mod match_request_query;
pub mod match_request_store;

pub use match_request_query::{MatchQueryError, MatchRequestQuery};
pub use match_request_store::{MatchRequestStore, MatchRequestTxn, MatchStoreError};
