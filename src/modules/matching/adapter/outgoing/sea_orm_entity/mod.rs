pub mod match_requests;
