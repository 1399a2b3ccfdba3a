pub mod avatar_policy;
