pub mod auth;
pub mod normalizer;
pub mod query;
pub mod stats;
