pub mod posts;
pub mod query;
pub mod response;
