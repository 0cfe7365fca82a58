pub mod credit_limit;
pub mod emotion;
pub mod user;
