pub mod ai;
pub mod deals;
pub mod provider;
