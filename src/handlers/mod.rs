pub mod deals;
pub mod health;
pub mod search;
