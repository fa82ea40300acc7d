//! The `deals-form` process: a single page that collects search parameters,
//! calls `POST /deals` on the API, and keeps the last generated post around
//! for display and export.

pub mod client;
pub mod export;
pub mod handlers;
pub mod state;
pub mod submission;

pub use client::DealsApiClient;
pub use state::{FormState, GeneratedPost};
pub use submission::DealsForm;
