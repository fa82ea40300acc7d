use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};

use super::client::DealsApiClient;

#[derive(Debug, Clone)]
pub struct GeneratedPost {
    pub text: String,
    pub created_at: DateTime<Utc>,
}

pub struct FormState {
    pub api: DealsApiClient,
    last_post: Mutex<Option<GeneratedPost>>,
}

impl FormState {
    pub fn new(api: DealsApiClient) -> Self {
        Self {
            api,
            last_post: Mutex::new(None),
        }
    }

    /// Replaces whatever post was held before.
    pub fn store(&self, text: String) -> GeneratedPost {
        let post = GeneratedPost {
            text,
            created_at: Utc::now(),
        };
        *self.last_post.lock().unwrap_or_else(PoisonError::into_inner) = Some(post.clone());
        post
    }

    pub fn current(&self) -> Option<GeneratedPost> {
        self.last_post
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
