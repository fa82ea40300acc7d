use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub amadeus_client_id: String,
    pub amadeus_client_secret: String,
    pub amadeus_base_url: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            amadeus_client_id: env::var("AMADEUS_CLIENT_ID").unwrap_or_default(),
            amadeus_client_secret: env::var("AMADEUS_CLIENT_SECRET").unwrap_or_default(),
            amadeus_base_url: env::var("AMADEUS_BASE_URL")
                .unwrap_or_else(|_| "https://test.api.amadeus.com".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
        }
    }
}

/// Settings for the `deals-form` process, which talks to the API over HTTP.
#[derive(Clone, Debug)]
pub struct FormConfig {
    pub port: u16,
    pub api_url: String,
}

impl FormConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("FORM_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8501),
            api_url: env::var("DEALS_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
        }
    }
}
