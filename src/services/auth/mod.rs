pub mod api_key;

pub use api_key::{API_KEY_SCHEME, ApiKeyError, get_api_key};
