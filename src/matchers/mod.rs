pub mod error_key;

pub use error_key::classify_error_message;
