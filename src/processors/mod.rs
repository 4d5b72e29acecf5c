pub mod normalizer;
pub mod validator;

pub use validator::FileValidator;
