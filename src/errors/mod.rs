mod api_errors;

pub use api_errors::*;
