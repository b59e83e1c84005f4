mod api_headers;
mod api_response;
mod headers;

pub use api_headers::*;
pub use api_response::*;
pub use headers::*;
