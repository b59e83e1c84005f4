pub mod errors;
pub mod http;
pub mod router;
pub mod serde;
pub mod utils;
