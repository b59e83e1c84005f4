mod router;

pub use router::*;
