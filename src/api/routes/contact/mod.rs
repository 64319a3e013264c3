pub mod public;
mod router;
pub mod validate;

pub use router::router;
