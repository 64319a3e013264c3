//! Public API types

// Re-export public types from each route

pub mod contact {
    pub use crate::api::routes::contact::public::*;
}
