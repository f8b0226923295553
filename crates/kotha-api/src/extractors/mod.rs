//! Request extractors

mod identity;
mod validated;

pub use identity::Identity;
pub use validated::ValidatedJson;
