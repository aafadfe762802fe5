//! Command implementations

mod decide;
mod validate;

pub use decide::decide;
pub use validate::validate;
