//! Menu actions.

pub mod add;
pub mod list;
