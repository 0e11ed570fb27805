//! Handler implementations

mod common;
pub mod json;
pub mod print_aware;
pub mod text;

pub use json::JsonHandler;
pub use print_aware::PrintAwareHandler;
pub use text::TextHandler;

pub use crate::core::Handler;
