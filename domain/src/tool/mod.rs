//! Tool domain module
//!
//! A [`ToolCall`] is one invocation of a tool advertised by the Imaging
//! server: the resolved tool name plus a JSON object of named arguments.
//! Which tool a capability maps to is decided by [`crate::capability`].

pub mod entities;

pub use entities::ToolCall;
