//! Terminal front end: free-text command parsing and output rendering.
//! Nothing below this layer knows about stdout, colors, or prompts.

pub mod parse;
pub mod print;
