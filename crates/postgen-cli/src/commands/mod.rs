//! Command handlers.  Each one takes parsed arguments and owns its output.

pub mod completions;
pub mod scaffold;
