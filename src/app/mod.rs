// Application layer: runs a parsed command against the helpers and renders the result.

pub mod commands;
