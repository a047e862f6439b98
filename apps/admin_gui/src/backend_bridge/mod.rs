//! Backend bridge: commands sent from the UI thread and the worker that runs them.

pub mod commands;
pub mod runtime;
