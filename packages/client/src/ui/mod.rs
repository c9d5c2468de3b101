//! Terminal host shell.
//!
//! Supplies the room and display name, forwards user actions to the
//! [`crate::ChatClient`] and prints what changed after every snapshot.

pub mod command;
pub mod render;
mod runner;

pub use runner::run;
