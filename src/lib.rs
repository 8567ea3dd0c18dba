//! Forest of Basics - simulation core for an exploration and word-quiz game

pub mod core;
pub mod entity;
pub mod quest;
pub mod questions;
pub mod simulation;
pub mod ui;

pub use crate::quest::Session;
