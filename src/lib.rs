#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod edit_cell;
pub mod gui;
pub mod song;
pub mod store;
pub mod utils;
pub mod validation;
