//! Ratatui front end for running a live table.

pub mod app;
pub mod controller;
pub mod ui;
