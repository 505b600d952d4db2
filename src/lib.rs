//! Patient portal - a terminal client for a patient's health records,
//! prescriptions, lab results, appointments and care team messages.
//!
//! This library exposes modules for use in integration tests and benches.

pub mod app;
pub mod auth;
pub mod cli;
pub mod data;
pub mod error;
pub mod input;
pub mod models;
pub mod screens;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod widgets;
