//! BahnPulse journey planner server.
//!
//! A web application that answers "how do I get from here to there by
//! train?" with plausible but entirely synthetic German rail connections.

pub mod config;
pub mod domain;
pub mod generator;
pub mod route;
pub mod stations;
pub mod web;
