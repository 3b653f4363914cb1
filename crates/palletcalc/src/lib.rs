//! Configuration, calculation and HTTP service for the palletcalc command line tool.

pub mod calc;
pub mod config;
pub mod server;
