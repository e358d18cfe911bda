#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod key;
pub mod log;
pub mod net;
#[allow(clippy::all, clippy::pedantic)]
#[rustfmt::skip]
pub mod protobuf;

#[cfg(test)]
mod test;
