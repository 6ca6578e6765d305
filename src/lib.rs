#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else)]

#[macro_use]
extern crate tracing;

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod notify;
pub mod view;
pub mod workflow;
