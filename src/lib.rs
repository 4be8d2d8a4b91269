//! Event Logistics Engine
//!
//! This crate derives per-diems, hotel nights, vehicle trips and car counts
//! for the crew and labour attending an event, either at home (local) or
//! at a remote location where hotel stays apply.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
