//! Orchestrates the CDAB conformance test suite: brings up a docker
//! container from the suite image, drives `cdab-client` for each
//! provider × test pair, recovers the per-test JSON artifacts, and
//! aggregates them into one report.

pub mod config;
pub mod docker;
pub mod report;
pub mod suite;
