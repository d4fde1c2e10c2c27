//! Every Circle - Client core for the referral-network profile app
//!
//! This crate holds the money-string codec used by every cost, bounty and
//! wish amount, the editable profile and business models, session state,
//! and the REST client for the Every Circle backend.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
