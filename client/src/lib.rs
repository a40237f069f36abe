//! Client library for the Holidaze booking REST API.
//!
//! The crate follows a hexagonal layout: `domain` holds entities, validated
//! forms, the session store and the use-case services; `outbound` provides
//! the reqwest gateway and session persistence adapters; `inbound` hosts the
//! command-line front end; `config` loads layered settings.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
