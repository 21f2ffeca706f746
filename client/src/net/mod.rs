//! Networking modules for the socket frame protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `socket_client` manages the websocket lifecycle and the get/set broker,
//! `pending` holds per-kind one-shot resolvers, `types` classifies inbound
//! frames, and `config` owns the endpoint address.

pub mod config;
pub mod pending;
pub mod socket_client;
pub mod types;
