//! Typed wrapper around [`ResourceClient`](resource_actor::ResourceClient).

pub mod tracking_client;

pub use tracking_client::*;
