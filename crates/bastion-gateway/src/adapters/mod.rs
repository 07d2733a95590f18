//! Framework adapters wiring the ports to axum/tower.

pub mod http;
pub mod middleware;
