// Adapters layer: the HTTP backend and the page implementations.

pub mod http;
pub mod page;
