//! HTTP transport binding for the account registry: server wiring, the
//! `init`/`invoke`/`query` surface, and request/response mapping.

pub mod app;
