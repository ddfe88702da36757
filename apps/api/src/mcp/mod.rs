//! In-process tool framework.
//!
//! `registry` owns the catalog of callable tools, `schema` derives a
//! validating request schema per tool, and `http` binds every registered
//! tool to the HTTP surface as a typed POST endpoint. Registration happens
//! once at startup; afterwards the registry is shared read-only behind an
//! `Arc`, so request handling needs no locking.

pub mod http;
pub mod registry;
pub mod schema;
