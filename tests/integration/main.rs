//! Integration tests for the MARGDARSHAK service facade.

mod facade;
mod remote_roundtrip;
