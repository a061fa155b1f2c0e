extern crate thiserror;

pub mod writer;
