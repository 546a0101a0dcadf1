#![allow(dead_code)]

pub mod index;

pub use index::*;
