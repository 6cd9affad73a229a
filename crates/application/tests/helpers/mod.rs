#![allow(dead_code)]


pub use mock_random::{MockRandomSource, ThreadRandomSource};
