//! gyip Infrastructure Layer
pub mod dns;
pub mod random;
