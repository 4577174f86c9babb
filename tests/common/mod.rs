#![allow(dead_code)]

pub mod log_capture;
pub mod mocks;
pub mod strategies;
