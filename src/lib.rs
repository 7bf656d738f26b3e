//! Car-Tegories - Party Guessing Game Core

pub mod catalog;
pub mod core;
pub mod game;
pub mod remote;
pub mod storage;
