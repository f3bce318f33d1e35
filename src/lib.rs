//! SDL2 setup library
//!
//! Downloads the pinned SDL2 Visual C++ development archive and moves it to
//! `third_party/SDL2`. Used by the `setup-sdl2` CLI.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;
