//! DTOs that expose the screen state to hosts.

pub mod screen;
