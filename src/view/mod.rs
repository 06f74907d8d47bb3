//! The external-organization staff screen: roster, state machine and actions.

pub mod picker;
pub mod reducer;
pub mod roster;
pub mod screen;
pub mod state;
