// src/scenes/mod.rs
// One module per screen. Each draws itself to a text writer.

pub mod no_data;
pub mod studying;
