// EDMC Log Collector - ui/mod.rs
//
// UI layer: the status label and theme colours.
// Dependencies: app (StatusSink), core (read-only models), egui.
// Must NOT depend on: platform, direct I/O.

pub mod status;
pub mod theme;
