//! Qrogue - turn-based dungeon simulation with a hierarchical body model

pub mod body;
pub mod combat;
pub mod core;
pub mod entity;
pub mod simulation;
pub mod world;
