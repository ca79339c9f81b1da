//! Delve Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Delve dungeon
//! generator. It includes:
//!
//! - **Identifiers**: String-interned room identifiers ([`identifier::RoomId`])
//! - **Geometry**: Integer grid positions, dimensions and rectangles ([`geometry`] module)
//! - **Rooms**: Room types and placed rooms ([`room`] module)
//! - **Graph**: The abstract dungeon graph and its validation ([`graph`] module)

pub mod geometry;
pub mod graph;
pub mod identifier;
pub mod room;
