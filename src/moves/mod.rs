//! Pose and move math.
//!
//! Nothing in here touches the ECS; these are the plain data types and pure
//! functions the fight systems are built on.
//!
//! Submodules overview:
//! - [`angle`] – shortest-arc angle blending around the 0°/360° wrap
//! - [`bodypart`] – the closed set of rotatable body parts
//! - [`pose`] – sparse body-part rotations
//! - [`fightmove`] – authored key poses plus move stats
//! - [`blender`] – expansion of key poses into one pose per tick
//! - [`recorder`] – editor session that records a new move

pub mod angle;
pub mod blender;
pub mod bodypart;
pub mod fightmove;
pub mod pose;
pub mod recorder;
