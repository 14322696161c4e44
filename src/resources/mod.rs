//! ECS resources made available to systems.
//!
//! Overview
//! - `bindings` – buttons owned by each fighter and the moves bound to them
//! - `fightconfig` – balance numbers loaded from an INI file
//! - `matchlog` – health reports and result of the current match
//! - `matchstate` – intro, fighting, paused or game over
//! - `movelibrary` – shared pool of finished moves, saved as JSON
//! - `worldtime` – simulation time and delta
pub mod bindings;
pub mod fightconfig;
pub mod matchlog;
pub mod matchstate;
pub mod movelibrary;
pub mod worldtime;
