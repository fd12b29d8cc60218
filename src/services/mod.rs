//! Service layer — identity, presence, message log, broadcast, maintenance.

pub mod broadcast;
pub mod identity;
pub mod log;
pub mod maintenance;
pub mod presence;
