pub mod walk;
pub mod walk_sync;
