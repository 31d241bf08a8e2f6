//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Pool-only operations accept `&SqlitePool`; operations that also run
//! inside transactions accept `impl SqliteExecutor<'_>` so handlers can
//! pass `&mut *tx`.

pub mod complaint_repo;
pub mod menu_repo;
pub mod payment_repo;
pub mod resident_repo;
pub mod room_repo;

pub use complaint_repo::ComplaintRepo;
pub use menu_repo::MenuRepo;
pub use payment_repo::PaymentRepo;
pub use resident_repo::ResidentRepo;
pub use room_repo::RoomRepo;

/// RFC 3339 UTC "now", matching the migration's column defaults.
pub(crate) const SQL_NOW: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";
