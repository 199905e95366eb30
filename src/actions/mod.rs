//! File actions module.
//!
//! Currently a single action: moving one side's matched files to the system
//! trash, with partial-failure tolerance.
//!
//! ```no_run
//! use namedupe::actions::{delete_side, Side, SystemTrash};
//!
//! let summary = delete_side(&[], Side::B, &SystemTrash);
//! assert_eq!(summary.succeeded, 0);
//! ```

pub mod delete;

pub use delete::{
    delete_side, spawn_delete_side, DeleteError, DeleteSummary, Side, SystemTrash, Trash,
};
