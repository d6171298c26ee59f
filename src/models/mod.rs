//! Domain models for the agent checklist.
//!
//! # Core Concepts
//!
//! ## Fixed Definitions
//!
//! - [`Category`]: one of the three groups of selectable items (Main, Deployment, Additional).
//! - [`CategoryDefinition`]: the ordered item labels offered for a category.
//! - [`Catalog`]: all three definitions, fixed at startup.
//!
//! ## Per-Cycle State
//!
//! These are rebuilt on every interaction cycle:
//!
//! - [`PriorSelections`]: what the last save recorded, used as checkbox defaults.
//! - [`SelectionState`]: the labels currently checked, in catalog order.
//! - [`ToggleControls`]: the UI capability that reports each checkbox's value.
//!
//! ## Persisted
//!
//! - [`PersistedSnapshot`]: the reloadable JSON record of the last save.

mod category;
mod selection;
mod snapshot;
mod toggle;

pub use category::*;
pub use selection::*;
pub use snapshot::*;
pub use toggle::*;
