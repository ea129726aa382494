//! Markdown formatting for recipes and session state.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes get small wrapper types so each
//! context can format them its own way. Everything produced here is
//! markdown, rendered richly by the CLI or printed as-is.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │ (Recipe, Step)  │───▶│ (Steps, Status) │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use tadka_core::display::{OperationStatus, Steps};
//! use tadka_core::Step;
//!
//! let step = Step::new(1, "chop").with_item("potato");
//! let output = format!("{}", Steps(vec![&step]));
//! assert!(output.contains("### 1. chop potato"));
//!
//! let status = OperationStatus::success("Completed step 1");
//! assert_eq!(status.to_string(), "Success: Completed step 1\n");
//! ```

pub mod collections;
pub mod models;
pub mod status;

pub use collections::{Ingredients, Steps};
pub use status::OperationStatus;
