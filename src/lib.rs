//! # algoviz
//!
//! Step generation for sorting, searching and traversal visualizations.
//!
//! Every algorithm is a pure function from an input array to an ordered
//! sequence of [`Step`](step::Step) snapshots. A renderer (web page, terminal,
//! test) plays the sequence back frame by frame:
//! - Generators are deterministic and never fail on validated input
//! - Each step owns a full copy of the array plus highlight sets, pointers
//!   and an annotation
//! - Invalid user input is rejected up front by the [`input`] layer
//!
//! ## Example
//!
//! ```rust
//! use algoviz::prelude::*;
//!
//! let input = elements_from_values(&[5, 3, 8, 1, 9]);
//! let steps = Algorithm::Bubble.steps(&input, None)?;
//!
//! assert_eq!(steps[0].values(), vec![5, 3, 8, 1, 9]);
//! assert_eq!(steps.last().map(Step::values), Some(vec![1, 3, 5, 8, 9]));
//! # Ok::<(), VizError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::too_many_lines,
    clippy::missing_const_for_fn,
    clippy::needless_range_loop,
    clippy::manual_midpoint,
)]

pub mod algorithms;
pub mod audit;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod playback;
pub mod step;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::algorithms::traversal::{Graph, GraphTraversal, TreeOrder};
    pub use crate::algorithms::Algorithm;
    pub use crate::audit::{audit_steps, verify_determinism, AuditReport};
    pub use crate::config::{VizConfig, VizConfigBuilder};
    pub use crate::error::{VizError, VizResult};
    pub use crate::input::{elements_from_values, parse_values, validate_for, InputLimits};
    pub use crate::playback::{PlaybackState, StepCache, StepPlayer};
    pub use crate::step::{ArrayElement, Step, StepDetail};
}

/// Re-export for public API
pub use error::{VizError, VizResult};
