//! Draw engine for Hort treasure tables.
//!
//! A treasure table is drawn by rolling one independent percentile trial per
//! weighted entry and collecting the entries whose trial succeeds, optionally
//! expanding successes that link to other tables into those tables' own draw
//! results. The engine also provides the host's classic single-roll draw for
//! untagged tables and can re-derive results from a stored trial sequence.
//!
//! The engine is pure with respect to drawn state: finalizing a draw (marking
//! entries drawn) stays with the caller.

pub mod config;
pub mod engine;
pub mod error;
pub mod source;
pub mod trial;

pub use config::DrawConfig;
pub use engine::{DrawEngine, TableDraw};
pub use error::{DrawError, DrawResult};
pub use source::{Resolved, TableSource, WorldSource};
pub use trial::Trial;
