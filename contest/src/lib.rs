//! Contest scoring engine.
//!
//! Tracks participating states and judges, records directional votes between
//! states, and computes on demand:
//! - the final ranking, blending audience votes and judge rankings by a
//!   configurable audience percentage,
//! - the audience-only ranking,
//! - the friendly states (pairs that are each other's most-voted recipient).
//!
//! Pipeline: registry → point converters (audience, judges) → merge → rank →
//! state names. Every query builds its point lists fresh; nothing derived is
//! cached between calls.
//!
//! ```rust
//! use eurovision_contest::Contest;
//!
//! let mut contest = Contest::new();
//! contest.add_state(1, "france", "allo").unwrap();
//! contest.add_state(2, "spain", "hola").unwrap();
//! contest.add_vote(1, 2).unwrap();
//! contest.add_vote(2, 1).unwrap();
//!
//! assert_eq!(contest.run_contest(100).unwrap(), vec!["france", "spain"]);
//! assert_eq!(contest.run_friendly_states().unwrap(), vec!["france - spain"]);
//! ```

pub mod engine;
pub mod error;
pub mod friendly;
pub mod ledger;
pub mod merge;
pub mod points;
pub mod ranking;
pub mod registry;
pub mod script;

pub use engine::{Contest, Standing};
pub use error::ContestError;
pub use ledger::VoteLedger;
pub use points::{PointList, StatePoints};
pub use registry::{JudgeRecord, Registry, StateRecord};
pub use script::{Operation, Outcome};
