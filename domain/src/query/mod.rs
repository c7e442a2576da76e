//! Query domain
//!
//! The input side of a debate: a [`QueryContext`] with its ordered
//! [`Document`]s, the positional [`SeatId`] each document is argued from,
//! and the [`DatasetName`]s a batch run can select.

pub mod context;
pub mod dataset;
pub mod evaluation;
pub mod seat;

pub use context::{Document, QueryContext};
pub use dataset::DatasetName;
pub use evaluation::AnswerEvaluation;
pub use seat::SeatId;
