//! Turns a plain text document into the data of a word frequency histogram.
//!
//! The pipeline is strictly linear:
//! tokenize → normalize → count → rank → colorize → shape for the chart.

pub mod chart;
pub mod color;
pub mod frequency;
pub mod layout;
pub mod pipeline;
pub mod rank;
pub mod text;
pub mod view;

mod error;

pub use self::{error::PipelineFailure, pipeline::TextSource};

