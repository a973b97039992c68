//! Easel: an image studio and a structured chat over the Hugging Face
//! Inference API.
//!
//! The two front-ends share the same building blocks:
//!
//! - [`parser`] splits a model reply into labelled sections
//!   ("Thinking Role:", "Problem Definition:", "Task Execution:",
//!   "Final Answer:" unless configured otherwise).
//! - [`history`] keeps the most recent N entries of a session, oldest first.
//! - [`generation`] runs artwork and chat requests through an
//!   [`InferenceBackend`](provider::InferenceBackend).
//!
//! # Quick Start
//!
//! ```
//! use easel::prelude::*;
//!
//! let parsed = SectionParser::default()
//!     .parse("Task Execution: add\nFinal Answer: 42");
//! assert_eq!(parsed.get("Final Answer"), Some("42"));
//! assert_eq!(parsed.get("Thinking Role"), None);
//!
//! let mut history = BoundedHistory::new(2);
//! for n in 1..=3 {
//!     history.record(n);
//! }
//! let kept: Vec<_> = history.all().map(|e| *e.payload()).collect();
//! assert_eq!(kept, vec![2, 3]);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod generation;
pub mod history;
pub mod parser;
pub mod prelude;
pub mod provider;
pub mod session;
pub mod styles;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
