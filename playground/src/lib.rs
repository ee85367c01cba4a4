//! # boostlab_playground
//!
//! Runtime pieces around the `boostlab` state engine: the timer-driven
//! animation player, the dataset preview client, on-disk configuration and the
//! [`session::PlaygroundSession`] that ties them together. The
//! `boostlab-playground` binary is a thin headless runner over this library.

pub mod config;
pub mod error;
pub mod paths;
pub mod player;
pub mod preview;
pub mod session;
