//! This crate provides the data core of a personal to-do list manager.
//!
//! Tasks and categories live in a [`TaskStore`], which owns the collections for the process lifetime and persists every mutation to a local key-value store (see the [`storage`] module) before the mutator returns.
//!
//! Views never read the collections directly: the pure functions of the [`query`] module derive a filtered, sorted sequence (plus counters) from the collection and a [`query::ViewSpec`], and the [`calendar`] module computes the day/week/month grids a planner-style view lays tasks out on. \
//! A presentation layer (not part of this crate) renders those derived views and forwards user intents (create, edit, toggle, delete...) back to the store.

pub mod config;

mod category;
pub use category::{Category, CategoryId, PALETTE};
mod task;
pub use task::{Priority, Task, TaskId};

pub mod storage;
pub mod mock_behaviour;
mod store;
pub use store::TaskStore;

pub mod query;
pub mod calendar;

pub mod utils;
