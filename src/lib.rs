//! # OAdvisor
//!
//! A command-line tool and library for planning an OGame account.
//!
//! This crate answers "what should I build next?" and "how is my account
//! doing?" from a snapshot of an account's buildings, research, ships and
//! defense:
//!
//! - Cost of any level of any building or research, and the total invested
//! - Hourly production of every planet, including energy balance and bonuses
//! - Metal-standard equivalents (MSE) to compare mixed resource amounts
//! - A ranked build queue for mines and plasma technology
//! - A points breakdown mirroring the in-game highscore
//!
//! ## Modules
//!
//! - [`models`] - Core data structures: resources, items, snapshots, results
//! - [`data`] - The item catalog loaded from CSV
//! - [`costs`] - Upgrade and cumulative costs
//! - [`production`] - Mine, energy and bonus production
//! - [`trade`] - Metal-standard valuation
//! - [`optimizer`] - Build-queue ranking and the energy matrix
//! - [`points`] - Points aggregation
//! - [`display`] - Output formatting and display utilities
//! - [`error`] - The crate error type
//!
//! ## Example Usage
//!
//! ```no_run
//! use oadvisor::{
//!     data::Catalog,
//!     display::display_queue,
//!     models::{AccountSnapshot, OptimizerConfig},
//!     optimizer::account_queue,
//! };
//!
//! let json = std::fs::read_to_string("account.json").unwrap();
//! let account: AccountSnapshot = serde_json::from_str(&json).unwrap();
//! let catalog = Catalog::embedded().unwrap();
//!
//! let queue = account_queue(&catalog, &account, &OptimizerConfig::default()).unwrap();
//! display_queue(&queue);
//! ```
//!
//! ## Ranking
//!
//! Candidates are ordered by score (cost in MSE per hourly MSE gained), then
//! by the solar satellites needed to cover the new energy draw, then by build
//! time. Entries flagged as capacity upgrades would be finished sooner overall
//! if a robotics or nanite factory level were built first.

pub mod costs;
pub mod data;
pub mod display;
pub mod error;
pub mod models;
pub mod optimizer;
pub mod points;
pub mod production;
pub mod trade;
pub mod wasm;

pub use error::{AdvisorError, Result};
