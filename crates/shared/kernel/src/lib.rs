//! Kernel of the course planner.
//! Keep this crate lightweight; it wires configuration and the catalog together for the apps.
//!
//! ## Config loading
//! ```rust,no_run
//! use cplan_domain::config::PlannerConfig;
//! use cplan_kernel::config::load_config;
//!
//! let cfg: PlannerConfig = load_config(Some("planner.toml")).unwrap();
//! ```
//!
//! ## Catalog service
//! ```rust,no_run
//! use cplan_kernel::Planner;
//!
//! # fn main() -> Result<(), cplan_catalog::CatalogError> {
//! let mut planner = Planner::new(Default::default())?;
//! planner.load("CS 300 ABCU_Advising_Program_Input.csv")?;
//! for course in planner.courses() {
//!     println!("{course}");
//! }
//! # Ok(())
//! # }
//! ```
pub mod config;
pub mod planner;

pub use cplan_catalog as catalog;
pub use cplan_domain as domain;
pub use planner::{Planner, UnresolvedPrerequisite};
