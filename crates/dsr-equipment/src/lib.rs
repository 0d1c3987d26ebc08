//! DSR Equipment - Expansion and formatting of equipment-list fields
//!
//! Turns the free-text equipment-list field of a show record
//! (`"2 x Brand Model; 1 x Other Model"`) into structured line items
//! resolved against the reference catalog, and formats the result into the
//! display block stamped onto the DSR:
//! - [`EquipmentExpander`] tokenizes the field and resolves each token
//!   through a three-tier matching cascade (exact, brand + partial model,
//!   substring)
//! - [`format_equipment_lines`] renders resolved items into display lines
//!
//! # Example
//!
//! ```rust,ignore
//! use dsr_equipment::{format_equipment_lines, EquipmentExpander};
//!
//! # async fn example(catalog: std::sync::Arc<dyn dsr_record::CatalogStore>) {
//! let expander = EquipmentExpander::new(catalog);
//! let items = expander.expand("1 x ClubMax 1800 RGB;").await.unwrap();
//! println!("{}", format_equipment_lines(&items));
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod error;
pub mod expand;
pub mod format;

pub use error::{ExpandError, ExpandResult};
pub use expand::{EquipmentExpander, MatchTier};
pub use format::{format_equipment_line, format_equipment_lines};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
