//! Data layer: core types, loading, and filtering.
//!
//! Architecture:
//! ```text
//!  american_bankruptcy.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → CompanyTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ CompanyTable  │  header + Vec<Record>
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  shuffle + alive-row cut → reduced table
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
