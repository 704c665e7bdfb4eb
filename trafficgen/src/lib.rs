//! TrafficGen: offline generators for NoC traffic-pattern destination tables.
//!
//! Computes a Rent's-rule-inspired hop-distance probability model over a 3D
//! mesh of routers, scales it per source router into fixed-size destination
//! arrays, and serializes the result as VHDL packages consumed by the
//! hardware testbench.

// # Tries to deny all lints (`rustc -W help`).
#![deny(absolute_paths_not_starting_with_crate)]
#![deny(anonymous_parameters)]
#![deny(explicit_outlives_requirements)]
#![deny(keyword_idents)]
#![deny(macro_use_extern_crate)]
#![deny(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(rust_2018_idioms)]
#![deny(trivial_numeric_casts)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(unused_extern_crates)]
#![deny(unused_import_braces)]
#![deny(unused_qualifications)]
//
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::private_doc_tests)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![deny(rustdoc::invalid_html_tags)]
#![deny(rustdoc::invalid_rust_codeblocks)]
#![deny(rustdoc::bare_urls)]
#![deny(unreachable_pub)]

pub mod apportion;
pub mod config;
pub mod mesh;
pub mod package;
pub mod pattern;
pub mod rent;
pub mod vhdl;

pub use config::{ConfigError, HotspotConfig, PairCount, RemainderPolicy, RentConfig};
pub use mesh::{Coord, Mesh};
pub use package::{Package, PackageError};
pub use pattern::{DestinationList, DestinationTable, HotspotPattern, RentPattern};
pub use rent::DistanceDistribution;
pub use vhdl::{Banner, VhdlPackage};
