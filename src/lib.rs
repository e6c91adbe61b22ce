//! The command-line request model of a Java source formatter.
//!
//! `core` holds the request itself: an immutable [`core::options::FormatOptions`]
//! assembled through a [`core::builder::FormatOptionsBuilder`], with line
//! selections stored in a coalescing [`core::ranges::RangeSet`]. `builders`
//! turns command-line text into that model, checks it against the front-end's
//! policy and renders it.
pub mod builders;
pub mod core;
pub mod utils;
