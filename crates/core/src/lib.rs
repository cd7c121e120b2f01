//! Core library for omniconvert
//!
//! This crate implements the **Functional Core** of the omniconvert application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The omniconvert project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`omniconvert_core`** (this crate): Pure detection and transformation functions with zero I/O
//! - **`omniconvert`**: Input reading, clock, randomness, image decoding and terminal output
//!   (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no clock reads, no global randomness
//! - **Explicit environment**: "now" is a `DateTime<Utc>` argument and randomness is a `&mut impl Rng`
//! - **Total**: Malformed input yields `None`, a sentinel string or a best-effort value, never a panic
//!
//! # Module Organization
//!
//! - [`detect`]: Ordered rule chain classifying text into a [`DetectedType`], plus
//!   classification of files from their metadata
//! - [`transform`]: One family of formatters per detected type (JSON, color, timestamp,
//!   HTML, CSS/JS, text, Base64/URL, JWT, number, UUID, lorem ipsum, image)
//! - [`capabilities`]: Traits for environment-specific collaborators (image decoding,
//!   clipboard, HTML text extraction)
//! - [`error`]: The [`ConvertError`] returned by the fallible `try_*` primitives
//!
//! # Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use omniconvert_core::{detect, transform, DetectedType};
//!
//! let result = detect("#FF6B35");
//! assert_eq!(result.kind, DetectedType::Color);
//!
//! let formats = transform(result.kind, &result.raw, Utc::now()).unwrap();
//! assert_eq!(formats.primary(), "#ff6b35");
//! ```

pub mod capabilities;
pub mod detect;
pub mod error;
pub mod transform;

pub use detect::{detect, detect_file_type, DetectedType, DetectionResult, FileInfo, ParsedValue};
pub use error::ConvertError;
pub use transform::{transform, try_transform, Formats};
