//! Converter module for transforming documents with a headless office suite.
//!
//! This module provides the `Converter` trait and the LibreOffice-backed
//! implementation that drives `soffice --headless --convert-to` runs.
//!
//! # Features
//!
//! - Local file and http(s) URL sources, validated up front
//! - Single-file conversion with an explicit target path
//! - Batch conversion into a folder using one engine process
//! - Per-invocation profile isolation for safe concurrency
//!
//! # Example
//!
//! ```ignore
//! use officina_core::converter::{Converter, SofficeConverter};
//!
//! let converter = SofficeConverter::with_defaults();
//!
//! // Validate the engine is available
//! converter.validate().await?;
//!
//! // Convert a document to PDF
//! let result = converter.convert("report.docx", Path::new("out/report.pdf")).await?;
//! println!("Converted in {} ms", result.duration_ms);
//!
//! // Convert a batch into a folder with a single engine run
//! let sources = vec!["a.docx".to_string(), "b.odt".to_string()];
//! converter.convert_multiple(&sources, Path::new("out")).await?;
//! ```

pub mod command;

mod config;
mod error;
mod soffice;
mod traits;
mod types;

pub use config::ConverterConfig;
pub use error::ConverterError;
pub use soffice::SofficeConverter;
pub use traits::Converter;
pub use types::{ConversionRequest, ConversionResult, TargetSpec};
