//! Photo analysis pipeline.
//!
//! This module contains the stages run for every analyzed photo:
//! - **existing**: Compliments and catalog tags the photo already carries
//! - **describe**: Enhanced description synthesis
//! - **analyzer**: Orchestrates learning, selection and result assembly

pub mod analyzer;
pub mod describe;
pub mod existing;

// Re-exports for convenient access
pub use analyzer::{group_by_category, photo_confidence, AnalyzeOptions, PhotoAnalyzer};
pub use describe::enhance_description;
pub use existing::existing_words;
