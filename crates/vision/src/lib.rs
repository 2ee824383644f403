//! Client for the external meal-photo analysis collaborator.
//!
//! One HTTPS round trip per photo: the image is inlined as a data URL next
//! to a fixed instruction prompt, and the reply is a strictly-shaped JSON
//! nutrition estimate (possibly wrapped in Markdown code fences). No
//! retries, no caching, no partial results.

pub mod analysis;
pub mod client;

pub use analysis::{Confidence, MealAnalysis};
pub use client::{VisionClient, VisionConfig, VisionError};
