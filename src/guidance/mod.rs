//! Career guidance providers.
//!
//! Defines the `GuidanceProvider` trait and the shipped template-based
//! implementation. The trait is the substitution seam: a model-backed
//! provider can replace the canned one without changing facade callers.

pub mod template;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::{Guidance, UserContext};

/// Abstraction over guidance generation.
///
/// Implementors turn a free-text prompt (plus optional user context)
/// into an advisory message and NSQF/NCVET-aligned recommendations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuidanceProvider: Send + Sync {
    /// Produce guidance for a single prompt.
    async fn advise<'c>(&self, prompt: &str, context: Option<&'c UserContext>) -> Result<Guidance>;

    /// Provider identifier string.
    fn name(&self) -> &str;
}
