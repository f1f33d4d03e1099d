//! Template-based guidance provider.
//!
//! Selects one of three canned advisory messages by case-insensitive
//! substring match on the prompt. A stand-in for a real inference
//! service — no language understanding happens here.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use super::GuidanceProvider;
use crate::types::{Guidance, UserContext};

const PROVIDER_NAME: &str = "template";

/// NSQF level attached to every templated response.
const TEMPLATE_NSQF_LEVEL: u8 = 5;

/// Self-reported confidence attached to every templated response.
const TEMPLATE_CONFIDENCE: f64 = 0.92;

const DEFAULT_MESSAGE: &str = "Based on current market analysis and your interests, I recommend focusing on AI and Machine Learning skills. \
The demand for these skills has grown by 45% in the last year, with average salaries ranging from ₹12-25L. \
NCVET offers certified courses that align with NSQF Level 5-7 qualifications in this domain.";

const CAREER_MESSAGE: &str = "Your career trajectory shows strong potential in the technology sector. \
With your current skill set, you're well-positioned for roles in AI Engineering, Data Science, or Cloud Architecture. \
I suggest completing the Advanced AI certification (NSQF Level 6) to unlock senior positions.";

const SKILLS_MESSAGE: &str = "To enhance your employability, focus on these high-demand skills:\n\
1. Generative AI & Prompt Engineering (+180% growth)\n\
2. Cloud Computing (Azure/AWS certification)\n\
3. Data Analytics with Python\n\
These align with NCVET's vocational training framework and industry requirements.";

/// Prompt topic, as inferred by substring matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTopic {
    Career,
    Skills,
    General,
}

/// The shipped `GuidanceProvider`: canned messages keyed on prompt topic.
pub struct TemplateAdvisor;

impl TemplateAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// Classify a prompt into a topic. "career" wins over "skill" when
    /// both substrings appear, matching the check order callers rely on.
    pub fn classify(prompt: &str) -> PromptTopic {
        let lowered = prompt.to_lowercase();
        if lowered.contains("career") {
            PromptTopic::Career
        } else if lowered.contains("skill") {
            PromptTopic::Skills
        } else {
            PromptTopic::General
        }
    }

    fn message_for(topic: PromptTopic) -> &'static str {
        match topic {
            PromptTopic::Career => CAREER_MESSAGE,
            PromptTopic::Skills => SKILLS_MESSAGE,
            PromptTopic::General => DEFAULT_MESSAGE,
        }
    }
}

impl Default for TemplateAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GuidanceProvider for TemplateAdvisor {
    /// Build a templated guidance payload. The recommendation list and
    /// qualification fields are fixed; only the message varies by topic.
    /// User context is accepted for signature compatibility but does not
    /// alter the canned output.
    async fn advise<'c>(&self, prompt: &str, context: Option<&'c UserContext>) -> Result<Guidance> {
        let topic = Self::classify(prompt);
        debug!(?topic, has_context = context.is_some(), "Templated guidance selected");

        Ok(Guidance {
            message: Self::message_for(topic).to_string(),
            recommendations: vec![
                "Complete the AI Fundamentals certification (NSQF Level 5)".to_string(),
                "Enroll in Python for Data Science course".to_string(),
                "Join the upcoming AI Ethics webinar".to_string(),
                "Practice with hands-on projects in Agni Lab".to_string(),
            ],
            nsqf_level: TEMPLATE_NSQF_LEVEL,
            ncvet_courses: vec![
                "Artificial Intelligence Fundamentals".to_string(),
                "Machine Learning Basics".to_string(),
                "Data Analytics with Python".to_string(),
            ],
            career_path: "AI/ML Engineer".to_string(),
            confidence: TEMPLATE_CONFIDENCE,
        })
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
