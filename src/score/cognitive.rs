//! Cognitive asset scorer: knowledge building and creative throughput.

use serde::{Deserialize, Serialize};

use crate::assets::CognitiveData;
use crate::score::normalize::{direct_scale, linear_to_target, ratio_score};

// Component weights (sum to 1.0).
pub const W_KNOWLEDGE: f64 = 0.5;
pub const W_CREATIVITY: f64 = 0.5;

// Knowledge: intake, linking, and application of new material.
const W_KN_CONCEPTS: f64 = 0.2;
const W_KN_CONNECTIONS: f64 = 0.3;
const W_KN_APPLICATIONS: f64 = 0.2;
const W_KN_STUDY_QUALITY: f64 = 0.15;
const W_KN_READING: f64 = 0.15;
const CONCEPT_TARGET: f64 = 5.0;
const CONNECTION_TARGET: f64 = 8.0;
const APPLICATION_TARGET: f64 = 3.0;
const READING_TARGET_PAGES: f64 = 50.0;

// Creativity: idea flow and how much of it ships.
const W_CR_IDEAS: f64 = 0.25;
const W_CR_EXECUTION: f64 = 0.35;
const W_CR_CROSS_DOMAIN: f64 = 0.20;
const W_CR_INNOVATION: f64 = 0.20;
const IDEA_TARGET: f64 = 4.0;
const CROSS_DOMAIN_TARGET: f64 = 2.0;

/// Cognitive component scores plus their weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveScore {
    pub knowledge: f64,
    pub creativity: f64,
    pub total: f64,
}

pub fn score(d: &CognitiveData) -> CognitiveScore {
    let knowledge = knowledge_score(d);
    let creativity = creativity_score(d);
    CognitiveScore {
        knowledge,
        creativity,
        total: knowledge * W_KNOWLEDGE + creativity * W_CREATIVITY,
    }
}

pub fn knowledge_score(d: &CognitiveData) -> f64 {
    let concepts = linear_to_target(d.new_concepts, CONCEPT_TARGET);
    let connections = linear_to_target(d.concept_connections, CONNECTION_TARGET);
    let applications = linear_to_target(d.knowledge_applications, APPLICATION_TARGET);
    let depth = direct_scale(d.study_quality);
    let breadth = linear_to_target(d.reading_pages, READING_TARGET_PAGES);
    concepts * W_KN_CONCEPTS
        + connections * W_KN_CONNECTIONS
        + applications * W_KN_APPLICATIONS
        + depth * W_KN_STUDY_QUALITY
        + breadth * W_KN_READING
}

pub fn creativity_score(d: &CognitiveData) -> f64 {
    let ideas = linear_to_target(d.creative_ideas, IDEA_TARGET);
    // Executed share of the day's ideas; no ideas means nothing executed.
    let execution = ratio_score(d.idea_executions, d.creative_ideas, 100.0);
    let cross_domain = linear_to_target(d.cross_domain_links, CROSS_DOMAIN_TARGET);
    let innovation = direct_scale(d.innovation_rating);
    ideas * W_CR_IDEAS
        + execution * W_CR_EXECUTION
        + cross_domain * W_CR_CROSS_DOMAIN
        + innovation * W_CR_INNOVATION
}
