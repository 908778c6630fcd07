//! Feedback pulses: construction and age-based cleanup.

use glam::Vec3;

use sanctum_core::constants::*;
use sanctum_core::enums::FeedbackKind;
use sanctum_core::events::FeedbackEvent;

/// How long a pulse of this kind stays visible (seconds).
pub fn lifetime(kind: FeedbackKind) -> f64 {
    match kind {
        FeedbackKind::HitMarker => HIT_MARKER_LIFETIME_SECS,
        FeedbackKind::Particle => PARTICLE_LIFETIME_SECS,
    }
}

pub fn hit_marker(position: Vec3, now_secs: f64) -> FeedbackEvent {
    FeedbackEvent {
        kind: FeedbackKind::HitMarker,
        position,
        color: String::new(),
        created_at: now_secs,
    }
}

pub fn impact_particle(position: Vec3, now_secs: f64) -> FeedbackEvent {
    FeedbackEvent {
        kind: FeedbackKind::Particle,
        position,
        color: IMPACT_COLOR.to_string(),
        created_at: now_secs,
    }
}

/// Drop every pulse that has outlived its kind's lifetime.
pub fn cleanup(feedback: &mut Vec<FeedbackEvent>, now_secs: f64) {
    feedback.retain(|f| now_secs - f.created_at < lifetime(f.kind));
}
