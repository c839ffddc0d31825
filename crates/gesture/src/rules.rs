//! The ordered rule table.
//!
//! Evaluation is strictly first-match-wins in the order written here. Several
//! rules share a finger pattern and are told apart only by a normalized
//! distance band (thumb+index extended is "Yes" inside 0.2 and "C" between
//! 0.2 and 0.4), so reordering the table changes what ambiguous poses
//! classify as. Do not sort or merge entries.

use sign_hand_interface::Sign;

use crate::metrics::PoseMetrics;

/// Thumb and index tips closer than this (normalized) form the "Yes" circle.
pub(crate) const THUMB_INDEX_CIRCLE_MAX: f32 = 0.2;
/// Thumb–index band for the curved "C" shape.
pub(crate) const THUMB_INDEX_CURVE_MIN: f32 = 0.2;
pub(crate) const THUMB_INDEX_CURVE_MAX: f32 = 0.4;
/// Index and middle tips further apart than this count as spread ("Victory").
pub(crate) const INDEX_MIDDLE_SPREAD_MIN: f32 = 0.2;
/// Index and middle tips closer than this count as held together ("B").
pub(crate) const INDEX_MIDDLE_TOGETHER_MAX: f32 = 0.3;
/// Thumb tip this many pixels below the wrist reads as pointing down ("Bad").
pub(crate) const THUMB_BELOW_WRIST_MARGIN: f32 = 30.0;
/// Thumb tip within this horizontal reach of the wrist reads as resting
/// against the fist ("A").
pub(crate) const THUMB_BESIDE_WRIST_MAX: f32 = 30.0;

pub(crate) struct Rule {
    pub sign: Sign,
    pub confidence: f64,
    pub matches: fn(&PoseMetrics) -> bool,
}

pub(crate) static RULES: [Rule; 13] = [
    Rule {
        sign: Sign::Good,
        confidence: 0.90,
        matches: thumbs_up,
    },
    Rule {
        sign: Sign::Bad,
        confidence: 0.85,
        matches: thumbs_down,
    },
    Rule {
        sign: Sign::Yes,
        confidence: 0.90,
        matches: thumb_index_circle,
    },
    Rule {
        sign: Sign::Victory,
        confidence: 0.85,
        matches: spread_pair,
    },
    Rule {
        sign: Sign::More,
        confidence: 0.80,
        matches: pointing,
    },
    Rule {
        sign: Sign::Stop,
        confidence: 0.90,
        matches: fist,
    },
    Rule {
        sign: Sign::Hello,
        confidence: 0.90,
        matches: open_hand,
    },
    Rule {
        sign: Sign::Less,
        confidence: 0.80,
        matches: three_fingers,
    },
    Rule {
        sign: Sign::Water,
        confidence: 0.75,
        matches: four_fingers,
    },
    Rule {
        sign: Sign::ILoveYou,
        confidence: 0.85,
        matches: thumb_index_pinky,
    },
    Rule {
        sign: Sign::LetterA,
        confidence: 0.80,
        matches: thumb_beside_fist,
    },
    Rule {
        sign: Sign::LetterB,
        confidence: 0.80,
        matches: flat_hand,
    },
    Rule {
        sign: Sign::LetterC,
        confidence: 0.75,
        matches: curved_pair,
    },
];

// Finger patterns are [thumb, index, middle, ring, pinky].

fn thumbs_up(m: &PoseMetrics) -> bool {
    m.fingers.matches([true, false, false, false, false]) && m.thumb_tip.y < m.wrist.y
}

fn thumbs_down(m: &PoseMetrics) -> bool {
    // Thumb state itself is irrelevant; what matters is the tip hanging well
    // below the wrist with the other fingers closed.
    !m.fingers.index
        && !m.fingers.middle
        && !m.fingers.ring
        && !m.fingers.pinky
        && m.thumb_tip.y > m.wrist.y + THUMB_BELOW_WRIST_MARGIN
}

fn thumb_index_circle(m: &PoseMetrics) -> bool {
    m.fingers.matches([true, true, false, false, false])
        && m.thumb_index_norm < THUMB_INDEX_CIRCLE_MAX
        && m.middle_tip_y > m.middle_pip_y
        && m.ring_tip_y > m.ring_pip_y
        && m.pinky_tip_y > m.pinky_pip_y
}

fn spread_pair(m: &PoseMetrics) -> bool {
    m.fingers.matches([false, true, true, false, false])
        && m.index_middle_norm > INDEX_MIDDLE_SPREAD_MIN
}

fn pointing(m: &PoseMetrics) -> bool {
    m.fingers.matches([false, true, false, false, false])
}

fn fist(m: &PoseMetrics) -> bool {
    m.fingers.matches([false, false, false, false, false])
}

fn open_hand(m: &PoseMetrics) -> bool {
    m.fingers.matches([true, true, true, true, true])
}

fn three_fingers(m: &PoseMetrics) -> bool {
    m.fingers.matches([false, true, true, true, false])
}

fn four_fingers(m: &PoseMetrics) -> bool {
    m.fingers.matches([false, true, true, true, true])
}

fn thumb_index_pinky(m: &PoseMetrics) -> bool {
    m.fingers.matches([true, true, false, false, true])
}

fn thumb_beside_fist(m: &PoseMetrics) -> bool {
    m.fingers.matches([true, false, false, false, false])
        && (m.thumb_tip.x - m.wrist.x).abs() < THUMB_BESIDE_WRIST_MAX
}

fn flat_hand(m: &PoseMetrics) -> bool {
    m.fingers.matches([false, true, true, true, true])
        && m.index_middle_norm < INDEX_MIDDLE_TOGETHER_MAX
}

fn curved_pair(m: &PoseMetrics) -> bool {
    m.fingers.matches([true, true, false, false, false])
        && m.thumb_index_norm > THUMB_INDEX_CURVE_MIN
        && m.thumb_index_norm < THUMB_INDEX_CURVE_MAX
}
