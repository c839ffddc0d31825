use sign_hand_interface::{FingerState, HandPose, Landmark, landmark};

/// Hands measuring below this wrist-to-middle-tip span (in pixels) are too
/// small to classify reliably.
pub(crate) const MIN_HAND_SCALE: f32 = 10.0;

/// Everything the rule predicates read, computed once per pose.
///
/// Tip distances are normalized by the hand scale (wrist to middle fingertip)
/// so the distance thresholds hold at any resolution.
pub(crate) struct PoseMetrics {
    pub fingers: FingerState,
    pub wrist: Landmark,
    pub thumb_tip: Landmark,
    pub middle_tip_y: f32,
    pub middle_pip_y: f32,
    pub ring_tip_y: f32,
    pub ring_pip_y: f32,
    pub pinky_tip_y: f32,
    pub pinky_pip_y: f32,
    pub thumb_index_norm: f32,
    pub index_middle_norm: f32,
}

impl PoseMetrics {
    /// `None` when the pose is incomplete or the hand scale is degenerate.
    pub(crate) fn compute(pose: &HandPose, fingers: FingerState) -> Option<Self> {
        let wrist = *pose.point(landmark::WRIST)?;
        let thumb_tip = *pose.point(landmark::THUMB_TIP)?;
        let index_tip = *pose.point(landmark::INDEX_TIP)?;
        let middle_tip = *pose.point(landmark::MIDDLE_TIP)?;
        let ring_tip = *pose.point(landmark::RING_TIP)?;
        let pinky_tip = *pose.point(landmark::PINKY_TIP)?;
        let middle_pip = *pose.point(landmark::MIDDLE_PIP)?;
        let ring_pip = *pose.point(landmark::RING_PIP)?;
        let pinky_pip = *pose.point(landmark::PINKY_PIP)?;

        let hand_scale = wrist.distance_to(&middle_tip);
        if hand_scale < MIN_HAND_SCALE {
            return None;
        }

        Some(Self {
            fingers,
            wrist,
            thumb_tip,
            middle_tip_y: middle_tip.y,
            middle_pip_y: middle_pip.y,
            ring_tip_y: ring_tip.y,
            ring_pip_y: ring_pip.y,
            pinky_tip_y: pinky_tip.y,
            pinky_pip_y: pinky_pip.y,
            thumb_index_norm: thumb_tip.distance_to(&index_tip) / hand_scale,
            index_middle_norm: index_tip.distance_to(&middle_tip) / hand_scale,
        })
    }
}
