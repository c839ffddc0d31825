//! Per-finger extended/closed analysis over a complete pose.
//!
//! The thumb splays sideways rather than folding, so it is judged by
//! horizontal distance from the wrist; the other four fingers fold toward the
//! palm, so they are judged by whether the tip sits above the PIP joint
//! (smaller y in image coordinates).

use sign_hand_interface::{FingerState, HandPose, landmark};

/// Derives the finger state vector for a pose.
///
/// Returns `None` when the pose has fewer than 21 landmarks: the state is
/// undetermined, not an error.
pub fn analyze(pose: &HandPose) -> Option<FingerState> {
    if !pose.is_complete() {
        return None;
    }

    Some(FingerState {
        thumb: thumb_extended(pose)?,
        index: finger_extended(pose, landmark::INDEX_TIP, landmark::INDEX_PIP)?,
        middle: finger_extended(pose, landmark::MIDDLE_TIP, landmark::MIDDLE_PIP)?,
        ring: finger_extended(pose, landmark::RING_TIP, landmark::RING_PIP)?,
        pinky: finger_extended(pose, landmark::PINKY_TIP, landmark::PINKY_PIP)?,
    })
}

fn thumb_extended(pose: &HandPose) -> Option<bool> {
    let wrist = pose.point(landmark::WRIST)?;
    let tip = pose.point(landmark::THUMB_TIP)?;
    let mcp = pose.point(landmark::THUMB_MCP)?;

    Some((tip.x - wrist.x).abs() > (mcp.x - wrist.x).abs())
}

fn finger_extended(pose: &HandPose, tip: usize, pip: usize) -> Option<bool> {
    let tip = pose.point(tip)?;
    let pip = pose.point(pip)?;

    Some(tip.y < pip.y)
}
