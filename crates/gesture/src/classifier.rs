use sign_hand_interface::{Classification, HandPose};

use crate::dictionary::SignDictionary;
use crate::fingers;
use crate::metrics::PoseMetrics;
use crate::rules::RULES;

/// Rule-based classifier over a single pose.
///
/// Classification is total: any well-formed input yields a [`Classification`],
/// with `(None, None, 0.0)` for poses that are incomplete, too small to
/// measure, or matched by no rule. The display text comes from the dictionary
/// when an entry exists, otherwise from the sign's intrinsic name.
pub struct SignClassifier {
    dictionary: SignDictionary,
}

impl SignClassifier {
    pub fn new(dictionary: SignDictionary) -> Self {
        Self { dictionary }
    }

    /// A classifier that labels every sign with its intrinsic name.
    pub fn with_intrinsic_names() -> Self {
        Self::new(SignDictionary::default())
    }

    pub fn dictionary(&self) -> &SignDictionary {
        &self.dictionary
    }

    pub fn classify(&self, pose: &HandPose) -> Classification {
        let Some(fingers) = fingers::analyze(pose) else {
            return Classification::no_match();
        };
        let Some(metrics) = PoseMetrics::compute(pose, fingers) else {
            return Classification::no_match();
        };

        for rule in &RULES {
            if (rule.matches)(&metrics) {
                let text = self
                    .dictionary
                    .get(rule.sign)
                    .map(str::to_owned)
                    .unwrap_or_else(|| rule.sign.to_string());
                return Classification::of(rule.sign, text, rule.confidence);
            }
        }

        Classification::no_match()
    }
}

impl Default for SignClassifier {
    fn default() -> Self {
        Self::with_intrinsic_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sign_hand_interface::{Landmark, Sign, landmark};

    const WRIST: (f32, f32) = (200.0, 300.0);

    /// Builds a synthetic hand around a wrist at (200, 300).
    ///
    /// Finger columns sit at x = 180/200/220/240 with PIP joints at y = 240;
    /// an extended finger's tip is above its PIP (y = 200), a closed one
    /// below (y = 270). The thumb MCP sits 30 px left of the wrist; an
    /// extended thumb splays to x = 120, a closed one tucks to x = 185.
    fn hand(fingers: [bool; 5]) -> Vec<Landmark> {
        let mut points: Vec<Landmark> = (0..landmark::COUNT)
            .map(|i| Landmark::new(i as u8, WRIST.0, WRIST.1))
            .collect();

        let mut set = |index: usize, x: f32, y: f32| {
            points[index].x = x;
            points[index].y = y;
        };

        set(landmark::THUMB_CMC, 185.0, 290.0);
        set(landmark::THUMB_MCP, 170.0, 280.0);
        set(landmark::THUMB_IP, 160.0, 270.0);
        if fingers[0] {
            set(landmark::THUMB_TIP, 120.0, 250.0);
        } else {
            set(landmark::THUMB_TIP, 185.0, 290.0);
        }

        let columns = [
            (landmark::INDEX_MCP, 180.0),
            (landmark::MIDDLE_MCP, 200.0),
            (landmark::RING_MCP, 220.0),
            (landmark::PINKY_MCP, 240.0),
        ];
        for (finger, (mcp, x)) in columns.into_iter().enumerate() {
            set(mcp, x, 260.0);
            set(mcp + 1, x, 240.0); // PIP
            set(mcp + 2, x, 225.0); // DIP
            let tip_y = if fingers[finger + 1] { 200.0 } else { 270.0 };
            set(mcp + 3, x, tip_y);
        }

        points
    }

    fn pose(fingers: [bool; 5]) -> HandPose {
        HandPose::from_points(hand(fingers))
    }

    fn moved(fingers: [bool; 5], index: usize, x: f32, y: f32) -> HandPose {
        let mut points = hand(fingers);
        points[index].x = x;
        points[index].y = y;
        HandPose::from_points(points)
    }

    fn classify(pose: &HandPose) -> Classification {
        SignClassifier::with_intrinsic_names().classify(pose)
    }

    #[track_caller]
    fn assert_sign(result: &Classification, sign: Sign, confidence: f64) {
        assert_eq!(result.sign, Some(sign));
        assert_eq!(result.text.as_deref(), Some(sign.to_string().as_str()));
        assert_eq!(result.confidence, confidence);
    }

    #[test]
    fn open_hand_is_hello() {
        let result = classify(&pose([true, true, true, true, true]));
        assert_sign(&result, Sign::Hello, 0.90);
        assert_eq!(result.sign.map(|s| s.id()), Some(0));
    }

    #[test]
    fn fist_is_stop() {
        let result = classify(&pose([false, false, false, false, false]));
        assert_sign(&result, Sign::Stop, 0.90);
        assert_eq!(result.sign.map(|s| s.id()), Some(10));
    }

    #[test]
    fn thumb_up_is_good() {
        let result = classify(&pose([true, false, false, false, false]));
        assert_sign(&result, Sign::Good, 0.90);
    }

    #[test]
    fn thumb_hanging_below_wrist_is_bad() {
        // Splayed thumb pointing down: extended but no longer above the
        // wrist, so the "Good" rule passes on it.
        let result = classify(&moved(
            [true, false, false, false, false],
            landmark::THUMB_TIP,
            120.0,
            340.0,
        ));
        assert_sign(&result, Sign::Bad, 0.85);
    }

    #[test]
    fn thumb_below_wrist_inside_margin_matches_nothing() {
        // 320 is below the wrist (not "Good") but within the 30 px margin
        // (not "Bad"), and too far sideways for "A".
        let result = classify(&moved(
            [true, false, false, false, false],
            landmark::THUMB_TIP,
            120.0,
            320.0,
        ));
        assert!(!result.is_match());
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn thumb_index_circle_is_yes() {
        // Thumb tip pinched against the index tip; MCP pulled in so the
        // thumb still reads as extended.
        let mut points = hand([true, true, false, false, false]);
        points[landmark::THUMB_MCP].x = 190.0;
        points[landmark::THUMB_TIP].x = 178.0;
        points[landmark::THUMB_TIP].y = 202.0;
        let result = classify(&HandPose::from_points(points));
        assert_sign(&result, Sign::Yes, 0.90);
    }

    #[test]
    fn thumb_index_curve_is_letter_c() {
        // Same finger pattern as "Yes", but the tips sit in the 0.2..0.4
        // band, so the later C rule is the first match.
        let mut points = hand([true, true, false, false, false]);
        points[landmark::THUMB_MCP].x = 190.0;
        points[landmark::THUMB_TIP].x = 186.0;
        points[landmark::THUMB_TIP].y = 208.0;
        let result = classify(&HandPose::from_points(points));
        assert_sign(&result, Sign::LetterC, 0.75);
    }

    #[test]
    fn spread_pair_is_victory() {
        let result = classify(&moved(
            [false, true, true, false, false],
            landmark::INDEX_TIP,
            170.0,
            200.0,
        ));
        assert_sign(&result, Sign::Victory, 0.85);
    }

    #[test]
    fn narrow_pair_matches_nothing() {
        // Index and middle extended but held together: too narrow for
        // "Victory" and no later rule accepts the pattern.
        let result = classify(&moved(
            [false, true, true, false, false],
            landmark::INDEX_TIP,
            195.0,
            200.0,
        ));
        assert!(!result.is_match());
    }

    #[test]
    fn index_only_is_more() {
        assert_sign(
            &classify(&pose([false, true, false, false, false])),
            Sign::More,
            0.80,
        );
    }

    #[test]
    fn three_fingers_is_less() {
        assert_sign(
            &classify(&pose([false, true, true, true, false])),
            Sign::Less,
            0.80,
        );
    }

    #[test]
    fn four_fingers_is_water_even_when_held_together() {
        // The flat-hand "B" rule shares this pattern but sits later in the
        // table, so "Water" always wins the tie.
        let result = classify(&moved(
            [false, true, true, true, true],
            landmark::INDEX_TIP,
            195.0,
            200.0,
        ));
        assert_sign(&result, Sign::Water, 0.75);
    }

    #[test]
    fn thumb_index_pinky_is_i_love_you() {
        assert_sign(
            &classify(&pose([true, true, false, false, true])),
            Sign::ILoveYou,
            0.85,
        );
    }

    #[test]
    fn thumb_beside_fist_is_letter_a() {
        // Thumb extended but resting at the side of the fist, level with
        // the wrist: below it (no "Good"), inside the down-margin (no
        // "Bad"), within horizontal reach ("A").
        let mut points = hand([true, false, false, false, false]);
        points[landmark::THUMB_MCP].x = 190.0;
        points[landmark::THUMB_TIP].x = 215.0;
        points[landmark::THUMB_TIP].y = 310.0;
        let result = classify(&HandPose::from_points(points));
        assert_sign(&result, Sign::LetterA, 0.80);
    }

    #[test]
    fn tiny_hand_is_rejected_before_rules() {
        // An open hand scaled down to a few pixels: the pattern would be
        // "Hello" but the scale gate runs first.
        let points: Vec<Landmark> = hand([true, true, true, true, true])
            .into_iter()
            .map(|p| Landmark::new(p.index, WRIST.0 + (p.x - WRIST.0) / 20.0, WRIST.1 + (p.y - WRIST.1) / 20.0))
            .collect();
        let result = classify(&HandPose::from_points(points));
        assert!(!result.is_match());
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn incomplete_pose_is_no_match() {
        let pose: HandPose = hand([true, true, true, true, true])
            .into_iter()
            .take(15)
            .collect();
        assert_eq!(classify(&pose), Classification::no_match());
    }

    #[test]
    fn all_rule_confidences_are_in_unit_range() {
        for rule in &crate::rules::RULES {
            assert!((0.0..=1.0).contains(&rule.confidence));
        }
    }

    #[test]
    fn dictionary_text_overrides_intrinsic_name() {
        let dictionary = SignDictionary::from_entries([(0, "Hi there".to_string())]);
        let classifier = SignClassifier::new(dictionary);

        let result = classifier.classify(&pose([true, true, true, true, true]));
        assert_eq!(result.sign, Some(Sign::Hello));
        assert_eq!(result.text.as_deref(), Some("Hi there"));

        // No entry for Stop: intrinsic name.
        let result = classifier.classify(&pose([false, false, false, false, false]));
        assert_eq!(result.text.as_deref(), Some("Stop"));
    }
}
