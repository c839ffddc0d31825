/// Landmark indices for the 21-point hand model.
///
/// One tracked hand is always reported as 21 points in this fixed anatomical
/// order: the wrist, then four joints per finger from knuckle to tip.
pub mod landmark {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_DIP: usize = 7;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_DIP: usize = 11;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_PIP: usize = 14;
    pub const RING_DIP: usize = 15;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;

    pub const COUNT: usize = 21;
}

/// One tracked point on a hand, in image coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Landmark {
    pub index: u8,
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(index: u8, x: f32, y: f32) -> Self {
        Self { index, x, y }
    }

    pub fn distance_to(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Ordered landmark sequence for one hand in one frame.
///
/// Poses are carried regardless of completeness; downstream analysis treats
/// anything shorter than [`landmark::COUNT`] points as "no determination"
/// rather than an error. An absent hand is `None` at the API boundary, not an
/// empty pose.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HandPose {
    points: Vec<Landmark>,
}

impl HandPose {
    pub fn from_points(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    pub fn is_complete(&self) -> bool {
        self.points.len() == landmark::COUNT
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<&Landmark> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[Landmark] {
        &self.points
    }
}

impl FromIterator<Landmark> for HandPose {
    fn from_iter<T: IntoIterator<Item = Landmark>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

/// Extended/closed state for each of the five fingers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    pub fn extended(&self, finger: Finger) -> bool {
        match finger {
            Finger::Thumb => self.thumb,
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }

    pub fn extended_count(&self) -> u8 {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|&&extended| extended)
            .count() as u8
    }

    /// Matches against a pattern in thumb/index/middle/ring/pinky order.
    pub fn matches(&self, pattern: [bool; 5]) -> bool {
        [self.thumb, self.index, self.middle, self.ring, self.pinky] == pattern
    }
}

/// The closed sign catalogue, carrying the numeric ids used by the sign
/// dictionary file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[repr(u8)]
pub enum Sign {
    Hello = 0,
    Yes = 3,
    #[strum(serialize = "I Love You")]
    ILoveYou = 7,
    Good = 8,
    Bad = 9,
    Stop = 10,
    More = 12,
    Less = 13,
    Water = 14,
    Victory = 20,
    #[strum(serialize = "A")]
    LetterA = 21,
    #[strum(serialize = "B")]
    LetterB = 22,
    #[strum(serialize = "C")]
    LetterC = 23,
}

impl Sign {
    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Hello),
            3 => Some(Self::Yes),
            7 => Some(Self::ILoveYou),
            8 => Some(Self::Good),
            9 => Some(Self::Bad),
            10 => Some(Self::Stop),
            12 => Some(Self::More),
            13 => Some(Self::Less),
            14 => Some(Self::Water),
            20 => Some(Self::Victory),
            21 => Some(Self::LetterA),
            22 => Some(Self::LetterB),
            23 => Some(Self::LetterC),
            _ => None,
        }
    }
}

/// Result of classifying one pose. "No match" is `(None, None, 0.0)`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Classification {
    pub sign: Option<Sign>,
    pub text: Option<String>,
    pub confidence: f64,
}

impl Classification {
    pub fn no_match() -> Self {
        Self {
            sign: None,
            text: None,
            confidence: 0.0,
        }
    }

    pub fn of(sign: Sign, text: impl Into<String>, confidence: f64) -> Self {
        Self {
            sign: Some(sign),
            text: Some(text.into()),
            confidence,
        }
    }

    pub fn is_match(&self) -> bool {
        self.sign.is_some()
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::no_match()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn sign_ids_round_trip() {
        for sign in Sign::iter() {
            assert_eq!(Sign::from_id(sign.id()), Some(sign));
        }
    }

    #[test]
    fn unknown_sign_id_is_none() {
        assert_eq!(Sign::from_id(1), None);
        assert_eq!(Sign::from_id(255), None);
    }

    #[test]
    fn sign_display_names() {
        assert_eq!(Sign::Hello.to_string(), "Hello");
        assert_eq!(Sign::ILoveYou.to_string(), "I Love You");
        assert_eq!(Sign::LetterA.to_string(), "A");
    }

    #[test]
    fn finger_state_counts_extended() {
        let state = FingerState {
            thumb: true,
            index: true,
            middle: false,
            ring: false,
            pinky: true,
        };
        assert_eq!(state.extended_count(), 3);
        assert!(state.matches([true, true, false, false, true]));
        assert!(!state.matches([true, true, false, false, false]));
    }

    #[test]
    fn pose_completeness() {
        let partial: HandPose = (0..10)
            .map(|i| Landmark::new(i as u8, 0.0, 0.0))
            .collect();
        assert!(!partial.is_complete());

        let full: HandPose = (0..landmark::COUNT)
            .map(|i| Landmark::new(i as u8, 0.0, 0.0))
            .collect();
        assert!(full.is_complete());
        assert!(full.point(landmark::PINKY_TIP).is_some());
        assert!(full.point(landmark::COUNT).is_none());
    }

    #[test]
    fn no_match_classification() {
        let c = Classification::no_match();
        assert!(!c.is_match());
        assert_eq!(c.confidence, 0.0);
        assert!(c.text.is_none());
    }
}
