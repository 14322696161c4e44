//! Rotatable body parts of a fighter.
//!
//! The stick figure is a fixed set of limbs, so parts are a closed enum instead
//! of names looked up in a scene graph. Every part has a stable index used by
//! [`Skeleton`](crate::components::skeleton::Skeleton) as its arena slot, an
//! authored display name (`"Upper Right Arm"`) used in saved move files, and a
//! shield name (`"UpperRightArmShield"`) for block moves.
//!
//! Unknown names fail when parsed, which means a move file referencing a part
//! that does not exist is rejected while loading rather than while fighting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FightError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BodyPart {
    #[serde(rename = "Head")]
    Head,
    #[serde(rename = "Torso")]
    Torso,
    #[serde(rename = "Upper Right Arm")]
    UpperRightArm,
    #[serde(rename = "Lower Right Arm")]
    LowerRightArm,
    #[serde(rename = "Right Hand")]
    RightHand,
    #[serde(rename = "Upper Left Arm")]
    UpperLeftArm,
    #[serde(rename = "Lower Left Arm")]
    LowerLeftArm,
    #[serde(rename = "Left Hand")]
    LeftHand,
    #[serde(rename = "Upper Right Leg")]
    UpperRightLeg,
    #[serde(rename = "Lower Right Leg")]
    LowerRightLeg,
    #[serde(rename = "Right Foot")]
    RightFoot,
    #[serde(rename = "Upper Left Leg")]
    UpperLeftLeg,
    #[serde(rename = "Lower Left Leg")]
    LowerLeftLeg,
    #[serde(rename = "Left Foot")]
    LeftFoot,
}

impl BodyPart {
    /// Number of parts; the size of every per-part arena.
    pub const COUNT: usize = 14;

    /// All parts in index order.
    pub const ALL: [BodyPart; BodyPart::COUNT] = [
        BodyPart::Head,
        BodyPart::Torso,
        BodyPart::UpperRightArm,
        BodyPart::LowerRightArm,
        BodyPart::RightHand,
        BodyPart::UpperLeftArm,
        BodyPart::LowerLeftArm,
        BodyPart::LeftHand,
        BodyPart::UpperRightLeg,
        BodyPart::LowerRightLeg,
        BodyPart::RightFoot,
        BodyPart::UpperLeftLeg,
        BodyPart::LowerLeftLeg,
        BodyPart::LeftFoot,
    ];

    /// Arena slot of this part.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Authored display name, e.g. `"Upper Right Arm"`.
    pub fn name(self) -> &'static str {
        match self {
            BodyPart::Head => "Head",
            BodyPart::Torso => "Torso",
            BodyPart::UpperRightArm => "Upper Right Arm",
            BodyPart::LowerRightArm => "Lower Right Arm",
            BodyPart::RightHand => "Right Hand",
            BodyPart::UpperLeftArm => "Upper Left Arm",
            BodyPart::LowerLeftArm => "Lower Left Arm",
            BodyPart::LeftHand => "Left Hand",
            BodyPart::UpperRightLeg => "Upper Right Leg",
            BodyPart::LowerRightLeg => "Lower Right Leg",
            BodyPart::RightFoot => "Right Foot",
            BodyPart::UpperLeftLeg => "Upper Left Leg",
            BodyPart::LowerLeftLeg => "Lower Left Leg",
            BodyPart::LeftFoot => "Left Foot",
        }
    }

    /// Name of the shield attached to this part, e.g. `"UpperRightArmShield"`.
    pub fn shield_name(self) -> String {
        format!("{}Shield", self.name().replace(' ', ""))
    }

    /// Look up a part by its shield name.
    pub fn from_shield_name(name: &str) -> Option<BodyPart> {
        let stem = name.strip_suffix("Shield")?;
        BodyPart::ALL
            .into_iter()
            .find(|part| part.name().replace(' ', "") == stem)
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BodyPart {
    type Err = FightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BodyPart::ALL
            .into_iter()
            .find(|part| part.name() == s)
            .ok_or_else(|| FightError::UnknownBodyPart(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, part) in BodyPart::ALL.iter().enumerate() {
            assert_eq!(part.index(), i);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Head".parse::<BodyPart>().unwrap(), BodyPart::Head);
        assert_eq!(
            "Lower Left Leg".parse::<BodyPart>().unwrap(),
            BodyPart::LowerLeftLeg
        );
        assert!(matches!(
            "Tail".parse::<BodyPart>(),
            Err(FightError::UnknownBodyPart(_))
        ));
    }

    #[test]
    fn test_shield_names() {
        assert_eq!(BodyPart::RightHand.shield_name(), "RightHandShield");
        assert_eq!(
            BodyPart::from_shield_name("UpperLeftArmShield"),
            Some(BodyPart::UpperLeftArm)
        );
        assert_eq!(BodyPart::from_shield_name("Right Hand"), None);
        assert_eq!(BodyPart::from_shield_name("WingShield"), None);
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&BodyPart::LeftFoot).unwrap();
        assert_eq!(json, "\"Left Foot\"");
        let back: BodyPart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BodyPart::LeftFoot);
        assert!(serde_json::from_str::<BodyPart>("\"Tentacle\"").is_err());
    }
}
