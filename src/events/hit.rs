//! Hit event and collider naming.
//!
//! The collision source (outside this crate) reports overlaps between a
//! fighter's colliders and the opponent's. Every overlap is triggered as a
//! [`HitEvent`]; [`hit_observer`](crate::systems::combat::hit_observer)
//! decides whether it actually lands.

use std::fmt;
use std::str::FromStr;

use bevy_ecs::prelude::*;

use crate::error::FightError;
use crate::moves::bodypart::BodyPart;

/// Name of the whole-body collider.
pub const BODY_COLLIDER: &str = "characterCollider";

/// Which collider of a fighter took part in an overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collider {
    /// The fighter's torso-sized body box.
    Body,
    /// The damage collider of a limb.
    Part(BodyPart),
    /// The shield a block move extends from a limb.
    Shield(BodyPart),
}

impl fmt::Display for Collider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collider::Body => f.write_str(BODY_COLLIDER),
            Collider::Part(part) => write!(f, "{}", part),
            Collider::Shield(part) => f.write_str(&part.shield_name()),
        }
    }
}

impl FromStr for Collider {
    type Err = FightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == BODY_COLLIDER || s == "Body" {
            return Ok(Collider::Body);
        }
        if let Some(part) = BodyPart::from_shield_name(s) {
            return Ok(Collider::Shield(part));
        }
        s.parse().map(Collider::Part)
    }
}

/// An attacker's collider touched a defender's collider.
#[derive(Event, Debug, Clone, Copy)]
pub struct HitEvent {
    pub attacker: Entity,
    pub defender: Entity,
    pub attacker_collider: Collider,
    pub defender_collider: Collider,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collider_names() {
        assert_eq!("characterCollider".parse::<Collider>().unwrap(), Collider::Body);
        assert_eq!(
            "Right Hand".parse::<Collider>().unwrap(),
            Collider::Part(BodyPart::RightHand)
        );
        assert_eq!(
            "LowerLeftArmShield".parse::<Collider>().unwrap(),
            Collider::Shield(BodyPart::LowerLeftArm)
        );
        assert!(matches!(
            "Tail".parse::<Collider>(),
            Err(FightError::UnknownBodyPart(_))
        ));
    }

    #[test]
    fn test_display_matches_parse() {
        for c in [
            Collider::Body,
            Collider::Part(BodyPart::UpperLeftLeg),
            Collider::Shield(BodyPart::Head),
        ] {
            assert_eq!(c.to_string().parse::<Collider>().unwrap(), c);
        }
    }
}
