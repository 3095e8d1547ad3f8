//! Hit locations for ranged fire.
//!
//! The primary hit is found by reading the attack roll backwards (a roll
//! of 30 hits location 03). Further hits from the same burst walk a fixed
//! table keyed by the zone of the primary hit.

use serde::{Deserialize, Serialize};

/// A body location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// 01-10.
    Head,
    /// 11-20.
    RightArm,
    /// 21-30.
    LeftArm,
    /// 31-70.
    Body,
    /// 71-85.
    RightLeg,
    /// 86-00.
    LeftLeg,
}

impl Location {
    /// The location hit by an attack roll.
    pub fn from_roll(roll: u32) -> Self {
        match reverse_digits(roll) {
            ..=10 => Self::Head,
            11..=20 => Self::RightArm,
            21..=30 => Self::LeftArm,
            31..=70 => Self::Body,
            71..=85 => Self::RightLeg,
            _ => Self::LeftLeg,
        }
    }

    /// The zone this location belongs to.
    pub fn zone(self) -> Zone {
        match self {
            Self::Head => Zone::Head,
            Self::RightArm | Self::LeftArm => Zone::Arm,
            Self::Body => Zone::Body,
            Self::RightLeg | Self::LeftLeg => Zone::Leg,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Head => write!(f, "Head"),
            Self::RightArm => write!(f, "Right Arm"),
            Self::LeftArm => write!(f, "Left Arm"),
            Self::Body => write!(f, "Body"),
            Self::RightLeg => write!(f, "Right Leg"),
            Self::LeftLeg => write!(f, "Left Leg"),
        }
    }
}

/// A coarse body zone used by the multiple-hits table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// The head.
    Head,
    /// Either arm.
    Arm,
    /// The torso.
    Body,
    /// Either leg.
    Leg,
}

impl Zone {
    /// Zones struck by the third, fourth and fifth hits, then every hit
    /// after that.
    pub const fn follow_up(self) -> [Zone; 4] {
        match self {
            Self::Head => [Zone::Arm, Zone::Body, Zone::Arm, Zone::Body],
            Self::Arm => [Zone::Body, Zone::Head, Zone::Body, Zone::Arm],
            Self::Body => [Zone::Arm, Zone::Head, Zone::Arm, Zone::Body],
            Self::Leg => [Zone::Body, Zone::Arm, Zone::Head, Zone::Body],
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Head => write!(f, "Head"),
            Self::Arm => write!(f, "Arm"),
            Self::Body => write!(f, "Body"),
            Self::Leg => write!(f, "Leg"),
        }
    }
}

/// One entry in the list of hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hit {
    /// A hit on a specific location.
    Location(Location),
    /// A hit on a zone from the follow-up table.
    Zone(Zone),
    /// Every hit past the fifth, all on the same zone.
    Repeated {
        /// Zone struck.
        zone: Zone,
        /// Number of hits.
        count: u32,
    },
}

impl std::fmt::Display for Hit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Location(location) => write!(f, "{location}"),
            Self::Zone(zone) => write!(f, "{zone}"),
            Self::Repeated { zone, count } => write!(f, "{zone} x{count}"),
        }
    }
}

/// Hits landed by a burst: the primary hit plus `extra` more.
pub fn hits(roll: u32, extra: u32) -> Vec<Hit> {
    let primary = Location::from_roll(roll);
    let mut hits = vec![Hit::Location(primary)];
    if extra == 0 {
        return hits;
    }
    hits.push(Hit::Location(primary));

    let table = primary.zone().follow_up();
    let walked = (extra - 1).min(3) as usize;
    hits.extend(table[..walked].iter().copied().map(Hit::Zone));
    if extra > 4 {
        hits.push(Hit::Repeated {
            zone: table[3],
            count: extra - 4,
        });
    }
    hits
}

fn reverse_digits(mut n: u32) -> u32 {
    let mut reversed = 0;
    while n > 0 {
        reversed = reversed * 10 + n % 10;
        n /= 10;
    }
    reversed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(hits: &[Hit]) -> Vec<String> {
        hits.iter().map(Hit::to_string).collect()
    }

    #[test]
    fn digits_are_reversed() {
        assert_eq!(reverse_digits(30), 3);
        assert_eq!(reverse_digits(47), 74);
        assert_eq!(reverse_digits(5), 5);
        assert_eq!(reverse_digits(100), 1);
    }

    #[test]
    fn location_buckets() {
        assert_eq!(Location::from_roll(30), Location::Head); // 03
        assert_eq!(Location::from_roll(1), Location::Head);
        assert_eq!(Location::from_roll(11), Location::RightArm);
        assert_eq!(Location::from_roll(2), Location::Head);
        assert_eq!(Location::from_roll(21), Location::RightArm); // 12
        assert_eq!(Location::from_roll(52), Location::LeftArm); // 25
        assert_eq!(Location::from_roll(3), Location::Head);
        assert_eq!(Location::from_roll(13), Location::Body); // 31
        assert_eq!(Location::from_roll(74), Location::Body); // 47
        assert_eq!(Location::from_roll(27), Location::RightLeg); // 72
        assert_eq!(Location::from_roll(58), Location::RightLeg); // 85
        assert_eq!(Location::from_roll(68), Location::LeftLeg); // 86
        assert_eq!(Location::from_roll(99), Location::LeftLeg);
    }

    #[test]
    fn zones() {
        assert_eq!(Location::RightArm.zone(), Zone::Arm);
        assert_eq!(Location::LeftLeg.zone(), Zone::Leg);
        assert_eq!(Location::Body.zone(), Zone::Body);
    }

    #[test]
    fn single_hit() {
        assert_eq!(labels(&hits(30, 0)), ["Head"]);
    }

    #[test]
    fn second_hit_repeats_the_primary() {
        assert_eq!(labels(&hits(11, 1)), ["Right Arm", "Right Arm"]);
    }

    #[test]
    fn head_burst_walks_the_table() {
        assert_eq!(
            labels(&hits(30, 4)),
            ["Head", "Head", "Arm", "Body", "Arm"]
        );
    }

    #[test]
    fn hits_past_the_fifth_collapse() {
        assert_eq!(
            labels(&hits(30, 5)),
            ["Head", "Head", "Arm", "Body", "Arm", "Body x1"]
        );
        assert_eq!(
            labels(&hits(30, 9)),
            ["Head", "Head", "Arm", "Body", "Arm", "Body x5"]
        );
    }

    #[test]
    fn follow_up_depends_on_zone() {
        // 47 reversed is 74: right leg.
        assert_eq!(
            labels(&hits(47, 6)),
            ["Right Leg", "Right Leg", "Body", "Arm", "Head", "Body x2"]
        );
        // 54 reversed is 45: body.
        assert_eq!(labels(&hits(54, 3)), ["Body", "Body", "Arm", "Head"]);
        // 61 reversed is 16: right arm.
        assert_eq!(labels(&hits(61, 2)), ["Right Arm", "Right Arm", "Body"]);
    }

    #[test]
    fn hit_count_is_bounded() {
        for extra in 0..20 {
            assert!(hits(30, extra).len() <= 6);
            assert!(hits(30, extra).len() as u32 <= extra + 1);
        }
    }
}
