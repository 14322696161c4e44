//! Dense pose synthesis.
//!
//! A move only stores a handful of key poses. Before playback the blender
//! expands them into one pose per simulation tick by blending every adjacent
//! pair of key poses with [`blend_angle`]. The per-tick advance comes from the
//! move's speed stat; block moves use a fixed speed and additionally hold their
//! middle key pose for a while so the shield stays out.
//!
//! # Expansion
//!
//! 1. `step = round(min_speed + speed/100 * (max_speed - min_speed))`, where
//!    block moves replace `speed/100` with `block_speed_percentage`.
//! 2. Block moves repeat the middle key pose `block_time` extra times.
//! 3. For each adjacent pair, `p` walks `0, step, 2*step, ...` while `p <= 100`,
//!    emitting `blend_poses(a, b, p)`.
//! 4. The very last segment always ends on `p = 100` exactly once, so playback
//!    returns to the final authored pose.

use super::angle::blend_angle;
use super::fightmove::Move;
use super::pose::Pose;

const DEFAULT_MIN_SPEED: u32 = 30;
const DEFAULT_MAX_SPEED: u32 = 81;
const DEFAULT_BLOCK_TIME: usize = 20;
const DEFAULT_BLOCK_SPEED_PERCENTAGE: f32 = 0.9;

/// Tunables for expansion. Defaults match the shipped balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendParams {
    /// Percentage points advanced per tick at speed stat 0.
    pub min_speed: u32,
    /// Percentage points advanced per tick at speed stat 100.
    pub max_speed: u32,
    /// Extra copies of the middle key pose inserted into block moves.
    pub block_time: usize,
    /// Fixed speed fraction (`0.0..=1.0`) used by every block move.
    pub block_speed_percentage: f32,
}

impl Default for BlendParams {
    fn default() -> Self {
        Self {
            min_speed: DEFAULT_MIN_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            block_time: DEFAULT_BLOCK_TIME,
            block_speed_percentage: DEFAULT_BLOCK_SPEED_PERCENTAGE,
        }
    }
}

/// Percentage points advanced per tick for a given speed stat.
///
/// Never returns 0, so expansion always terminates.
pub fn tick_step(speed_stat: u8, block_move: bool, params: &BlendParams) -> u32 {
    let fraction = if block_move {
        params.block_speed_percentage
    } else {
        f32::from(speed_stat) / 100.0
    };
    let min = params.min_speed as f32;
    let max = params.max_speed as f32;
    let step = (min + fraction * (max - min)).round_ties_even();
    (step.max(1.0)) as u32
}

/// Key-pose indices after splicing a hold of `hold` repeats of the middle pose.
///
/// For `n = 4, hold = 2` this yields `[0, 1, 2, 2, 2, 3]`.
pub fn block_hold_indices(n: usize, hold: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let mid = n / 2;
    (0..n + hold)
        .map(|i| {
            if i < mid {
                i
            } else if i <= mid + hold {
                mid
            } else {
                i - hold
            }
        })
        .collect()
}

/// Blend two poses part by part.
///
/// Every part named by either pose is blended; a part missing from one side
/// uses the default rotation on that side.
pub fn blend_poses(from: &Pose, to: &Pose, percentage: f32) -> Pose {
    let mut out = Pose::new();
    for (part, from_rot) in from.iter() {
        out.set_rotation(part, blend_angle(from_rot, to.rotation(part), percentage));
    }
    for (part, to_rot) in to.iter() {
        if !from.contains(part) {
            out.set_rotation(part, blend_angle(from.rotation(part), to_rot, percentage));
        }
    }
    out
}

/// Expand key poses into the dense per-tick sequence.
pub fn expand(key_poses: &[Pose], speed_stat: u8, block_move: bool, params: &BlendParams) -> Vec<Pose> {
    match key_poses.len() {
        0 => return Vec::new(),
        1 => return vec![key_poses[0].clone()],
        _ => {}
    }

    let step = tick_step(speed_stat, block_move, params);
    let order: Vec<&Pose> = if block_move {
        block_hold_indices(key_poses.len(), params.block_time)
            .into_iter()
            .map(|i| &key_poses[i])
            .collect()
    } else {
        key_poses.iter().collect()
    };

    let per_segment = (100 / step) as usize + 1;
    let last_emitted = (100 / step) * step;
    let mut sequence = Vec::with_capacity((order.len() - 1) * per_segment + 1);
    let last_segment = order.len() - 2;
    for (i, pair) in order.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let mut p = 0;
        while p <= 100 {
            sequence.push(blend_poses(from, to, p as f32));
            p += step;
        }
        if i == last_segment && last_emitted != 100 {
            sequence.push(blend_poses(from, to, 100.0));
        }
    }
    sequence
}

/// Expand a move using its own speed stat and block flag.
pub fn expand_move(m: &Move, params: &BlendParams) -> Vec<Pose> {
    expand(m.key_poses(), m.speed(), m.is_block_move(), params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::bodypart::BodyPart;

    const ARM: BodyPart = BodyPart::UpperRightArm;

    fn arm(angle: f32) -> Pose {
        Pose::new().with(ARM, angle)
    }

    #[test]
    fn test_unwrapped_key_angles_take_short_arc() {
        let seq = expand(&[arm(360.0), arm(10.0)], 50, false, &BlendParams::default());
        for pose in &seq {
            let r = pose.rotation(ARM);
            assert!((0.0..=10.0).contains(&r), "swept to {r}");
        }
        assert_eq!(seq.last().unwrap().rotation(ARM), 10.0);
    }

    #[test]
    fn test_tick_step_bounds() {
        let params = BlendParams::default();
        assert_eq!(tick_step(0, false, &params), 30);
        assert_eq!(tick_step(100, false, &params), 81);
        // 30 + 0.5 * 51 = 55.5, ties go to even
        assert_eq!(tick_step(50, false, &params), 56);
    }

    #[test]
    fn test_block_step_ignores_speed_stat() {
        let params = BlendParams::default();
        let slow = tick_step(0, true, &params);
        let fast = tick_step(100, true, &params);
        assert_eq!(slow, fast);
        assert_eq!(slow, 76); // 30 + 0.9 * 51 = 75.9
    }

    #[test]
    fn test_tick_step_never_zero() {
        let params = BlendParams {
            min_speed: 0,
            max_speed: 0,
            ..BlendParams::default()
        };
        assert_eq!(tick_step(0, false, &params), 1);
    }

    #[test]
    fn test_block_hold_indices() {
        assert_eq!(block_hold_indices(4, 2), vec![0, 1, 2, 2, 2, 3]);
        assert_eq!(block_hold_indices(3, 0), vec![0, 1, 2]);
        assert_eq!(block_hold_indices(1, 2), vec![0, 0, 0]);
        assert!(block_hold_indices(0, 5).is_empty());

        let twelve = block_hold_indices(12, 20);
        assert_eq!(twelve.len(), 32);
        assert_eq!(twelve.iter().filter(|&&i| i == 6).count(), 21);
        assert_eq!(*twelve.last().unwrap(), 11);
    }

    #[test]
    fn test_two_pose_scenario() {
        let params = BlendParams::default();
        let seq = expand(&[arm(0.0), arm(170.0)], 50, false, &params);
        let step = tick_step(50, false, &params);
        assert_eq!(seq.len(), (100 / step) as usize + 1 + 1);
        assert_eq!(seq[0].rotation(ARM), 0.0);
        assert!((seq[1].rotation(ARM) - 170.0 * 0.56).abs() < 1e-3);
        assert_eq!(seq.last().unwrap().rotation(ARM), 170.0);
    }

    #[test]
    fn test_final_pose_emitted_once_when_step_divides_100() {
        let params = BlendParams {
            min_speed: 50,
            max_speed: 50,
            ..BlendParams::default()
        };
        let seq = expand(&[arm(0.0), arm(90.0)], 0, false, &params);
        let angles: Vec<f32> = seq.iter().map(|p| p.rotation(ARM)).collect();
        assert_eq!(angles, vec![0.0, 45.0, 90.0]);
    }

    #[test]
    fn test_final_pose_reached_for_every_speed() {
        let params = BlendParams::default();
        let keys = [arm(10.0), arm(120.0), arm(350.0), arm(300.0)];
        for speed in 0..=100u8 {
            let seq = expand(&keys, speed, false, &params);
            assert_eq!(seq.last().unwrap().rotation(ARM), 300.0, "speed {speed}");
            let last = seq.len() - 1;
            assert_ne!(seq[last - 1].rotation(ARM), 300.0, "speed {speed} repeated final pose");
        }
    }

    #[test]
    fn test_wrap_segment_passes_through_zero() {
        let params = BlendParams {
            min_speed: 50,
            max_speed: 50,
            ..BlendParams::default()
        };
        let seq = expand(&[arm(350.0), arm(10.0)], 0, false, &params);
        assert!((seq[1].rotation(ARM) - 360.0).abs() < 1e-3);
    }

    #[test]
    fn test_block_move_is_longer() {
        let params = BlendParams::default();
        let keys: Vec<Pose> = (0..6).map(|i| arm(i as f32 * 20.0)).collect();
        let mut attack = Move::new("attack");
        let mut block = Move::new("block");
        for k in &keys {
            attack.add_key_pose(k.clone()).unwrap();
            block.add_key_pose(k.clone()).unwrap();
        }
        // speed 90 gives the same per-tick step as a block move
        attack.set_speed(90);
        block.set_speed(90);
        block.set_block_move(true);
        assert_eq!(
            tick_step(90, false, &params),
            tick_step(90, true, &params)
        );

        let plain = expand_move(&attack, &params);
        let held = expand_move(&block, &params);
        let per_segment = (100 / tick_step(90, true, &params)) as usize + 1;
        assert_eq!(held.len() - plain.len(), params.block_time * per_segment);
    }

    #[test]
    fn test_parts_from_either_pose_are_blended() {
        let from = Pose::new().with(BodyPart::Head, 20.0);
        let to = Pose::new().with(BodyPart::Torso, 40.0);
        let mid = blend_poses(&from, &to, 50.0);
        assert_eq!(mid.rotation(BodyPart::Head), 10.0);
        assert_eq!(mid.rotation(BodyPart::Torso), 20.0);
    }

    #[test]
    fn test_degenerate_moves() {
        let params = BlendParams::default();
        assert!(expand(&[], 50, false, &params).is_empty());
        let single = expand(&[arm(33.0)], 50, true, &params);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].rotation(ARM), 33.0);
    }
}
