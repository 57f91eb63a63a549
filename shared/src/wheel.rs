use rand::Rng;
use serde::{Deserialize, Serialize};

/// One prize option on the wheel. `probability` is the weight shown to the
/// operator as a percentage; the selector only requires weights to be
/// non-negative.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Segment {
    pub id: String,
    pub name: String,
    pub color: String,
    pub probability: f64,
}

/// The active wheel configuration as edited in the admin panel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelConfig {
    pub segments: Vec<Segment>,
}

// Editor bounds. The selector itself never sees fewer than MIN_SEGMENTS
// because the editor refuses to go below it.
pub const MIN_SEGMENTS: usize = 2;
pub const MAX_SEGMENTS: usize = 12;
pub const PROBABILITY_TARGET: f64 = 100.0;
pub const PROBABILITY_TOLERANCE: f64 = 0.1;

// Constants for the spin animation
pub const SPIN_DURATION_MS: u32 = 5000; // Duration of the spin animation in milliseconds
pub const WIN_REVEAL_DELAY_MS: u32 = 500; // Pause between wheel stop and prize reveal
pub const MIN_SPINS: u32 = 5; // Minimum number of cosmetic full rotations
pub const MAX_SPINS: u32 = 8; // Maximum number of cosmetic full rotations

/// Palette cycled through when new segments are added in the editor.
pub const SEGMENT_COLORS: [&str; 8] = [
    "hsl(142, 71%, 45%)",
    "hsl(45, 93%, 47%)",
    "hsl(221, 83%, 53%)",
    "hsl(0, 84%, 60%)",
    "hsl(280, 68%, 60%)",
    "hsl(173, 80%, 40%)",
    "hsl(24, 95%, 53%)",
    "hsl(262, 83%, 58%)",
];

/// The eight-segment wheel shipped before an operator configures anything.
pub fn default_segments() -> Vec<Segment> {
    let defaults = [
        ("1", "10% Off", "hsl(142, 71%, 45%)", 25.0),
        ("2", "Free Ebook", "hsl(45, 93%, 47%)", 30.0),
        ("3", "25% Off", "hsl(221, 83%, 53%)", 20.0),
        ("4", "Try Again", "hsl(0, 84%, 60%)", 15.0),
        ("5", "Free Coffee", "hsl(280, 68%, 60%)", 5.0),
        ("6", "Mystery Gift", "hsl(173, 80%, 40%)", 4.0),
        ("7", "VIP Access", "hsl(24, 95%, 53%)", 0.9),
        ("8", "JACKPOT!", "hsl(262, 83%, 58%)", 0.1),
    ];
    defaults
        .iter()
        .map(|(id, name, color, probability)| Segment {
            id: (*id).to_string(),
            name: (*name).to_string(),
            color: (*color).to_string(),
            probability: *probability,
        })
        .collect()
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self { segments: default_segments() }
    }
}

impl WheelConfig {
    pub fn total_probability(&self) -> f64 {
        self.segments.iter().map(|s| s.probability).sum()
    }

    /// The editor only allows saving when the weights read as a full 100%.
    pub fn is_probability_valid(&self) -> bool {
        (self.total_probability() - PROBABILITY_TARGET).abs() < PROBABILITY_TOLERANCE
    }

    pub fn can_add(&self) -> bool {
        self.segments.len() < MAX_SEGMENTS
    }

    pub fn can_remove(&self) -> bool {
        self.segments.len() > MIN_SEGMENTS
    }

    /// Appends a fresh segment with the next palette color. Returns false
    /// when the wheel is already full.
    pub fn add_segment(&mut self, id: String) -> bool {
        if !self.can_add() {
            return false;
        }
        let color = SEGMENT_COLORS[self.segments.len() % SEGMENT_COLORS.len()];
        self.segments.push(Segment {
            id,
            name: "New Prize".to_string(),
            color: color.to_string(),
            probability: 10.0,
        });
        true
    }

    /// Removes a segment by id. Refused once the wheel is at its minimum,
    /// and for unknown ids.
    pub fn remove_segment(&mut self, id: &str) -> bool {
        if !self.can_remove() {
            return false;
        }
        let before = self.segments.len();
        self.segments.retain(|s| s.id != id);
        self.segments.len() != before
    }
}

/// Picks a segment with frequency proportional to its weight. The draw is
/// uniform over `[0, total)`; walking the list and subtracting each weight
/// lands on the segment whose span contains the draw.
///
/// A draw that survives the walk (all-zero weights, or the running value
/// grazing the zero boundary) falls back to the first segment: a
/// misconfigured wheel degrades to always paying out its first prize
/// instead of failing the spin. Returns `None` only for an empty list,
/// which the editor's minimum-segment rule keeps unreachable.
pub fn select_prize<'a, R: Rng + ?Sized>(
    segments: &'a [Segment],
    rng: &mut R,
) -> Option<&'a Segment> {
    let total: f64 = segments.iter().map(|s| s.probability).sum();
    scan(segments, rng.gen::<f64>() * total)
}

fn scan(segments: &[Segment], mut roll: f64) -> Option<&Segment> {
    for segment in segments {
        roll -= segment.probability;
        if roll <= 0.0 {
            return Some(segment);
        }
    }
    segments.first()
}

/// Angular width of one slice, in degrees. Every segment gets an equal
/// slice regardless of its weight.
pub fn slice_angle(segment_count: usize) -> f64 {
    360.0 / segment_count as f64
}

/// Center of the winner's slice, measured clockwise from the fixed pointer.
pub fn winner_center_angle(segment_count: usize, winner_index: usize) -> f64 {
    let slice = slice_angle(segment_count);
    winner_index as f64 * slice + slice / 2.0
}

/// Degrees the wheel must turn so the pointer ends on `winner`, plus
/// `extra_turns` cosmetic full rotations. The wheel rotates while the
/// pointer stays fixed, so the landing component is `360 - center`. The
/// caller adds the result onto its cumulative rotation; nothing here
/// resets between spins.
pub fn target_rotation(segments: &[Segment], winner: &Segment, extra_turns: u32) -> f64 {
    let turns = f64::from(extra_turns) * 360.0;
    if segments.is_empty() {
        return turns;
    }
    // An unknown winner maps to slot 0, same degraded landing as the
    // selector fallback.
    let index = segments.iter().position(|s| s.id == winner.id).unwrap_or(0);
    turns + (360.0 - winner_center_angle(segments.len(), index))
}

/// Draws the cosmetic rotation count for one spin. Affects only how long
/// the animation runs, never which segment wins.
pub fn random_extra_turns<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(MIN_SPINS..=MAX_SPINS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn weighted(weights: &[f64]) -> Vec<Segment> {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| Segment {
                id: format!("{}", i + 1),
                name: format!("Prize {}", i + 1),
                color: SEGMENT_COLORS[i % SEGMENT_COLORS.len()].to_string(),
                probability: *w,
            })
            .collect()
    }

    #[test]
    fn test_scan_picks_segment_containing_draw() {
        // Draw of 90 over weights 25/75: 90 - 25 = 65 > 0, 65 - 75 <= 0.
        let segments = weighted(&[25.0, 75.0]);
        let winner = scan(&segments, 90.0).unwrap();
        assert_eq!(winner.id, "2");

        let winner = scan(&segments, 10.0).unwrap();
        assert_eq!(winner.id, "1");
    }

    #[test]
    fn test_scan_boundary_lands_on_earlier_segment() {
        // A draw exactly on a boundary belongs to the segment it closes.
        let segments = weighted(&[25.0, 75.0]);
        let winner = scan(&segments, 25.0).unwrap();
        assert_eq!(winner.id, "1");
    }

    #[test]
    fn test_select_prize_single_segment_always_wins() {
        let segments = weighted(&[100.0]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(select_prize(&segments, &mut rng).unwrap().id, "1");
        }
    }

    #[test]
    fn test_select_prize_zero_weights_fall_back_to_first() {
        let segments = weighted(&[0.0, 0.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(select_prize(&segments, &mut rng).unwrap().id, "1");
    }

    #[test]
    fn test_select_prize_empty_list_is_none() {
        let mut rng = StepRng::new(0, 0);
        assert!(select_prize(&[], &mut rng).is_none());
    }

    #[test]
    fn test_select_prize_zero_draw_picks_first() {
        let segments = weighted(&[25.0, 75.0]);
        let mut rng = StepRng::new(0, 0);
        assert_eq!(select_prize(&segments, &mut rng).unwrap().id, "1");
    }

    #[test]
    fn test_select_prize_frequencies_track_weights() {
        let segments = weighted(&[25.0, 75.0]);
        let mut rng = StdRng::seed_from_u64(42);
        let n = 20_000;
        let mut second = 0;
        for _ in 0..n {
            let winner = select_prize(&segments, &mut rng).unwrap();
            assert!(segments.iter().any(|s| s.id == winner.id));
            if winner.id == "2" {
                second += 1;
            }
        }
        let observed = second as f64 / n as f64;
        assert!((observed - 0.75).abs() < 0.02, "observed {observed}");
    }

    #[test]
    fn test_winner_center_angle_eight_slices() {
        // 8 slices of 45 degrees, winner index 2: 2 * 45 + 22.5.
        assert_eq!(winner_center_angle(8, 2), 112.5);
    }

    #[test]
    fn test_target_rotation_lands_pointer_on_center() {
        let segments = weighted(&[12.5; 8]);
        let winner = &segments[2];
        for extra in [0, 5, 8] {
            let rotation = target_rotation(&segments, winner, extra);
            assert_eq!(rotation.rem_euclid(360.0), 247.5);
            let landing = (360.0 - rotation.rem_euclid(360.0)).rem_euclid(360.0);
            assert_eq!(landing, winner_center_angle(8, 2));
        }
    }

    #[test]
    fn test_target_rotation_is_pure() {
        let segments = weighted(&[25.0, 75.0]);
        let a = target_rotation(&segments, &segments[1], 6);
        let b = target_rotation(&segments, &segments[1], 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_target_rotation_single_segment_is_defined() {
        let segments = weighted(&[100.0]);
        let rotation = target_rotation(&segments, &segments[0], 5);
        assert_eq!(rotation, 5.0 * 360.0 + 180.0);
    }

    #[test]
    fn test_random_extra_turns_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let turns = random_extra_turns(&mut rng);
            assert!((MIN_SPINS..=MAX_SPINS).contains(&turns));
        }
    }

    #[test]
    fn test_config_probability_validity() {
        let mut config = WheelConfig::default();
        assert_eq!(config.total_probability(), 100.0);
        assert!(config.is_probability_valid());

        config.segments[0].probability += 5.0;
        assert!(!config.is_probability_valid());
    }

    #[test]
    fn test_config_add_and_remove_bounds() {
        let mut config = WheelConfig { segments: weighted(&[50.0, 50.0]) };
        assert!(!config.remove_segment("1"), "must keep two segments");

        for i in 0..(MAX_SEGMENTS - 2) {
            assert!(config.add_segment(format!("new-{i}")));
        }
        assert_eq!(config.segments.len(), MAX_SEGMENTS);
        assert!(!config.add_segment("overflow".to_string()));

        assert!(config.remove_segment("new-0"));
        assert!(!config.remove_segment("new-0"), "unknown id is refused");
    }
}
