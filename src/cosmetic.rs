//! Placeholder text and cosmetic counter generation.
//!
//! Items without an override still need a title, a description, and
//! like/save counts. Those values are decorative — nothing downstream
//! depends on which pool entry or which count an item gets — but they must
//! be *reproducible*, so the same config always produces the same manifest
//! and tests can assert exact output.
//!
//! The split is deliberate: everything that shapes data (category
//! detection, filtering, pagination) is a pure function elsewhere in the
//! crate; everything decorative funnels through the [`CosmeticSource`]
//! trait here. Production uses [`SeededCosmetics`], a tiny SplitMix64
//! stream seeded from config. Tests can substitute a fixed-sequence stub.
//!
//! ## Pools and ranges
//!
//! - 12 generic placeholder titles
//! - 3 placeholder descriptions per category
//! - likes in 50–550, saves in 20–220 (inclusive)

use crate::types::Category;

/// Generic placeholder titles for items without an override.
const TITLE_POOL: [&str; 12] = [
    "Digital Masterpiece",
    "Creative Vision",
    "Artistic Expression",
    "Digital Art",
    "Modern Creation",
    "Visual Story",
    "Artistic Journey",
    "Creative Design",
    "Digital Fantasy",
    "Artistic Wonder",
    "Creative Masterwork",
    "Visual Poetry",
];

/// Placeholder descriptions, keyed by resolved category.
fn description_pool(category: Category) -> [&'static str; 3] {
    match category {
        Category::Portraits => [
            "A captivating digital portrait showcasing advanced artistic techniques and creative vision.",
            "An expressive character design with intricate details and vibrant digital artistry.",
            "A stunning portrait that captures emotion and personality through digital art mastery.",
        ],
        Category::Abstract => [
            "An abstract exploration of color, form, and digital creativity in modern art.",
            "A mesmerizing abstract composition that challenges perception and inspires imagination.",
            "An innovative abstract piece showcasing the fusion of technology and artistic expression.",
        ],
        Category::Nature => [
            "A beautiful interpretation of natural forms through digital artistic techniques.",
            "A serene digital landscape that captures the essence of nature's beauty.",
            "An organic composition blending natural elements with digital artistry.",
        ],
        Category::Architecture => [
            "An architectural visualization showcasing structural beauty and design innovation.",
            "A stunning architectural composition highlighting form, space, and digital creativity.",
            "A modern architectural interpretation through the lens of digital artistry.",
        ],
    }
}

const LIKES_MIN: u32 = 50;
const LIKES_MAX: u32 = 550;
const SAVES_MIN: u32 = 20;
const SAVES_MAX: u32 = 220;

/// Source of the decorative choices made during catalog construction.
///
/// Implementations must be deterministic for a given starting state;
/// construction order of calls is part of the manifest contract.
pub trait CosmeticSource {
    /// Pick an index into a pool of `len` entries. `len` is always > 0.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Pick a count in the inclusive range `min..=max`.
    fn count_between(&mut self, min: u32, max: u32) -> u32;
}

/// Pick a placeholder title.
pub fn placeholder_title(source: &mut dyn CosmeticSource) -> String {
    TITLE_POOL[source.pick_index(TITLE_POOL.len())].to_string()
}

/// Pick a placeholder description for the resolved category.
pub fn placeholder_description(
    category: Category,
    source: &mut dyn CosmeticSource,
) -> String {
    let pool = description_pool(category);
    pool[source.pick_index(pool.len())].to_string()
}

/// Pick a like count in the documented 50–550 range.
pub fn likes(source: &mut dyn CosmeticSource) -> u32 {
    source.count_between(LIKES_MIN, LIKES_MAX)
}

/// Pick a save count in the documented 20–220 range.
pub fn saves(source: &mut dyn CosmeticSource) -> u32 {
    source.count_between(SAVES_MIN, SAVES_MAX)
}

/// Deterministic cosmetic source: a SplitMix64 stream.
///
/// Not cryptographic and not meant to be — it only has to spread choices
/// across the pools and stay stable across platforms and releases for a
/// given seed.
#[derive(Debug, Clone)]
pub struct SeededCosmetics {
    state: u64,
}

impl SeededCosmetics {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        // SplitMix64 step (Steele, Lea, Flood 2014).
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl CosmeticSource for SeededCosmetics {
    fn pick_index(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }

    fn count_between(&mut self, min: u32, max: u32) -> u32 {
        let span = u64::from(max - min) + 1;
        min + (self.next_u64() % span) as u32
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeededCosmetics::new(42);
        let mut b = SeededCosmetics::new(42);
        for _ in 0..50 {
            assert_eq!(a.pick_index(12), b.pick_index(12));
            assert_eq!(a.count_between(50, 550), b.count_between(50, 550));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededCosmetics::new(1);
        let mut b = SeededCosmetics::new(2);
        let seq_a: Vec<usize> = (0..16).map(|_| a.pick_index(1000)).collect();
        let seq_b: Vec<usize> = (0..16).map(|_| b.pick_index(1000)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn pick_index_stays_in_bounds() {
        let mut src = SeededCosmetics::new(7);
        for _ in 0..200 {
            assert!(src.pick_index(3) < 3);
        }
    }

    #[test]
    fn counts_stay_in_documented_ranges() {
        let mut src = SeededCosmetics::new(99);
        for _ in 0..200 {
            let l = likes(&mut src);
            let s = saves(&mut src);
            assert!((50..=550).contains(&l), "likes out of range: {l}");
            assert!((20..=220).contains(&s), "saves out of range: {s}");
        }
    }

    #[test]
    fn count_between_covers_full_inclusive_range() {
        let mut src = SeededCosmetics::new(3);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2000 {
            match src.count_between(0, 3) {
                0 => seen_min = true,
                3 => seen_max = true,
                _ => {}
            }
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn placeholder_title_comes_from_pool() {
        let mut src = SeededCosmetics::new(11);
        for _ in 0..20 {
            let title = placeholder_title(&mut src);
            assert!(TITLE_POOL.contains(&title.as_str()));
        }
    }

    #[test]
    fn placeholder_description_matches_category_pool() {
        let mut src = SeededCosmetics::new(11);
        for cat in Category::ALL {
            let desc = placeholder_description(cat, &mut src);
            assert!(description_pool(cat).contains(&desc.as_str()));
        }
    }

    #[test]
    fn stub_always_picks_first_entry() {
        let mut src = stub::FirstChoice;
        assert_eq!(placeholder_title(&mut src), "Digital Masterpiece");
        assert_eq!(likes(&mut src), 50);
        assert_eq!(saves(&mut src), 20);
    }
}
