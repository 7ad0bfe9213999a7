//! Static per-category fallback pools, used when live generation is
//! unavailable. Selection is uniform-random with replacement; repeats across
//! consecutive calls are acceptable.

use kindred_core::Category;
use rand::seq::IndexedRandom;

const CRISIS_POOL: [&str; 3] = [
    "I hear that you are struggling. Take a deep breath right now. Inhale for 4 seconds, hold for 7, exhale for 8. Do this three times.",
    "This urge will pass. Distract yourself immediately—drink a glass of cold water or splash your face.",
    "You are stronger than this craving. Look around the room and name 5 blue objects. Ground yourself in the present.",
];

const REFLECTION_POOL: [&str; 5] = [
    "Thank you for sharing that. It sounds like a challenging moment. I appreciate your honesty. How did you feel immediately after writing this down?",
    "I hear you. It takes a lot of courage to admit that. What is one small thing you can do for yourself right now to feel a bit better?",
    "That sounds heavy to carry alone. Remember, recovery isn't a straight line. Be gentle with yourself today.",
    "Writing this down is a huge step. You are processing your emotions instead of suppressing them. That is progress.",
    "I understand. Sometimes just getting the thoughts out of your head helps. What would you tell a friend who felt this way?",
];

const GENERAL_POOL: [&str; 3] = [
    "That is a great question. To build this habit, start small (the 2-minute rule). Consistency is more important than intensity.",
    "Breaking habits is hard. Try to identify the 'cue' that triggers this behavior. Change the environment to remove that cue.",
    "Focus on replacing the bad habit with a neutral one, rather than just stopping. What could you do instead?",
];

/// The full pool for a category.
pub fn fallback_pool(category: Category) -> &'static [&'static str] {
    match category {
        Category::Crisis => &CRISIS_POOL,
        Category::Reflection => &REFLECTION_POOL,
        Category::General => &GENERAL_POOL,
    }
}

/// Draws one pool member uniformly at random.
pub fn pick_fallback(category: Category) -> &'static str {
    let mut rng = rand::rng();
    fallback_pool(category)
        .choose(&mut rng)
        .copied()
        .expect("fallback pools are non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pool_sizes_match_the_canned_material() {
        assert_eq!(fallback_pool(Category::Crisis).len(), 3);
        assert_eq!(fallback_pool(Category::Reflection).len(), 5);
        assert_eq!(fallback_pool(Category::General).len(), 3);
    }

    #[test]
    fn picks_stay_inside_the_pool_and_reach_every_member() {
        for category in [Category::Crisis, Category::Reflection, Category::General] {
            let pool: HashSet<&str> = fallback_pool(category).iter().copied().collect();
            let mut seen = HashSet::new();
            for _ in 0..300 {
                let choice = pick_fallback(category);
                assert!(pool.contains(choice), "out-of-pool string for {:?}", category);
                seen.insert(choice);
            }
            // Soft uniformity: 300 draws over at most 5 members leaves any
            // member unseen with negligible probability.
            assert_eq!(seen.len(), pool.len(), "unreachable member in {:?}", category);
        }
    }
}
