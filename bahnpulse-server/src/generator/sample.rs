//! Random draws shared by the journey and departure generators.
//!
//! Every helper tolerates degenerate configuration (zero bounds,
//! probabilities outside `[0, 1]`) instead of panicking inside `rand`.

use chrono::Duration;
use rand::Rng;

use crate::domain::{Line, TrainClass};

use super::config::GeneratorConfig;

/// Uniform integer in `[0, bound)`, or 0 when the range is empty.
pub(super) fn below<R: Rng + ?Sized>(rng: &mut R, bound: u32) -> u32 {
    if bound == 0 { 0 } else { rng.gen_range(0..bound) }
}

/// Uniform float in `[0, upper)`, or 0 when the range is empty.
pub(super) fn uniform<R: Rng + ?Sized>(rng: &mut R, upper: f64) -> f64 {
    if upper > 0.0 {
        rng.gen_range(0.0..upper)
    } else {
        0.0
    }
}

/// True with probability `p`.
pub(super) fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    if p > 0.0 {
        rng.gen_bool(p.min(1.0))
    } else {
        false
    }
}

/// A fractional number of minutes, at millisecond resolution.
pub(super) fn minutes(mins: f64) -> Duration {
    Duration::milliseconds((mins * 60_000.0).round() as i64)
}

/// A platform number in `1..=count`.
pub(super) fn platform<R: Rng + ?Sized>(rng: &mut R, count: u32) -> String {
    (below(rng, count) + 1).to_string()
}

/// A line of the given class with a random three-digit train number.
pub(super) fn line<R: Rng + ?Sized>(rng: &mut R, class: TrainClass) -> Line {
    let number: u32 = rng.gen_range(100..=999);

    Line {
        name: format!("{} {number}", class.product_name()),
        product: class.product().to_string(),
        product_name: class.product_name().to_string(),
    }
}

/// Departure delay: usually none, sometimes up to the configured maximum.
pub(super) fn departure_delay<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> u32 {
    if chance(rng, config.delay_probability) {
        below(rng, config.max_departure_delay_mins)
    } else {
        0
    }
}

/// Arrival delay: the departure delay, occasionally plus time lost en route.
///
/// Never less than `departure_delay`.
pub(super) fn arrival_delay<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
    departure_delay: u32,
) -> u32 {
    let extra = if chance(rng, config.extra_arrival_delay_probability) {
        below(rng, config.max_extra_arrival_delay_mins)
    } else {
        0
    };

    departure_delay + extra
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_ranges_give_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(below(&mut rng, 0), 0);
        assert_eq!(uniform(&mut rng, 0.0), 0.0);
        assert_eq!(uniform(&mut rng, -5.0), 0.0);
    }

    #[test]
    fn chance_extremes() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            assert!(!chance(&mut rng, 0.0));
            assert!(!chance(&mut rng, -1.0));
            assert!(!chance(&mut rng, f64::NAN));
            assert!(chance(&mut rng, 1.0));
            assert!(chance(&mut rng, 7.0));
        }
    }

    #[test]
    fn minutes_resolution() {
        assert_eq!(minutes(45.0), Duration::minutes(45));
        assert_eq!(minutes(0.5), Duration::seconds(30));
        assert_eq!(minutes(0.0), Duration::zero());
    }

    #[test]
    fn platform_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let p: u32 = platform(&mut rng, 12).parse().unwrap();
            assert!((1..=12).contains(&p));
        }
        assert_eq!(platform(&mut rng, 0), "1");
    }

    #[test]
    fn line_naming() {
        let mut rng = StdRng::seed_from_u64(4);
        let line = line(&mut rng, TrainClass::Ice);

        assert_eq!(line.product, "ice");
        assert_eq!(line.product_name, "ICE");
        let (prefix, number) = line.name.split_once(' ').unwrap();
        assert_eq!(prefix, "ICE");
        let number: u32 = number.parse().unwrap();
        assert!((100..=999).contains(&number));
    }

    #[test]
    fn delays_respect_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = GeneratorConfig::default();

        for _ in 0..500 {
            let dep = departure_delay(&mut rng, &config);
            let arr = arrival_delay(&mut rng, &config, dep);
            assert!(dep < 15);
            assert!(arr >= dep);
            assert!(arr < dep + 5);
        }
    }

    #[test]
    fn no_delay_when_probability_zero() {
        let mut rng = StdRng::seed_from_u64(6);
        let config = GeneratorConfig {
            delay_probability: 0.0,
            extra_arrival_delay_probability: 0.0,
            ..GeneratorConfig::default()
        };

        for _ in 0..100 {
            let dep = departure_delay(&mut rng, &config);
            assert_eq!(dep, 0);
            assert_eq!(arrival_delay(&mut rng, &config, dep), 0);
        }
    }
}
