//! Decorative starfield model. Sections scatter a fixed number of stars once
//! per mount; positions are random and never regenerated on re-render.

use rand::Rng;

/// One twinkling background star. Position is in percent of the containing
/// section, size in pixels, timings in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub left: f64,
    pub top: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
    pub opacity: f64,
}

impl Star {
    /// Inline style placing the star and driving its twinkle animation.
    pub fn twinkle_style(&self) -> String {
        format!(
            "left:{:.2}%;top:{:.2}%;width:{:.2}px;height:{:.2}px;opacity:{:.2};\
             filter:drop-shadow(0 0 6px #fff);\
             animation:star-twinkle {:.2}s infinite alternate;animation-delay:{:.2}s;",
            self.left, self.top, self.size, self.size, self.opacity, self.duration, self.delay
        )
    }
}

/// Scatter `count` stars uniformly over the section, sized within
/// `[size_min, size_max)`. Twinkle duration lands in `[1.5, 3.5)` s, delay in
/// `[0, 4)` s, opacity in `[0.5, 1.0)`.
pub fn scatter<R: Rng>(count: usize, size_min: f64, size_max: f64, rng: &mut R) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            size: rng.gen_range(size_min..size_max),
            duration: rng.gen_range(1.5..3.5),
            delay: rng.gen_range(0.0..4.0),
            opacity: rng.gen_range(0.5..1.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn scatter_produces_the_requested_count() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(scatter(120, 1.2, 3.7, &mut rng).len(), 120);
        assert!(scatter(0, 1.2, 3.7, &mut rng).is_empty());
    }

    #[test]
    fn scattered_stars_stay_within_bounds() {
        let mut rng = SmallRng::seed_from_u64(42);
        for star in scatter(200, 0.7, 2.5, &mut rng) {
            assert!((0.0..100.0).contains(&star.left));
            assert!((0.0..100.0).contains(&star.top));
            assert!((0.7..2.5).contains(&star.size));
            assert!((1.5..3.5).contains(&star.duration));
            assert!((0.0..4.0).contains(&star.delay));
            assert!((0.5..1.0).contains(&star.opacity));
        }
    }

    #[test]
    fn scatter_is_not_degenerate() {
        let mut rng = SmallRng::seed_from_u64(1);
        let stars = scatter(30, 1.0, 2.0, &mut rng);
        assert!(stars.windows(2).any(|pair| pair[0].left != pair[1].left));
    }

    #[test]
    fn twinkle_style_carries_position_and_timing() {
        let star = Star {
            left: 12.5,
            top: 80.0,
            size: 2.25,
            duration: 2.0,
            delay: 1.5,
            opacity: 0.75,
        };
        let style = star.twinkle_style();
        assert!(style.contains("left:12.50%"));
        assert!(style.contains("top:80.00%"));
        assert!(style.contains("width:2.25px"));
        assert!(style.contains("height:2.25px"));
        assert!(style.contains("animation:star-twinkle 2.00s infinite alternate"));
        assert!(style.contains("animation-delay:1.50s"));
    }
}
