pub const PARTICLE_CLASS: &str = "particle";

pub const PARTICLE_KEYFRAMES: &str = "@keyframes floatParticle {
    0%, 100% { transform: translateY(0) translateX(0); }
    25% { transform: translateY(-20px) translateX(10px); }
    50% { transform: translateY(-10px) translateX(-10px); }
    75% { transform: translateY(-30px) translateX(5px); }
}";

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub opacity: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl ParticleSpec {
    /// Draws every parameter from `unit`, which must yield values in `[0, 1)`.
    pub fn random(unit: &mut impl FnMut() -> f64) -> Self {
        Self {
            size_px: unit() * 5.0 + 2.0,
            left_pct: unit() * 100.0,
            top_pct: unit() * 100.0,
            duration_s: unit() * 20.0 + 10.0,
            delay_s: unit() * 5.0,
            opacity: unit() * 0.3 + 0.1,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size:.2}px; height: {size:.2}px; \
             background: var(--color-primary); border-radius: 50%; \
             left: {left:.2}%; top: {top:.2}%; opacity: {opacity:.3}; \
             animation: floatParticle {duration:.2}s ease-in-out {delay:.2}s infinite;",
            size = self.size_px,
            left = self.left_pct,
            top = self.top_pct,
            opacity = self.opacity,
            duration = self.duration_s,
            delay = self.delay_s,
        )
    }
}

pub fn generate(count: usize, mut unit: impl FnMut() -> f64) -> Vec<ParticleSpec> {
    (0..count).map(|_| ParticleSpec::random(&mut unit)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_stay_inside_their_ranges() {
        let mut seed: u32 = 7;
        let lcg = move || {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            f64::from(seed >> 8) / f64::from(1u32 << 24)
        };

        let particles = generate(200, lcg);

        assert_eq!(particles.len(), 200);
        for particle in &particles {
            assert!((2.0..7.0).contains(&particle.size_px));
            assert!((0.0..100.0).contains(&particle.left_pct));
            assert!((0.0..100.0).contains(&particle.top_pct));
            assert!((0.1..0.4).contains(&particle.opacity));
            assert!((10.0..30.0).contains(&particle.duration_s));
            assert!((0.0..5.0).contains(&particle.delay_s));
        }
    }

    #[test]
    fn style_carries_the_float_animation() {
        let particle = ParticleSpec::random(&mut || 0.5);
        let style = particle.style();

        assert!(style.contains("width: 4.50px"));
        assert!(style.contains("animation: floatParticle 20.00s ease-in-out 2.50s infinite"));
    }

    #[test]
    fn zero_count_injects_nothing() {
        assert!(generate(0, || 0.0).is_empty());
    }
}
