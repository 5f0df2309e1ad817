//! Falling snow particles
//!
//! A field is generated once from any `rand::Rng`, so a seeded generator
//! reproduces the same field.

use std::fmt::Write as _;

use rand::Rng;

/// Size bucket of a snowflake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SnowflakeSize {
    Tiny,
    Small,
    Medium,
    Large,
}

impl SnowflakeSize {
    pub const ALL: [SnowflakeSize; 4] = [
        SnowflakeSize::Tiny,
        SnowflakeSize::Small,
        SnowflakeSize::Medium,
        SnowflakeSize::Large,
    ];

    /// Returns the CSS class for this size
    pub fn class(&self) -> &'static str {
        match self {
            SnowflakeSize::Tiny => "tiny",
            SnowflakeSize::Small => "small",
            SnowflakeSize::Medium => "medium",
            SnowflakeSize::Large => "large",
        }
    }

    /// Diameter in pixels
    pub fn diameter_px(&self) -> u32 {
        match self {
            SnowflakeSize::Tiny => 3,
            SnowflakeSize::Small => 5,
            SnowflakeSize::Medium => 7,
            SnowflakeSize::Large => 10,
        }
    }
}

/// Parameters of one particle, fixed at generation time
#[derive(Debug, Clone, PartialEq)]
pub struct Snowflake {
    pub size: SnowflakeSize,
    /// Horizontal start position, percent of the container width
    pub left_pct: f64,
    /// Seconds per fall
    pub duration_s: f64,
    /// Seconds before the first fall
    pub delay_s: f64,
    /// Horizontal offset reached at the bottom, in pixels
    pub drift_px: f64,
}

impl Snowflake {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            size: SnowflakeSize::ALL[rng.random_range(0..SnowflakeSize::ALL.len())],
            left_pct: rng.random_range(0.0..100.0),
            duration_s: rng.random_range(10.0..30.0),
            delay_s: rng.random_range(0.0..20.0),
            drift_px: rng.random_range(-50.0..50.0),
        }
    }

    /// Class attribute for the particle element
    pub fn class_attr(&self) -> String {
        format!("{} {}", SNOWFLAKE_CLASS, self.size.class())
    }

    /// Inline style binding the particle to its keyframes rule
    pub fn inline_style(&self, index: usize) -> String {
        format!(
            "left: {:.3}%; animation: {}-{} {:.3}s linear infinite; animation-delay: {:.3}s;",
            self.left_pct, KEYFRAMES_PREFIX, index, self.duration_s, self.delay_s
        )
    }
}

pub const SNOWFLAKE_CLASS: &str = "snowflake";

const KEYFRAMES_PREFIX: &str = "juhyo-fall";

const BASE_CSS: &str = ".snowflake { position: absolute; background-color: white; border-radius: 50%; opacity: 0.8; pointer-events: none; }\n";

/// A generated set of particles
#[derive(Debug, Clone, PartialEq)]
pub struct SnowField {
    pub flakes: Vec<Snowflake>,
}

impl SnowField {
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        Self {
            flakes: (0..count).map(|_| Snowflake::random(&mut *rng)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.flakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flakes.is_empty()
    }

    /// Size classes plus one keyframes rule per particle.
    ///
    /// Each fall starts just above the container, fades in over the first
    /// 10%, fades out over the last 10% and ends one viewport lower.
    pub fn stylesheet(&self) -> String {
        let mut css = String::from(BASE_CSS);
        for size in SnowflakeSize::ALL {
            let px = size.diameter_px();
            let _ = writeln!(
                css,
                ".snowflake.{} {{ width: {}px; height: {}px; }}",
                size.class(),
                px,
                px
            );
        }
        for (i, flake) in self.flakes.iter().enumerate() {
            let _ = writeln!(
                css,
                "@keyframes {}-{} {{ \
                 0% {{ transform: translateY(-10%) translateX(0); opacity: 0; }} \
                 10% {{ opacity: 1; }} \
                 90% {{ opacity: 1; }} \
                 100% {{ transform: translateY(100vh) translateX({:.3}px); opacity: 0; }} }}",
                KEYFRAMES_PREFIX, i, flake.drift_px
            );
        }
        css
    }
}
