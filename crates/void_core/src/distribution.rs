//! Vector distributions
//!
//! A [`Vector3Distribution`] describes a 3D value that is either fixed, picked
//! at random between two bounds, or sampled from curves over normalized time.

use std::fmt;

use void_math::Vec3;

/// Which bound of a range a value belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeComponent {
    Min,
    Max,
}

impl RangeComponent {
    /// Prefix used in sub-field focus addresses, e.g. `min` in `min.X`
    pub fn prefix(self) -> &'static str {
        match self {
            RangeComponent::Min => "min",
            RangeComponent::Max => "max",
        }
    }
}

impl fmt::Display for RangeComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// The shape of a distribution
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DistributionKind {
    Constant,
    RandomRange,
    Curve,
    RandomCurveRange,
}

impl DistributionKind {
    /// Whether the distribution is edited through curves rather than number boxes
    pub fn is_curve(self) -> bool {
        matches!(self, DistributionKind::Curve | DistributionKind::RandomCurveRange)
    }

    /// Whether both bounds are present
    pub fn is_range(self) -> bool {
        matches!(self, DistributionKind::RandomRange | DistributionKind::RandomCurveRange)
    }
}

/// A keyframe on a [`Vec3Curve`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3Key {
    pub time: f32,
    pub value: Vec3,
}

/// Piecewise linear curve over normalized time
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vec3Curve {
    keys: Vec<Vec3Key>,
}

impl Vec3Curve {
    pub fn new() -> Self {
        Self::default()
    }

    /// A flat curve holding one value
    pub fn constant(value: Vec3) -> Self {
        Self {
            keys: vec![Vec3Key { time: 0.0, value }],
        }
    }

    /// Insert a key, keeping keys sorted by time. A key at an existing time replaces it.
    pub fn add_key(&mut self, time: f32, value: Vec3) {
        match self.keys.iter().position(|k| k.time >= time) {
            Some(i) if self.keys[i].time == time => self.keys[i].value = value,
            Some(i) => self.keys.insert(i, Vec3Key { time, value }),
            None => self.keys.push(Vec3Key { time, value }),
        }
    }

    pub fn keys(&self) -> &[Vec3Key] {
        &self.keys
    }

    /// Sample the curve. Times outside the key range clamp to the end keys.
    pub fn evaluate(&self, time: f32) -> Vec3 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Vec3::ZERO,
        };
        if time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }
        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if time <= b.time {
                let span = b.time - a.time;
                let t = if span > 0.0 { (time - a.time) / span } else { 0.0 };
                return a.value.lerp(b.value, t);
            }
        }
        last.value
    }
}

/// A 3D value that is constant, random within a range, or curve driven
#[derive(Clone, Debug, PartialEq)]
pub enum Vector3Distribution {
    Constant(Vec3),
    RandomRange { min: Vec3, max: Vec3 },
    Curve(Vec3Curve),
    RandomCurveRange { min: Vec3Curve, max: Vec3Curve },
}

impl Default for Vector3Distribution {
    fn default() -> Self {
        Vector3Distribution::Constant(Vec3::ZERO)
    }
}

impl Vector3Distribution {
    pub fn kind(&self) -> DistributionKind {
        match self {
            Vector3Distribution::Constant(_) => DistributionKind::Constant,
            Vector3Distribution::RandomRange { .. } => DistributionKind::RandomRange,
            Vector3Distribution::Curve(_) => DistributionKind::Curve,
            Vector3Distribution::RandomCurveRange { .. } => DistributionKind::RandomCurveRange,
        }
    }

    /// The constant vector for one bound. A constant distribution only has a
    /// `Min` bound; curve distributions have none.
    pub fn constant(&self, range: RangeComponent) -> Option<Vec3> {
        match (self, range) {
            (Vector3Distribution::Constant(v), RangeComponent::Min) => Some(*v),
            (Vector3Distribution::RandomRange { min, .. }, RangeComponent::Min) => Some(*min),
            (Vector3Distribution::RandomRange { max, .. }, RangeComponent::Max) => Some(*max),
            _ => None,
        }
    }

    /// Replace one component of one constant bound. Returns `false` when the
    /// distribution has no such bound.
    pub fn set_constant(&mut self, range: RangeComponent, component: void_math::VectorComponent, value: f32) -> bool {
        let target = match (self, range) {
            (Vector3Distribution::Constant(v), RangeComponent::Min) => v,
            (Vector3Distribution::RandomRange { min, .. }, RangeComponent::Min) => min,
            (Vector3Distribution::RandomRange { max, .. }, RangeComponent::Max) => max,
            _ => return false,
        };
        target[component] = value;
        true
    }

    /// Sample at normalized time `t`, using `random` in `[0, 1]` to pick within ranges
    pub fn evaluate(&self, t: f32, random: f32) -> Vec3 {
        match self {
            Vector3Distribution::Constant(v) => *v,
            Vector3Distribution::RandomRange { min, max } => min.lerp(*max, random),
            Vector3Distribution::Curve(c) => c.evaluate(t),
            Vector3Distribution::RandomCurveRange { min, max } => {
                min.evaluate(t).lerp(max.evaluate(t), random)
            }
        }
    }
}
