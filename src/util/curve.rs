//! Keyframed easing curve with per-key tangents.
//!
//! Used for camera rotation during slide moves, where authors shape the
//! turn independently of the position/FOV smoothstep.

use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

/// One control point of a [`Curve`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Keyframe {
    /// Key time.
    pub time: f32,
    /// Key value.
    pub value: f32,
    /// Slope arriving at this key.
    #[serde(default)]
    pub in_tangent: f32,
    /// Slope leaving this key.
    #[serde(default)]
    pub out_tangent: f32,
}

impl Keyframe {
    /// Key with flat tangents.
    #[must_use]
    pub const fn flat(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }
}

/// Piecewise cubic Hermite curve.
///
/// Keys are kept sorted by time. Sampling before the first key or after
/// the last one clamps to that key's value; an empty curve evaluates to 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct Curve {
    keys: Vec<Keyframe>,
}

impl Curve {
    /// Build a curve from keys in any order.
    #[must_use]
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    /// Straight line from `(0, 0)` to `(1, 1)`.
    #[must_use]
    pub fn linear() -> Self {
        Self::new(vec![
            Keyframe {
                time: 0.0,
                value: 0.0,
                in_tangent: 1.0,
                out_tangent: 1.0,
            },
            Keyframe {
                time: 1.0,
                value: 1.0,
                in_tangent: 1.0,
                out_tangent: 1.0,
            },
        ])
    }

    /// Flat-tangent ease in and out between `(0, 0)` and `(1, 1)`.
    #[must_use]
    pub fn ease_in_out() -> Self {
        Self::new(vec![Keyframe::flat(0.0, 0.0), Keyframe::flat(1.0, 1.0)])
    }

    /// Control points, sorted by time.
    #[must_use]
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    /// Sample the curve at `time`.
    #[must_use]
    pub fn evaluate(&self, time: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last())
        else {
            return 0.0;
        };
        if time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }

        let upper = self.keys.partition_point(|k| k.time <= time);
        let k0 = self.keys[upper - 1];
        let k1 = self.keys[upper];
        hermite(&k0, &k1, time)
    }
}

fn hermite(k0: &Keyframe, k1: &Keyframe, time: f32) -> f32 {
    let span = k1.time - k0.time;
    if span <= 0.0 {
        return k1.value;
    }
    let s = (time - k0.time) / span;
    let s2 = s * s;
    let s3 = s2 * s;

    let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;

    h00 * k0.value
        + h10 * span * k0.out_tangent
        + h01 * k1.value
        + h11 * span * k1.in_tangent
}

impl Default for Curve {
    fn default() -> Self {
        Self::ease_in_out()
    }
}

impl JsonSchema for Curve {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("Curve")
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        <Vec<Keyframe>>::json_schema(generator)
    }
}

impl From<Vec<Keyframe>> for Curve {
    fn from(keys: Vec<Keyframe>) -> Self {
        Self::new(keys)
    }
}

impl From<Curve> for Vec<Keyframe> {
    fn from(curve: Curve) -> Self {
        curve.keys
    }
}
