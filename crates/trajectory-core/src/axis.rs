//! The five fixed axes and a complete per-axis map.
//!
//! Axis order is significant: it is the row/column order of every
//! correlation matrix and Cholesky factor in the engine.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// One of the five tracked performance dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    #[serde(rename = "GO")]
    Go,
    #[serde(rename = "EC")]
    Ec,
    #[serde(rename = "PT")]
    Pt,
    #[serde(rename = "PF")]
    Pf,
    #[serde(rename = "TO")]
    To,
}

impl Axis {
    /// Number of axes.
    pub const COUNT: usize = 5;

    /// All axes in matrix order.
    pub const ALL: [Axis; Axis::COUNT] = [Self::Go, Self::Ec, Self::Pt, Self::Pf, Self::To];

    /// Row/column index of this axis.
    pub fn index(self) -> usize {
        match self {
            Self::Go => 0,
            Self::Ec => 1,
            Self::Pt => 2,
            Self::Pf => 3,
            Self::To => 4,
        }
    }

    /// Two-letter identifier used in serialized output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Go => "GO",
            Self::Ec => "EC",
            Self::Pt => "PT",
            Self::Pf => "PF",
            Self::To => "TO",
        }
    }

    /// Parse a two-letter identifier (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|axis| axis.code().eq_ignore_ascii_case(code))
    }

    /// All unordered axis pairs `(a, b)` with `a < b` in matrix order.
    pub fn pairs() -> impl Iterator<Item = (Axis, Axis)> {
        Self::ALL.into_iter().enumerate().flat_map(|(i, a)| {
            Self::ALL.into_iter().skip(i + 1).map(move |b| (a, b))
        })
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A complete map from every [`Axis`] to a value.
///
/// Backed by a fixed array, so it can never be partial. Serializes as a
/// map keyed by axis code; deserialization rejects maps missing an axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisMap<T>([T; Axis::COUNT]);

impl<T> AxisMap<T> {
    /// Build from values in matrix order.
    pub const fn new(values: [T; Axis::COUNT]) -> Self {
        Self(values)
    }

    /// Build by evaluating `f` for each axis in matrix order.
    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        Self(std::array::from_fn(|i| f(Axis::ALL[i])))
    }

    /// Values in matrix order.
    pub fn as_array(&self) -> &[T; Axis::COUNT] {
        &self.0
    }

    pub fn into_array(self) -> [T; Axis::COUNT] {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        Axis::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Apply `f` to each entry, producing a new complete map.
    pub fn map<U>(&self, mut f: impl FnMut(Axis, &T) -> U) -> AxisMap<U> {
        AxisMap::from_fn(|axis| f(axis, &self.0[axis.index()]))
    }
}

impl<T> Index<Axis> for AxisMap<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        &self.0[axis.index()]
    }
}

impl<T> IndexMut<Axis> for AxisMap<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self.0[axis.index()]
    }
}

impl<T> From<[T; Axis::COUNT]> for AxisMap<T> {
    fn from(values: [T; Axis::COUNT]) -> Self {
        Self(values)
    }
}

impl<T: Serialize> Serialize for AxisMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Axis::COUNT))?;
        for (axis, value) in self.iter() {
            map.serialize_entry(axis.code(), value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for AxisMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AxisMapVisitor(PhantomData))
    }
}

struct AxisMapVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for AxisMapVisitor<T> {
    type Value = AxisMap<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with one entry per axis code")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut slots: [Option<T>; Axis::COUNT] = std::array::from_fn(|_| None);
        while let Some(code) = access.next_key::<String>()? {
            let axis = Axis::from_code(&code)
                .ok_or_else(|| de::Error::custom(format!("unknown axis {code}")))?;
            let slot = &mut slots[axis.index()];
            if slot.is_some() {
                // Codes are case-insensitive, so "GO" and "go" collide.
                return Err(de::Error::custom(format!("duplicate axis {axis}")));
            }
            *slot = Some(access.next_value()?);
        }

        let mut values = Vec::with_capacity(Axis::COUNT);
        for (axis, slot) in Axis::ALL.into_iter().zip(slots) {
            values.push(slot.ok_or_else(|| de::Error::custom(format!("missing axis {axis}")))?);
        }
        let values: [T; Axis::COUNT] = values
            .try_into()
            .map_err(|_| de::Error::custom("axis map must contain exactly five entries"))?;
        Ok(AxisMap(values))
    }
}
