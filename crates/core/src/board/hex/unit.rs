//! This sub-module contains basic types for units that form the hex coordinate
//! system. See the parent module documentation for more info on the coordinate
//! system.

use crate::error::{check_finite, GeometryError, InvalidDirectionError};
use derive_more::{Add, AddAssign, Display, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};
use std::{ops, str::FromStr};
use strum::{EnumIter, IntoEnumIterator};

/// A point in the hex coordinate system that refers to a whole tile (via its
/// center point). See module-level documentation for a description of the
/// hex coordinate system.
///
/// Only `q` and `r` are stored. `s` is derived from `q + r + s = 0`. The
/// checked constructors keep all three components within `±i32::MAX`; points
/// built by hand with [Self::new] are expected to stay in that range too.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s()")]
pub struct TilePoint {
    pub q: i32,
    pub r: i32,
}

impl TilePoint {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a new tile point from axial components
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Construct a tile point from all three cube components. Returns an
    /// error if the point isn't on the plane `q + r + s = 0`, or if it's too
    /// far out for all three components to fit in an `i32`.
    pub fn from_cube(q: i32, r: i32, s: i32) -> Result<Self, GeometryError> {
        // Sum in i64 so an off-plane triple can't wrap around to 0
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            Err(GeometryError::OffPlane { q, r, s })
        } else {
            Self::checked(i64::from(q), i64::from(r))
        }
    }

    /// Construct a tile point from untyped numbers, e.g. values that came
    /// across the JS boundary. Each component must be a finite integer, and
    /// the point must be in range (see [Self::checked]).
    pub fn from_f64(q: f64, r: f64) -> Result<Self, GeometryError> {
        fn component(
            field: &'static str,
            value: f64,
        ) -> Result<i64, GeometryError> {
            let value = check_finite(field, value)?;
            if value.fract() != 0.0 {
                Err(GeometryError::NonIntegral { field, value })
            } else {
                // Saturates, which is fine since anything that big is
                // rejected by the range check anyway
                Ok(value as i64)
            }
        }

        Self::checked(component("q", q)?, component("r", r)?)
    }

    /// Build a point only if `q`, `r` and the derived `s` all fall within
    /// `-i32::MAX..=i32::MAX`. Keeping `i32::MIN` out means negating any
    /// component (e.g. to derive `s`) can never overflow.
    fn checked(q: i64, r: i64) -> Result<Self, GeometryError> {
        let limit = u64::from(i32::MAX.unsigned_abs());
        if q.unsigned_abs() > limit
            || r.unsigned_abs() > limit
            || (q + r).unsigned_abs() > limit
        {
            Err(GeometryError::OutOfRange { q, r })
        } else {
            Ok(Self::new(q as i32, r as i32))
        }
    }

    /// The derived third cube component
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Get the location of a particular tile adjacent to this one
    pub fn adjacent(self, direction: TileDirection) -> TilePoint {
        self + direction.to_vector()
    }

    /// Get an iterator of all the tile points directly adjacent to this one.
    /// The iterator will always contain exactly 6 values, in clockwise order
    /// starting at [TileDirection::NE].
    pub fn adjacents(self) -> impl Iterator<Item = TilePoint> {
        TileDirection::iter().map(move |dir| self.adjacent(dir))
    }

    /// Calculate the path distance between two tiles, meaning the number of
    /// hops it takes to get from one to the other. 0 if the points are equal,
    /// 1 if the tiles are adjacent, 2 if there is 1 tile between them, etc.
    pub fn distance_to(self, other: TilePoint) -> u32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // Differences are taken in i64. For in-range points each one is at
        // most 2 * i32::MAX, which still fits in a u32.
        let delta =
            |a: i32, b: i32| (i64::from(a) - i64::from(b)).unsigned_abs();
        delta(self.q, other.q)
            .max(delta(self.r, other.r))
            .max(delta(self.s(), other.s())) as u32
    }

    /// Get all tiles exactly `radius` steps away from this one. The ring
    /// starts at the west corner and goes around clockwise. A radius of 0
    /// gives an empty ring.
    pub fn ring(self, radius: u16) -> Vec<TilePoint> {
        let radius = i32::from(radius);
        let mut results = Vec::with_capacity(6 * radius as usize);
        let mut tile = self + TileDirection::W.to_vector() * radius;
        for direction in TileDirection::iter() {
            for _ in 0..radius {
                results.push(tile);
                tile = tile.adjacent(direction);
            }
        }
        results
    }

    /// Get all tiles within `radius` steps of this one, ring by ring. The
    /// first element is always this tile.
    pub fn spiral(self, radius: u16) -> Vec<TilePoint> {
        let mut results = vec![self];
        for k in 1..=radius {
            results.append(&mut self.ring(k));
        }
        results
    }
}

impl ops::Add<AxialVector> for TilePoint {
    type Output = Self;

    fn add(self, rhs: AxialVector) -> Self::Output {
        Self::new(self.q + rhs.q, self.r + rhs.r)
    }
}

/// A translation in the axial coordinate system. Unlike [TilePoint], any pair
/// of integers is meaningful here.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    AddAssign,
    Sub,
    Mul,
    Neg,
)]
#[display(fmt = "<{}, {}>", "self.q", "self.r")]
pub struct AxialVector {
    pub q: i32,
    pub r: i32,
}

impl AxialVector {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
}

/// A linear direction around a hex tile. There are two classes of direction:
/// center-to-side ([TileDirection]) and center-to-vertex ([VertexDirection]).
/// Each class lists its members in clockwise order, which lets us define
/// opposites and neighbors generically.
pub trait HexDirection: 'static + Copy + Eq + Sized {
    /// A list of all directions in an implementation's class, in clockwise
    /// order around the compass.
    const CLOCKWISE: &'static [Self];

    /// Get the index of the given direction within the clockwise ordering of
    /// this class
    fn clockwise_index(self) -> usize {
        Self::CLOCKWISE
            .iter()
            .position(|dir| self == *dir)
            .expect("direction missing from its own clockwise list")
    }

    /// Get the direction that is directly opposite this one. Every class has
    /// an even number of members, so each one has an opposite.
    fn opposite(self) -> Self {
        let index = self.clockwise_index();
        let clockwise = Self::CLOCKWISE;
        let len = clockwise.len();
        clockwise[(index + (len / 2)) % len]
    }
}

/// The 6 sides of a pointy-top hex tile. For any given tile, a tile direction
/// can represent two useful things:
///
/// - Direction from center point to the midpoint of a single side of that tile
/// - Direction to a neighboring tile's center point
///
/// The board edge (road slot) between two tiles is one side of each, and the
/// two directions are always opposites.
#[derive(
    Copy,
    Clone,
    Debug,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum TileDirection {
    /// Northeast
    #[serde(alias = "NORTHEAST")]
    NE,
    /// East
    #[serde(alias = "EAST")]
    E,
    /// Southeast
    #[serde(alias = "SOUTHEAST")]
    SE,
    /// Southwest
    #[serde(alias = "SOUTHWEST")]
    SW,
    /// West
    #[serde(alias = "WEST")]
    W,
    /// Northwest
    #[serde(alias = "NORTHWEST")]
    NW,
}

impl HexDirection for TileDirection {
    const CLOCKWISE: &'static [Self] =
        &[Self::NE, Self::E, Self::SE, Self::SW, Self::W, Self::NW];
}

impl TileDirection {
    /// Short name of this direction, e.g. `NE`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }

    /// Get an axial offset that would move a point one tile in this direction
    pub fn to_vector(self) -> AxialVector {
        match self {
            Self::NE => AxialVector::new(1, -1),
            Self::E => AxialVector::new(1, 0),
            Self::SE => AxialVector::new(0, 1),
            Self::SW => AxialVector::new(-1, 1),
            Self::W => AxialVector::new(-1, 0),
            Self::NW => AxialVector::new(0, -1),
        }
    }

    /// Get the two [VertexDirection]s at either end of this side, in
    /// clockwise order. I.e. if this direction points from the tile's center
    /// to the midpoint of a side, then the returned vertex directions will
    /// point from the center to either endpoint of that same side.
    pub fn adjacent_vertex_directions(
        self,
    ) -> (VertexDirection, VertexDirection) {
        let index = self.clockwise_index();
        let clockwise = VertexDirection::CLOCKWISE;
        let left = clockwise[index];
        let right = clockwise[(index + 1) % clockwise.len()];
        (left, right)
    }
}

impl std::fmt::Display for TileDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts short (`ne`) and long (`northeast`) names, in any ASCII case
impl FromStr for TileDirection {
    type Err = InvalidDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NE" | "NORTHEAST" => Ok(Self::NE),
            "E" | "EAST" => Ok(Self::E),
            "SE" | "SOUTHEAST" => Ok(Self::SE),
            "SW" | "SOUTHWEST" => Ok(Self::SW),
            "W" | "WEST" => Ok(Self::W),
            "NW" | "NORTHWEST" => Ok(Self::NW),
            _ => Err(InvalidDirectionError(s.to_owned())),
        }
    }
}

/// The 6 directions you can go from the center of a tile to one of its
/// vertices. This is similar to [TileDirection], but while that enum is
/// center-to-side, this one denotes center-to-vertex directions. Vertex `i`
/// in the clockwise ordering sits between sides `i - 1` and `i`.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum VertexDirection {
    /// North
    N,
    /// East-northeast
    ENE,
    /// East-southeast
    ESE,
    /// South
    S,
    /// West-southwest
    WSW,
    /// West-northwest
    WNW,
}

impl HexDirection for VertexDirection {
    const CLOCKWISE: &'static [Self] =
        &[Self::N, Self::ENE, Self::ESE, Self::S, Self::WSW, Self::WNW];
}

impl VertexDirection {
    /// Get the two [TileDirection]s that are adjacent to this vertex direction
    /// on the compass. I.e. if this direction points from the tile's center
    /// to one of its vertices, then the returned tile directions will point
    /// from the center to the midpoints of either side flanking that vertex.
    pub fn adjacent_tile_directions(self) -> (TileDirection, TileDirection) {
        let index = self.clockwise_index();
        let clockwise = TileDirection::CLOCKWISE;
        // Adding len - 1 instead of subtracting 1 keeps us in usize land
        let left = clockwise[(index + clockwise.len() - 1) % clockwise.len()];
        let right = clockwise[index];
        (left, right)
    }
}
