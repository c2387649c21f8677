use std::fmt;

use crate::error::{Result, TricolorError};
use crate::filter::{Filter, REFERENCE_FILTER};
use crate::plane::{Bounds, ChannelPlane};

/// Integer translation of a channel relative to the reference channel.
///
/// A channel's pixel at (x, y) corresponds to the reference pixel at
/// (x - offset.x, y - offset.y); reads through the offset therefore index
/// the plane at the shifted coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Persisted alignment progress for one observation.
///
/// `max_radius` is monotonically non-decreasing across runs; re-requesting a
/// smaller radius is a no-op at the pipeline level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub max_radius: u32,
    pub green: Offset,
    pub red: Offset,
}

/// One filter's plane together with its current registration offset.
#[derive(Clone, Debug)]
pub struct Channel {
    pub plane: ChannelPlane,
    pub offset: Offset,
}

/// A validated triple of channel planes, one per required filter.
///
/// Construction guarantees all three filters are present with identical
/// original bounds. The set is immutable; the alignment search hands back an
/// updated copy via [`ChannelSet::with_offsets`], so "before" and "after"
/// diagnostic passes never alias.
#[derive(Clone, Debug)]
pub struct ChannelSet {
    channels: [Channel; 3],
}

impl ChannelSet {
    /// Build a set from the three planes with zero offsets.
    pub fn new(blue: ChannelPlane, green: ChannelPlane, red: ChannelPlane) -> Result<Self> {
        let mut builder = ChannelSetBuilder::default();
        builder.insert(Filter::Blue, blue, Offset::ZERO)?;
        builder.insert(Filter::Green, green, Offset::ZERO)?;
        builder.insert(Filter::Red, red, Offset::ZERO)?;
        builder.build()
    }

    pub fn channel(&self, filter: Filter) -> &Channel {
        &self.channels[filter.index()]
    }

    pub fn plane(&self, filter: Filter) -> &ChannelPlane {
        &self.channels[filter.index()].plane
    }

    pub fn offset(&self, filter: Filter) -> Offset {
        self.channels[filter.index()].offset
    }

    /// Shared original bounds of the three planes.
    pub fn bounds(&self) -> Bounds {
        self.plane(REFERENCE_FILTER).bounds()
    }

    /// Copy of this set with new offsets for the non-reference channels.
    /// The reference channel stays pinned at zero.
    pub fn with_offsets(&self, green: Offset, red: Offset) -> Self {
        let mut channels = self.channels.clone();
        channels[Filter::Blue.index()].offset = Offset::ZERO;
        channels[Filter::Green.index()].offset = green;
        channels[Filter::Red.index()].offset = red;
        Self { channels }
    }

    /// Current non-reference offsets plus the given radius, ready to persist.
    pub fn search_state(&self, max_radius: u32) -> SearchState {
        SearchState {
            max_radius,
            green: self.offset(Filter::Green),
            red: self.offset(Filter::Red),
        }
    }
}

/// Incremental [`ChannelSet`] construction for loaders that discover
/// channels one at a time.
#[derive(Debug, Default)]
pub struct ChannelSetBuilder {
    slots: [Option<Channel>; 3],
}

impl ChannelSetBuilder {
    pub fn insert(&mut self, filter: Filter, plane: ChannelPlane, offset: Offset) -> Result<()> {
        if self.slots[filter.index()].is_some() {
            return Err(TricolorError::DuplicateFilter(filter));
        }
        for slot in self.slots.iter().flatten() {
            if slot.plane.bounds() != plane.bounds() {
                return Err(TricolorError::BoundsMismatch {
                    filter,
                    got: plane.bounds(),
                    expected: slot.plane.bounds(),
                });
            }
        }
        self.slots[filter.index()] = Some(Channel { plane, offset });
        Ok(())
    }

    pub fn build(self) -> Result<ChannelSet> {
        let [blue, green, red] = self.slots;
        let blue = blue.ok_or(TricolorError::MissingFilter(Filter::Blue))?;
        let green = green.ok_or(TricolorError::MissingFilter(Filter::Green))?;
        let red = red.ok_or(TricolorError::MissingFilter(Filter::Red))?;
        Ok(ChannelSet {
            channels: [blue, green, red],
        })
    }
}
