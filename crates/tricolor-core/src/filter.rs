use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{BLUE_WAVELENGTH_NM, GREEN_WAVELENGTH_NM, RED_WAVELENGTH_NM};

/// Spectral band a source exposure was taken through.
///
/// The identifiers serialize to the archive's filter codes (`BL1`, `GRN`,
/// `RED`), which is also the representation used in observation manifests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Filter {
    #[serde(rename = "BL1")]
    Blue,
    #[serde(rename = "GRN")]
    Green,
    #[serde(rename = "RED")]
    Red,
}

/// All filters of a complete observation, in canonical order.
pub const FILTERS: [Filter; 3] = [Filter::Blue, Filter::Green, Filter::Red];

/// The channel every other channel is registered against.
pub const REFERENCE_FILTER: Filter = Filter::Blue;

impl Filter {
    /// Filter code used by the remote archive and the manifest format.
    pub fn archive_id(self) -> &'static str {
        match self {
            Filter::Blue => "BL1",
            Filter::Green => "GRN",
            Filter::Red => "RED",
        }
    }

    /// Parse an archive filter code.
    pub fn from_archive_id(id: &str) -> Option<Filter> {
        match id {
            "BL1" => Some(Filter::Blue),
            "GRN" => Some(Filter::Green),
            "RED" => Some(Filter::Red),
            _ => None,
        }
    }

    /// Nominal effective wavelength of the filter band, in nanometers.
    pub fn wavelength_nm(self) -> u32 {
        match self {
            Filter::Blue => BLUE_WAVELENGTH_NM,
            Filter::Green => GREEN_WAVELENGTH_NM,
            Filter::Red => RED_WAVELENGTH_NM,
        }
    }

    /// Solid fill color used when this channel is drawn through an alpha mask.
    pub fn overlay_color(self) -> [u8; 3] {
        match self {
            Filter::Blue => [0, 0, 255],
            Filter::Green => [0, 255, 0],
            Filter::Red => [255, 0, 0],
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Filter::Blue => 0,
            Filter::Green => 1,
            Filter::Red => 2,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.archive_id())
    }
}
