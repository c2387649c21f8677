/// Lower edge of the delta band ignored by the difference score.
///
/// Mid-range deltas are dominated by smooth background/atmosphere mismatch
/// and would drown out the misalignment signal of sharp features, so only
/// deltas at or below this value (near-perfect match) or at or above
/// [`DELTA_IGNORE_HIGH`] (strong feature mismatch) are accumulated.
pub const DELTA_IGNORE_LOW: u8 = 32;

/// Upper edge of the delta band ignored by the difference score.
pub const DELTA_IGNORE_HIGH: u8 = 96;

/// Effective wavelength (nm) of the blue filter (BL1).
pub const BLUE_WAVELENGTH_NM: u32 = 463;

/// Effective wavelength (nm) of the green filter (GRN).
pub const GREEN_WAVELENGTH_NM: u32 = 568;

/// Effective wavelength (nm) of the red filter (RED).
pub const RED_WAVELENGTH_NM: u32 = 647;

/// Records requested per page from the archive data endpoint.
pub const ARCHIVE_PAGE_SIZE: usize = 100;
