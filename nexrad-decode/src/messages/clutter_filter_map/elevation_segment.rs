use crate::messages::clutter_filter_map::AzimuthSegment;
use crate::messages::primitive_aliases::Integer1;
use crate::result::Result;

/// A segment of the clutter filter map for a specific elevation containing azimuth segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElevationSegment<'a> {
    /// This elevation segment's number from 1 to 5 (oftentimes there are only 2) in increasing
    /// elevation from the ground.
    pub elevation_segment_number: Integer1,

    /// The azimuth segments defined in this elevation segment.
    pub azimuth_segments: Vec<AzimuthSegment<'a>>,
}

impl<'a> ElevationSegment<'a> {
    /// Parse an elevation segment (expected to be the specified number) from the input.
    pub(crate) fn parse<'b>(input: &'b mut &'a [u8], segment_number: u8) -> Result<Self> {
        let mut elevation_segment = ElevationSegment {
            elevation_segment_number: segment_number,
            azimuth_segments: Vec::with_capacity(360),
        };

        for azimuth_number in 0..360 {
            let azimuth_segment = AzimuthSegment::parse(input, azimuth_number)?;
            elevation_segment.azimuth_segments.push(azimuth_segment);
        }

        Ok(elevation_segment)
    }

    /// Convert this segment to an owned version with `'static` lifetime.
    pub fn into_owned(self) -> ElevationSegment<'static> {
        ElevationSegment {
            elevation_segment_number: self.elevation_segment_number,
            azimuth_segments: self
                .azimuth_segments
                .into_iter()
                .map(|s| s.into_owned())
                .collect(),
        }
    }
}
