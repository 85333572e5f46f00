mod compression_indicator;
pub use compression_indicator::CompressionIndicator;

mod control_flags;
pub use control_flags::ControlFlags;

mod data_block_id;
pub use data_block_id::DataBlockId;

mod elevation_data_block;
pub use elevation_data_block::ElevationDataBlock;

mod generic_data_block_header;
pub use generic_data_block_header::GenericDataBlockHeader;

mod header;
pub use header::Header;

mod pointers;
pub use pointers::*;

mod processing_status;
pub use processing_status::ProcessingStatus;

mod radial_data_block;
pub use radial_data_block::RadialDataBlock;

mod radial_status;
pub use radial_status::RadialStatus;

mod scaled_moment_value;
pub use scaled_moment_value::ScaledMomentValue;

mod spot_blanking_status;
pub use spot_blanking_status::*;

mod volume_coverage_pattern;
pub use volume_coverage_pattern::VolumeCoveragePattern;

mod volume_data_block;
pub use volume_data_block::VolumeDataBlock;
