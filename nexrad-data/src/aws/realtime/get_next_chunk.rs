use crate::aws::realtime::{ChunkIdentifier, ChunkType, VolumeIndex};

/// Determines which chunk is next in the sequence after the specified chunk. If the chunk is the
/// last in the volume, the next chunk will be the first in the next volume.
pub fn get_next_chunk(site: &str, chunk: ChunkIdentifier) -> Option<ChunkIdentifier> {
    let mut sequence = chunk.sequence()?;
    let mut volume = *chunk.volume();
    let mut chunk_type;

    if sequence == 55 {
        sequence = 1;
        chunk_type = ChunkType::Start;

        if volume == VolumeIndex::new(999) {
            volume = VolumeIndex::new(1);
        } else {
            volume = VolumeIndex::new(volume.as_number() + 1);
        }
    } else {
        sequence += 1;
        chunk_type = ChunkType::Intermediate;

        if sequence == 55 {
            chunk_type = ChunkType::End;
        }
    }

    let name = format!(
        "{}-{:03}-{}",
        chunk.name_prefix(),
        sequence,
        match chunk_type {
            ChunkType::Start => "S",
            ChunkType::Intermediate => "I",
            ChunkType::End => "E",
        }
    );

    Some(ChunkIdentifier::new(
        site.to_string(),
        volume,
        name,
        chunk.date_time(),
    ))
}
