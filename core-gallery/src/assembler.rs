//! Maps enriched records into the display shape the masonry layout consumes.

use rand::Rng;
use serde::Serialize;

use crate::enricher::EnrichedRepository;

/// One gallery card as serialized to the frontend.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: String,
    pub image: String,
    pub title: String,
    pub year: String,
    pub height: u32,
    pub description: String,
}

/// Build gallery items from enriched records.
///
/// Records without an image are dropped; everything else carries over
/// verbatim, in the input order. Heights are drawn uniformly from the
/// inclusive range so the masonry columns stagger; inverted bounds are
/// swapped rather than trusted.
pub fn assemble(records: Vec<EnrichedRepository>, height_range: (u32, u32)) -> Vec<GalleryItem> {
    let (min, max) = height_range;
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    let mut rng = rand::thread_rng();
    records
        .into_iter()
        .filter_map(|record| {
            let image = record.image_url?;
            Some(GalleryItem {
                id: record.id.to_string(),
                image,
                title: record.title,
                year: record.year,
                height: rng.gen_range(min..=max),
                description: record.description,
            })
        })
        .collect()
}
