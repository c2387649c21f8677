use tracing::warn;

use crate::filter::{Filter, FILTERS};

use super::records::ImageRecord;

/// A complete per-observation triple: one archive id per required filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservationGroup {
    pub key: String,
    ids: [String; 3],
}

impl ObservationGroup {
    pub fn archive_id(&self, filter: Filter) -> &str {
        &self.ids[filter.index()]
    }
}

/// Cluster records into per-observation groups.
///
/// Records arrive ordered by acquisition time, so exposures of one
/// observation are consecutive; a change of observation key closes the
/// current group. Within a group the last exposure per filter wins. Groups
/// missing any filter are dropped with a warning rather than failing the
/// batch.
pub fn group_records(records: &[ImageRecord]) -> Vec<ObservationGroup> {
    let mut groups = Vec::new();
    let mut key: Option<String> = None;
    let mut slots: [Option<String>; 3] = Default::default();

    for record in records {
        if key.as_deref() != Some(record.observation.as_str()) {
            if let Some(finished) = key.take() {
                close_group(finished, std::mem::take(&mut slots), &mut groups);
            }
            key = Some(record.observation.clone());
        }
        slots[record.filter.index()] = Some(record.archive_id.clone());
    }
    if let Some(finished) = key {
        close_group(finished, slots, &mut groups);
    }

    groups
}

fn close_group(key: String, slots: [Option<String>; 3], groups: &mut Vec<ObservationGroup>) {
    match slots {
        [Some(blue), Some(green), Some(red)] => groups.push(ObservationGroup {
            key,
            ids: [blue, green, red],
        }),
        ref partial => {
            let missing: Vec<Filter> = FILTERS
                .iter()
                .copied()
                .filter(|f| partial[f.index()].is_none())
                .collect();
            warn!(observation = %key, ?missing, "incomplete filter set, dropping group");
        }
    }
}
