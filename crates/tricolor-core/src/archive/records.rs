use serde::Deserialize;
use tracing::warn;

use crate::error::{Result, TricolorError};
use crate::filter::Filter;

/// One image row returned by the archive data endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRecord {
    /// Archive identifier used to fetch files for this exposure.
    pub archive_id: String,
    /// Grouping key: exposures of one observation share this name.
    pub observation: String,
    pub filter: Filter,
    /// Acquisition timestamp as reported by the archive (UTC, day-of-year
    /// format). Kept verbatim; only record order matters for grouping.
    pub acquired_at: String,
}

/// Raw shape of one `data.json` page: column names plus string rows.
#[derive(Debug, Deserialize)]
pub(crate) struct DataPage {
    #[serde(default)]
    pub page_no: u32,
    pub columns: Vec<String>,
    pub page: Vec<Vec<String>>,
}

const COL_ID: &str = "Ring Observation ID";
const COL_OBSERVATION: &str = "Observation Name";
const COL_TIME: &str = "Observation Time 1 (UTC)";
const COL_FILTER: &str = "Filter";

/// Translate a columnar page into image records.
///
/// Rows carrying a filter outside the required three are skipped with a
/// warning; a page without the expected columns fails.
pub(crate) fn translate_page(url: &str, page: &DataPage) -> Result<Vec<ImageRecord>> {
    let index = |name: &str| page.columns.iter().position(|c| c == name);
    let (id, observation, time, filter) = match (
        index(COL_ID),
        index(COL_OBSERVATION),
        index(COL_TIME),
        index(COL_FILTER),
    ) {
        (Some(a), Some(b), Some(c), Some(d)) => (a, b, c, d),
        _ => {
            return Err(TricolorError::Archive {
                url: url.to_string(),
                reason: format!("page {} is missing expected columns: {:?}", page.page_no, page.columns),
            })
        }
    };

    let mut records = Vec::with_capacity(page.page.len());
    for row in &page.page {
        let filter_id = &row[filter];
        let Some(parsed) = Filter::from_archive_id(filter_id) else {
            warn!(filter = %filter_id, id = %row[id], "unexpected filter, skipping record");
            continue;
        };
        records.push(ImageRecord {
            archive_id: row[id].clone(),
            observation: row[observation].clone(),
            filter: parsed,
            acquired_at: row[time].clone(),
        });
    }
    Ok(records)
}
