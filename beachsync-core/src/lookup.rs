use crate::entities::CrossReference;
use std::collections::HashMap;

/// Cross references from service guide ids to NUTS codes and devices.
///
/// The table is read-only once it has been built.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    refs: HashMap<String, CrossReference>,
}

impl ReferenceTable {
    /// If an id occurs more than once the last row wins.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = CrossReference>,
    {
        let mut refs = HashMap::new();
        for row in rows {
            let site_id = row.site_id.clone();
            if let Some(replaced) = refs.insert(site_id, row) {
                log::warn!(
                    "Duplicate cross reference for site {}, replacing NUTS code '{}'",
                    replaced.site_id,
                    replaced.nuts_code
                );
            }
        }
        Self { refs }
    }

    /// A row without a code is treated like a missing row.
    pub fn nuts_code(&self, site_id: &str) -> Option<&str> {
        self.refs.get(site_id).and_then(CrossReference::nuts_code)
    }

    pub fn device_id(&self, site_id: &str) -> Option<&str> {
        self.refs.get(site_id).and_then(CrossReference::device_id)
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}
