use std::collections::BTreeSet;

use crate::catalog::TagFilter;
use crate::localization::translate;

/// One selectable pill in the filter row.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterControl {
    pub value: TagFilter,
    pub active: bool,
}

impl FilterControl {
    pub fn label(&self) -> String {
        match &self.value {
            TagFilter::All => translate("filter-all"),
            TagFilter::Tag(tag) => tag.clone(),
        }
    }
}

/// "Show all" first, then one control per tag in sorted order.
/// Only the control whose value equals `selection` is active.
pub fn filter_controls(tags: &BTreeSet<String>, selection: &TagFilter) -> Vec<FilterControl> {
    std::iter::once(TagFilter::All)
        .chain(tags.iter().cloned().map(TagFilter::Tag))
        .map(|value| FilterControl {
            active: &value == selection,
            value,
        })
        .collect()
}
