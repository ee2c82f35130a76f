//! This module defines types used to configure the file picker.

use serde_derive::Deserialize;

use crate::node::TraversalOrder;

/// Configuration of a file picking session.
///
/// Every field has a default, so a host application's settings only need to
/// name what they override.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PickerConf {
    /// Leave files that are not selected out of the tree.
    pub selected_only: bool,
    /// The walk used to list selected file ids.
    pub order: TraversalOrder,
}

impl PickerConf {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(PickerConf::from_json("{}").unwrap(), PickerConf::default());
    }

    #[test]
    fn test_overrides() {
        let conf = PickerConf::from_json(r#"{"selected_only": true, "order": "breadth_first"}"#)
            .unwrap();
        assert!(conf.selected_only);
        assert_eq!(conf.order, TraversalOrder::BreadthFirst);
    }
}
