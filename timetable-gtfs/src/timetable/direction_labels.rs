use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// maps direction_id codes to rider-facing compass labels. this is
/// configuration data rather than a fixed law: the table is keyed by the
/// decimal text of the code so feeds using other code sets can override it
/// from the config file. codes with no entry, and trips with no
/// direction_id at all, map to an empty label.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DirectionLabels(HashMap<String, String>);

impl DirectionLabels {
    pub fn label(&self, direction_id: Option<u8>) -> String {
        direction_id
            .and_then(|code| self.0.get(&code.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for DirectionLabels {
    fn default() -> Self {
        let table = [("0", "NB"), ("1", "SB"), ("2", "WB"), ("3", "EB")]
            .into_iter()
            .map(|(code, label)| (code.to_string(), label.to_string()))
            .collect();
        DirectionLabels(table)
    }
}
