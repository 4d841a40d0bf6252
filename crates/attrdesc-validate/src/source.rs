//! Value access seam.

use std::collections::{BTreeMap, HashMap};

use attrdesc_model::AttrValue;

/// Supplies the current candidate value for a programmatic name.
///
/// The host binding owns value storage; the engine only reads through
/// this trait and never mutates anything. `None` means the attribute has
/// no value at all, which is distinct from an empty string or an empty
/// collection only in how the host stores it; the engine treats all
/// three as absent.
pub trait ValueSource {
    fn get(&self, programmatic_name: &str) -> Option<&AttrValue>;
}

impl ValueSource for BTreeMap<String, AttrValue> {
    fn get(&self, programmatic_name: &str) -> Option<&AttrValue> {
        BTreeMap::get(self, programmatic_name)
    }
}

impl ValueSource for HashMap<String, AttrValue> {
    fn get(&self, programmatic_name: &str) -> Option<&AttrValue> {
        HashMap::get(self, programmatic_name)
    }
}
