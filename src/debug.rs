use std::fmt;

use crate::IntervalMap;

impl<K: Ord + fmt::Debug, V: fmt::Debug> IntervalMap<K, V> {
    pub fn formatted_boundaries(&self) -> String {
        let mut result = format!("{:<8} | value\n", "key");
        result += &format!("{:<8} | {:?}\n", "..", self.baseline());
        for (key, value) in self.boundaries.iter() {
            let key = format!("{key:?}");
            result += &format!("{key:<8} | {value:?}\n");
        }
        result
    }
}
