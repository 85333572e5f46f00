//! Virtual Volume: a named, subtype-ordered collection of one DataType kind (§4.6).

use std::rc::Rc;

use super::time::{Time, TimeDuration};

/// What a Volume needs to know about an entry to order and expire it.
pub trait VolumeItem {
    fn time(&self) -> Time;
    /// The subtype key, e.g. an elevation angle rendered as a zero-padded decimal string.
    fn subtype(&self) -> &str;
}

/// The four-way spread returned by [`VolumeOfN::get_spread`]: the two nearest entries below a
/// target subtype value and the two nearest above, any of which may be absent at the ends of
/// the volume.
#[derive(Debug, Clone)]
pub struct Spread<T> {
    pub lower2: Option<Rc<T>>,
    pub lower: Option<Rc<T>>,
    pub upper: Option<Rc<T>>,
    pub upper2: Option<Rc<T>>,
}

/// Holds a single most-recently-timestamped entry. Replaces on newer-or-equal time (§4.6);
/// used where only the latest tilt/subtype matters (e.g. 2-D fusion input).
#[derive(Debug, Default)]
pub struct VolumeOf1<T: VolumeItem> {
    key: String,
    held: Option<Rc<T>>,
}

impl<T: VolumeItem> VolumeOf1<T> {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), held: None }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the held entry if `item`'s time is newer-or-equal to the current one (or nothing
    /// is held yet). Older arrivals are dropped silently, matching "producers deliver monotonic
    /// data" (§5 ordering guarantees).
    pub fn add(&mut self, item: Rc<T>) {
        let replace = match &self.held {
            Some(existing) => item.time() >= existing.time(),
            None => true,
        };
        if replace {
            self.held = Some(item);
        }
    }

    pub fn get(&self) -> Option<&Rc<T>> {
        self.held.as_ref()
    }

    pub fn clear(&mut self) {
        self.held = None;
    }
}

/// Ordered insertion by ascending subtype string; one entry per distinct subtype.
#[derive(Debug, Default)]
pub struct VolumeOfN<T: VolumeItem> {
    key: String,
    entries: Vec<Rc<T>>,
}

impl<T: VolumeItem> VolumeOfN<T> {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), entries: Vec::new() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Insert `item` in ascending-subtype order; a matching subtype replaces the existing entry
    /// in place rather than duplicating it (§4.6).
    pub fn add_data_type(&mut self, item: Rc<T>) {
        match self.entries.binary_search_by(|e| e.subtype().cmp(item.subtype())) {
            Ok(pos) => self.entries[pos] = item,
            Err(pos) => self.entries.insert(pos, item),
        }
    }

    pub fn get_subtype(&self, subtype: &str) -> Option<&Rc<T>> {
        self.entries.iter().find(|e| e.subtype() == subtype)
    }

    pub fn delete_subtype(&mut self, subtype: &str) -> bool {
        match self.entries.iter().position(|e| e.subtype() == subtype) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Rc<T>] {
        &self.entries
    }

    /// Drop every entry whose time falls outside `history` of the newest-observed time.
    pub fn purge_time_window(&mut self, history: TimeDuration) {
        let Some(newest) = self.entries.iter().map(|e| e.time()).max() else {
            return;
        };
        let cutoff = newest - history;
        self.entries.retain(|e| e.time() >= cutoff);
    }

    /// The two nearest entries below `target` (numeric subtype value) and the two nearest above,
    /// computed via the padded-sentinel technique described in §4.6: entries are ordered, the
    /// first index `i` with `value(i) > target` is located, and the two entries on either side
    /// of that boundary (clamped at the volume's ends) form the spread.
    pub fn get_spread(&self, target: f64) -> Spread<T>
    where
        T: SubtypeValue,
    {
        let values: Vec<f64> = self.entries.iter().map(|e| e.subtype_value()).collect();
        let i = values.partition_point(|&v| v <= target);
        let n = self.entries.len();
        Spread {
            lower2: if i >= 2 { Some(self.entries[i - 2].clone()) } else { None },
            lower: if i >= 1 { Some(self.entries[i - 1].clone()) } else { None },
            upper: if i < n { Some(self.entries[i].clone()) } else { None },
            upper2: if i + 1 < n { Some(self.entries[i + 1].clone()) } else { None },
        }
    }
}

/// Extends [`VolumeItem`] with a numeric reading of the subtype, needed for [`VolumeOfN::get_spread`]'s
/// above/below comparison (the subtype string itself sorts lexicographically, not numerically,
/// except for the zero-padded-elevation convention this happens to coincide with).
pub trait SubtypeValue: VolumeItem {
    fn subtype_value(&self) -> f64;
}
