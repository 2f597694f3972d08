// Table registry: one mapping slot per translation purpose.
//
// The registry is an explicit context object owned by the host. Reloading
// needs `&mut self`, so it cannot overlap with lookups borrowing tables out of
// the registry; between reloads it is read-only and may be shared.

pub mod store;
pub mod zone;

use std::borrow::Cow;

use xlat_core::{MapSlot, Zone};
use xlat_trie::{TranslationTable, translate};

use crate::XlatError;
use crate::collate::Collator;
use crate::grammar::load_table;
use store::{OptionStore, RecordStore};
pub use zone::{CodesetConversion, ConversionOrder};

/// Contents of one registry slot.
#[derive(Debug, Clone, Default)]
pub struct MappingSlot {
    table: Option<TranslationTable>,
    conversion: Option<CodesetConversion>,
    order: Option<ConversionOrder>,
}

impl MappingSlot {
    /// Custom table, if one is loaded.
    pub fn table(&self) -> Option<&TranslationTable> {
        self.table.as_ref()
    }

    /// Generic codeset conversion, if configured.
    pub fn conversion(&self) -> Option<&CodesetConversion> {
        self.conversion.as_ref()
    }

    /// Order of the generic conversion relative to the custom table; `None`
    /// until the zone has been configured.
    pub fn order(&self) -> Option<ConversionOrder> {
        self.order
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Outcome of [`Registry::reload`].
#[derive(Debug, Default)]
pub struct ReloadReport {
    /// Slots that received a custom table.
    pub loaded: Vec<MapSlot>,
    /// Slots whose stored definition was rejected; those slots stay empty.
    pub errors: Vec<(MapSlot, XlatError)>,
}

impl ReloadReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// All mapping slots plus the internal codeset they convert to and from.
#[derive(Debug, Clone)]
pub struct Registry {
    slots: [MappingSlot; MapSlot::COUNT],
    internal_codeset: Option<String>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// A registry with every slot empty.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| MappingSlot::default()),
            internal_codeset: None,
        }
    }

    pub fn slot(&self, id: MapSlot) -> &MappingSlot {
        &self.slots[id.index()]
    }

    /// Slot by raw index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid slot index; callers pass indices
    /// from [`MapSlot::index`], so anything else is a programming error.
    pub fn slot_at(&self, index: usize) -> &MappingSlot {
        match MapSlot::from_index(index) {
            Some(id) => self.slot(id),
            None => panic!(
                "mapping slot index {index} out of range (0..{})",
                MapSlot::COUNT
            ),
        }
    }

    /// Custom table of slot `id`, if loaded.
    pub fn table(&self, id: MapSlot) -> Option<&TranslationTable> {
        self.slot(id).table()
    }

    /// Install (or with `None`, remove) the custom table of slot `id`,
    /// dropping the previous one.
    pub fn set_custom_table(&mut self, id: MapSlot, table: Option<TranslationTable>) {
        self.slots[id.index()].table = table;
    }

    pub fn internal_codeset(&self) -> Option<&str> {
        self.internal_codeset.as_deref()
    }

    /// Set the internal codeset name. Takes effect at the next reload.
    pub fn set_internal_codeset(&mut self, codeset: Option<impl Into<String>>) {
        self.internal_codeset = codeset.map(Into::into).filter(|cs| !cs.is_empty());
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    /// Rebuild every slot.
    ///
    /// Clears all slots, loads each slot's custom table from `records` under
    /// the slot key, then configures generic conversions for the four zones
    /// from `options`. Zone configuration is skipped while the internal
    /// codeset is unknown. A missing record leaves its slot empty; a rejected
    /// record is reported and also leaves its slot empty.
    pub fn reload(&mut self, records: &dyn RecordStore, options: &dyn OptionStore) -> ReloadReport {
        self.clear();
        let mut report = ReloadReport::default();

        for id in MapSlot::ALL {
            let Some(text) = records.fetch_raw(id.key()) else {
                continue;
            };
            match load_table(&text, id.name()) {
                Ok(Some(table)) => {
                    tracing::debug!(
                        slot = id.key(),
                        entries = table.total(),
                        nodes = table.arena().len(),
                        "loaded custom table"
                    );
                    self.slots[id.index()].table = Some(table);
                    report.loaded.push(id);
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(slot = id.key(), error = %e, "error initializing map");
                    report.errors.push((id, e));
                }
            }
        }

        self.load_zone_conversions(options);
        report
    }

    fn load_zone_conversions(&mut self, options: &dyn OptionStore) {
        let Some(internal) = self.internal_codeset.clone() else {
            tracing::debug!("no internal codeset; skipping codeset conversions");
            return;
        };
        for zone in Zone::ALL {
            for (id, order, conversion) in zone::zone_settings(zone, &internal, options).slots {
                let slot = &mut self.slots[id.index()];
                slot.order = Some(order);
                slot.conversion = conversion;
            }
        }
    }

    /// Apply slot `id`'s custom table to `input`; without a table the input
    /// comes back unchanged.
    pub fn translate<'a>(&self, id: MapSlot, input: &'a [u8]) -> Cow<'a, [u8]> {
        match self.table(id) {
            Some(table) => Cow::Owned(translate(table, input)),
            None => Cow::Borrowed(input),
        }
    }

    /// Collator over the sort and character-width slots.
    pub fn collator(&self) -> Collator<'_> {
        Collator::new(self.table(MapSlot::Sort), self.table(MapSlot::CharWidth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryOptions, MemoryRecords, NoRecords};

    fn sort_table() -> TranslationTable {
        TranslationTable::build(&["a", "b"], &["1", "2"], "sort").unwrap()
    }

    #[test]
    fn new_registry_is_empty() {
        let reg = Registry::new();
        for id in MapSlot::ALL {
            let slot = reg.slot(id);
            assert!(slot.table().is_none());
            assert!(slot.conversion().is_none());
            assert!(slot.order().is_none());
        }
        assert!(reg.internal_codeset().is_none());
    }

    #[test]
    fn slot_at_valid_index() {
        let mut reg = Registry::new();
        reg.set_custom_table(MapSlot::Sort, Some(sort_table()));
        assert!(reg.slot_at(8).table().is_some());
        assert!(reg.slot_at(0).table().is_none());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn slot_at_invalid_index_panics() {
        Registry::new().slot_at(MapSlot::COUNT);
    }

    #[test]
    fn set_custom_table_replaces() {
        let mut reg = Registry::new();
        reg.set_custom_table(MapSlot::Sort, Some(sort_table()));
        let other = TranslationTable::build(&["z"], &["9"], "other").unwrap();
        reg.set_custom_table(MapSlot::Sort, Some(other));
        assert_eq!(reg.table(MapSlot::Sort).unwrap().name(), b"other");
        reg.set_custom_table(MapSlot::Sort, None);
        assert!(reg.table(MapSlot::Sort).is_none());
    }

    #[test]
    fn reload_with_no_records() {
        let mut reg = Registry::new();
        reg.set_custom_table(MapSlot::Sort, Some(sort_table()));
        let report = reg.reload(&NoRecords, &MemoryOptions::new());
        assert!(report.is_clean());
        assert!(report.loaded.is_empty());
        assert!(MapSlot::ALL.iter().all(|&id| reg.table(id).is_none()));
    }

    #[test]
    fn reload_loads_by_key() {
        let mut records = MemoryRecords::new();
        records.insert("MSORT", "##!name: Sort order\na\t1\nb\t2\n");
        records.insert("MCHAR", "## nothing but comments\n");
        let mut reg = Registry::new();
        let report = reg.reload(&records, &MemoryOptions::new());
        assert_eq!(report.loaded, vec![MapSlot::Sort]);
        assert_eq!(reg.table(MapSlot::Sort).unwrap().name(), b"Sort order");
        assert!(reg.table(MapSlot::CharWidth).is_none());
    }

    #[test]
    fn reload_reports_bad_map_and_continues() {
        let mut records = MemoryRecords::new();
        records.insert("MGDIN", "a\t#999\n");
        records.insert("MSORT", "a\t1\n");
        let mut reg = Registry::new();
        let report = reg.reload(&records, &MemoryOptions::new());
        assert_eq!(report.errors.len(), 1);
        let (id, err) = &report.errors[0];
        assert_eq!(*id, MapSlot::GedcomToInternal);
        assert_eq!(
            err.to_string(),
            "GEDCOM to Internal: line 1 (entry 1): bad decimal number"
        );
        assert!(reg.table(MapSlot::GedcomToInternal).is_none());
        assert!(reg.table(MapSlot::Sort).is_some());
    }

    #[test]
    fn zone_conversions_need_internal_codeset() {
        let mut opts = MemoryOptions::new();
        opts.set("GedcomCodeset", "ANSEL");

        let mut reg = Registry::new();
        reg.reload(&NoRecords, &opts);
        assert!(reg.slot(MapSlot::GedcomToInternal).conversion().is_none());
        assert!(reg.slot(MapSlot::GedcomToInternal).order().is_none());

        reg.set_internal_codeset(Some("UTF-8"));
        reg.reload(&NoRecords, &opts);
        let inbound = reg.slot(MapSlot::GedcomToInternal);
        assert_eq!(inbound.order(), Some(ConversionOrder::AfterCustom));
        assert_eq!(
            inbound.conversion(),
            Some(&CodesetConversion {
                source: "ANSEL".into(),
                destination: "UTF-8".into()
            })
        );
        let outbound = reg.slot(MapSlot::InternalToGedcom);
        assert_eq!(outbound.order(), Some(ConversionOrder::BeforeCustom));
        assert_eq!(outbound.conversion().unwrap().destination, "ANSEL");
        // Zones without a codeset option get an order but no conversion.
        assert!(reg.slot(MapSlot::InternalToEditor).conversion().is_none());
        assert!(reg.slot(MapSlot::InternalToEditor).order().is_some());
        // Report zone only configures the outbound slot.
        assert!(reg.slot(MapSlot::ReportToInternal).order().is_none());
        assert!(reg.slot(MapSlot::Sort).order().is_none());
    }

    #[test]
    fn reload_clears_old_conversions() {
        let mut opts = MemoryOptions::new();
        opts.set("GuiCodeset", "CP1252");
        let mut reg = Registry::new();
        reg.set_internal_codeset(Some("UTF-8"));
        reg.reload(&NoRecords, &opts);
        assert!(reg.slot(MapSlot::InternalToDisplay).conversion().is_some());

        reg.set_internal_codeset(None::<String>);
        reg.reload(&NoRecords, &opts);
        assert!(reg.slot(MapSlot::InternalToDisplay).conversion().is_none());
    }

    #[test]
    fn empty_internal_codeset_is_unknown() {
        let mut reg = Registry::new();
        reg.set_internal_codeset(Some(""));
        assert!(reg.internal_codeset().is_none());
    }

    #[test]
    fn translate_through_slot() {
        let mut reg = Registry::new();
        assert_eq!(&*reg.translate(MapSlot::InternalToDisplay, b"abc"), b"abc");
        let t = TranslationTable::build(&["b"], &["BEE"], "").unwrap();
        reg.set_custom_table(MapSlot::InternalToDisplay, Some(t));
        assert_eq!(&*reg.translate(MapSlot::InternalToDisplay, b"abc"), b"aBEEc");
    }
}
