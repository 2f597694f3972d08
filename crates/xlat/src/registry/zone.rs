// Generic codeset conversion settings for the four zones.
//
// The conversion itself is done by an external transcoder; the registry only
// records which codesets it should convert between and whether it runs before
// or after the slot's custom table.

use xlat_core::{MapSlot, Zone};

use super::store::OptionStore;

/// Codeset pair handed to the external transcoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodesetConversion {
    pub source: String,
    pub destination: String,
}

/// When the generic conversion runs relative to the custom table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionOrder {
    /// Transcode first, then apply the custom table.
    BeforeCustom,
    /// Apply the custom table first, then transcode.
    AfterCustom,
}

/// Settings computed for one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSettings {
    /// (slot, order, conversion) for each configured direction.
    pub slots: Vec<(MapSlot, ConversionOrder, Option<CodesetConversion>)>,
}

/// Compute the generic conversions for `zone`.
///
/// Inbound slots (external to internal) run the custom table on external
/// text and transcode afterwards; outbound slots transcode first. The
/// ordering is set even when no external codeset is configured. The outbound
/// destination gets the optional `<Option>Output` suffix appended, for
/// transcoder flags such as `//TRANSLIT`.
pub fn zone_settings(zone: Zone, internal: &str, options: &dyn OptionStore) -> ZoneSettings {
    let option = zone.codeset_option();
    let external = options
        .get_string_option(option)
        .filter(|cs| !cs.is_empty());

    let mut slots = Vec::with_capacity(2);
    if let Some(inbound) = zone.inbound() {
        let conversion = external.as_ref().map(|ext| CodesetConversion {
            source: ext.clone(),
            destination: internal.to_string(),
        });
        slots.push((inbound, ConversionOrder::AfterCustom, conversion));
    }

    let conversion = external.map(|ext| {
        let suffix = options
            .get_string_option(&format!("{option}Output"))
            .unwrap_or_default();
        CodesetConversion {
            source: internal.to_string(),
            destination: format!("{ext}{suffix}"),
        }
    });
    slots.push((zone.outbound(), ConversionOrder::BeforeCustom, conversion));

    ZoneSettings { slots }
}
