// Mapping slots and codeset zones.

/// Purpose served by one translation table in the registry.
///
/// The discriminants are the slot indices; the order is fixed because the
/// storage keys and the registry array are indexed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MapSlot {
    /// Editor characters to internal.
    EditorToInternal = 0,
    /// Internal characters to editor.
    InternalToEditor = 1,
    /// GEDCOM file characters to internal.
    GedcomToInternal = 2,
    /// Internal characters to GEDCOM file.
    InternalToGedcom = 3,
    /// Display characters to internal.
    DisplayToInternal = 4,
    /// Internal characters to display.
    InternalToDisplay = 5,
    /// Report characters to internal.
    ReportToInternal = 6,
    /// Internal characters to report.
    InternalToReport = 7,
    /// Custom sort order: character sequences to decimal sort weights.
    Sort = 8,
    /// Character widths; only the match length is used, never the replacement.
    CharWidth = 9,
    /// Lowercase mapping (reserved, unused).
    Lowercase = 10,
    /// Uppercase mapping (reserved, unused).
    Uppercase = 11,
    /// Prefixes to skip when sorting (reserved, unused).
    PrefixSkip = 12,
}

impl MapSlot {
    /// Number of slots.
    pub const COUNT: usize = 13;

    /// Every slot, in index order.
    pub const ALL: [MapSlot; MapSlot::COUNT] = [
        MapSlot::EditorToInternal,
        MapSlot::InternalToEditor,
        MapSlot::GedcomToInternal,
        MapSlot::InternalToGedcom,
        MapSlot::DisplayToInternal,
        MapSlot::InternalToDisplay,
        MapSlot::ReportToInternal,
        MapSlot::InternalToReport,
        MapSlot::Sort,
        MapSlot::CharWidth,
        MapSlot::Lowercase,
        MapSlot::Uppercase,
        MapSlot::PrefixSkip,
    ];

    /// Slot index (0-based).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a slot by index. Returns `None` outside `0..COUNT`.
    pub fn from_index(index: usize) -> Option<MapSlot> {
        Self::ALL.get(index).copied()
    }

    /// Key under which the slot's map definition is stored.
    pub fn key(self) -> &'static str {
        match self {
            MapSlot::EditorToInternal => "MEDIN",
            MapSlot::InternalToEditor => "MINED",
            MapSlot::GedcomToInternal => "MGDIN",
            MapSlot::InternalToGedcom => "MINGD",
            MapSlot::DisplayToInternal => "MDSIN",
            MapSlot::InternalToDisplay => "MINDS",
            MapSlot::ReportToInternal => "MRPIN",
            MapSlot::InternalToReport => "MINRP",
            MapSlot::Sort => "MSORT",
            MapSlot::CharWidth => "MCHAR",
            MapSlot::Lowercase => "MLCAS",
            MapSlot::Uppercase => "MUCAS",
            MapSlot::PrefixSkip => "MPREF",
        }
    }

    /// Look up a slot by its storage key (case-sensitive).
    pub fn from_key(key: &str) -> Option<MapSlot> {
        Self::ALL.iter().copied().find(|slot| slot.key() == key)
    }

    /// Human-readable slot name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            MapSlot::EditorToInternal => "Editor to Internal",
            MapSlot::InternalToEditor => "Internal to Editor",
            MapSlot::GedcomToInternal => "GEDCOM to Internal",
            MapSlot::InternalToGedcom => "Internal to GEDCOM",
            MapSlot::DisplayToInternal => "Display to Internal",
            MapSlot::InternalToDisplay => "Internal to Display",
            MapSlot::ReportToInternal => "Report to Internal",
            MapSlot::InternalToReport => "Internal to Report",
            MapSlot::Sort => "Custom Sort",
            MapSlot::CharWidth => "Custom Charset",
            MapSlot::Lowercase => "Lower Case",
            MapSlot::Uppercase => "Upper Case",
            MapSlot::PrefixSkip => "Prefixes",
        }
    }

    /// The codeset zone this slot converts to or from, if any.
    pub fn zone(self) -> Option<Zone> {
        match self {
            MapSlot::EditorToInternal | MapSlot::InternalToEditor => Some(Zone::Editor),
            MapSlot::GedcomToInternal | MapSlot::InternalToGedcom => Some(Zone::Gedcom),
            MapSlot::DisplayToInternal | MapSlot::InternalToDisplay => Some(Zone::Display),
            MapSlot::ReportToInternal | MapSlot::InternalToReport => Some(Zone::Report),
            _ => None,
        }
    }
}

impl std::fmt::Display for MapSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Codeset boundary: one external codeset on one side, the internal codeset
/// on the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Editor,
    Gedcom,
    Display,
    Report,
}

impl Zone {
    /// Every zone, in the order the registry configures them.
    pub const ALL: [Zone; 4] = [Zone::Display, Zone::Editor, Zone::Gedcom, Zone::Report];

    /// Name of the option holding this zone's external codeset.
    pub fn codeset_option(self) -> &'static str {
        match self {
            Zone::Editor => "EditorCodeset",
            Zone::Gedcom => "GedcomCodeset",
            Zone::Display => "GuiCodeset",
            Zone::Report => "ReportCodeset",
        }
    }

    /// Slot translating from the external codeset into the internal one.
    ///
    /// The report zone has no configured inbound conversion.
    pub fn inbound(self) -> Option<MapSlot> {
        match self {
            Zone::Editor => Some(MapSlot::EditorToInternal),
            Zone::Gedcom => Some(MapSlot::GedcomToInternal),
            Zone::Display => Some(MapSlot::DisplayToInternal),
            Zone::Report => None,
        }
    }

    /// Slot translating from the internal codeset out to the external one.
    pub fn outbound(self) -> MapSlot {
        match self {
            Zone::Editor => MapSlot::InternalToEditor,
            Zone::Gedcom => MapSlot::InternalToGedcom,
            Zone::Display => MapSlot::InternalToDisplay,
            Zone::Report => MapSlot::InternalToReport,
        }
    }
}
