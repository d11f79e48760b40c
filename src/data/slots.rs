use serde::Serialize;

/// Which of the two installed-font directories a slot's file lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DestinationCategory {
    Normal,
    Alternate,
}

/// One editor font slot: a named role bound to a physical font file.
///
/// The set of slots is fixed at compile time. `default_file` is both the
/// canonical installed file name (the file the engine replaces in place)
/// and the name of the backup kept in the defaults directory.
#[derive(Debug, Clone, Copy)]
pub struct FontSlot {
    pub key: &'static str,
    pub default_file: &'static str,
    pub category: DestinationCategory,
    pub localized: bool,
    pub tooltip: &'static str,
}

/// Lock-map key for the staging-directory setting. Not a font slot, but it
/// shares the per-entry lock map and is handled specially by bulk reset.
pub const FONT_PATH_KEY: &str = "FontPath";

use DestinationCategory::{Alternate, Normal};

pub const SLOT_TABLE: &[FontSlot] = &[
    FontSlot {
        key: "BlackFont",
        default_file: "Roboto-Black.ttf",
        category: Normal,
        localized: false,
        tooltip: "",
    },
    FontSlot {
        key: "BlackItalicFont",
        default_file: "Roboto-BlackItalic.ttf",
        category: Normal,
        localized: false,
        tooltip: "",
    },
    FontSlot {
        key: "BoldFont",
        default_file: "Roboto-Bold.ttf",
        category: Normal,
        localized: false,
        tooltip: "Font used for graph and panel titles.",
    },
    FontSlot {
        key: "BoldCondensedFont",
        default_file: "Roboto-BoldCondensed.ttf",
        category: Normal,
        localized: false,
        tooltip: "Row widget titles.",
    },
    FontSlot {
        key: "BoldCondensedItalicFont",
        default_file: "Roboto-BoldCondensedItalic.ttf",
        category: Normal,
        localized: false,
        tooltip: "",
    },
    FontSlot {
        key: "BoldItalicFont",
        default_file: "Roboto-BoldItalic.ttf",
        category: Normal,
        localized: false,
        tooltip: "",
    },
    FontSlot {
        key: "ItalicFont",
        default_file: "Roboto-Italic.ttf",
        category: Normal,
        localized: false,
        tooltip: "Font used under the graph titles.",
    },
    FontSlot {
        key: "LightFont",
        default_file: "Roboto-Light.ttf",
        category: Normal,
        localized: false,
        tooltip: "",
    },
    FontSlot {
        key: "MediumFont",
        default_file: "Roboto-Medium.ttf",
        category: Normal,
        localized: false,
        tooltip: "",
    },
    FontSlot {
        key: "RegularFont",
        default_file: "Roboto-Regular.ttf",
        category: Normal,
        localized: false,
        tooltip: "Font used for most things in the editor.",
    },
    FontSlot {
        key: "MonoFont",
        default_file: "DroidSansMono.ttf",
        category: Normal,
        localized: false,
        tooltip: "Used for the output log and viewport log, only a mono font is recommended.",
    },
    FontSlot {
        key: "ArabicFont",
        default_file: "NotoNaskhArabicUI-Regular.ttf",
        category: Normal,
        localized: true,
        tooltip: "The Arabic localized font.",
    },
    FontSlot {
        key: "ThaiFont",
        default_file: "NotoSansThai-Regular.ttf",
        category: Normal,
        localized: true,
        tooltip: "The Thai localized font.",
    },
    FontSlot {
        key: "JapaneseRegularFont",
        default_file: "GenEiGothicPro-Regular.otf",
        category: Alternate,
        localized: true,
        tooltip: "Japanese localized font used for most things in the editor.",
    },
    FontSlot {
        key: "JapaneseBoldFont",
        default_file: "GenEiGothicPro-Bold.otf",
        category: Alternate,
        localized: true,
        tooltip: "Japanese localized font used for bold things in the editor.",
    },
    FontSlot {
        key: "JapaneseSemiBoldFont",
        default_file: "GenEiGothicPro-SemiBold.otf",
        category: Alternate,
        localized: true,
        tooltip: "",
    },
    FontSlot {
        key: "JapaneseHeavyFont",
        default_file: "GenEiGothicPro-Heavy.otf",
        category: Alternate,
        localized: true,
        tooltip: "",
    },
    FontSlot {
        key: "JapaneseLightFont",
        default_file: "GenEiGothicPro-Light.otf",
        category: Alternate,
        localized: true,
        tooltip: "",
    },
    FontSlot {
        key: "KoreanRegularFont",
        default_file: "NanumGothic.ttf",
        category: Alternate,
        localized: true,
        tooltip: "Korean localized font used for most things in the editor.",
    },
    FontSlot {
        key: "KoreanBoldFont",
        default_file: "NanumGothicBold.ttf",
        category: Alternate,
        localized: true,
        tooltip: "Korean localized font used for bold things in the editor.",
    },
    FontSlot {
        key: "KoreanBlackFont",
        default_file: "NanumGothicExtraBold.ttf",
        category: Alternate,
        localized: true,
        tooltip: "",
    },
];

pub fn all_slots() -> &'static [FontSlot] {
    SLOT_TABLE
}

pub fn slot(key: &str) -> Option<&'static FontSlot> {
    SLOT_TABLE.iter().find(|s| s.key == key)
}

/// Slots the settings panel should currently show. Localized slots are
/// hidden (not locked) while the localized-fonts flag is off.
pub fn visible_slots(edit_localized: bool) -> Vec<&'static FontSlot> {
    SLOT_TABLE
        .iter()
        .filter(|s| edit_localized || !s.localized)
        .collect()
}

/// Per-slot snapshot handed to the settings panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotView {
    pub key: String,
    pub default_file: String,
    pub category: DestinationCategory,
    pub localized: bool,
    pub tooltip: String,
    pub bound_file: String,
    pub editable: bool,
}
