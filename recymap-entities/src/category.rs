use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The kinds of waste a drop-off point may accept.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum WasteCategory {
    Glass,
    Paper,
    Plastic,
    Metal,
    Trash,
}

/// Static, human readable information about a waste category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WasteCategoryInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub handling: &'static str,
    /// Hex RGB color used when rendering the category.
    pub color: &'static str,
}

const GLASS: WasteCategoryInfo = WasteCategoryInfo {
    name: "Glass",
    description: "Glass bottles, jars and drinking glasses",
    handling: "Rinse clean before dropping off",
    color: "#4A90E2",
};

const PAPER: WasteCategoryInfo = WasteCategoryInfo {
    name: "Paper",
    description: "Newspapers, paper and cardboard",
    handling: "Remove plastic film and tape before dropping off",
    color: "#F5A623",
};

const PLASTIC: WasteCategoryInfo = WasteCategoryInfo {
    name: "Plastic",
    description: "Plastic bottles and containers",
    handling: "Remove labels and rinse clean before dropping off",
    color: "#7ED321",
};

const METAL: WasteCategoryInfo = WasteCategoryInfo {
    name: "Metal",
    description: "Cans and scrap metal",
    handling: "Empty and rinse clean before dropping off",
    color: "#BD10E0",
};

const TRASH: WasteCategoryInfo = WasteCategoryInfo {
    name: "General waste",
    description: "Waste that cannot be recycled",
    handling: "Dispose of as general waste",
    color: "#B8B8B8",
};

impl WasteCategory {
    pub const ALL: [Self; 5] = [
        Self::Glass,
        Self::Paper,
        Self::Plastic,
        Self::Metal,
        Self::Trash,
    ];

    /// Categories that are collected for recycling, in display order.
    pub const RECYCLABLE: [Self; 4] = [Self::Glass, Self::Paper, Self::Plastic, Self::Metal];

    pub const fn info(self) -> &'static WasteCategoryInfo {
        match self {
            Self::Glass => &GLASS,
            Self::Paper => &PAPER,
            Self::Plastic => &PLASTIC,
            Self::Metal => &METAL,
            Self::Trash => &TRASH,
        }
    }

    pub const fn is_recyclable(self) -> bool {
        !matches!(self, Self::Trash)
    }
}
