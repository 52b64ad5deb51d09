//! Static palette catalog.
//!
//! Palettes are addressed by a short stable id so shared links keep working
//! as the catalog grows or is reordered. Ids use only unambiguous characters
//! (`cdefhjkmnprtvwxy2345689`).

use crate::constants::COLOR_TABLE_LEN;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub id: &'static str,
    pub colors: &'static [&'static str],
}

pub const DEFAULT_PALETTE_ID: &str = "266";

/// Curated palettes presented first, in this order.
pub const STARTER_IDS: &[&str] = &[
    "266", "wpt", "h2y", "45j", "myj", "h66", "emw", "y54", "frf", "8rd", "kn4", "m68", "v6t",
    "xtm", "x6t", "kec",
];

pub static PALETTES: &[Palette] = &[
    Palette {
        id: "266",
        colors: &["#1a1c2c", "#5d275d", "#b13e53", "#ef7d57", "#ffcd75", "#a7f070", "#38b764", "#257179", "#29366f", "#3b5dc9", "#41a6f6", "#73eff7"],
    },
    Palette {
        id: "wpt",
        colors: &["#0d2b45", "#203c56", "#544e68", "#8d697a", "#d08159", "#ffaa5e", "#ffd4a3", "#ffecd6"],
    },
    Palette {
        id: "h2y",
        colors: &["#2e222f", "#3e3546", "#625565", "#966c6c", "#ab947a", "#694f62", "#7f708a", "#9babb2", "#c7dcd0", "#ffffff"],
    },
    Palette {
        id: "45j",
        colors: &["#000000", "#1d2b53", "#7e2553", "#008751", "#ab5236", "#5f574f", "#c2c3c7", "#fff1e8", "#ff004d", "#ffa300", "#ffec27", "#00e436", "#29adff", "#83769c", "#ff77a8", "#ffccaa"],
    },
    Palette {
        id: "myj",
        colors: &["#2b0f54", "#ab1f65", "#ff4f69", "#fff7f8", "#ff8142", "#ffda45", "#3368dc", "#49e7ec"],
    },
    Palette {
        id: "h66",
        colors: &["#051f39", "#4a2480", "#c53a9d", "#ff8e80"],
    },
    Palette {
        id: "emw",
        colors: &["#7b334c", "#a14d55", "#c77369", "#e3a084", "#f2cb9b", "#d37b86", "#af5d8b", "#804085", "#5b3374", "#412051", "#5c486a", "#887d8d", "#b8b4b2", "#dcdac9", "#ffffe0", "#b6f5db"],
    },
    Palette {
        id: "y54",
        colors: &["#ffe4c2", "#dca456", "#a9604c", "#422936", "#8a3a4c", "#c4c36c", "#6e8c48", "#2c4a39"],
    },
    Palette {
        id: "frf",
        colors: &["#8cffde", "#45b8b3", "#839740", "#c9ec85", "#46c657", "#158968", "#2c5b6d", "#222a5c", "#566a89", "#8babbf", "#cce2e1", "#ffdba5", "#ccac68", "#a36d3e", "#683c34", "#000000"],
    },
    Palette {
        id: "8rd",
        colors: &["#ffffff", "#6df7c1", "#11adc1", "#606c81", "#393457", "#1e8875", "#5bb361", "#a1e55a", "#f7e476", "#f99252", "#cb4d68", "#6a3771", "#c92464", "#f48cb6", "#f7b69e", "#9b9c82"],
    },
    Palette {
        id: "kn4",
        colors: &["#172038", "#253a5e", "#3c5e8b", "#4f8fba", "#73bed3", "#a4dddb", "#19332d", "#25562e", "#468232", "#75a743", "#a8ca58", "#d0da91"],
    },
    Palette {
        id: "m68",
        colors: &["#fcb08c", "#ef9d7f", "#d6938a", "#b48d92", "#a597a1", "#8fa0bf", "#9aabc9", "#a5b7d4"],
    },
    Palette {
        id: "v6t",
        colors: &["#000000", "#1b1b1b", "#3a3a3a", "#5f5f5f", "#8a8a8a", "#b6b6b6", "#dedede", "#ffffff"],
    },
    Palette {
        id: "xtm",
        colors: &["#0b0630", "#235c8e", "#3bb2c3", "#9ef3d8", "#ffffff", "#f7d54a", "#e86a25", "#a31d36"],
    },
    Palette {
        id: "x6t",
        colors: &["#211e20", "#555568", "#a0a08b", "#e9efec"],
    },
    Palette {
        id: "kec",
        colors: &["#ff0040", "#131313", "#1b1b1b", "#272727", "#3d3d3d", "#5d5d5d", "#858585", "#b4b4b4", "#ffffff", "#c7cfdd", "#92a1b9", "#657392", "#424c6e", "#2a2f4e", "#1a1932", "#0e071b"],
    },
    Palette {
        id: "c3p",
        colors: &["#332c50", "#46878f", "#94e344", "#e2f3e4"],
    },
    Palette {
        id: "dw9",
        colors: &["#f2f0e5", "#b8b5b9", "#868188", "#646365", "#45444f", "#3a3858", "#212123", "#352b42", "#43436a", "#4b80ca", "#68c2d3", "#a2dcc7", "#ede19e", "#d3a068", "#b45252", "#6a536e"],
    },
    Palette {
        id: "r8n",
        colors: &["#fff6d3", "#f9a875", "#eb6b6f", "#7c3f58"],
    },
    Palette {
        id: "tjx",
        colors: &["#1e1c32", "#c6baac"],
    },
    Palette {
        id: "pf2",
        colors: &["#003f5c", "#2f4b7c", "#665191", "#a05195", "#d45087", "#f95d6a", "#ff7c43", "#ffa600"],
    },
    Palette {
        id: "yh5",
        colors: &["#e0f8d0", "#88c070", "#346856", "#081820"],
    },
];

pub fn get(id: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|p| p.id == id)
}

#[inline]
pub fn contains(id: &str) -> bool {
    get(id).is_some()
}

/// Decode `#rrggbb` (leading `#` optional) into normalized RGB.
pub fn hex_to_rgb(hex: &str) -> Option<[f32; 3]> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Flat RGB table of `COLOR_TABLE_LEN` entries, repeating the palette.
pub fn color_table(palette: &Palette) -> Vec<f32> {
    let rgb: Vec<[f32; 3]> = palette.colors.iter().filter_map(|c| hex_to_rgb(c)).collect();
    if rgb.is_empty() {
        return vec![0.0; COLOR_TABLE_LEN * 3];
    }
    rgb.iter()
        .cycle()
        .take(COLOR_TABLE_LEN)
        .flat_map(|c| c.iter().copied())
        .collect()
}

/// Presentation order used when cycling palettes.
#[derive(Clone, Debug)]
pub struct PaletteOrder {
    ids: Vec<&'static str>,
}

impl Default for PaletteOrder {
    fn default() -> Self {
        Self::catalog()
    }
}

impl PaletteOrder {
    /// Starters first, then the rest in catalog order.
    pub fn catalog() -> Self {
        let mut ids: Vec<&'static str> = STARTER_IDS.to_vec();
        ids.extend(
            PALETTES
                .iter()
                .map(|p| p.id)
                .filter(|id| !STARTER_IDS.contains(id)),
        );
        Self { ids }
    }

    /// Starters first in curated order, then the rest shuffled.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut order = Self::catalog();
        order.ids[STARTER_IDS.len()..].shuffle(rng);
        order
    }

    #[inline]
    pub fn ids(&self) -> &[&'static str] {
        &self.ids
    }

    /// Id `step` positions away from `current`, wrapping around.
    ///
    /// An id missing from the order is treated as sitting at the front.
    pub fn step(&self, current: &str, step: i32) -> &'static str {
        let len = self.ids.len() as i64;
        let pos = self.ids.iter().position(|id| *id == current).unwrap_or(0) as i64;
        let next = (pos + step as i64).rem_euclid(len);
        self.ids[next as usize]
    }
}
