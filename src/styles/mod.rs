//! Art style presets for the image studio.

/// A named group of styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleCategory {
    pub name: &'static str,
    pub styles: &'static [&'static str],
}

/// Built-in catalog, in display order.
pub const CATALOG: &[StyleCategory] = &[
    StyleCategory {
        name: "Anime Styles",
        styles: &[
            "Pointed Anime",
            "Cinemotic",
            "Digital Painting",
            "Concept Art",
            "Vintage Anime",
            "Neon Vintage Anime",
            "3D Disney Character",
            "2D Disney Character",
            "50s Infomercial Anime",
        ],
    },
    StyleCategory {
        name: "Comic/Illustration",
        styles: &[
            "Vintage Comic",
            "Franco-Belgian Comic",
            "Tintin Comic",
            "Flat Illustration",
            "Vintage Pulp Art",
            "Medieval",
            "Traditional Japanese",
            "YuGiOh Art",
            "MTG Card",
        ],
    },
    StyleCategory {
        name: "3D Styles",
        styles: &[
            "3D Pokemon",
            "Painted Pokemon",
            "3D Isometric Icon",
            "Cute 3D Icon",
            "Claymotion",
            "3D Emoji",
        ],
    },
    StyleCategory {
        name: "Retro/Vintage",
        styles: &[
            "1990s Photo",
            "1980s Photo",
            "1970s Photo",
            "1960s Photo",
            "1950s Photo",
            "1940s Photo",
            "1930s Photo",
            "1920s Photo",
        ],
    },
    StyleCategory {
        name: "Specialized Techniques",
        styles: &[
            "Pixel Art",
            "Oil Painting",
            "Watercolor",
            "Painterly",
            "Concept Sketch",
            "Disney Sketch",
            "Crayon Drawing",
            "Pencil Sketch",
            "Tattoo Design",
        ],
    },
    StyleCategory {
        name: "Unique Categories",
        styles: &[
            "Furry - Cinematic",
            "Furry - Pointed",
            "Cursed Photo",
            "Fantasy World Map",
            "Fantasy City Map",
            "Mongo Style",
            "Nihongo Pointing",
            "Waifu Style",
            "Cortoon Style",
        ],
    },
];

/// First style of the first category.
pub fn default_style() -> &'static str {
    CATALOG[0].styles[0]
}

pub fn categories() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|c| c.name)
}

/// Styles in `category` (case-insensitive), if the category exists.
pub fn styles_in(category: &str) -> Option<&'static [&'static str]> {
    CATALOG
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(category.trim()))
        .map(|c| c.styles)
}

/// Canonical spelling of `name` (case-insensitive) and its category.
pub fn find_style(name: &str) -> Option<(&'static str, &'static str)> {
    let name = name.trim();
    CATALOG.iter().find_map(|c| {
        c.styles
            .iter()
            .find(|s| s.eq_ignore_ascii_case(name))
            .map(|s| (c.name, *s))
    })
}

/// Prompt sent to the model: the base prompt with the style appended.
pub fn compose_prompt(base_prompt: &str, style: &str) -> String {
    format!("{}, {style} style", base_prompt.trim())
}
