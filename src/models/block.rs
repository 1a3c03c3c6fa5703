//! Content block kinds and the color fields each one exposes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback for container borders: translucent gray.
pub const BORDER_FALLBACK: &str = "rgba(156, 163, 175, 0.3)";
/// Fallback for body text.
pub const TEXT_FALLBACK: &str = "#1f2937";
/// Fallback for text on filled shapes and buttons.
pub const ON_FILL_FALLBACK: &str = "#ffffff";
/// Fallback for accents, links and filled shapes.
pub const ACCENT_FALLBACK: &str = "#3b82f6";
/// Fallback for divider lines.
pub const LINE_FALLBACK: &str = "#e5e7eb";
/// Fallback for section backgrounds.
pub const TRANSPARENT: &str = "transparent";

/// Where a color field's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// Authored on the block as `<name>Selection` / `custom<Name>Color` / `<name>OpacityPreset`
    Authored,
    /// Reuses another field's resolved value
    Alias(&'static str),
}

/// A configurable color field of a block kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorField {
    /// Field base name (e.g., "background")
    pub name: &'static str,
    /// Literal CSS color used when the field cannot be resolved
    pub fallback: &'static str,
    /// Authored or aliased
    pub source: FieldSource,
}

impl ColorField {
    const fn authored(name: &'static str, fallback: &'static str) -> Self {
        Self {
            name,
            fallback,
            source: FieldSource::Authored,
        }
    }

    const fn alias(name: &'static str, target: &'static str) -> Self {
        Self {
            name,
            fallback: TRANSPARENT,
            source: FieldSource::Alias(target),
        }
    }

    /// Document key holding the token selection (`backgroundSelection`).
    #[must_use]
    pub fn selection_key(&self) -> String {
        format!("{}Selection", self.name)
    }

    /// Document key holding the custom color (`customBackgroundColor`).
    #[must_use]
    pub fn custom_key(&self) -> String {
        let mut chars = self.name.chars();
        let capitalized: String = chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        format!("custom{capitalized}Color")
    }

    /// Document key holding the opacity preset (`backgroundOpacityPreset`).
    #[must_use]
    pub fn opacity_key(&self) -> String {
        format!("{}OpacityPreset", self.name)
    }
}

const TEXT_BLOCK_FIELDS: &[ColorField] = &[
    ColorField::authored("background", TRANSPARENT),
    ColorField::authored("text", TEXT_FALLBACK),
    ColorField::authored("link", ACCENT_FALLBACK),
];

const IMAGE_BLOCK_FIELDS: &[ColorField] = &[
    ColorField::authored("background", TRANSPARENT),
    ColorField::authored("border", BORDER_FALLBACK),
    ColorField::authored("text", "#6b7280"),
];

const BUTTON_BLOCK_FIELDS: &[ColorField] = &[
    ColorField::authored("background", ACCENT_FALLBACK),
    ColorField::authored("text", ON_FILL_FALLBACK),
    ColorField::authored("border", TRANSPARENT),
];

const COMPANY_LIST_FIELDS: &[ColorField] = &[
    ColorField::authored("background", TRANSPARENT),
    ColorField::authored("text", TEXT_FALLBACK),
    ColorField::authored("border", BORDER_FALLBACK),
    ColorField::authored("line", LINE_FALLBACK),
];

const HONEYCOMB_FIELDS: &[ColorField] = &[
    ColorField::authored("background", TRANSPARENT),
    ColorField::authored("hexagon", ACCENT_FALLBACK),
    ColorField::authored("text", ON_FILL_FALLBACK),
    ColorField::authored("border", BORDER_FALLBACK),
];

const TILTED_SQUARE_FIELDS: &[ColorField] = &[
    ColorField::authored("background", TRANSPARENT),
    ColorField::authored("diamond", ACCENT_FALLBACK),
    ColorField::authored("text", ON_FILL_FALLBACK),
    ColorField::authored("line", LINE_FALLBACK),
];

const CONTACT_FORM_FIELDS: &[ColorField] = &[
    ColorField::authored("background", ON_FILL_FALLBACK),
    ColorField::authored("text", TEXT_FALLBACK),
    ColorField::authored("border", BORDER_FALLBACK),
    ColorField::authored("accent", ACCENT_FALLBACK),
    ColorField::authored("buttonText", ON_FILL_FALLBACK),
    ColorField::alias("focusRing", "accent"),
];

const SOCIAL_LINKS_FIELDS: &[ColorField] = &[
    ColorField::authored("background", TRANSPARENT),
    ColorField::authored("text", TEXT_FALLBACK),
    ColorField::authored("link", ACCENT_FALLBACK),
    ColorField::alias("hoverLink", "link"),
];

/// The kinds of content blocks a page can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    /// Rich text
    TextBlock,
    /// Single image with caption
    ImageBlock,
    /// Call-to-action button
    ButtonBlock,
    /// Plain list of companies
    CompanyList,
    /// Companies in a honeycomb
    HoneycombGrid,
    /// Companies in a tilted-square grid
    TiltedSquareGrid,
    /// Contact form
    ContactForm,
    /// Social media links
    SocialLinks,
    /// Any `_type` not listed above
    Unknown,
}

impl BlockKind {
    /// All known block kinds.
    pub const ALL: [Self; 8] = [
        Self::TextBlock,
        Self::ImageBlock,
        Self::ButtonBlock,
        Self::CompanyList,
        Self::HoneycombGrid,
        Self::TiltedSquareGrid,
        Self::ContactForm,
        Self::SocialLinks,
    ];

    /// Maps a document `_type` to a block kind.
    #[must_use]
    pub fn from_type_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.type_name() == name)
            .unwrap_or(Self::Unknown)
    }

    /// The document `_type` of this kind.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::TextBlock => "textBlock",
            Self::ImageBlock => "imageBlock",
            Self::ButtonBlock => "buttonBlock",
            Self::CompanyList => "companyList",
            Self::HoneycombGrid => "honeycombGrid",
            Self::TiltedSquareGrid => "tiltedSquareGrid",
            Self::ContactForm => "contactForm",
            Self::SocialLinks => "socialLinks",
            Self::Unknown => "unknown",
        }
    }

    /// Color fields of this kind, in resolution order.
    #[must_use]
    pub const fn color_fields(&self) -> &'static [ColorField] {
        match self {
            Self::TextBlock => TEXT_BLOCK_FIELDS,
            Self::ImageBlock => IMAGE_BLOCK_FIELDS,
            Self::ButtonBlock => BUTTON_BLOCK_FIELDS,
            Self::CompanyList => COMPANY_LIST_FIELDS,
            Self::HoneycombGrid => HONEYCOMB_FIELDS,
            Self::TiltedSquareGrid => TILTED_SQUARE_FIELDS,
            Self::ContactForm => CONTACT_FORM_FIELDS,
            Self::SocialLinks => SOCIAL_LINKS_FIELDS,
            Self::Unknown => &[],
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
