use serde::{Deserialize, Serialize};

/// Corner of the poetry page that carries the chapter illustration.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ImageCorner {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ImageCorner {
    pub fn is_top(self) -> bool {
        matches!(self, ImageCorner::TopLeft | ImageCorner::TopRight)
    }

    pub fn is_left(self) -> bool {
        matches!(self, ImageCorner::TopLeft | ImageCorner::BottomLeft)
    }
}

impl std::fmt::Display for ImageCorner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ImageCorner::TopLeft => "top-left",
            ImageCorner::TopRight => "top-right",
            ImageCorner::BottomLeft => "bottom-left",
            ImageCorner::BottomRight => "bottom-right",
        };
        write!(f, "{}", label)
    }
}

/// One chapter of the story. Never mutated after loading.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Chapter {
    /// 1-based and stable; asset names are derived from it.
    pub id: u32,
    #[serde(default)]
    pub display_id: Option<String>,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub shayari: String,
    #[serde(default)]
    pub image_corner: ImageCorner,
}

impl Chapter {
    /// Label shown in the contents and chapter headers.
    pub fn display_label(&self) -> String {
        match self.display_id.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => self.id.to_string(),
        }
    }

    /// Poetry text split on its embedded line breaks.
    pub fn shayari_lines(&self) -> impl Iterator<Item = &str> {
        self.shayari.lines()
    }
}
