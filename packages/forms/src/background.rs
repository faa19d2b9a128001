//! Page backgrounds.
//!
//! A page stores its background as a single string: empty for the built-in
//! gradient, a `bg-` utility class for a colour preset, anything else is an image URL.

use api::{ImageFile, LinkFreeApi, UploadKind};

use crate::page::PageError;
use crate::validation::ImagePolicy;

pub const DEFAULT_GRADIENT: &str = "bg-gradient-to-r from-blue-500 to-pink-500";
/// What the editor shows when a saved page has no background.
pub const EDIT_FALLBACK: &str = "bg-blue-100";

const IMAGE_CLASS: &str = "bg-cover bg-center bg-no-repeat";

const PRESETS: [(&str, &str); 7] = [
    ("blue", "bg-blue-100"),
    ("purple", "bg-purple-100"),
    ("pink", "bg-pink-100"),
    ("green", "bg-green-100"),
    ("yellow", "bg-yellow-100"),
    ("gray", "bg-gray-100"),
    ("default", DEFAULT_GRADIENT),
];

const STOCK_IMAGES: [(&str, &str); 3] = [
    (
        "custom1",
        "https://res.cloudinary.com/dfyafvaae/image/upload/v1745518430/pexels-eberhardgross-1367105_2_ampir7.jpg",
    ),
    (
        "custom2",
        "https://res.cloudinary.com/dfyafvaae/image/upload/v1745518438/pexels-hngstrm-1939485_sfjuqw.jpg",
    ),
    (
        "custom3",
        "https://res.cloudinary.com/dfyafvaae/image/upload/v1745518443/pexels-fwstudio-33348-129731_yd8le7.jpg",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Default,
    Preset(String),
    Image(String),
}

impl Background {
    pub fn parse(stored: &str) -> Self {
        let stored = stored.trim();
        if stored.is_empty() {
            Background::Default
        } else if stored.starts_with("bg-") {
            Background::Preset(stored.to_string())
        } else {
            Background::Image(stored.to_string())
        }
    }

    /// Utility classes to put on the page container.
    pub fn class(&self) -> &str {
        match self {
            Background::Default => DEFAULT_GRADIENT,
            Background::Preset(class) => class.as_str(),
            Background::Image(_) => IMAGE_CLASS,
        }
    }

    /// Inline style, only for image backgrounds.
    pub fn style(&self) -> Option<String> {
        match self {
            Background::Image(url) => Some(format!(
                "background-image: url(\"{}\");",
                url.replace('"', "%22")
            )),
            Background::Default | Background::Preset(_) => None,
        }
    }

    pub fn as_stored(&self) -> &str {
        match self {
            Background::Default => "",
            Background::Preset(value) | Background::Image(value) => value.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundOption {
    pub id: String,
    pub value: String,
}

impl BackgroundOption {
    pub fn background(&self) -> Background {
        Background::parse(&self.value)
    }
}

/// What the background dialog offers: the presets, the stock images, and any image
/// uploaded while the dialog was open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundChoices {
    options: Vec<BackgroundOption>,
    uploads: usize,
}

impl Default for BackgroundChoices {
    fn default() -> Self {
        let options = PRESETS
            .iter()
            .chain(STOCK_IMAGES.iter())
            .map(|(id, value)| BackgroundOption {
                id: id.to_string(),
                value: value.to_string(),
            })
            .collect();
        Self {
            options,
            uploads: 0,
        }
    }
}

impl BackgroundChoices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &[BackgroundOption] {
        &self.options
    }

    pub fn colors(&self) -> impl Iterator<Item = &BackgroundOption> {
        self.options
            .iter()
            .filter(|o| !matches!(o.background(), Background::Image(_)))
    }

    pub fn images(&self) -> impl Iterator<Item = &BackgroundOption> {
        self.options
            .iter()
            .filter(|o| matches!(o.background(), Background::Image(_)))
    }

    /// Offer `url` as an option. Known URLs are not added twice.
    pub fn add_custom(&mut self, url: &str) -> BackgroundOption {
        if let Some(existing) = self.options.iter().find(|o| o.value == url) {
            return existing.clone();
        }
        self.uploads += 1;
        let option = BackgroundOption {
            id: format!("upload{}", self.uploads),
            value: url.to_string(),
        };
        self.options.push(option.clone());
        option
    }

    /// Upload an image and offer it. Returns the stored URL.
    pub async fn upload<A: LinkFreeApi>(
        &mut self,
        api: &A,
        file: ImageFile,
    ) -> Result<String, PageError> {
        ImagePolicy::BACKGROUND.check(&file)?;
        let url = api
            .upload_file(file, UploadKind::Background)
            .await
            .map_err(|e| {
                tracing::error!("background upload failed: {e}");
                PageError::Request(e.user_message("Upload failed. Try again."))
            })?;
        self.add_custom(&url);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeApi;
    use serde_json::json;

    #[test]
    fn test_parse() {
        assert_eq!(Background::parse(""), Background::Default);
        assert_eq!(Background::parse("").class(), DEFAULT_GRADIENT);
        assert_eq!(
            Background::parse("bg-pink-100"),
            Background::Preset("bg-pink-100".to_string())
        );
        let image = Background::parse("https://cdn.example/bg.jpg");
        assert_eq!(
            image.style().as_deref(),
            Some("background-image: url(\"https://cdn.example/bg.jpg\");")
        );
        assert_eq!(image.as_stored(), "https://cdn.example/bg.jpg");
    }

    #[test]
    fn test_default_choices() {
        let choices = BackgroundChoices::new();
        assert_eq!(choices.colors().count(), 7);
        assert_eq!(choices.images().count(), 3);
    }

    #[tokio::test]
    async fn test_upload_appends_option() {
        let api = FakeApi::new().reply("upload_file", json!("https://cdn.example/mine.png"));
        let mut choices = BackgroundChoices::new();

        let url = choices
            .upload(
                &api,
                ImageFile {
                    name: "mine.png".to_string(),
                    content_type: "image/png".to_string(),
                    bytes: vec![1; 16],
                },
            )
            .await
            .unwrap();

        assert_eq!(url, "https://cdn.example/mine.png");
        assert_eq!(choices.images().count(), 4);
        assert_eq!(api.calls_to("upload_file")[0].body["uploadType"], "background");

        choices.add_custom(&url);
        assert_eq!(choices.images().count(), 4);
    }
}
