use serde::{Deserialize, Serialize};

/// JSON blob stored in the `images` column of the `service` table.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct ServiceImages {
    #[serde(flatten)]
    pub links: ImageLinks,

    #[serde(default)]
    pub files: Vec<FileLink>,

    #[serde(default)]
    pub platforms: Vec<PlatformLink>,
}

/// Cover derived links. When a cover exists all of them point to the same
/// image, otherwise all of them are empty.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct ImageLinks {
    #[serde(default)]
    pub logo: String,

    #[serde(default)]
    pub card_web: String,

    #[serde(default)]
    pub selected_image: String,

    #[serde(default)]
    pub game_cover: String,

    #[serde(default)]
    pub background: ImageBackground,
}

impl ImageLinks {
    pub fn from_url(url: &str) -> Self {
        ImageLinks {
            logo: url.to_owned(),
            card_web: url.to_owned(),
            selected_image: url.to_owned(),
            game_cover: url.to_owned(),
            background: ImageBackground {
                desktop: url.to_owned(),
                mobile: url.to_owned(),
            },
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct ImageBackground {
    #[serde(default)]
    pub desktop: String,

    #[serde(default)]
    pub mobile: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FileLink {
    #[serde(rename = "type")]
    pub file_type: String,
    pub link: String,
}

impl FileLink {
    pub fn image(link: String) -> Self {
        FileLink {
            file_type: String::from("image"),
            link,
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct PlatformLink {
    pub link: String,
    pub platform: String,
}
