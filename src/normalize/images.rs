use crate::{
    api::igdb::IgdbGame,
    documents::{FileLink, ImageLinks, PlatformLink},
};

/// Returns the cover derived image links, rebuilt against the large cover
/// size. All links are empty when the game has no cover.
pub fn image_links(game: &IgdbGame) -> ImageLinks {
    match &game.cover {
        Some(cover) if !cover.url.is_empty() => {
            let suffix = match cover.url.split_once(COVER_THUMB_PREFIX) {
                Some((_, suffix)) => suffix,
                None => last_segment(&cover.url),
            };
            ImageLinks::from_url(&cover_big_url(suffix))
        }
        _ => ImageLinks::default(),
    }
}

pub fn screenshot_links(game: &IgdbGame) -> Vec<FileLink> {
    game.screenshots
        .iter()
        .map(|screenshot| FileLink::image(cover_big_url(last_segment(&screenshot.url))))
        .collect()
}

pub fn platform_links(game: &IgdbGame) -> Vec<PlatformLink> {
    game.platforms
        .iter()
        .map(|platform| PlatformLink {
            link: platform
                .platform_logo
                .as_ref()
                .map(|logo| logo.url.clone())
                .unwrap_or_default(),
            platform: platform.name.clone(),
        })
        .collect()
}

fn cover_big_url(suffix: &str) -> String {
    format!("{IGDB_IMAGES_URL}/t_cover_big_2x/{suffix}")
}

fn last_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

const IGDB_IMAGES_URL: &str = "https://images.igdb.com/igdb/image/upload";
const COVER_THUMB_PREFIX: &str = "//images.igdb.com/igdb/image/upload/t_thumb/";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::igdb::{IgdbImage, IgdbPlatform};

    fn image(url: &str) -> IgdbImage {
        IgdbImage {
            url: url.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_cover() {
        let links = image_links(&IgdbGame::default());
        assert_eq!(links, ImageLinks::default());
        assert_eq!(links.logo, "");
        assert_eq!(links.background.mobile, "");
    }

    #[test]
    fn null_cover_url() {
        let game: IgdbGame = serde_json::from_str(r#"{"cover":{"url":null}}"#).unwrap();
        assert_eq!(image_links(&game), ImageLinks::default());
    }

    #[test]
    fn cover_links_are_identical() {
        let game = IgdbGame {
            cover: Some(image("//images.igdb.com/igdb/image/upload/t_thumb/abc123")),
            ..Default::default()
        };

        let links = image_links(&game);
        let expected = "https://images.igdb.com/igdb/image/upload/t_cover_big_2x/abc123";
        assert_eq!(links.logo, expected);
        assert_eq!(links.card_web, expected);
        assert_eq!(links.selected_image, expected);
        assert_eq!(links.game_cover, expected);
        assert_eq!(links.background.desktop, expected);
        assert_eq!(links.background.mobile, expected);
    }

    #[test]
    fn cover_with_unexpected_prefix_uses_file_name() {
        let game = IgdbGame {
            cover: Some(image("https://cdn.example.com/covers/t_720p/co1wyy.jpg")),
            ..Default::default()
        };

        assert_eq!(
            image_links(&game).game_cover,
            "https://images.igdb.com/igdb/image/upload/t_cover_big_2x/co1wyy.jpg"
        );
    }

    #[test]
    fn screenshots_keep_order() {
        let game = IgdbGame {
            screenshots: vec![
                image("//images.igdb.com/igdb/image/upload/t_thumb/sc1.jpg"),
                image("//images.igdb.com/igdb/image/upload/t_thumb/sc2.jpg"),
            ],
            ..Default::default()
        };

        let links = screenshot_links(&game);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].file_type, "image");
        assert_eq!(
            links[0].link,
            "https://images.igdb.com/igdb/image/upload/t_cover_big_2x/sc1.jpg"
        );
        assert_eq!(
            links[1].link,
            "https://images.igdb.com/igdb/image/upload/t_cover_big_2x/sc2.jpg"
        );
    }

    #[test]
    fn platforms_with_and_without_logo() {
        let game = IgdbGame {
            platforms: vec![
                IgdbPlatform {
                    name: "PlayStation 5".to_owned(),
                    platform_logo: Some(image("//images.igdb.com/igdb/image/upload/t_thumb/pl7m.jpg")),
                },
                IgdbPlatform {
                    name: "Linux".to_owned(),
                    platform_logo: None,
                },
            ],
            ..Default::default()
        };

        let links = platform_links(&game);
        assert_eq!(
            links,
            vec![
                PlatformLink {
                    link: "//images.igdb.com/igdb/image/upload/t_thumb/pl7m.jpg".to_owned(),
                    platform: "PlayStation 5".to_owned(),
                },
                PlatformLink {
                    link: String::new(),
                    platform: "Linux".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn no_screenshots_or_platforms() {
        let game = IgdbGame::default();
        assert!(screenshot_links(&game).is_empty());
        assert!(platform_links(&game).is_empty());
    }
}
