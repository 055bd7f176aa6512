use serde::Deserialize;

use crate::domain::entities::{Album, ContentInstance, ImageRef};

/// Single image descriptor as returned by the backend.
#[derive(Debug, Deserialize)]
pub struct ImageResponse {
    /// The image URL.
    #[serde(default)]
    pub url: String,
}

/// Album payload carrying track artwork.
#[derive(Debug, Deserialize)]
pub struct AlbumResponse {
    /// Artwork images, largest first.
    #[serde(default)]
    pub images: Vec<ImageResponse>,
}

/// External link payload.
#[derive(Debug, Deserialize)]
pub struct ExternalUrlsResponse {
    /// Link to the record on Spotify.
    pub spotify: Option<String>,
}

/// One artist or track as returned by the top content endpoints.
#[derive(Debug, Deserialize)]
pub struct TopItemResponse {
    /// Display name.
    pub name: String,
    /// Artist artwork. Absent for tracks.
    #[serde(default)]
    pub images: Vec<ImageResponse>,
    /// Album payload. Absent for artists.
    #[serde(default)]
    pub album: Option<AlbumResponse>,
    /// External links.
    #[serde(default)]
    pub external_urls: Option<ExternalUrlsResponse>,
}

impl From<TopItemResponse> for ContentInstance {
    fn from(response: TopItemResponse) -> Self {
        Self {
            name: response.name,
            images: response.images.into_iter().map(|i| ImageRef::new(i.url)).collect(),
            album: response.album.map(|album| Album {
                images: album.images.into_iter().map(|i| ImageRef::new(i.url)).collect(),
            }),
            external_url: response.external_urls.and_then(|urls| urls.spotify),
        }
    }
}

/// Profile endpoint payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    /// The user's profile picture URL.
    pub profile_picture_url: String,
}

/// Backend error payload.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error message from the backend.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SelectionType;

    #[test]
    fn test_deserialize_artist_payload() {
        let json = r#"{
            "name": "Some Artist",
            "images": [
                { "url": "https://img.example/640.jpg" },
                { "url": "https://img.example/320.jpg" }
            ],
            "external_urls": { "spotify": "https://open.spotify.com/artist/abc" }
        }"#;

        let response: TopItemResponse = serde_json::from_str(json).unwrap();
        let artist = ContentInstance::from(response);

        assert_eq!(artist.name, "Some Artist");
        assert_eq!(
            artist.usable_image_url(SelectionType::Artists),
            Some("https://img.example/640.jpg")
        );
        assert_eq!(
            artist.external_url.as_deref(),
            Some("https://open.spotify.com/artist/abc")
        );
    }

    #[test]
    fn test_deserialize_track_payload() {
        let json = r#"{
            "name": "Some Track",
            "album": { "images": [{ "url": "https://img.example/cover.jpg" }] }
        }"#;

        let response: TopItemResponse = serde_json::from_str(json).unwrap();
        let track = ContentInstance::from(response);

        assert_eq!(
            track.usable_image_url(SelectionType::Tracks),
            Some("https://img.example/cover.jpg")
        );
        assert!(track.images.is_empty());
    }

    #[test]
    fn test_deserialize_track_without_album_images() {
        let json = r#"{ "name": "Bare Track", "album": {} }"#;

        let response: TopItemResponse = serde_json::from_str(json).unwrap();
        let track = ContentInstance::from(response);

        assert_eq!(track.usable_image_url(SelectionType::Tracks), None);
    }

    #[test]
    fn test_deserialize_profile_payload() {
        let json = r#"{ "profilePictureUrl": "https://img.example/me.jpg" }"#;

        let response: ProfileResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.profile_picture_url, "https://img.example/me.jpg");
    }
}
