//! Data types for TheAudioDB API responses.
//!
//! These are passive records mirroring the upstream JSON shapes. Every
//! field is optional because the API returns explicit nulls for anything
//! it does not know. Records live for a single request/format cycle.

use serde::Deserialize;

/// Classification of an artist record, derived from which date fields
/// the upstream populated. The API has no explicit type tag; a non-blank
/// formed year means a band, a non-blank born year means an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistKind {
    Band,
    Individual,
    Unknown,
}

/// One artist record from the `search.php` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artist {
    #[serde(rename = "idArtist")]
    pub id: Option<String>,

    #[serde(rename = "strArtist")]
    pub name: Option<String>,

    #[serde(rename = "strArtistAlternate")]
    pub alternate_name: Option<String>,

    #[serde(rename = "strLabel")]
    pub label: Option<String>,

    #[serde(rename = "intFormedYear")]
    pub formed_year: Option<String>,

    #[serde(rename = "intBornYear")]
    pub born_year: Option<String>,

    #[serde(rename = "intDiedYear")]
    pub died_year: Option<String>,

    #[serde(rename = "strDisbanded")]
    pub disbanded: Option<String>,

    #[serde(rename = "strStyle")]
    pub style: Option<String>,

    #[serde(rename = "strGenre")]
    pub genre: Option<String>,

    #[serde(rename = "strMood")]
    pub mood: Option<String>,

    #[serde(rename = "strWebsite")]
    pub website: Option<String>,

    #[serde(rename = "strFacebook")]
    pub facebook: Option<String>,

    #[serde(rename = "strTwitter")]
    pub twitter: Option<String>,

    /// English biography; the only locale this server consumes.
    #[serde(rename = "strBiographyEN")]
    pub biography: Option<String>,

    #[serde(rename = "strArtistThumb")]
    pub thumbnail_url: Option<String>,

    #[serde(rename = "strArtistLogo")]
    pub logo_url: Option<String>,

    #[serde(rename = "strArtistBanner")]
    pub banner_url: Option<String>,

    #[serde(rename = "strArtistFanart")]
    pub fanart_url: Option<String>,

    #[serde(rename = "strMusicBrainzID")]
    pub musicbrainz_id: Option<String>,
}

impl Artist {
    /// Classify this record as band or individual.
    ///
    /// A non-blank formed year wins over a non-blank born year when both
    /// are present (ambiguous upstream data).
    pub fn kind(&self) -> ArtistKind {
        if is_present(&self.formed_year) {
            ArtistKind::Band
        } else if is_present(&self.born_year) {
            ArtistKind::Individual
        } else {
            ArtistKind::Unknown
        }
    }
}

/// One album record from the `discography.php` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Album {
    #[serde(rename = "idAlbum")]
    pub id: Option<String>,

    #[serde(rename = "idArtist")]
    pub artist_id: Option<String>,

    #[serde(rename = "strAlbum")]
    pub name: Option<String>,

    #[serde(rename = "strArtist")]
    pub artist_name: Option<String>,

    #[serde(rename = "intYearReleased")]
    pub release_year: Option<String>,

    #[serde(rename = "strGenre")]
    pub genre: Option<String>,

    #[serde(rename = "strStyle")]
    pub style: Option<String>,

    #[serde(rename = "strMood")]
    pub mood: Option<String>,

    #[serde(rename = "strTheme")]
    pub theme: Option<String>,

    #[serde(rename = "strLabel")]
    pub label: Option<String>,

    /// English description; the only locale this server consumes.
    #[serde(rename = "strDescriptionEN")]
    pub description: Option<String>,

    #[serde(rename = "strAlbumThumb")]
    pub thumbnail_url: Option<String>,

    #[serde(rename = "strAlbumCDart")]
    pub cdart_url: Option<String>,

    #[serde(rename = "strMusicBrainzID")]
    pub musicbrainz_id: Option<String>,
}

impl Album {
    /// Records without a usable name are invalid and excluded from
    /// every listing and count.
    pub fn has_valid_name(&self) -> bool {
        is_present(&self.name)
    }
}

/// Envelope for `search.php` responses. The API omits or nulls the
/// `artists` field when there is no match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistSearchResponse {
    #[serde(default)]
    pub artists: Option<Vec<Artist>>,
}

impl ArtistSearchResponse {
    pub fn into_artists(self) -> Vec<Artist> {
        self.artists.unwrap_or_default()
    }
}

/// Envelope for `discography.php` responses. The list field is named
/// `album` (singular) upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscographyResponse {
    #[serde(default)]
    pub album: Option<Vec<Album>>,
}

impl DiscographyResponse {
    pub fn into_albums(self) -> Vec<Album> {
        self.album.unwrap_or_default()
    }
}

/// True when an optional field holds a non-blank value.
pub(crate) fn is_present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}
