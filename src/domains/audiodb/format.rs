//! Text formatting for TheAudioDB records.
//!
//! Pure functions, no I/O: given the same records they produce
//! byte-identical output. Blank fields are suppressed line by line, and
//! the artist heading and date lines follow the band/individual
//! classification from [`ArtistKind`].

use super::model::{Album, Artist, ArtistKind, is_present};

/// Presentation options for artist formatting.
///
/// The original service rendered near-identical variants at each call
/// site (full biography here, 500-character cutoff there); one options
/// struct replaces them.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Maximum biography length in characters; `None` keeps it verbatim.
    /// Truncated biographies get a trailing `...`.
    pub biography_limit: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            biography_limit: Some(500),
        }
    }
}

/// Format a single artist lookup result as a labeled text block.
///
/// `query` is the original search term, echoed back when nothing was
/// found. Field order is fixed; lines with blank source fields are
/// omitted.
pub fn format_artist(query: &str, artist: Option<&Artist>, options: FormatOptions) -> String {
    let Some(artist) = artist.filter(|a| is_present(&a.name)) else {
        return format!("No artist found for search term: '{}'", query);
    };

    let kind = artist.kind();
    let heading = match kind {
        ArtistKind::Band => "Band Information:",
        ArtistKind::Individual | ArtistKind::Unknown => "Artist Information:",
    };

    let mut out = String::new();
    out.push_str(heading);
    out.push('\n');
    out.push_str("==================\n");

    push_field(&mut out, "Name", &artist.name);
    push_field(&mut out, "Also Known As", &artist.alternate_name);
    push_field(&mut out, "Genre", &artist.genre);
    push_field(&mut out, "Style", &artist.style);

    match kind {
        ArtistKind::Band => {
            push_field(&mut out, "Formed", &artist.formed_year);
            push_field(&mut out, "Disbanded", &artist.disbanded);
        }
        ArtistKind::Individual => {
            push_field(&mut out, "Born", &artist.born_year);
            push_field(&mut out, "Died", &artist.died_year);
        }
        ArtistKind::Unknown => {}
    }

    push_field(&mut out, "Label", &artist.label);
    push_field(&mut out, "Mood", &artist.mood);
    push_field(&mut out, "Website", &artist.website);
    push_field(&mut out, "Facebook", &artist.facebook);
    push_field(&mut out, "Twitter", &artist.twitter);

    if let Some(bio) = artist.biography.as_deref().filter(|b| !b.trim().is_empty()) {
        out.push_str("\nBiography:\n");
        out.push_str(&truncate(bio, options.biography_limit));
        out.push('\n');
    }

    if is_present(&artist.thumbnail_url) {
        out.push('\n');
    }
    push_field(&mut out, "Thumbnail", &artist.thumbnail_url);
    push_field(&mut out, "Logo", &artist.logo_url);
    push_field(&mut out, "MusicBrainz ID", &artist.musicbrainz_id);

    out
}

/// Format a discography as a numbered list.
///
/// Blank-named records are excluded before anything else, including the
/// count. A non-blank `album_filter` keeps only case-insensitive
/// substring matches on the album name.
pub fn format_album_list(
    artist_name: &str,
    album_filter: Option<&str>,
    albums: &[Album],
) -> String {
    let valid: Vec<&Album> = albums.iter().filter(|a| a.has_valid_name()).collect();
    if valid.is_empty() {
        return format!("No albums found for artist: '{}'", artist_name);
    }

    let filter = album_filter.map(str::trim).filter(|f| !f.is_empty());
    let filtered: Vec<&Album> = match filter {
        Some(f) => {
            let needle = f.to_lowercase();
            valid
                .into_iter()
                .filter(|a| {
                    a.name
                        .as_deref()
                        .is_some_and(|n| n.to_lowercase().contains(&needle))
                })
                .collect()
        }
        None => valid,
    };

    if filtered.is_empty() {
        // Reachable only with a filter; an unfiltered empty list returned above.
        return format!(
            "No albums found matching '{}' by artist '{}'",
            filter.unwrap_or_default(),
            artist_name
        );
    }

    let mut out = String::new();
    match filter {
        Some(f) => out.push_str(&format!(
            "Album search results for '{}' by {}:\n",
            f, artist_name
        )),
        None => out.push_str(&format!("Albums by {}:\n", artist_name)),
    }
    out.push_str("============================\n");
    out.push_str(&format!("Found {} album(s):\n\n", filtered.len()));

    for (i, album) in filtered.iter().enumerate() {
        out.push_str(&format!(
            "{}. {}",
            i + 1,
            album.name.as_deref().unwrap_or_default()
        ));

        if let Some(year) = album.release_year.as_deref().filter(|y| !y.trim().is_empty()) {
            out.push_str(&format!(" ({})", year));
        }
        if let Some(genre) = album.genre.as_deref().filter(|g| !g.trim().is_empty()) {
            out.push_str(&format!(" - {}", genre));
        }
        if let Some(label) = album.label.as_deref().filter(|l| !l.trim().is_empty()) {
            out.push_str(&format!(" [{}]", label));
        }
        out.push('\n');

        if let Some(desc) = album.description.as_deref().filter(|d| !d.trim().is_empty()) {
            out.push_str(&format!("   Description: {}\n", desc));
        }
        if let Some(cover) = album.thumbnail_url.as_deref().filter(|c| !c.trim().is_empty()) {
            out.push_str(&format!("   Cover: {}\n", cover));
        }

        out.push('\n');
    }

    out
}

/// Fixed message for the unimplemented track search.
///
/// The embedded URL is informational only; nothing ever calls it.
pub fn format_track_placeholder(artist_name: &str, track_name: &str) -> String {
    format!(
        "Track search feature for '{}' by {} is not yet implemented. \
         This would use the AudioDB searchtrack.php endpoint: \
         https://www.theaudiodb.com/api/v1/json/2/searchtrack.php?s={}&t={}",
        track_name,
        artist_name,
        slugify(artist_name),
        slugify(track_name)
    )
}

/// Append `Label: value` when the field is non-blank.
fn push_field(out: &mut String, label: &str, field: &Option<String>) {
    if let Some(value) = field.as_deref().filter(|v| !v.trim().is_empty()) {
        out.push_str(&format!("{}: {}\n", label, value));
    }
}

/// Truncate to a character limit with a trailing ellipsis.
fn truncate(text: &str, limit: Option<usize>) -> String {
    match limit {
        Some(max) if text.chars().count() > max => {
            let cut: String = text.chars().take(max).collect();
            format!("{}...", cut)
        }
        _ => text.to_string(),
    }
}

/// Lower-case and replace spaces with underscores (upstream URL style).
fn slugify(name: &str) -> String {
    name.replace(' ', "_").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coldplay() -> Artist {
        Artist {
            name: Some("Coldplay".to_string()),
            genre: Some("Alternative Rock".to_string()),
            formed_year: Some("1996".to_string()),
            ..Default::default()
        }
    }

    fn albums() -> Vec<Album> {
        vec![
            Album {
                name: Some("Parachutes".to_string()),
                release_year: Some("2000".to_string()),
                ..Default::default()
            },
            Album {
                name: Some(String::new()),
                release_year: Some("2001".to_string()),
                ..Default::default()
            },
            Album {
                name: Some("A Rush of Blood to the Head".to_string()),
                release_year: Some("2002".to_string()),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_format_artist_none() {
        let text = format_artist("Unknown Band XYZ", None, FormatOptions::default());
        assert_eq!(text, "No artist found for search term: 'Unknown Band XYZ'");
    }

    #[test]
    fn test_format_artist_blank_name_counts_as_missing() {
        let artist = Artist {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        let text = format_artist("x", Some(&artist), FormatOptions::default());
        assert_eq!(text, "No artist found for search term: 'x'");
    }

    #[test]
    fn test_format_artist_band_block() {
        let text = format_artist("Coldplay", Some(&coldplay()), FormatOptions::default());
        assert!(text.starts_with("Band Information:\n"));
        assert!(text.contains("Name: Coldplay\n"));
        assert!(text.contains("Genre: Alternative Rock\n"));
        assert!(text.contains("Formed: 1996\n"));
        // Absent fields produce no lines.
        assert!(!text.contains("Style:"));
        assert!(!text.contains("Label:"));
        assert!(!text.contains("Biography:"));
        assert!(!text.contains("Thumbnail:"));
        assert!(!text.contains("Logo:"));
    }

    #[test]
    fn test_format_artist_individual_uses_born_died() {
        let artist = Artist {
            name: Some("Jimi Hendrix".to_string()),
            born_year: Some("1942".to_string()),
            died_year: Some("1970".to_string()),
            ..Default::default()
        };
        let text = format_artist("Jimi Hendrix", Some(&artist), FormatOptions::default());
        assert!(text.starts_with("Artist Information:\n"));
        assert!(text.contains("Born: 1942\n"));
        assert!(text.contains("Died: 1970\n"));
        assert!(!text.contains("Formed:"));
    }

    #[test]
    fn test_format_artist_unknown_kind_has_no_date_lines() {
        let artist = Artist {
            name: Some("Mystery Act".to_string()),
            ..Default::default()
        };
        let text = format_artist("Mystery Act", Some(&artist), FormatOptions::default());
        assert!(text.starts_with("Artist Information:\n"));
        assert!(!text.contains("Formed:"));
        assert!(!text.contains("Born:"));
    }

    #[test]
    fn test_biography_truncated_with_ellipsis() {
        let artist = Artist {
            name: Some("Coldplay".to_string()),
            biography: Some("x".repeat(600)),
            ..Default::default()
        };
        let text = format_artist(
            "Coldplay",
            Some(&artist),
            FormatOptions {
                biography_limit: Some(500),
            },
        );
        let bio_line = format!("{}...", "x".repeat(500));
        assert!(text.contains(&bio_line));
        assert!(!text.contains(&"x".repeat(501)));
    }

    #[test]
    fn test_biography_verbatim_without_limit() {
        let artist = Artist {
            name: Some("Coldplay".to_string()),
            biography: Some("x".repeat(600)),
            ..Default::default()
        };
        let text = format_artist(
            "Coldplay",
            Some(&artist),
            FormatOptions {
                biography_limit: None,
            },
        );
        assert!(text.contains(&"x".repeat(600)));
        assert!(!text.contains("..."));
    }

    #[test]
    fn test_format_artist_idempotent() {
        let artist = coldplay();
        let a = format_artist("Coldplay", Some(&artist), FormatOptions::default());
        let b = format_artist("Coldplay", Some(&artist), FormatOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_album_list_excludes_blank_names() {
        let text = format_album_list("Coldplay", None, &albums());
        assert!(text.contains("Found 2 album(s):"));
        assert!(text.contains("1. Parachutes (2000)"));
        assert!(text.contains("2. A Rush of Blood to the Head (2002)"));
        assert!(!text.contains("(2001)"));
    }

    #[test]
    fn test_album_list_empty() {
        let text = format_album_list("Coldplay", None, &[]);
        assert_eq!(text, "No albums found for artist: 'Coldplay'");
    }

    #[test]
    fn test_album_list_all_blank_is_empty() {
        let blanks = vec![Album::default()];
        let text = format_album_list("Coldplay", None, &blanks);
        assert_eq!(text, "No albums found for artist: 'Coldplay'");
    }

    #[test]
    fn test_album_filter_case_insensitive() {
        let text = format_album_list("Coldplay", Some("parachutes"), &albums());
        assert!(text.contains("Found 1 album(s):"));
        assert!(text.contains("1. Parachutes (2000)"));
        assert!(!text.contains("A Rush of Blood"));
    }

    #[test]
    fn test_album_filter_substring_match() {
        let text = format_album_list("Coldplay", Some("rush"), &albums());
        assert!(text.contains("1. A Rush of Blood to the Head (2002)"));
    }

    #[test]
    fn test_album_filter_no_match() {
        let text = format_album_list("Coldplay", Some("nonexistent"), &albums());
        assert_eq!(
            text,
            "No albums found matching 'nonexistent' by artist 'Coldplay'"
        );
    }

    #[test]
    fn test_album_blank_filter_is_ignored() {
        let text = format_album_list("Coldplay", Some("   "), &albums());
        assert!(text.contains("Albums by Coldplay:"));
        assert!(text.contains("Found 2 album(s):"));
    }

    #[test]
    fn test_album_entry_annotations() {
        let album = Album {
            name: Some("Parachutes".to_string()),
            release_year: Some("2000".to_string()),
            genre: Some("Alternative Rock".to_string()),
            label: Some("Parlophone".to_string()),
            description: Some("Debut album.".to_string()),
            thumbnail_url: Some("https://example.com/cover.jpg".to_string()),
            ..Default::default()
        };
        let text = format_album_list("Coldplay", None, &[album]);
        assert!(text.contains("1. Parachutes (2000) - Alternative Rock [Parlophone]\n"));
        assert!(text.contains("   Description: Debut album.\n"));
        assert!(text.contains("   Cover: https://example.com/cover.jpg\n"));
    }

    #[test]
    fn test_album_list_idempotent() {
        let records = albums();
        let a = format_album_list("Coldplay", Some("parachutes"), &records);
        let b = format_album_list("Coldplay", Some("parachutes"), &records);
        assert_eq!(a, b);
    }

    #[test]
    fn test_track_placeholder() {
        let text = format_track_placeholder("Pink Floyd", "Comfortably Numb");
        assert!(text.contains("Track search feature for 'Comfortably Numb' by Pink Floyd"));
        assert!(text.contains("searchtrack.php?s=pink_floyd&t=comfortably_numb"));
    }
}
