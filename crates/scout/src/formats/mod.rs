// ABOUTME: Copy formats rendering a MovieRecord as text ready to paste into WordPress.
// ABOUTME: Handles post content HTML, excerpt, tags, featured image, YouTube embed and labeled lines.

//! Output format module.
//!
//! Each [`CopyFormat`] turns a [`MovieRecord`] into a single string. Formats
//! that have nothing to show for a record render as an empty string.

use std::fmt;
use std::str::FromStr;

use crate::record::MovieRecord;

const UNKNOWN: &str = "Unknown";

/// The text formats a record can be copied as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFormat {
    Title,
    Content,
    Excerpt,
    Tags,
    FeaturedImage,
    YoutubeEmbed,
    CustomMapping,
}

impl CopyFormat {
    pub const ALL: [CopyFormat; 7] = [
        CopyFormat::Title,
        CopyFormat::Content,
        CopyFormat::Excerpt,
        CopyFormat::Tags,
        CopyFormat::FeaturedImage,
        CopyFormat::YoutubeEmbed,
        CopyFormat::CustomMapping,
    ];

    /// Renders the record in this format.
    pub fn render(&self, record: &MovieRecord) -> String {
        match self {
            CopyFormat::Title => record.title.clone(),
            CopyFormat::Content => wordpress_content(record),
            CopyFormat::Excerpt => excerpt(record),
            CopyFormat::Tags => tags(record).join(", "),
            CopyFormat::FeaturedImage => record.poster_url.clone(),
            CopyFormat::YoutubeEmbed => youtube_embed(record),
            CopyFormat::CustomMapping => labeled_lines(record),
        }
    }

    /// Human readable name, used in status messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            CopyFormat::Title => "Movie title",
            CopyFormat::Content => "Full content",
            CopyFormat::Excerpt => "Excerpt",
            CopyFormat::Tags => "Tags",
            CopyFormat::FeaturedImage => "Poster URL",
            CopyFormat::YoutubeEmbed => "YouTube embed",
            CopyFormat::CustomMapping => "Mapped fields",
        }
    }
}

impl fmt::Display for CopyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CopyFormat::Title => "title",
            CopyFormat::Content => "content",
            CopyFormat::Excerpt => "excerpt",
            CopyFormat::Tags => "tags",
            CopyFormat::FeaturedImage => "featured-image",
            CopyFormat::YoutubeEmbed => "youtube-embed",
            CopyFormat::CustomMapping => "custom-mapping",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for CopyFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(CopyFormat::Title),
            "content" => Ok(CopyFormat::Content),
            "excerpt" => Ok(CopyFormat::Excerpt),
            "tags" => Ok(CopyFormat::Tags),
            "featured-image" | "poster" => Ok(CopyFormat::FeaturedImage),
            "youtube-embed" | "embed" => Ok(CopyFormat::YoutubeEmbed),
            "custom-mapping" => Ok(CopyFormat::CustomMapping),
            other => Err(format!("unknown copy format: {}", other)),
        }
    }
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn or_unknown(s: &str) -> &str {
    if s.is_empty() {
        UNKNOWN
    } else {
        s
    }
}

/// WordPress post body: poster, info list, trailer, streaming and external links.
pub fn wordpress_content(record: &MovieRecord) -> String {
    let title = escape_html(&record.title);
    let mut content = String::new();

    if !record.poster_url.is_empty() {
        content.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" style=\"max-width: 300px; height: auto; border-radius: 8px; margin-bottom: 20px;\">\n\n",
            escape_html(&record.poster_url),
            title
        ));
    }

    content.push_str("<h2>Movie Info</h2>\n<ul>\n");
    content.push_str(&format!("<li><strong>Title:</strong> {}</li>\n", title));
    if !record.original_title.is_empty() && record.original_title != record.title {
        content.push_str(&format!(
            "<li><strong>Original title:</strong> {}</li>\n",
            escape_html(&record.original_title)
        ));
    }
    for (label, value) in [
        ("Year", &record.year),
        ("Director", &record.director),
        ("Genres", &record.genres),
        ("Cast", &record.cast),
    ] {
        content.push_str(&format!(
            "<li><strong>{}:</strong> {}</li>\n",
            label,
            escape_html(or_unknown(value))
        ));
    }
    content.push_str("</ul>\n\n");

    let trailer = escape_html(&record.trailer_id);
    if !record.trailer_id.is_empty() {
        content.push_str("<h2>Trailer</h2>\n");
        content.push_str("<div style=\"position: relative; padding-bottom: 56.25%; height: 0; overflow: hidden; max-width: 100%; margin-bottom: 20px;\">\n");
        content.push_str(&format!(
            "<iframe src=\"https://www.youtube.com/embed/{}\" style=\"position: absolute; top: 0; left: 0; width: 100%; height: 100%; border: 0;\" allowfullscreen></iframe>\n",
            trailer
        ));
        content.push_str("</div>\n\n");
    }

    if !record.streaming_providers.is_empty() {
        content.push_str("<h2>Streaming</h2>\n<ul>\n");
        for provider in &record.streaming_providers {
            content.push_str(&format!("<li>{}</li>\n", escape_html(provider)));
        }
        content.push_str("</ul>\n\n");
    }

    let mut links = Vec::new();
    if !record.tmdb_id.is_empty() {
        links.push(format!(
            "<li><a href=\"https://www.themoviedb.org/movie/{}\" target=\"_blank\">View on TMDB</a></li>\n",
            escape_html(&record.tmdb_id)
        ));
    }
    if !record.trailer_id.is_empty() {
        links.push(format!(
            "<li><a href=\"https://www.youtube.com/watch?v={}\" target=\"_blank\">Watch the trailer on YouTube</a></li>\n",
            trailer
        ));
    }
    if !links.is_empty() {
        content.push_str("<h2>External Links</h2>\n<ul>\n");
        for link in links {
            content.push_str(&link);
        }
        content.push_str("</ul>\n");
    }

    content
}

/// One-line summary: `Title (Year) - Director: X - Genres: Y - Cast: Z`.
pub fn excerpt(record: &MovieRecord) -> String {
    let mut excerpt = record.title.clone();
    if !record.year.is_empty() {
        excerpt.push_str(&format!(" ({})", record.year));
    }
    for (label, value) in [
        ("Director", &record.director),
        ("Genres", &record.genres),
        ("Cast", &record.cast),
    ] {
        if !value.is_empty() {
            excerpt.push_str(&format!(" - {}: {}", label, value));
        }
    }
    excerpt
}

/// Tags: each genre, then the year, then the director.
pub fn tags(record: &MovieRecord) -> Vec<String> {
    let mut tags: Vec<String> = record.genre_list().into_iter().map(String::from).collect();
    if !record.year.is_empty() {
        tags.push(record.year.clone());
    }
    if !record.director.is_empty() {
        tags.push(record.director.clone());
    }
    tags
}

/// WordPress embed shortcode for the trailer, or empty.
pub fn youtube_embed(record: &MovieRecord) -> String {
    if record.trailer_id.is_empty() {
        return String::new();
    }
    format!(
        "[embed]https://www.youtube.com/watch?v={}[/embed]",
        record.trailer_id
    )
}

/// `Label: value` lines for every non-empty field.
pub fn labeled_lines(record: &MovieRecord) -> String {
    [
        ("Title", &record.title),
        ("Director", &record.director),
        ("Year", &record.year),
        ("Genres", &record.genres),
        ("Cast", &record.cast),
        ("Poster", &record.poster_url),
        ("Trailer ID", &record.trailer_id),
        ("TMDB ID", &record.tmdb_id),
    ]
    .iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("{}: {}", label, value))
    .collect::<Vec<_>>()
    .join("\n")
}
