use html_escape::encode_text;

use crate::presenter::{color::genre_color, summary::Summary};

pub const CARD_WIDTH: u32 = 600;

const PADDING: u32 = 32;
const LINE_HEIGHT: u32 = 28;
const SECTION_GAP: u32 = 20;
const BACKGROUND: &str = "#121212";
const ACCENT: &str = "#1DB954";
const TEXT_COLOR: &str = "#FFFFFF";

/// Renders the summary as a fixed-width SVG card ready to be downloaded.
pub fn render_svg(summary: &Summary) -> String {
    let mut body = String::new();
    let mut y = PADDING + 24;

    heading(&mut body, y, "Your Spotify Soundscape", 26);
    y += LINE_HEIGHT + SECTION_GAP;

    heading(&mut body, y, "Top genres", 18);
    y += LINE_HEIGHT;
    for (i, genre) in summary.top_genres.iter().enumerate() {
        body.push_str(&format!(
            r#"<circle cx="{cx}" cy="{cy}" r="7" fill="{color}"/>"#,
            cx = PADDING + 7,
            cy = y - 6,
            color = genre_color(&genre.genre),
        ));
        line(
            &mut body,
            PADDING + 24,
            y,
            &format!("{}. {} ({} tracks)", i + 1, genre.genre, genre.count),
        );
        y += LINE_HEIGHT;
    }
    y += SECTION_GAP;

    heading(&mut body, y, "Top songs", 18);
    y += LINE_HEIGHT;
    for (i, song) in summary.top_songs.iter().enumerate() {
        line(
            &mut body,
            PADDING,
            y,
            &format!("{}. {} - {}", i + 1, song.name, song.artist_name),
        );
        y += LINE_HEIGHT;
    }
    y += SECTION_GAP;

    if let Some(artist) = &summary.top_artist {
        line(&mut body, PADDING, y, &format!("Top artist: {}", artist.artist_name));
        y += LINE_HEIGHT;
    }
    if let Some(song) = &summary.most_popular {
        line(
            &mut body,
            PADDING,
            y,
            &format!("Most popular: {} ({})", song.name, song.popularity),
        );
        y += LINE_HEIGHT;
    }
    if let Some(song) = &summary.least_popular {
        line(
            &mut body,
            PADDING,
            y,
            &format!("Least popular: {} ({})", song.name, song.popularity),
        );
        y += LINE_HEIGHT;
    }
    line(
        &mut body,
        PADDING,
        y,
        &format!("Obscurity rating: {}%", summary.obscurity_rating),
    );
    y += PADDING;

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="100%" height="100%" rx="18" fill="{bg}"/>{body}</svg>"#,
        w = CARD_WIDTH,
        h = y,
        bg = BACKGROUND,
        body = body,
    )
}

fn heading(out: &mut String, y: u32, text: &str, size: u32) {
    out.push_str(&format!(
        r#"<text x="{x}" y="{y}" font-family="sans-serif" font-size="{size}" font-weight="700" fill="{fill}">{text}</text>"#,
        x = PADDING,
        fill = ACCENT,
        text = encode_text(text),
    ));
}

fn line(out: &mut String, x: u32, y: u32, text: &str) {
    out.push_str(&format!(
        r#"<text x="{x}" y="{y}" font-family="sans-serif" font-size="16" fill="{fill}">{text}</text>"#,
        fill = TEXT_COLOR,
        text = encode_text(text),
    ));
}
