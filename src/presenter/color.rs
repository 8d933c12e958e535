/// Color of tracks whose genre is empty.
pub const FALLBACK_COLOR: &str = "#FFD700";

pub const PALETTE: [&str; 40] = [
    "#FF6F61", "#FFB347", "#FFD700", "#7CFC00", "#40E0D0", "#00BFFF", "#1E90FF", "#00FA9A",
    "#FF69B4", "#FF85CB", "#FF5E3A", "#FF2D55", "#FFD31D", "#A3CB38", "#17EAD9", "#38A1DB",
    "#32FF7E", "#18DCFF", "#7D5FFF", "#B967FF", "#F97F51", "#F8EFBA", "#F6E58D", "#F9CA24",
    "#F3A683", "#F19066", "#F5CD79", "#5468FF", "#3AE374", "#67E6DC", "#FFC312", "#C4E538",
    "#12CBC4", "#FDA7DF", "#ED4C67", "#5758BB", "#9980FA", "#D980FA", "#B53471", "#833471",
];

/// Maps a genre to a palette color.
///
/// The index is the sum of the genre's UTF-16 code units modulo the palette
/// size, so a genre keeps its color regardless of the order genres are
/// discovered in, and browsers hashing the same string agree with the server.
pub fn genre_color(genre: &str) -> &'static str {
    if genre.is_empty() {
        return FALLBACK_COLOR;
    }

    let hash: u64 = genre.encode_utf16().map(u64::from).sum();
    PALETTE[(hash % PALETTE.len() as u64) as usize]
}
