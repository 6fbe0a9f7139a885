//! Static table of landmark songs per decade

use super::records::IconicSong;
use crate::constants::data::FALLBACK_DECADE;

const fn song(
    name: &'static str,
    artist: &'static str,
    energy: f64,
    valence: f64,
    danceability: f64,
    insight: &'static str,
) -> IconicSong {
    IconicSong {
        name,
        artist,
        energy,
        valence,
        danceability,
        insight: Some(insight),
    }
}

static ICONIC_SONGS: [(u16, [IconicSong; 3]); 10] = [
    (1930, [
        song("Summertime", "George Gershwin", 0.3, 0.7, 0.5, "A jazz standard that defined the era"),
        song("Over the Rainbow", "Judy Garland", 0.4, 0.8, 0.4, "Hopeful anthem of the Great Depression"),
        song("Sing, Sing, Sing", "Benny Goodman", 0.8, 0.7, 0.9, "The swing era's most energetic hit"),
    ]),
    (1940, [
        song("In the Mood", "Glenn Miller", 0.8, 0.8, 0.9, "WWII morale booster"),
        song("White Christmas", "Bing Crosby", 0.3, 0.9, 0.3, "Best-selling single of all time"),
        song("Boogie Woogie Bugle Boy", "Andrews Sisters", 0.9, 0.8, 0.9, "High-energy wartime classic"),
    ]),
    (1950, [
        song("Rock Around the Clock", "Bill Haley", 0.9, 0.8, 0.9, "Birth of rock and roll"),
        song("Hound Dog", "Elvis Presley", 0.9, 0.7, 0.8, "Defined the rock revolution"),
        song("Johnny B. Goode", "Chuck Berry", 0.95, 0.8, 0.85, "Blueprint for rock guitar"),
    ]),
    (1960, [
        song("I Want to Hold Your Hand", "The Beatles", 0.8, 0.9, 0.8, "Sparked Beatlemania"),
        song("Respect", "Aretha Franklin", 0.8, 0.7, 0.75, "Anthem of empowerment"),
        song("Good Vibrations", "The Beach Boys", 0.7, 0.9, 0.7, "Studio innovation peak"),
    ]),
    (1970, [
        song("Bohemian Rhapsody", "Queen", 0.8, 0.6, 0.5, "Rock opera masterpiece"),
        song("Stayin' Alive", "Bee Gees", 0.9, 0.7, 0.95, "Disco at its peak"),
        song("Superstition", "Stevie Wonder", 0.85, 0.8, 0.9, "Funk perfection"),
    ]),
    (1980, [
        song("Billie Jean", "Michael Jackson", 0.8, 0.6, 0.95, "Pop innovation peak"),
        song("Sweet Child O' Mine", "Guns N' Roses", 0.95, 0.7, 0.6, "Hard rock anthem"),
        song("Like a Prayer", "Madonna", 0.85, 0.8, 0.9, "Pop meets gospel"),
    ]),
    (1990, [
        song("Smells Like Teen Spirit", "Nirvana", 0.95, 0.4, 0.6, "Grunge revolution"),
        song("Wonderwall", "Oasis", 0.6, 0.7, 0.5, "Britpop anthem"),
        song("Vogue", "Madonna", 0.85, 0.8, 0.95, "House music mainstream"),
    ]),
    (2000, [
        song("Crazy in Love", "Beyoncé", 0.9, 0.85, 0.9, "R&B reinvented"),
        song("Hey Ya!", "OutKast", 0.95, 0.9, 0.95, "Genre-defying hit"),
        song("Seven Nation Army", "The White Stripes", 0.9, 0.6, 0.7, "Rock minimalism"),
    ]),
    (2010, [
        song("Rolling in the Deep", "Adele", 0.75, 0.4, 0.7, "Soul revival"),
        song("Get Lucky", "Daft Punk", 0.8, 0.9, 0.95, "Disco resurgence"),
        song("Uptown Funk", "Mark Ronson ft. Bruno Mars", 0.95, 0.9, 0.98, "Neo-funk explosion"),
    ]),
    (2020, [
        song("Blinding Lights", "The Weeknd", 0.8, 0.7, 0.85, "Synthwave revival"),
        song("Levitating", "Dua Lipa", 0.85, 0.9, 0.95, "Modern disco-pop"),
        song("As It Was", "Harry Styles", 0.7, 0.6, 0.75, "Introspective pop"),
    ]),
];

fn lookup(decade: u16) -> Option<&'static [IconicSong]> {
    ICONIC_SONGS
        .iter()
        .find(|(key, _)| *key == decade)
        .map(|(_, songs)| songs.as_slice())
}

/// Songs for a decade key; keys missing from the table resolve to the 2020 entry
pub fn songs_for_decade(decade: u16) -> &'static [IconicSong] {
    match lookup(decade) {
        Some(songs) => songs,
        None => {
            tracing::debug!(decade, "no iconic songs for decade, using {}", FALLBACK_DECADE);
            lookup(FALLBACK_DECADE).unwrap_or(&[])
        }
    }
}
