//! Player input parsing.
//!
//! Every message is one of three things: a start command, an album link, or
//! an answer. Anything that is neither of the first two is an answer, even
//! if it is not a number.

use crate::session::AlbumRef;

const START_WORDS: &[&str] = &["начать", "старт", "start"];

/// A parsed player message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Reset progress and start over on the default catalog.
    Start,
    /// Replace the catalog with an external album.
    SwitchAlbum(AlbumRef),
    /// A guess: 1-based catalog index, `None` if the text had no number.
    Answer(Option<usize>),
}

impl Command {
    /// Parse raw message text.
    ///
    /// ```
    /// use riddle_cards::service::Command;
    /// use riddle_cards::session::AlbumRef;
    ///
    /// assert_eq!(Command::parse(" Старт "), Command::Start);
    /// assert_eq!(
    ///     Command::parse("https://vk.com/album-12_34"),
    ///     Command::SwitchAlbum(AlbumRef::new(-12, 34)),
    /// );
    /// assert_eq!(Command::parse("7"), Command::Answer(Some(7)));
    /// assert_eq!(Command::parse("seven"), Command::Answer(None));
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let lowered = text.to_lowercase();

        if START_WORDS.contains(&lowered.as_str()) {
            return Command::Start;
        }
        if let Some(album) = parse_album(&lowered) {
            return Command::SwitchAlbum(album);
        }
        Command::Answer(parse_index(text))
    }
}

/// Recognize `album<owner>_<id>`, bare or as the last path segment of a link.
fn parse_album(text: &str) -> Option<AlbumRef> {
    let start = text.rfind("album")?;
    let prefix = &text[..start];
    if !(prefix.is_empty() || prefix.ends_with('/')) {
        return None;
    }

    let (owner, rest) = text[start + "album".len()..].split_once('_')?;
    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let (album, tail) = rest.split_at(digits_end);
    if !(tail.is_empty() || tail.starts_with(|c: char| matches!(c, '?' | '#' | '/'))) {
        return None;
    }

    Some(AlbumRef::new(owner.parse().ok()?, album.parse().ok()?))
}

/// Leading-integer parse: `"12"`, `"12abc"` and `"+12"` give 12.
///
/// Negative or missing numbers give `None`.
fn parse_index(text: &str) -> Option<usize> {
    let unsigned = text.strip_prefix('+').unwrap_or(text);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_words() {
        for text in ["начать", "Старт", "  СТАРТ\n", "start"] {
            assert_eq!(Command::parse(text), Command::Start, "{text:?}");
        }
        assert_eq!(Command::parse("старт игры"), Command::Answer(None));
    }

    #[test]
    fn test_album_forms() {
        let album = Command::SwitchAlbum(AlbumRef::new(-123, 456));
        assert_eq!(Command::parse("album-123_456"), album);
        assert_eq!(Command::parse("https://vk.com/album-123_456"), album);
        assert_eq!(Command::parse("vk.com/album-123_456?rev=1"), album);
        assert_eq!(
            Command::parse("album77_1"),
            Command::SwitchAlbum(AlbumRef::new(77, 1))
        );
    }

    #[test]
    fn test_not_albums() {
        assert_eq!(Command::parse("photoalbum-1_2"), Command::Answer(None));
        assert_eq!(Command::parse("album-1"), Command::Answer(None));
        assert_eq!(Command::parse("album-1_x"), Command::Answer(None));
        assert_eq!(Command::parse("album-1_"), Command::Answer(None));
    }

    #[test]
    fn test_answers() {
        assert_eq!(Command::parse("3"), Command::Answer(Some(3)));
        assert_eq!(Command::parse(" 12 "), Command::Answer(Some(12)));
        assert_eq!(Command::parse("12abc"), Command::Answer(Some(12)));
        assert_eq!(Command::parse("+4"), Command::Answer(Some(4)));
        assert_eq!(Command::parse("0"), Command::Answer(Some(0)));
        assert_eq!(Command::parse("-4"), Command::Answer(None));
        assert_eq!(Command::parse(""), Command::Answer(None));
        assert_eq!(Command::parse("кот"), Command::Answer(None));
    }
}
