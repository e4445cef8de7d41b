use std::{fmt, ops::BitOr, str::FromStr};

use super::{Album, Artist, Page, PlaylistSummary, Track};
use crate::error::Error;

/// Set of categories a search covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SearchType(u8);

impl SearchType {
    pub const TRACK: SearchType = SearchType(0b0001);
    pub const ALBUM: SearchType = SearchType(0b0010);
    pub const ARTIST: SearchType = SearchType(0b0100);
    pub const PLAYLIST: SearchType = SearchType(0b1000);
    pub const ALL: SearchType = SearchType(0b1111);

    const NAMES: [(SearchType, &'static str); 4] = [
        (SearchType::ALBUM, "album"),
        (SearchType::ARTIST, "artist"),
        (SearchType::PLAYLIST, "playlist"),
        (SearchType::TRACK, "track"),
    ];

    pub const fn empty() -> Self {
        SearchType(0)
    }

    pub const fn contains(&self, other: SearchType) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Comma separated value of the `type` query parameter.
    pub fn as_param(&self) -> String {
        Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl BitOr for SearchType {
    type Output = SearchType;

    fn bitor(self, rhs: SearchType) -> SearchType {
        SearchType(self.0 | rhs.0)
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

impl FromStr for SearchType {
    type Err = Error;

    /// Parses `"track,album"`; `"all"` selects every category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut types = SearchType::empty();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let part = part.to_lowercase();
            if part == "all" {
                return Ok(SearchType::ALL);
            }
            match Self::NAMES.iter().find(|(_, name)| *name == part) {
                Some((flag, _)) => types = types | *flag,
                None => {
                    return Err(Error::InvalidArgument(format!(
                        "unknown search type '{part}'"
                    )));
                }
            }
        }

        if types.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one search type is required".to_string(),
            ));
        }
        Ok(types)
    }
}

/// One optional page per category; categories that were not requested are
/// `None`.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub tracks: Option<Page<Track>>,
    pub albums: Option<Page<Album>>,
    pub artists: Option<Page<Artist>>,
    pub playlists: Option<Page<PlaylistSummary>>,
}
