use std::fmt;

/// The tag values resolved for one file
///
/// `None` means the field is not written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,
    pub trackno: Option<String>,
    pub genre: Option<String>,
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Track Number: {}, Artist: {}, Album: {}, Title: {}, Year: {}, Genre: {}",
            display(&self.trackno),
            display(&self.artist),
            display(&self.album),
            display(&self.title),
            display(&self.year),
            display(&self.genre),
        )
    }
}

fn display(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
