//! The immutable run configuration

use std::path::{Path, PathBuf};

use chrono::Datelike;

use crate::config::template::{FormatTemplate, validate_delimiter};
use crate::config::trackno::TracknoFormat;
use crate::constants::{DEFAULT_DELIMITER, DEFAULT_TRACKNO_FORMAT};
use crate::errors::Result;

/// Values applied to every file when the filename does not provide them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: i32,
    pub genre: Option<String>,
}

impl Default for Overrides {
    fn default() -> Self {
        Overrides {
            artist: None,
            album: None,
            year: current_year(),
            genre: None,
        }
    }
}

/// Every recognised option of a run
///
/// Built once from the command line and passed by reference to each stage.
#[derive(Debug, Clone)]
pub struct Configuration {
    source_dir: PathBuf,
    delimiter: String,
    format: Option<FormatTemplate>,
    overrides: Overrides,
    various_artists: bool,
    guess_trackno: bool,
    ignore_no_title: bool,
    preserve_tags: bool,
    trackno_format: TracknoFormat,
}

impl Configuration {
    /// Creates a new ConfigurationBuilder for the given source directory
    pub fn builder(source_dir: &Path) -> ConfigurationBuilder {
        ConfigurationBuilder::new(source_dir)
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// The explicit format override, if one was given
    pub fn format(&self) -> Option<&FormatTemplate> {
        self.format.as_ref()
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    pub fn various_artists(&self) -> bool {
        self.various_artists
    }

    pub fn guess_trackno(&self) -> bool {
        self.guess_trackno
    }

    pub fn ignore_no_title(&self) -> bool {
        self.ignore_no_title
    }

    pub fn preserve_tags(&self) -> bool {
        self.preserve_tags
    }

    pub fn trackno_format(&self) -> &TracknoFormat {
        &self.trackno_format
    }
}

/// Builder for creating Configuration instances
///
/// Holds the raw option values; [`ConfigurationBuilder::build`] validates
/// them and produces the immutable [`Configuration`].
#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    source_dir: PathBuf,
    delimiter: String,
    format: Option<String>,
    overrides: Overrides,
    various_artists: bool,
    guess_trackno: bool,
    ignore_no_title: bool,
    preserve_tags: bool,
    trackno_format: String,
}

impl ConfigurationBuilder {
    pub fn new(source_dir: &Path) -> ConfigurationBuilder {
        ConfigurationBuilder {
            source_dir: source_dir.to_path_buf(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            format: None,
            overrides: Overrides::default(),
            various_artists: false,
            guess_trackno: false,
            ignore_no_title: false,
            preserve_tags: false,
            trackno_format: DEFAULT_TRACKNO_FORMAT.to_string(),
        }
    }

    pub fn delimiter(mut self, delimiter: &str) -> ConfigurationBuilder {
        self.delimiter = delimiter.to_string();
        self
    }

    /// Sets the format override. An empty string means no override.
    pub fn format(mut self, format: &str) -> ConfigurationBuilder {
        self.format = non_empty(format);
        self
    }

    pub fn artist(mut self, artist: &str) -> ConfigurationBuilder {
        self.overrides.artist = non_empty(artist);
        self
    }

    pub fn album(mut self, album: &str) -> ConfigurationBuilder {
        self.overrides.album = non_empty(album);
        self
    }

    pub fn year(mut self, year: i32) -> ConfigurationBuilder {
        self.overrides.year = year;
        self
    }

    pub fn genre(mut self, genre: &str) -> ConfigurationBuilder {
        self.overrides.genre = non_empty(genre);
        self
    }

    pub fn various_artists(mut self, enabled: bool) -> ConfigurationBuilder {
        self.various_artists = enabled;
        self
    }

    pub fn guess_trackno(mut self, enabled: bool) -> ConfigurationBuilder {
        self.guess_trackno = enabled;
        self
    }

    pub fn ignore_no_title(mut self, enabled: bool) -> ConfigurationBuilder {
        self.ignore_no_title = enabled;
        self
    }

    pub fn preserve_tags(mut self, enabled: bool) -> ConfigurationBuilder {
        self.preserve_tags = enabled;
        self
    }

    pub fn trackno_format(mut self, format: &str) -> ConfigurationBuilder {
        self.trackno_format = format.to_string();
        self
    }

    /// Validates the options and builds the Configuration
    ///
    /// # Errors
    /// Returns an error if the delimiter is unusable, the format override
    /// holds unrecognised tokens, or the track number format is invalid.
    pub fn build(self) -> Result<Configuration> {
        validate_delimiter(&self.delimiter)?;

        let format = match &self.format {
            Some(format) => Some(FormatTemplate::parse(format, &self.delimiter)?),
            None => None,
        };
        let trackno_format = TracknoFormat::parse(&self.trackno_format)?;

        Ok(Configuration {
            source_dir: self.source_dir,
            delimiter: self.delimiter,
            format,
            overrides: self.overrides,
            various_artists: self.various_artists,
            guess_trackno: self.guess_trackno,
            ignore_no_title: self.ignore_no_title,
            preserve_tags: self.preserve_tags,
            trackno_format,
        })
    }
}

/// The current year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
