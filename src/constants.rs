/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// Used to locate the per-user configuration directory that relative log
/// file names are resolved against.
pub const APPLICATION: &str = "tagmp3";

/// Extension (lower-case, without the dot) of the files we tag
pub const MP3_EXTENSION: &str = "mp3";

/// Default delimiter between filename segments
pub const DEFAULT_DELIMITER: &str = "-";

/// Default printf-style format for guessed track numbers
pub const DEFAULT_TRACKNO_FORMAT: &str = "%d";

pub const TITLE_TOKEN: &str = "<title>";
pub const ARTIST_TOKEN: &str = "<artist>";
pub const ALBUM_TOKEN: &str = "<album>";
pub const YEAR_TOKEN: &str = "<year>";
pub const TRACKNO_TOKEN: &str = "<trackno>";

/// Help text for the source directory argument
pub const SOURCE_DIR_HELP: &str = "Source directory containing files";

/// Help text for the artist override
pub const ARTIST_HELP: &str = "Artist name override";

/// Help text for the album override
pub const ALBUM_HELP: &str = "Album name override";

/// Help text for the year override
pub const YEAR_HELP: &str = "Year override (defaults to the current year)";

/// Help text for the genre override
pub const GENRE_HELP: &str = "Genre written to every file";

/// Help text for the delimiter option
pub const DELIMITER_HELP: &str = "Delimiter between format tokens. \
    It must not occur in any of the token names. \
    Whitespace around segments is ignored, so the delimiter does not need to include it";

/// Help text for the various artists flag
pub const VARIOUS_ARTISTS_HELP: &str = "When guessing the format, do not switch to <trackno> \
    if the first segment differs between files";

/// Help text for the guess track number flag
pub const GUESS_TRACKNO_HELP: &str =
    "If <trackno> is not in the format, number the files alphabetically";

/// Help text for the track number format option
pub const TRACKNO_FORMAT_HELP: &str = "printf-style format for guessed track numbers (e.g. %02d). \
    Ignored unless --guess-trackno is enabled";

/// Help text for the ignore no title flag
pub const IGNORE_NO_TITLE_HELP: &str = "Tag files even if no title is in the format or filename. \
    By default such files are skipped";

/// Help text for the preserve tags flag
pub const PRESERVE_TAGS_HELP: &str = "Keep existing tags. Without this, all existing tags are \
    wiped first. Values parsed from the filename still overwrite existing ones";

/// Help text for the format override
pub const FORMAT_HELP: &str = "Filename format override, e.g. \"<trackno> - <artist> - <title>\". \
    Tokens are <title>, <artist>, <album>, <year>, <trackno>. \
    Without it, \"<artist> - <title>\" is tried, then \"<trackno> - <title>\" \
    (integer track numbers only), then \"<title>\" for names without a delimiter";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without writing any tags";

/// Help text for the continue-on-error option
pub const CONTINUE_ON_ERROR_HELP: &str =
    "Skip files whose tags cannot be written instead of aborting";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file option
pub const LOG_FILE_HELP: &str = "Also write the log to this file";

/// Help text for the local logging option
pub const LOCAL_LOGGING_HELP: &str =
    "Write the log file relative to the current directory instead of the config directory";
