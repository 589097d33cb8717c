use std::path::Path;

use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version, value_parser,
};

use crate::config::{Configuration, current_year, resolve_source_directory};
use crate::constants::{
    ALBUM_HELP, ARTIST_HELP, CONTINUE_ON_ERROR_HELP, DEFAULT_DELIMITER, DEFAULT_TRACKNO_FORMAT,
    DELIMITER_HELP, DRY_RUN_HELP, FORMAT_HELP, GENRE_HELP, GUESS_TRACKNO_HELP,
    IGNORE_NO_TITLE_HELP, LOCAL_LOGGING_HELP, LOG_FILE_HELP, PRESERVE_TAGS_HELP, SOURCE_DIR_HELP,
    TRACKNO_FORMAT_HELP, VARIOUS_ARTISTS_HELP, VERBOSE_HELP, YEAR_HELP,
};
use crate::errors::{Result, generic_error, invalid_filename_error};
use crate::logging::LogLevel;
use crate::utils::find_project_folder;
use crate::workflow::ProcessingOptions;

/// Builds the command-line interface
///
/// Defines the positional source directory, the tag overrides, the format
/// options and the logging options.
pub fn build_command() -> Command {
    let arg_source_dir = Arg::new("source_dir")
        .help(SOURCE_DIR_HELP)
        .required(true);

    let arg_artist = Arg::new("artist")
        .long("artist")
        .help(ARTIST_HELP)
        .default_value("");

    let arg_album = Arg::new("album")
        .long("album")
        .help(ALBUM_HELP)
        .default_value("");

    // no default_value: the current year is filled in when building the configuration
    let arg_year = Arg::new("year")
        .long("year")
        .help(YEAR_HELP)
        .value_parser(value_parser!(i32));

    let arg_genre = Arg::new("genre")
        .long("genre")
        .help(GENRE_HELP)
        .default_value("");

    let arg_delimiter = Arg::new("delimiter")
        .short('d')
        .long("delimiter")
        .help(DELIMITER_HELP)
        .allow_hyphen_values(true)
        .default_value(DEFAULT_DELIMITER);

    let arg_various_artists = Arg::new("various_artists")
        .long("various-artists")
        .visible_alias("va")
        .help(VARIOUS_ARTISTS_HELP)
        .action(ArgAction::SetTrue);

    let arg_guess_trackno = Arg::new("guess_trackno")
        .long("guess-trackno")
        .visible_alias("gt")
        .help(GUESS_TRACKNO_HELP)
        .action(ArgAction::SetTrue);

    let arg_trackno_format = Arg::new("trackno_format")
        .long("trackno-format")
        .visible_alias("tf")
        .help(TRACKNO_FORMAT_HELP)
        .default_value(DEFAULT_TRACKNO_FORMAT);

    let arg_ignore_no_title = Arg::new("ignore_no_title")
        .long("ignore-no-title")
        .visible_alias("int")
        .help(IGNORE_NO_TITLE_HELP)
        .action(ArgAction::SetTrue);

    let arg_preserve_tags = Arg::new("preserve_tags")
        .long("preserve-tags")
        .visible_alias("pt")
        .help(PRESERVE_TAGS_HELP)
        .action(ArgAction::SetTrue);

    let arg_format = Arg::new("format")
        .long("format")
        .help(FORMAT_HELP)
        .default_value("");

    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry-run")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    let arg_continue_on_error = Arg::new("continue_on_error")
        .short('k')
        .long("continue-on-error")
        .help(CONTINUE_ON_ERROR_HELP)
        .action(ArgAction::SetTrue);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP);

    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_source_dir)
        .arg(arg_artist)
        .arg(arg_album)
        .arg(arg_year)
        .arg(arg_genre)
        .arg(arg_delimiter)
        .arg(arg_various_artists)
        .arg(arg_guess_trackno)
        .arg(arg_trackno_format)
        .arg(arg_ignore_no_title)
        .arg(arg_preserve_tags)
        .arg(arg_format)
        .arg(arg_dry)
        .arg(arg_continue_on_error)
        .arg(arg_verbose)
        .arg(log_file)
        .arg(log_locally)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

fn get_string<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .unwrap_or_default()
}

/// Builds the run configuration from the command-line arguments
///
/// # Errors
/// Returns an error if the source directory is missing, not a directory or
/// empty, or if any of the format options is invalid.
pub fn build_configuration(matches: &ArgMatches) -> Result<Configuration> {
    let source_dir = matches
        .get_one::<String>("source_dir")
        .ok_or_else(|| generic_error("Source directory argument not found"))?;
    let source_dir = resolve_source_directory(source_dir)?;

    let year = matches
        .get_one::<i32>("year")
        .copied()
        .unwrap_or_else(current_year);

    Configuration::builder(&source_dir)
        .artist(get_string(matches, "artist"))
        .album(get_string(matches, "album"))
        .year(year)
        .genre(get_string(matches, "genre"))
        .delimiter(get_string(matches, "delimiter"))
        .format(get_string(matches, "format"))
        .various_artists(matches.get_flag("various_artists"))
        .guess_trackno(matches.get_flag("guess_trackno"))
        .trackno_format(get_string(matches, "trackno_format"))
        .ignore_no_title(matches.get_flag("ignore_no_title"))
        .preserve_tags(matches.get_flag("preserve_tags"))
        .build()
}

/// Gets the run behaviour options from the command-line arguments
pub fn get_processing_options(matches: &ArgMatches) -> ProcessingOptions {
    ProcessingOptions {
        dry_run: matches.get_flag("dry"),
        continue_on_error: matches.get_flag("continue_on_error"),
    }
}

/// Gets the verbosity level from the command-line arguments
///
/// # Examples
/// ```
/// # use tagmp3::cli::{build_command, get_verbosity};
/// # use tagmp3::logging::LogLevel;
/// let matches = build_command().get_matches_from(["tagmp3", "-v", "music"]);
/// assert_eq!(get_verbosity(&matches), LogLevel::Debug);
/// ```
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file path, if file logging was requested
///
/// Relative names are placed in the per-user configuration directory unless
/// `--log-locally` is given.
pub fn get_log_file(matches: &ArgMatches) -> Result<Option<String>> {
    let Some(filename) = matches.get_one::<String>("log_file") else {
        return Ok(None);
    };

    if matches.get_flag("log_locally") || Path::new(filename).is_absolute() {
        return Ok(Some(filename.clone()));
    }

    let folder = find_project_folder()?;
    let path = folder.config_dir().join(filename);
    let path_str = path
        .to_str()
        .ok_or_else(|| invalid_filename_error(path.clone()))?;
    Ok(Some(path_str.to_string()))
}
