use std::path::{Path, PathBuf};

use tagmp3::config::{Configuration, FieldToken, FormatTemplate};
use tagmp3::discovery::FilenameEntry;
use tagmp3::extraction::{Extraction, TagSet, extract_tags};
use tagmp3::format::{Classification, classify_first_segment, guess_template};

const TITLES: [&str; 4] = ["Intro", "Down the Hole", "Tea Party", "Outro"];

#[test]
fn test_constant_first_segment_selects_artist() {
    for artist in ["Alice", "The Band", "42"] {
        for count in 1..=TITLES.len() {
            let stems: Vec<String> = TITLES[..count]
                .iter()
                .map(|title| format!("{artist} - {title}"))
                .collect();

            assert_eq!(
                classify_first_segment(&stems, "-", false),
                Classification::Artist,
                "Stems: {stems:?}"
            );
        }
    }
}

#[test]
fn test_varying_integer_first_segment_selects_trackno() {
    for padding in [1usize, 2, 3] {
        let stems: Vec<String> = TITLES
            .iter()
            .enumerate()
            .map(|(index, title)| format!("{:0padding$} - {title}", index + 1))
            .collect();

        assert_eq!(
            classify_first_segment(&stems, "-", false),
            Classification::Trackno,
            "Stems: {stems:?}"
        );
    }
}

#[test]
fn test_varying_text_first_segment_selects_nothing() {
    let artists = ["Alice", "Bob", "Carol", "Dave"];
    let stems: Vec<String> = artists
        .iter()
        .zip(TITLES)
        .map(|(artist, title)| format!("{artist} - {title}"))
        .collect();

    assert_eq!(
        classify_first_segment(&stems, "-", false),
        Classification::Unknown
    );
    for stem in &stems {
        assert!(guess_template(stem, "-", Classification::Unknown).is_none());
    }
}

#[test]
fn test_formatted_filenames_round_trip() {
    let config = Configuration::builder(Path::new("music")).build().unwrap();
    let formats = [
        ("<artist> - <title>", " - "),
        ("<trackno>_<album>_<title>", "_"),
        ("<year> ~ <artist> ~ <album> ~ <trackno> ~ <title>", " ~ "),
    ];

    for (format, joiner) in formats {
        let delimiter = joiner.trim();
        let template = FormatTemplate::parse(format, delimiter).unwrap();
        let expected = TagSet {
            title: Some("Down the Hole".to_string()),
            artist: template
                .contains(FieldToken::Artist)
                .then(|| "Alice".to_string()),
            album: template
                .contains(FieldToken::Album)
                .then(|| "Wonderland".to_string()),
            year: Some(if template.contains(FieldToken::Year) {
                "1865".to_string()
            } else {
                config.overrides().year.to_string()
            }),
            trackno: template
                .contains(FieldToken::Trackno)
                .then(|| "04".to_string()),
            genre: None,
        };

        let stem = format
            .split(delimiter)
            .map(|segment| match FieldToken::from_token(segment.trim()) {
                Some(FieldToken::Title) => "Down the Hole",
                Some(FieldToken::Artist) => "Alice",
                Some(FieldToken::Album) => "Wonderland",
                Some(FieldToken::Year) => "1865",
                Some(FieldToken::Trackno) => "04",
                None => "",
            })
            .collect::<Vec<_>>()
            .join(joiner);
        let entry = FilenameEntry::new(PathBuf::from(format!("{stem}.mp3")), 1).unwrap();

        match extract_tags(&entry, Some(&template), &config) {
            Extraction::Tags(tags) => assert_eq!(tags, expected, "Format: {format}"),
            Extraction::Skip(reason) => panic!("Format {format} skipped: {reason}"),
        }
    }
}

#[test]
fn test_guessed_trackno_follows_position() {
    let config = Configuration::builder(Path::new("music"))
        .guess_trackno(true)
        .trackno_format("%02d")
        .build()
        .unwrap();
    let template = FormatTemplate::from_tokens(&[FieldToken::Title], "-");

    for (index, title) in TITLES.iter().enumerate() {
        let entry = FilenameEntry::new(PathBuf::from(format!("{title}.mp3")), index + 1).unwrap();

        match extract_tags(&entry, Some(&template), &config) {
            Extraction::Tags(tags) => {
                assert_eq!(tags.trackno, Some(format!("0{}", index + 1)));
                assert_eq!(tags.title.as_deref(), Some(*title));
            }
            Extraction::Skip(reason) => panic!("{title} skipped: {reason}"),
        }
    }
}
