use lectern::domain::{ArtifactKind, MediaKind, Upload, UploadId};

#[test]
fn given_supported_audio_extensions_when_classifying_then_kind_is_audio() {
    for ext in ["mp3", "wav", "MP3", "Wav"] {
        assert_eq!(
            MediaKind::from_extension(ext),
            Some(MediaKind::Audio),
            "extension {ext}"
        );
    }
}

#[test]
fn given_supported_video_extensions_when_classifying_then_kind_is_video() {
    for ext in ["mp4", "mkv", "mov", "MOV"] {
        assert_eq!(
            MediaKind::from_extension(ext),
            Some(MediaKind::Video),
            "extension {ext}"
        );
    }
}

#[test]
fn given_unknown_extension_when_classifying_then_rejected() {
    for ext in ["pdf", "txt", "flac", "webm", ""] {
        assert_eq!(MediaKind::from_extension(ext), None, "extension {ext}");
    }
}

#[test]
fn given_filename_when_classifying_then_last_extension_wins() {
    assert_eq!(
        MediaKind::from_filename("lecture.backup.mp4"),
        Some(MediaKind::Video)
    );
    assert_eq!(MediaKind::from_filename("no_extension"), None);
    assert_eq!(MediaKind::from_filename("archive.tar.gz"), None);
}

#[test]
fn given_valid_filename_when_building_upload_then_extension_is_normalized() {
    let upload = Upload::new("Lecture.MP4".to_string(), vec![1, 2, 3]).unwrap();

    assert_eq!(upload.kind, MediaKind::Video);
    assert_eq!(upload.extension, "mp4");
    assert_eq!(upload.filename, "Lecture.MP4");
    assert_eq!(upload.data, vec![1, 2, 3]);
}

#[test]
fn given_unsupported_filename_when_building_upload_then_none() {
    assert!(Upload::new("notes.txt".to_string(), vec![0]).is_none());
    assert!(Upload::new("noext".to_string(), vec![0]).is_none());
}

#[test]
fn given_two_uploads_when_creating_then_ids_are_unique() {
    let a = UploadId::new();
    let b = UploadId::new();

    assert_ne!(a, b);
}

#[test]
fn given_artifact_kinds_when_naming_then_filenames_match() {
    assert_eq!(ArtifactKind::Notes.filename(), "notes.txt");
    assert_eq!(ArtifactKind::Quiz.filename(), "quiz.txt");
    assert_eq!(ArtifactKind::from_name("notes"), Some(ArtifactKind::Notes));
    assert_eq!(ArtifactKind::from_name("quiz"), Some(ArtifactKind::Quiz));
    assert_eq!(ArtifactKind::from_name("flashcards"), None);
}
