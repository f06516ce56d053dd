use statline::core::snapshot::{
    AudioSnapshot, BatterySnapshot, ClockSnapshot, MediaSnapshot, PlayerState, Snapshots,
};
use statline::ui::{format_time, render, render_snapshots, TOKENS};

fn clock(hour: u32, minute: u32, second: u32) -> ClockSnapshot {
    ClockSnapshot {
        hour,
        minute,
        second,
    }
}

#[test]
fn test_template_without_tokens_is_identity() {
    let templates = [
        "",
        "plain text",
        "100% @ home",
        "@p:@ @@ @t:x@ p:t@",
        "unicode \u{266b} \u{1f50b}",
    ];

    for template in templates {
        assert_eq!(render_snapshots(template, &Snapshots::default()), template);
    }
}

#[test]
fn test_position_formatted() {
    let player = PlayerState {
        position_secs: 125.0,
        ..Default::default()
    };

    let output = render(
        "@p:pF@",
        &MediaSnapshot::default(),
        &player,
        &BatterySnapshot::default(),
        &AudioSnapshot::default(),
        &ClockSnapshot::default(),
    );
    assert_eq!(output, "2:05");
}

#[test]
fn test_fractional_floats_render_shortest() {
    let snapshots = Snapshots {
        player: PlayerState {
            position_secs: 61.123,
            volume: 0.1,
            ..Default::default()
        },
        ..Default::default()
    };

    assert_eq!(render_snapshots("@p:p@ @p:v@", &snapshots), "61.123 0.1");
    assert_eq!(render_snapshots("@p:pF@", &snapshots), "1:01");
}

#[test]
fn test_clock_tokens() {
    let snapshots = Snapshots {
        clock: clock(0, 0, 7),
        ..Default::default()
    };
    assert_eq!(render_snapshots("@t:h@:@t:m@:@t:s@", &snapshots), "0:00:07");

    let snapshots = Snapshots {
        clock: clock(23, 59, 10),
        ..Default::default()
    };
    assert_eq!(render_snapshots("@t:h@:@t:m@:@t:s@", &snapshots), "23:59:10");
}

#[test]
fn test_failed_media_keeps_clock() {
    let snapshots = Snapshots {
        clock: clock(14, 30, 0),
        ..Default::default()
    };

    assert_eq!(render_snapshots("[@p:t@] @t:h@", &snapshots), "[] 14");
}

#[test]
fn test_unknown_token_left_verbatim() {
    let snapshots = Snapshots {
        battery: BatterySnapshot {
            capacity_percent: 50,
        },
        ..Default::default()
    };

    assert_eq!(
        render_snapshots("CPU: @x:y@ done", &snapshots),
        "CPU: @x:y@ done"
    );
    assert_eq!(
        render_snapshots("@b:c @b:c@ @B:c@", &snapshots),
        "@b:c 50 @B:c@"
    );
}

#[test]
fn test_values_containing_tokens_are_not_expanded() {
    let snapshots = Snapshots {
        media: MediaSnapshot {
            title: "@b:c@".to_string(),
            artist: "@p:t@".to_string(),
            ..Default::default()
        },
        battery: BatterySnapshot {
            capacity_percent: 12,
        },
        audio: AudioSnapshot {
            muted: false,
            volume_percent: "@pa:m@".to_string(),
        },
        ..Default::default()
    };

    assert_eq!(
        render_snapshots("@p:a@|@p:t@|@b:c@|@pa:v@", &snapshots),
        "@p:t@|@b:c@|12|@pa:m@"
    );
}

#[test]
fn test_similar_tokens_are_distinct() {
    let snapshots = Snapshots {
        media: MediaSnapshot {
            title: "T".to_string(),
            artist: "a".to_string(),
            album_artist: "A".to_string(),
            album: "al".to_string(),
            art_url: "au".to_string(),
            length_micros: 90_000_000,
        },
        player: PlayerState {
            playing: true,
            shuffle: false,
            loop_mode: "Playlist".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };

    assert_eq!(
        render_snapshots("@p:a@ @p:A@ @p:al@ @p:au@", &snapshots),
        "a A al au"
    );
    assert_eq!(render_snapshots("@p:l@ @p:lF@", &snapshots), "90000000 1:30");
    assert_eq!(
        render_snapshots("@p:s@ @p:S@ @p:L@", &snapshots),
        "true false Playlist"
    );
}

#[test]
fn test_token_table_is_closed_and_unique() {
    assert_eq!(TOKENS.len(), 19);

    for (i, spec) in TOKENS.iter().enumerate() {
        assert!(spec.literal.starts_with('@') && spec.literal.ends_with('@'));
        assert_eq!(spec.literal.matches('@').count(), 2, "{}", spec.literal);
        assert!(!spec.description.is_empty());
        assert!(TOKENS[i + 1..].iter().all(|other| other.literal != spec.literal));
    }
}

#[test]
fn test_format_time_boundaries() {
    assert_eq!(format_time(59, true), "0:59");
    assert_eq!(format_time(60, true), "1:00");
    assert_eq!(format_time(5, false), "05");
    assert_eq!(format_time(65, false), "05");
    assert_eq!(format_time(600, true), "10:00");
}
