//! Status-line template rendering.
//!
//! Templates are plain text with `@source:field@` placeholders. Only the
//! tokens in [`TOKENS`] are recognised; anything else, including other
//! `@...@` sequences, is copied through untouched.

use std::borrow::Cow;

use crate::core::snapshot::{
    AudioSnapshot, BatterySnapshot, ClockSnapshot, MediaSnapshot, PlayerState, Snapshots,
};
use crate::ui::formatters::format_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Title,
    Artist,
    AlbumArtist,
    Album,
    ArtUrl,
    Length,
    LengthFormatted,
    Playing,
    Position,
    PositionFormatted,
    Volume,
    LoopMode,
    Shuffle,
    BatteryCapacity,
    Hour,
    Minute,
    Second,
    AudioMuted,
    AudioVolume,
}

#[derive(Debug, Clone, Copy)]
pub struct TokenSpec {
    pub literal: &'static str,
    pub token: Token,
    pub description: &'static str,
}

const fn spec(literal: &'static str, token: Token, description: &'static str) -> TokenSpec {
    TokenSpec {
        literal,
        token,
        description,
    }
}

/// Every placeholder the renderer understands.
///
/// Each literal starts and ends with `@` and has no `@` inside, so no literal
/// is a prefix of another and at most one can match at any position.
pub const TOKENS: &[TokenSpec] = &[
    spec("@p:t@", Token::Title, "track title"),
    spec("@p:a@", Token::Artist, "track artist"),
    spec("@p:A@", Token::AlbumArtist, "album artist"),
    spec("@p:al@", Token::Album, "album"),
    spec("@p:au@", Token::ArtUrl, "cover art URL"),
    spec("@p:l@", Token::Length, "track length in microseconds"),
    spec("@p:lF@", Token::LengthFormatted, "track length as M:SS"),
    spec("@p:s@", Token::Playing, "true while playing"),
    spec("@p:p@", Token::Position, "position in seconds"),
    spec("@p:pF@", Token::PositionFormatted, "position as M:SS"),
    spec("@p:v@", Token::Volume, "player volume, 0.0 to 1.0"),
    spec("@p:L@", Token::LoopMode, "loop mode (None, Track, Playlist)"),
    spec("@p:S@", Token::Shuffle, "true when shuffle is on"),
    spec("@b:c@", Token::BatteryCapacity, "battery capacity percent"),
    spec("@t:h@", Token::Hour, "hour, 0-23"),
    spec("@t:m@", Token::Minute, "minute, two digits"),
    spec("@t:s@", Token::Second, "second, two digits"),
    spec("@pa:m@", Token::AudioMuted, "true when the default sink is muted"),
    spec("@pa:v@", Token::AudioVolume, "default sink volume, e.g. 45%"),
];

struct RenderContext<'a> {
    media: &'a MediaSnapshot,
    player: &'a PlayerState,
    battery: &'a BatterySnapshot,
    audio: &'a AudioSnapshot,
    now: &'a ClockSnapshot,
}

impl Token {
    fn value<'a>(self, ctx: &RenderContext<'a>) -> Cow<'a, str> {
        match self {
            Token::Title => ctx.media.title.as_str().into(),
            Token::Artist => ctx.media.artist.as_str().into(),
            Token::AlbumArtist => ctx.media.album_artist.as_str().into(),
            Token::Album => ctx.media.album.as_str().into(),
            Token::ArtUrl => ctx.media.art_url.as_str().into(),
            Token::Length => ctx.media.length_micros.to_string().into(),
            Token::LengthFormatted => {
                format_time(ctx.media.length_micros / 1_000_000, true).into()
            }
            Token::Playing => bool_str(ctx.player.playing),
            // f64 Display is the shortest representation that round-trips.
            Token::Position => ctx.player.position_secs.to_string().into(),
            // `as` saturates: negative and NaN positions become 0.
            Token::PositionFormatted => format_time(ctx.player.position_secs as u64, true).into(),
            Token::Volume => ctx.player.volume.to_string().into(),
            Token::LoopMode => ctx.player.loop_mode.as_str().into(),
            Token::Shuffle => bool_str(ctx.player.shuffle),
            Token::BatteryCapacity => ctx.battery.capacity_percent.to_string().into(),
            Token::Hour => ctx.now.hour.to_string().into(),
            Token::Minute => format_time(u64::from(ctx.now.minute), false).into(),
            Token::Second => format_time(u64::from(ctx.now.second), false).into(),
            Token::AudioMuted => bool_str(ctx.audio.muted),
            Token::AudioVolume => ctx.audio.volume_percent.as_str().into(),
        }
    }
}

fn bool_str(value: bool) -> Cow<'static, str> {
    Cow::Borrowed(if value { "true" } else { "false" })
}

/// Substitute every recognised token in `template`.
///
/// Matching is a single left-to-right pass over the original template, so
/// substituted values are never scanned again: a track titled `@p:a@` renders
/// literally instead of turning into the artist.
pub fn render(
    template: &str,
    media: &MediaSnapshot,
    player: &PlayerState,
    battery: &BatterySnapshot,
    audio: &AudioSnapshot,
    now: &ClockSnapshot,
) -> String {
    let ctx = RenderContext {
        media,
        player,
        battery,
        audio,
        now,
    };

    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(at) = rest.find('@') {
        output.push_str(&rest[..at]);
        let candidate = &rest[at..];

        match TOKENS.iter().find(|spec| candidate.starts_with(spec.literal)) {
            Some(spec) => {
                output.push_str(&spec.token.value(&ctx));
                rest = &candidate[spec.literal.len()..];
            }
            None => {
                output.push('@');
                rest = &candidate[1..];
            }
        }
    }

    output.push_str(rest);
    output
}

/// [`render`] over one tick's bundle.
pub fn render_snapshots(template: &str, snapshots: &Snapshots) -> String {
    render(
        template,
        &snapshots.media,
        &snapshots.player,
        &snapshots.battery,
        &snapshots.audio,
        &snapshots.clock,
    )
}
