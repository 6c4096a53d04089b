//! The fixed catalog of remote-control key codes.
//!
//! These are the literal integer values the television firmware expects in
//! the `HandleKeyInput` envelope. The numbering is not contiguous: the
//! digit/direction block runs 1-15, the OK/menu block starts at 20, and
//! the 3D/extras block starts at 95. The gaps are part of the protocol --
//! do not renumber or compact them.

use std::fmt;

/// A remote-control key code accepted by the television.
///
/// The catalog is closed: the dispatcher only ever sends members of this
/// enum, so an arbitrary integer can never reach the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Command {
    Power = 1,
    Number0 = 2,
    Number1 = 3,
    Number2 = 4,
    Number3 = 5,
    Number4 = 6,
    Number5 = 7,
    Number6 = 8,
    Number7 = 9,
    Number8 = 10,
    Number9 = 11,
    Up = 12,
    Down = 13,
    Left = 14,
    Right = 15,
    Ok = 20,
    HomeMenu = 21,
    Back = 22,
    VolumeUp = 23,
    VolumeDown = 24,
    MuteToggle = 25,
    ChannelUp = 26,
    ChannelDown = 27,
    Blue = 28,
    Green = 29,
    Red = 30,
    Yellow = 31,
    Play = 32,
    Pause = 33,
    Stop = 34,
    FastForward = 35,
    Rewind = 36,
    SkipForward = 37,
    SkipBackward = 38,
    Record = 39,
    RecordingList = 40,
    Repeat = 41,
    LiveTv = 42,
    Epg = 43,
    ProgramInformation = 44,
    AspectRatio = 45,
    ExternalInput = 46,
    PipSecondaryVideo = 47,
    ShowSubtitle = 48,
    ProgramList = 49,
    TeleText = 50,
    Mark = 51,
    Video3d = 95,
    Lr3d = 96,
    Dash = 97,
    PreviousChannel = 98,
    FavoriteChannel = 99,
    QuickMenu = 100,
    TextOption = 101,
    AudioDescription = 102,
    EnergySaving = 103,
    AvMode = 104,
    Simplink = 105,
    Exit = 106,
    ReservationProgramList = 107,
    PipChannelUp = 108,
    PipChannelDown = 109,
    SwitchVideo = 110,
    Apps = 111,
}

impl Command {
    /// Every member of the catalog, in code order.
    ///
    /// Tests enumerate this to verify the full table, and applications can
    /// use it to populate key pickers.
    pub const ALL: [Command; 64] = [
        Command::Power,
        Command::Number0,
        Command::Number1,
        Command::Number2,
        Command::Number3,
        Command::Number4,
        Command::Number5,
        Command::Number6,
        Command::Number7,
        Command::Number8,
        Command::Number9,
        Command::Up,
        Command::Down,
        Command::Left,
        Command::Right,
        Command::Ok,
        Command::HomeMenu,
        Command::Back,
        Command::VolumeUp,
        Command::VolumeDown,
        Command::MuteToggle,
        Command::ChannelUp,
        Command::ChannelDown,
        Command::Blue,
        Command::Green,
        Command::Red,
        Command::Yellow,
        Command::Play,
        Command::Pause,
        Command::Stop,
        Command::FastForward,
        Command::Rewind,
        Command::SkipForward,
        Command::SkipBackward,
        Command::Record,
        Command::RecordingList,
        Command::Repeat,
        Command::LiveTv,
        Command::Epg,
        Command::ProgramInformation,
        Command::AspectRatio,
        Command::ExternalInput,
        Command::PipSecondaryVideo,
        Command::ShowSubtitle,
        Command::ProgramList,
        Command::TeleText,
        Command::Mark,
        Command::Video3d,
        Command::Lr3d,
        Command::Dash,
        Command::PreviousChannel,
        Command::FavoriteChannel,
        Command::QuickMenu,
        Command::TextOption,
        Command::AudioDescription,
        Command::EnergySaving,
        Command::AvMode,
        Command::Simplink,
        Command::Exit,
        Command::ReservationProgramList,
        Command::PipChannelUp,
        Command::PipChannelDown,
        Command::SwitchVideo,
        Command::Apps,
    ];

    /// The wire value sent in the command envelope's `<value>` field.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Look up a catalog member by its wire value.
    ///
    /// Returns `None` for any integer outside the catalog, including the
    /// deliberate gaps (16-19, 52-94).
    pub fn from_code(code: u16) -> Option<Command> {
        Command::ALL.iter().copied().find(|c| c.code() == code)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_64_commands() {
        assert_eq!(Command::ALL.len(), 64);
    }

    #[test]
    fn catalog_codes_are_unique() {
        let codes: HashSet<u16> = Command::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes.len(), Command::ALL.len());
    }

    #[test]
    fn catalog_anchor_values() {
        // Spot-check the anchors of each block.
        assert_eq!(Command::Power.code(), 1);
        assert_eq!(Command::Number0.code(), 2);
        assert_eq!(Command::Number9.code(), 11);
        assert_eq!(Command::Up.code(), 12);
        assert_eq!(Command::Right.code(), 15);
        assert_eq!(Command::Ok.code(), 20);
        assert_eq!(Command::VolumeUp.code(), 23);
        assert_eq!(Command::MuteToggle.code(), 25);
        assert_eq!(Command::Mark.code(), 51);
        assert_eq!(Command::Video3d.code(), 95);
        assert_eq!(Command::Apps.code(), 111);
    }

    #[test]
    fn catalog_gaps_are_preserved() {
        // 16-19 between the direction and OK blocks.
        for code in 16..20 {
            assert_eq!(Command::from_code(code), None, "code {code} must be a gap");
        }
        // 52-94 between the Mark and 3D blocks.
        for code in 52..95 {
            assert_eq!(Command::from_code(code), None, "code {code} must be a gap");
        }
    }

    #[test]
    fn from_code_round_trips_the_whole_catalog() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_code(cmd.code()), Some(cmd));
        }
    }

    #[test]
    fn from_code_rejects_out_of_range() {
        assert_eq!(Command::from_code(0), None);
        assert_eq!(Command::from_code(112), None);
        assert_eq!(Command::from_code(u16::MAX), None);
    }

    #[test]
    fn display_names_are_stable() {
        assert_eq!(Command::Power.to_string(), "Power");
        assert_eq!(Command::ChannelDown.to_string(), "ChannelDown");
    }
}
