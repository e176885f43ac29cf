//! The registration form record and player-section views.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A full team registration as submitted by the form.
///
/// Field names serialize in the camelCase shape the form posts
/// (`teamName`, `player2UID`, ...). All fields are plain strings; validation
/// and type conversion happen in the wizard and the submitter respectively.
/// Missing fields deserialize to the empty string so a partially filled form
/// is always representable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationRecord {
    // Team and team-leader section
    pub team_name: String,
    pub team_logo_link: String,
    pub university_name: String,
    pub team_leader_name: String,
    pub team_leader_phone: String,
    pub team_leader_college_id_link: String,
    #[serde(rename = "teamLeaderUID")]
    pub team_leader_uid: String,
    pub team_leader_in_game_name: String,
    pub team_leader_email: String,
    pub team_leader_aadhar: String,

    // Player 2
    pub player2_name: String,
    #[serde(rename = "player2UID")]
    pub player2_uid: String,
    pub player2_in_game_name: String,
    pub player2_aadhar: String,
    pub player2_college_id_link: String,
    pub player2_phone: String,

    // Player 3
    pub player3_name: String,
    #[serde(rename = "player3UID")]
    pub player3_uid: String,
    pub player3_in_game_name: String,
    pub player3_aadhar: String,
    pub player3_college_id_link: String,
    pub player3_phone: String,

    // Player 4
    pub player4_name: String,
    #[serde(rename = "player4UID")]
    pub player4_uid: String,
    pub player4_in_game_name: String,
    pub player4_aadhar: String,
    pub player4_college_id_link: String,
    pub player4_phone: String,

    // Player 5 (optional squad slot)
    pub player5_name: String,
    #[serde(rename = "player5UID")]
    pub player5_uid: String,
    pub player5_in_game_name: String,
    pub player5_aadhar: String,
    pub player5_college_id_link: String,
    pub player5_phone: String,
}

impl RegistrationRecord {
    /// Borrow the six sub-fields of one player section.
    pub fn player(&self, slot: PlayerSlot) -> PlayerFields<'_> {
        match slot {
            PlayerSlot::Two => PlayerFields {
                slot,
                name: &self.player2_name,
                uid: &self.player2_uid,
                in_game_name: &self.player2_in_game_name,
                aadhar: &self.player2_aadhar,
                college_id_link: &self.player2_college_id_link,
                phone: &self.player2_phone,
            },
            PlayerSlot::Three => PlayerFields {
                slot,
                name: &self.player3_name,
                uid: &self.player3_uid,
                in_game_name: &self.player3_in_game_name,
                aadhar: &self.player3_aadhar,
                college_id_link: &self.player3_college_id_link,
                phone: &self.player3_phone,
            },
            PlayerSlot::Four => PlayerFields {
                slot,
                name: &self.player4_name,
                uid: &self.player4_uid,
                in_game_name: &self.player4_in_game_name,
                aadhar: &self.player4_aadhar,
                college_id_link: &self.player4_college_id_link,
                phone: &self.player4_phone,
            },
            PlayerSlot::Five => PlayerFields {
                slot,
                name: &self.player5_name,
                uid: &self.player5_uid,
                in_game_name: &self.player5_in_game_name,
                aadhar: &self.player5_aadhar,
                college_id_link: &self.player5_college_id_link,
                phone: &self.player5_phone,
            },
        }
    }
}

/// The four non-leader squad slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerSlot {
    Two,
    Three,
    Four,
    Five,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 4] = [
        PlayerSlot::Two,
        PlayerSlot::Three,
        PlayerSlot::Four,
        PlayerSlot::Five,
    ];

    /// Slot number as shown to the user (2..=5).
    pub fn number(&self) -> u8 {
        match self {
            PlayerSlot::Two => 2,
            PlayerSlot::Three => 3,
            PlayerSlot::Four => 4,
            PlayerSlot::Five => 5,
        }
    }

    /// camelCase field prefix used in the posted form ("player2", ...).
    pub fn prefix(&self) -> &'static str {
        match self {
            PlayerSlot::Two => "player2",
            PlayerSlot::Three => "player3",
            PlayerSlot::Four => "player4",
            PlayerSlot::Five => "player5",
        }
    }

    /// Human-readable label ("Player 2", ...).
    pub fn label(&self) -> &'static str {
        match self {
            PlayerSlot::Two => "Player 2",
            PlayerSlot::Three => "Player 3",
            PlayerSlot::Four => "Player 4",
            PlayerSlot::Five => "Player 5",
        }
    }

    /// Player 5 is an optional squad slot; 2-4 are required.
    pub fn is_optional(&self) -> bool {
        matches!(self, PlayerSlot::Five)
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Borrowed view of one player section of the record.
#[derive(Debug, Clone, Copy)]
pub struct PlayerFields<'a> {
    pub slot: PlayerSlot,
    pub name: &'a str,
    pub uid: &'a str,
    pub in_game_name: &'a str,
    pub aadhar: &'a str,
    pub college_id_link: &'a str,
    pub phone: &'a str,
}

impl PlayerFields<'_> {
    /// True when every sub-field is blank, which makes an optional slot
    /// trivially valid.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.uid.trim().is_empty()
            && self.in_game_name.trim().is_empty()
            && self.aadhar.trim().is_empty()
            && self.college_id_link.trim().is_empty()
            && self.phone.trim().is_empty()
    }
}
