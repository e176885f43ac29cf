//! Per-step field validation.
//!
//! Validators never fail through the call stack; they return a map from the
//! camelCase field name to a user-facing message. An empty map means the
//! step may advance.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use regdesk_model::{PlayerSlot, RegistrationRecord};
use url::Url;

/// Field name -> user-facing message, in field-name order.
pub type ErrorMap = BTreeMap<String, String>;

/// Basic `local@domain.tld` shape; anything stricter belongs to the store.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

const URL_MESSAGE: &str = "Please enter a valid URL (e.g., Google Drive link)";
const PHONE_MESSAGE: &str = "Please enter a valid 10-digit phone number";

/// Strip everything that is not an ASCII digit.
pub fn strip_to_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// A phone number is valid when it normalizes to exactly ten digits.
pub fn is_valid_phone(raw: &str) -> bool {
    strip_to_digits(raw).len() == 10
}

pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_SHAPE.is_match(raw)
}

pub fn is_valid_url(raw: &str) -> bool {
    Url::parse(raw).is_ok()
}

/// Validate the team/leader step.
pub fn validate_team(record: &RegistrationRecord) -> ErrorMap {
    let mut errors = ErrorMap::new();

    require(&mut errors, "teamName", &record.team_name, "Team name is required");
    if record.team_logo_link.trim().is_empty() {
        errors.insert("teamLogoLink".to_string(), "Team logo is required".to_string());
    } else if !is_valid_url(&record.team_logo_link) {
        errors.insert("teamLogoLink".to_string(), URL_MESSAGE.to_string());
    }
    require(
        &mut errors,
        "universityName",
        &record.university_name,
        "University name is required",
    );
    require(
        &mut errors,
        "teamLeaderName",
        &record.team_leader_name,
        "Team leader's name is required",
    );
    if record.team_leader_phone.trim().is_empty() {
        errors.insert(
            "teamLeaderPhone".to_string(),
            "Team leader's phone number is required".to_string(),
        );
    } else if !is_valid_phone(&record.team_leader_phone) {
        errors.insert("teamLeaderPhone".to_string(), PHONE_MESSAGE.to_string());
    }
    require(
        &mut errors,
        "teamLeaderCollegeIdLink",
        &record.team_leader_college_id_link,
        "Team leader's college ID is required",
    );
    require(
        &mut errors,
        "teamLeaderUID",
        &record.team_leader_uid,
        "Team leader's UID is required",
    );
    require(
        &mut errors,
        "teamLeaderInGameName",
        &record.team_leader_in_game_name,
        "Team leader's in-game name is required",
    );
    if record.team_leader_email.trim().is_empty() {
        errors.insert(
            "teamLeaderEmail".to_string(),
            "Team leader's email is required".to_string(),
        );
    } else if !is_valid_email(&record.team_leader_email) {
        errors.insert(
            "teamLeaderEmail".to_string(),
            "Please enter a valid email address".to_string(),
        );
    }
    if record.team_leader_aadhar.trim().is_empty() {
        errors.insert(
            "teamLeaderAadhar".to_string(),
            "Team leader's Aadhar card link is required".to_string(),
        );
    } else if !is_valid_url(&record.team_leader_aadhar) {
        errors.insert("teamLeaderAadhar".to_string(), URL_MESSAGE.to_string());
    }

    errors
}

/// Validate one player step.
///
/// Player 5 is wholly optional: when every sub-field is blank the step is
/// trivially valid, but populating any one of them pulls in the full
/// required-field rule set.
pub fn validate_player(record: &RegistrationRecord, slot: PlayerSlot) -> ErrorMap {
    let mut errors = ErrorMap::new();
    let fields = record.player(slot);

    if slot.is_optional() && fields.is_empty() {
        return errors;
    }

    let prefix = slot.prefix();
    let label = slot.label();

    require(
        &mut errors,
        &format!("{prefix}Name"),
        fields.name,
        &format!("{label} name is required"),
    );
    require(
        &mut errors,
        &format!("{prefix}UID"),
        fields.uid,
        &format!("{label} UID is required"),
    );
    require(
        &mut errors,
        &format!("{prefix}InGameName"),
        fields.in_game_name,
        &format!("{label} in-game name is required"),
    );
    if fields.aadhar.trim().is_empty() {
        errors.insert(
            format!("{prefix}Aadhar"),
            format!("{label} Aadhar card link is required"),
        );
    } else if !is_valid_url(fields.aadhar) {
        errors.insert(format!("{prefix}Aadhar"), URL_MESSAGE.to_string());
    }
    require(
        &mut errors,
        &format!("{prefix}CollegeIdLink"),
        fields.college_id_link,
        &format!("{label} college ID is required"),
    );
    if fields.phone.trim().is_empty() {
        errors.insert(
            format!("{prefix}Phone"),
            format!("{label} phone number is required"),
        );
    } else if !is_valid_phone(fields.phone) {
        errors.insert(format!("{prefix}Phone"), PHONE_MESSAGE.to_string());
    }

    errors
}

fn require(errors: &mut ErrorMap, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn valid_team_record() -> RegistrationRecord {
        RegistrationRecord {
            team_name: "Night Owls".to_string(),
            team_logo_link: "https://drive.google.com/logo".to_string(),
            university_name: "IIT Delhi".to_string(),
            team_leader_name: "Asha".to_string(),
            team_leader_phone: "98765 43210".to_string(),
            team_leader_college_id_link: "https://drive.google.com/id".to_string(),
            team_leader_uid: "5111111111".to_string(),
            team_leader_in_game_name: "OWL_ASHA".to_string(),
            team_leader_email: "asha@example.co".to_string(),
            team_leader_aadhar: "https://drive.google.com/aadhar".to_string(),
            ..RegistrationRecord::default()
        }
    }

    #[test]
    fn empty_team_step_flags_every_required_field() {
        let errors = validate_team(&RegistrationRecord::default());
        for field in [
            "teamName",
            "teamLogoLink",
            "universityName",
            "teamLeaderName",
            "teamLeaderPhone",
            "teamLeaderCollegeIdLink",
            "teamLeaderUID",
            "teamLeaderInGameName",
            "teamLeaderEmail",
            "teamLeaderAadhar",
        ] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn complete_team_step_passes() {
        assert!(validate_team(&valid_team_record()).is_empty());
    }

    #[test]
    fn phone_normalizes_before_the_ten_digit_check() {
        assert!(is_valid_phone("98765 43210"));
        assert!(is_valid_phone("9876543210"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("98765432109"));
    }

    #[test]
    fn email_shape_requires_local_domain_and_tld() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("abc"));
    }

    #[test]
    fn url_check_rejects_bare_words() {
        assert!(is_valid_url("https://drive.google.com/x"));
        assert!(!is_valid_url("not-a-url"));
    }

    #[test]
    fn bad_email_gets_a_format_message_not_a_required_message() {
        let record = RegistrationRecord {
            team_leader_email: "a@b".to_string(),
            ..valid_team_record()
        };
        let errors = validate_team(&record);
        assert_eq!(
            errors.get("teamLeaderEmail").map(String::as_str),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn required_player_step_flags_all_empty_fields() {
        let errors = validate_player(&RegistrationRecord::default(), PlayerSlot::Two);
        assert_eq!(errors.len(), 6);
        assert!(errors.contains_key("player2Name"));
        assert!(errors.contains_key("player2UID"));
        assert!(errors.contains_key("player2InGameName"));
        assert!(errors.contains_key("player2Aadhar"));
        assert!(errors.contains_key("player2CollegeIdLink"));
        assert!(errors.contains_key("player2Phone"));
    }

    #[test]
    fn empty_optional_player_is_trivially_valid() {
        let errors = validate_player(&RegistrationRecord::default(), PlayerSlot::Five);
        assert!(errors.is_empty());
    }

    #[test]
    fn one_populated_field_pulls_in_the_full_rule_set_for_player_five() {
        let record = RegistrationRecord {
            player5_name: "Sub Player".to_string(),
            ..RegistrationRecord::default()
        };
        let errors = validate_player(&record, PlayerSlot::Five);
        assert!(!errors.contains_key("player5Name"));
        for field in [
            "player5UID",
            "player5InGameName",
            "player5Aadhar",
            "player5CollegeIdLink",
            "player5Phone",
        ] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn invalid_player_aadhar_url_is_flagged() {
        let record = RegistrationRecord {
            player3_aadhar: "not-a-url".to_string(),
            ..RegistrationRecord::default()
        };
        let errors = validate_player(&record, PlayerSlot::Three);
        assert_eq!(
            errors.get("player3Aadhar").map(String::as_str),
            Some(URL_MESSAGE)
        );
    }

    proptest! {
        #[test]
        fn ten_digits_stay_valid_under_separator_noise(
            digits in proptest::collection::vec(0u8..=9, 10),
            seps in proptest::collection::vec(prop_oneof![Just(" "), Just("-"), Just("")], 10),
        ) {
            let mut raw = String::new();
            for (digit, sep) in digits.iter().zip(&seps) {
                raw.push(char::from(b'0' + digit));
                raw.push_str(sep);
            }
            prop_assert!(is_valid_phone(&raw));
        }

        #[test]
        fn digit_count_other_than_ten_is_invalid(count in 0usize..20) {
            prop_assume!(count != 10);
            let raw = "7".repeat(count);
            prop_assert!(!is_valid_phone(&raw));
        }
    }
}
