//! The field plan: which record values go out, under which remote aliases.
//!
//! Each entry pairs a record value with the ordered alias list the resolver
//! tries against the fetched schema. Alias order matters: canonical names
//! first, spelling variants and shortened forms after. The team name is not
//! planned here; it always goes into the schema's title field.

use regdesk_model::{PlayerSlot, RegistrationRecord};

use crate::encode::ValueClass;

/// One planned outgoing field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Record field name used in drop diagnostics (`player2Aadhar`, ...).
    pub label: String,
    /// Remote name candidates, most canonical first.
    pub aliases: Vec<String>,
    pub value: String,
    pub class: ValueClass,
    /// File name used when the value lands on a files-kind field.
    pub attachment_label: Option<String>,
}

impl FieldSpec {
    fn new(label: &str, aliases: &[String], value: &str, class: ValueClass) -> Self {
        Self {
            label: label.to_string(),
            aliases: aliases.to_vec(),
            value: value.to_string(),
            class,
            attachment_label: None,
        }
    }

    fn with_attachment_label(mut self, label: String) -> Self {
        self.attachment_label = Some(label);
        self
    }
}

fn s(value: &str) -> String {
    value.to_string()
}

/// Plan every non-title field of a record.
///
/// Blank values are planned too; the submitter skips them when encoding so
/// that the skip is logged next to the resolution outcome.
#[must_use]
pub fn field_plan(record: &RegistrationRecord) -> Vec<FieldSpec> {
    let mut plan = vec![
        FieldSpec::new(
            "universityName",
            &[s("University Name")],
            &record.university_name,
            ValueClass::Text,
        ),
        FieldSpec::new(
            "teamLogoLink",
            &[s("Team Logo")],
            &record.team_logo_link,
            ValueClass::Link,
        )
        .with_attachment_label(s("Team Logo")),
        FieldSpec::new(
            "teamLeaderName",
            &[s("Team Leader's Name")],
            &record.team_leader_name,
            ValueClass::Text,
        ),
        FieldSpec::new(
            "teamLeaderPhone",
            &[s("Team Leaders' Phone No."), s("Team Leader's Phone")],
            &record.team_leader_phone,
            ValueClass::Phone,
        ),
        FieldSpec::new(
            "teamLeaderEmail",
            &[s("Team Leader's email")],
            &record.team_leader_email,
            ValueClass::Email,
        ),
        FieldSpec::new(
            "teamLeaderCollegeIdLink",
            &[
                s("Team Leader's College ID"),
                s("Team Leader College ID"),
                s("College ID"),
                s("Team Leader ID"),
            ],
            &record.team_leader_college_id_link,
            ValueClass::Link,
        )
        .with_attachment_label(s("Team Leader College ID")),
        FieldSpec::new(
            "teamLeaderUID",
            &[s("Team Leader's UID")],
            &record.team_leader_uid,
            ValueClass::Numeric,
        ),
        FieldSpec::new(
            "teamLeaderInGameName",
            &[s("Team Leader's In-Game Name")],
            &record.team_leader_in_game_name,
            ValueClass::Text,
        ),
        FieldSpec::new(
            "teamLeaderAadhar",
            &[
                s("Aadhar number"),
                s("Aadhaar number"),
                s("Aadhar"),
                s("Aadhaar"),
                s("Team Leader Aadhar"),
                s("Team Leader Aadhaar"),
                s("Aadhar Card"),
            ],
            &record.team_leader_aadhar,
            ValueClass::Link,
        )
        .with_attachment_label(s("Team Leader Aadhar Card")),
    ];

    for slot in PlayerSlot::ALL {
        plan.extend(player_specs(record, slot));
    }
    plan
}

fn player_specs(record: &RegistrationRecord, slot: PlayerSlot) -> Vec<FieldSpec> {
    let fields = record.player(slot);
    let n = slot.number();
    let prefix = slot.prefix();
    let label = slot.label();

    vec![
        FieldSpec::new(
            &format!("{prefix}Name"),
            &[format!("{label} Name")],
            fields.name,
            ValueClass::Text,
        ),
        FieldSpec::new(
            &format!("{prefix}UID"),
            &[format!("{label} UID")],
            fields.uid,
            ValueClass::Numeric,
        ),
        FieldSpec::new(
            &format!("{prefix}InGameName"),
            &[format!("{label} In-Game Name")],
            fields.in_game_name,
            ValueClass::Text,
        ),
        FieldSpec::new(
            &format!("{prefix}Aadhar"),
            &[
                format!("Aadhar number (Player {n})"),
                format!("Aadhaar number (Player {n})"),
                format!("{label} Aadhar"),
                format!("{label} Aadhaar"),
            ],
            fields.aadhar,
            ValueClass::Link,
        )
        .with_attachment_label(format!("{label} Aadhar Card")),
        FieldSpec::new(
            &format!("{prefix}CollegeIdLink"),
            &[
                format!("College ID (Player {n})"),
                format!("{label} College ID"),
                format!("{label} ID"),
            ],
            fields.college_id_link,
            ValueClass::Link,
        )
        .with_attachment_label(format!("{label} College ID")),
        FieldSpec::new(
            &format!("{prefix}Phone"),
            &[format!("{label} Phone Number"), format!("{label} Phone")],
            fields.phone,
            ValueClass::Phone,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_covers_every_non_title_field() {
        let plan = field_plan(&RegistrationRecord::default());
        // 9 team/leader entries plus 6 per player slot.
        assert_eq!(plan.len(), 9 + 4 * 6);
        assert!(plan.iter().all(|spec| !spec.aliases.is_empty()));
        assert!(!plan.iter().any(|spec| spec.label == "teamName"));
    }

    #[test]
    fn plan_carries_the_record_values() {
        let record = RegistrationRecord {
            university_name: "IIT Delhi".to_string(),
            player4_phone: "9876543244".to_string(),
            ..RegistrationRecord::default()
        };
        let plan = field_plan(&record);
        let uni = plan
            .iter()
            .find(|spec| spec.label == "universityName")
            .expect("university entry");
        assert_eq!(uni.value, "IIT Delhi");
        assert_eq!(uni.class, ValueClass::Text);

        let phone = plan
            .iter()
            .find(|spec| spec.label == "player4Phone")
            .expect("player 4 phone entry");
        assert_eq!(phone.value, "9876543244");
        assert_eq!(phone.aliases[0], "Player 4 Phone Number");
    }

    #[test]
    fn attachment_labels_are_set_for_document_links() {
        let plan = field_plan(&RegistrationRecord::default());
        let aadhar = plan
            .iter()
            .find(|spec| spec.label == "player3Aadhar")
            .expect("player 3 aadhar entry");
        assert_eq!(aadhar.attachment_label.as_deref(), Some("Player 3 Aadhar Card"));
        assert_eq!(aadhar.aliases[0], "Aadhar number (Player 3)");
    }
}
