pub mod chat;
pub mod telecall;
pub mod web_form;

use regex::Regex;

use super::channels::Channel;
use crate::lead::{Field, LeadRecord};

/// A channel's compiled field captures. Each pattern is searched independently
/// and its first group fills the field; misses leave the field empty.
pub struct FieldPatterns {
    patterns: Vec<(Field, Regex)>,
}

impl FieldPatterns {
    pub fn compile(spec: &[(Field, &str)]) -> Self {
        let patterns = spec
            .iter()
            .map(|(field, pattern)| (*field, Regex::new(pattern).unwrap()))
            .collect();
        FieldPatterns { patterns }
    }

    pub fn apply(&self, body: &str) -> LeadRecord {
        let mut lead = LeadRecord::default();
        for (field, re) in &self.patterns {
            if let Some(value) = re.captures(body).and_then(|caps| caps.get(1)) {
                lead.set(*field, value.as_str());
            }
        }
        lead
    }
}

pub fn patterns_for(channel: Channel) -> &'static FieldPatterns {
    match channel {
        Channel::TelecallInterested => &telecall::INTERESTED,
        Channel::TelecallNewCustomer => &telecall::NEW_CUSTOMER,
        Channel::TelecallGeneral => &telecall::GENERAL,
        Channel::TelecallSupport => &telecall::SUPPORT,
        Channel::WebsiteChat => &chat::WEBSITE_CHAT,
        Channel::TripPage | Channel::ContactForm => &web_form::FORM,
    }
}

pub fn extract(channel: Channel, body: &str) -> LeadRecord {
    patterns_for(channel).apply(body)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::channels::{all_routes, Route};

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.txt", name)).unwrap()
    }

    #[test]
    fn telecall_new_customer_full() {
        let lead = extract(Channel::TelecallNewCustomer, &fixture("telecall_new_customer"));
        assert_eq!(lead.phone, "0501234567");
        assert_eq!(lead.name, "דוד לוי");
        assert_eq!(lead.destination, "יוון");
        assert_eq!(lead.people_count, "4");
        assert_eq!(lead.trip_category, "כשר");
        assert_eq!(lead.notes, "מעוניין בהצעת מחיר");
        assert_eq!(lead.email, "");
    }

    #[test]
    fn telecall_interested_full() {
        let lead = extract(Channel::TelecallInterested, &fixture("telecall_interested"));
        assert_eq!(lead.phone, "0549876543");
        assert_eq!(lead.name, "רותי כהן");
        assert_eq!(lead.notes, "מבקשת לחזור אליה לגבי טיול לאיטליה");
        assert!(lead.destination.is_empty());
    }

    #[test]
    fn telecall_support_full() {
        let lead = extract(Channel::TelecallSupport, &fixture("telecall_support"));
        assert_eq!(lead.phone, "036543210");
        assert_eq!(lead.name, "משה אברהם");
        assert_eq!(lead.destination, "תאילנד");
        assert_eq!(lead.notes, "לא קיבלתי את כרטיסי הטיסה");
        assert!(lead.people_count.is_empty());
    }

    #[test]
    fn telecall_general_ignores_destination() {
        let body = "טלפון לחזרה 0771234567\nשם מלא: נועה\nיעד נסיעה: רומא\nההודעה: נא לחזור";
        let lead = extract(Channel::TelecallGeneral, body);
        assert_eq!(lead.phone, "0771234567");
        assert_eq!(lead.name, "נועה");
        assert_eq!(lead.notes, "נא לחזור");
        assert!(lead.destination.is_empty());
    }

    #[test]
    fn website_chat_has_no_notes() {
        let lead = extract(Channel::WebsiteChat, &fixture("website_chat"));
        assert_eq!(lead.phone, "0527654321");
        assert_eq!(lead.email, "israel@gmail.com");
        assert_eq!(lead.name, "ישראל ישראלי");
        assert!(lead.notes.is_empty());
    }

    #[test]
    fn trip_page_full() {
        let lead = extract(Channel::TripPage, &fixture("trip_page"));
        assert_eq!(lead.phone, "0509998877");
        assert_eq!(lead.name, "אבי גולן");
        assert_eq!(lead.email, "avi@gmail.com");
        assert_eq!(lead.notes, "טיול משפחתי באוגוסט");
    }

    #[test]
    fn contact_form_full() {
        let lead = extract(Channel::ContactForm, &fixture("contact_form"));
        assert_eq!(lead.phone, "0581112233");
        assert_eq!(lead.name, "יעל מזרחי");
        assert_eq!(lead.email, "yael@walla.co.il");
        assert_eq!(lead.notes, "אשמח לקבל פרטים על טיולים מאורגנים");
    }

    #[test]
    fn missing_fields_stay_empty() {
        for route in all_routes() {
            if let Route::Extract(channel) = route {
                let lead = extract(channel, "שורה ללא שום שדה מוכר");
                assert!(lead.is_empty(), "{channel:?}");
            }
        }
        let lead = extract(Channel::TelecallNewCustomer, "טלפון לחזרה 0501234567");
        assert_eq!(lead.phone, "0501234567");
        assert!(lead.name.is_empty());
        assert!(lead.notes.is_empty());
    }

    #[test]
    fn whitespace_between_label_and_value() {
        let lead = extract(Channel::TelecallGeneral, "טלפון לחזרה\n   0509999999");
        assert_eq!(lead.phone, "0509999999");
        let lead = extract(Channel::TelecallGeneral, "טלפון לחזרה0509999999");
        assert_eq!(lead.phone, "0509999999");
    }

    #[test]
    fn people_count_keeps_words() {
        let lead = extract(Channel::TelecallNewCustomer, "מספר נפשות: 2 מבוגרים\n");
        assert_eq!(lead.people_count, "2 מבוגרים");
    }

    #[test]
    fn name_with_geresh() {
        let lead = extract(Channel::TelecallGeneral, "שם מלא: ג'ני\n");
        assert_eq!(lead.name, "ג'ני");
    }

    #[test]
    fn form_name_label_with_and_without_qualifier() {
        let lead = extract(Channel::ContactForm, "שם: רון\n");
        assert_eq!(lead.name, "רון");
        let lead = extract(Channel::ContactForm, "שם מלא: רון שחר\n");
        assert_eq!(lead.name, "רון שחר");
    }

    #[test]
    fn form_email_label_variants() {
        let lead = extract(Channel::TripPage, "דואר האלקטרוני: a@b.com");
        assert_eq!(lead.email, "a@b.com");
        let lead = extract(Channel::TripPage, "דואר אלקטרוני: a@b.com");
        assert_eq!(lead.email, "a@b.com");
    }

    #[test]
    fn email_dot_matches_any_character() {
        let lead = extract(Channel::WebsiteChat, "כתובת מייל: dana@gmailcom\n");
        assert_eq!(lead.email, "dana@gmailcom");
    }

    #[test]
    fn dotted_local_part_is_not_captured() {
        // The label must be followed directly by `\w+@`.
        let lead = extract(Channel::WebsiteChat, "כתובת מייל: israel.i@gmail.com");
        assert_eq!(lead.email, "");
    }

    #[test]
    fn form_notes_from_subject_label() {
        let lead = extract(Channel::ContactForm, "נושא: בירור מחיר\r\nטלפון: 050");
        assert_eq!(lead.notes, "בירור מחיר");
        assert_eq!(lead.phone, "050");
    }
}
