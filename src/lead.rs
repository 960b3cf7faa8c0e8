use serde::Serialize;

/// One input row: the notification title and its body text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLead {
    pub title: String,
    pub body: String,
}

impl RawLead {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        RawLead {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Fields a channel pattern can fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Phone,
    Email,
    Name,
    Destination,
    PeopleCount,
    TripCategory,
    Notes,
}

/// Normalized contact record. Every field is empty until a pattern fills it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeadRecord {
    pub phone: String,
    pub email: String,
    pub name: String,
    pub destination: String,
    pub people_count: String,
    pub trip_category: String,
    pub notes: String,
}

impl LeadRecord {
    /// Spreadsheet headers, same order as [`LeadRecord::to_row`].
    pub const HEADERS: [&'static str; 7] = [
        "מספר טלפון",
        "מייל",
        "שם הפונה",
        "יעד נסיעה",
        "מספר נפשות",
        "סוג טיול",
        "הערות",
    ];

    pub const COLUMN_WIDTHS: [u16; 7] = [20, 20, 20, 15, 10, 10, 50];

    /// Record for a message no channel recognized: title and body kept verbatim in notes.
    pub fn pass_through(raw: &RawLead) -> Self {
        LeadRecord {
            notes: format!("{}\n------\n{}", raw.title, raw.body),
            ..Default::default()
        }
    }

    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Name => &mut self.name,
            Field::Destination => &mut self.destination,
            Field::PeopleCount => &mut self.people_count,
            Field::TripCategory => &mut self.trip_category,
            Field::Notes => &mut self.notes,
        };
        *slot = value.to_string();
    }

    pub fn to_row(&self) -> [&str; 7] {
        [
            &self.phone,
            &self.email,
            &self.name,
            &self.destination,
            &self.people_count,
            &self.trip_category,
            &self.notes,
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.to_row().iter().all(|v| v.is_empty())
    }
}
