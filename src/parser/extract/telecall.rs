use std::sync::LazyLock;

use super::FieldPatterns;
use crate::lead::Field;

const CALLBACK_PHONE: &str = r"טלפון לחזרה\s*(\d+)";
const FULL_NAME: &str = r"שם מלא:\s*([ 'א-ת]+)";
const CALLER_NAME: &str = r"שם הפונה\s:\s*([ 'א-ת]+)";
const DESTINATION: &str = r"יעד נסיעה:\s*([ 'א-ת]+)";
const PEOPLE_COUNT: &str = r"מספר נפשות:\s*([ \dא-ת]+)";
const TRIP_CATEGORY: &str = r"סוג טיול:\s*([ א-ת]+)";
const MESSAGE: &str = r"ההודעה:\s*([^\n\r]+)";

pub static NEW_CUSTOMER: LazyLock<FieldPatterns> = LazyLock::new(|| {
    FieldPatterns::compile(&[
        (Field::Phone, CALLBACK_PHONE),
        (Field::Name, FULL_NAME),
        (Field::Destination, DESTINATION),
        (Field::PeopleCount, PEOPLE_COUNT),
        (Field::TripCategory, TRIP_CATEGORY),
        (Field::Notes, MESSAGE),
    ])
});

/// Interest notices label the caller differently from the other telecall forms.
pub static INTERESTED: LazyLock<FieldPatterns> = LazyLock::new(|| {
    FieldPatterns::compile(&[
        (Field::Phone, CALLBACK_PHONE),
        (Field::Name, CALLER_NAME),
        (Field::Notes, MESSAGE),
    ])
});

pub static GENERAL: LazyLock<FieldPatterns> = LazyLock::new(|| {
    FieldPatterns::compile(&[
        (Field::Phone, CALLBACK_PHONE),
        (Field::Name, FULL_NAME),
        (Field::Notes, MESSAGE),
    ])
});

pub static SUPPORT: LazyLock<FieldPatterns> = LazyLock::new(|| {
    FieldPatterns::compile(&[
        (Field::Phone, CALLBACK_PHONE),
        (Field::Name, FULL_NAME),
        (Field::Destination, DESTINATION),
        (Field::Notes, MESSAGE),
    ])
});
