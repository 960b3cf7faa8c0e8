use std::sync::LazyLock;

use super::FieldPatterns;
use crate::lead::Field;

/// Trip landing pages and the generic contact form share one layout.
pub static FORM: LazyLock<FieldPatterns> = LazyLock::new(|| {
    FieldPatterns::compile(&[
        (Field::Phone, r"טלפון:\s*(\d+)"),
        (Field::Name, r"שם(?: מלא)?:\s*([ 'א-ת]+)"),
        (
            Field::Email,
            r"דואר (?:האלקטרוני|אלקטרוני):\s*(\w+@\w+.[.\w]+)",
        ),
        (Field::Notes, r"(?:הודעה|נושא):\s*([^\n\r]+)"),
    ])
});
