use std::sync::LazyLock;

use super::FieldPatterns;
use crate::lead::Field;

// TODO: the widget embeds more visitor data in the body than the three fields below.
// That data is unused for now, so notes stay empty for this channel.
pub static WEBSITE_CHAT: LazyLock<FieldPatterns> = LazyLock::new(|| {
    FieldPatterns::compile(&[
        (Field::Phone, r"מספר טלפון:\s*(\d+)"),
        (Field::Email, r"כתובת מייל:\s*(\w+@\w+.[.\w]+)"),
        (Field::Name, r"משתמש\s([ 'א-תa-zA-Z]+)"),
    ])
});
