use std::sync::LazyLock;

use regex::Regex;

/// Upstream systems with a known body layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    TelecallInterested,
    TelecallNewCustomer,
    TelecallGeneral,
    TelecallSupport,
    WebsiteChat,
    TripPage,
    ContactForm,
}

/// Known noise that produces no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suppression {
    GroupedDigest,
    SaleConfirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Extract(Channel),
    Suppress(Suppression),
    PassThrough,
}

impl Route {
    pub fn label(&self) -> &'static str {
        match self {
            Route::Extract(Channel::TelecallInterested) => "telecall_interested",
            Route::Extract(Channel::TelecallNewCustomer) => "telecall_new_customer",
            Route::Extract(Channel::TelecallGeneral) => "telecall_general",
            Route::Extract(Channel::TelecallSupport) => "telecall_support",
            Route::Suppress(Suppression::GroupedDigest) => "telecall_grouped_digest",
            Route::Extract(Channel::WebsiteChat) => "website_chat",
            Route::Extract(Channel::TripPage) => "trip_page",
            Route::Extract(Channel::ContactForm) => "contact_form",
            Route::Suppress(Suppression::SaleConfirmation) => "sale_confirmation",
            Route::PassThrough => "pass_through",
        }
    }
}

// Evaluated top to bottom, first match wins. Markers without `^` may sit mid-title.
const TITLE_RULES: [(&str, Route); 9] = [
    (
        r"^טלקול,הודעות עבור תיירות-",
        Route::Extract(Channel::TelecallInterested),
    ),
    (
        r"^טלקול,לקוחות חדשים-",
        Route::Extract(Channel::TelecallNewCustomer),
    ),
    (
        r"^טלקול,הודעות כלליות-",
        Route::Extract(Channel::TelecallGeneral),
    ),
    (
        r"^טלקול,שירות לקוחות-",
        Route::Extract(Channel::TelecallSupport),
    ),
    (
        r"טלקול, ריכוז הודעות",
        Route::Suppress(Suppression::GroupedDigest),
    ),
    (r"^ליד חדש מהאתר", Route::Extract(Channel::WebsiteChat)),
    (r"^דף טיול", Route::Extract(Channel::TripPage)),
    (r"טופס יצירת קשר", Route::Extract(Channel::ContactForm)),
    (
        r"(מכירה|רכישה)\s\d+\s(בוצעה|בוצע)\sבהצלחה",
        Route::Suppress(Suppression::SaleConfirmation),
    ),
];

static RULES: LazyLock<Vec<(Regex, Route)>> = LazyLock::new(|| {
    TITLE_RULES
        .iter()
        .map(|(pattern, route)| (Regex::new(pattern).unwrap(), *route))
        .collect()
});

/// Pick the route for a message title. Unmatched titles pass through.
pub fn classify(title: &str) -> Route {
    RULES
        .iter()
        .find(|(re, _)| re.is_match(title))
        .map(|(_, route)| *route)
        .unwrap_or(Route::PassThrough)
}

/// Every route in table order, pass-through last.
pub fn all_routes() -> impl Iterator<Item = Route> {
    TITLE_RULES
        .iter()
        .map(|(_, route)| *route)
        .chain(std::iter::once(Route::PassThrough))
}
