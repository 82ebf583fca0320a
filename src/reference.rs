//! Static reference data for the scoring checks.
//!
//! Closed, hand-maintained lists. Adding coverage is a data change here;
//! the detectors build their hash lookups from these tables at
//! construction and never consult the network.

/// Known disposable-mail-provider domains.
pub const DISPOSABLE_DOMAINS: &[&str] = &[
    "10minutemail.com",
    "burnermail.io",
    "discard.email",
    "dispostable.com",
    "emailondeck.com",
    "fakeinbox.com",
    "getnada.com",
    "grr.la",
    "guerrillamail.com",
    "guerrillamailblock.com",
    "mailcatch.com",
    "maildrop.cc",
    "mailinator.com",
    "mailnesia.com",
    "mintemail.com",
    "mohmal.com",
    "mytemp.email",
    "pokemail.net",
    "sharklasers.com",
    "spam4.me",
    "spamgourmet.com",
    "temp-mail.org",
    "tempinbox.com",
    "tempmail.com",
    "tempr.email",
    "throwaway.email",
    "throwawaymail.com",
    "trashmail.com",
    "trashmail.de",
    "yopmail.com",
];

/// Local-part words that indicate a shared or automated mailbox rather
/// than a named individual.
pub const ROLE_WORDS: &[&str] = &[
    "abuse",
    "admin",
    "administrator",
    "billing",
    "contact",
    "enquiries",
    "feedback",
    "finance",
    "hello",
    "help",
    "hr",
    "info",
    "jobs",
    "legal",
    "mail",
    "marketing",
    "newsletter",
    "no-reply",
    "noreply",
    "notifications",
    "office",
    "postmaster",
    "press",
    "privacy",
    "sales",
    "security",
    "service",
    "support",
    "team",
    "webmaster",
];

/// Canonical domain paired with its known misspellings. Only these
/// pre-enumerated variants are caught; there is no edit-distance logic.
pub const TYPO_VARIANTS: &[(&str, &[&str])] = &[
    (
        "gmail.com",
        &[
            "gamil.com",
            "gmai.com",
            "gmaill.com",
            "gmail.cm",
            "gmail.co",
            "gmal.com",
            "gmali.com",
            "gmial.com",
            "gnail.com",
        ],
    ),
    (
        "yahoo.com",
        &[
            "yaho.com",
            "yahho.com",
            "yahoo.cm",
            "yahoo.co",
            "yahooo.com",
            "yhoo.com",
        ],
    ),
    (
        "hotmail.com",
        &[
            "hotamil.com",
            "hotmai.com",
            "hotmaill.com",
            "hotmail.co",
            "hotmal.com",
            "hotmial.com",
            "hotmil.com",
        ],
    ),
    (
        "outlook.com",
        &[
            "outlok.com",
            "outloook.com",
            "outlook.cm",
            "outlook.co",
            "oulook.com",
            "outook.com",
        ],
    ),
    ("aol.com", &["aol.cm", "aol.co", "aoll.com", "alo.com"]),
];
