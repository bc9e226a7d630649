//! vCard 3.0 serialization.
//!
//! Maps a [`ContactCard`] to the line-oriented vCard 3.0 text format. Lines
//! are CRLF-joined, emitted in a fixed order, and only produced when the
//! source field is non-empty. Text values are escaped per the vCard 3.0
//! text-value rules; URI and phone values are emitted verbatim.

use crate::card::ContactCard;

/// MIME type of the exported file.
pub const MIME_TYPE: &str = "text/vcard";

/// File extension of the exported file.
pub const FILE_EXTENSION: &str = "vcf";

/// Escape a vCard text value.
///
/// Backslash, semicolon, comma, and newlines are reserved in TEXT values.
fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Sanitize a NOTE label for use inside a quoted parameter value.
///
/// Double quotes cannot be represented inside a quoted parameter in
/// vCard 3.0, so they are dropped.
fn sanitize_label(label: &str) -> String {
    label.chars().filter(|c| *c != '"' && *c != '\n' && *c != '\r').collect()
}

/// Serialize a card to vCard 3.0 text.
///
/// The output always contains `BEGIN:VCARD`, `VERSION:3.0`, `FN`, `N`, and
/// `END:VCARD`; every other line appears only when its source field is
/// non-empty.
#[must_use]
pub fn serialize(card: &ContactCard) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("BEGIN:VCARD".to_string());
    lines.push("VERSION:3.0".to_string());
    lines.push(format!(
        "FN:{} {}",
        escape_text(&card.first_name),
        escape_text(&card.last_name)
    ));
    lines.push(format!(
        "N:{};{};;;",
        escape_text(&card.last_name),
        escape_text(&card.first_name)
    ));

    if !card.organization.is_empty() {
        lines.push(format!("ORG:{}", escape_text(&card.organization)));
    }
    if !card.title.is_empty() {
        lines.push(format!("TITLE:{}", escape_text(&card.title)));
    }
    if !card.phone.is_empty() {
        lines.push(format!("TEL;TYPE=WORK,VOICE:{}", card.phone));
    }
    if !card.email.is_empty() {
        lines.push(format!("EMAIL;TYPE=WORK,INTERNET:{}", card.email));
    }
    if !card.website.is_empty() {
        lines.push(format!("URL:{}", card.website));
    }
    if !card.address.street.is_empty() {
        lines.push(format!(
            "ADR;TYPE=WORK:;;{};{};{};{};{}",
            escape_text(&card.address.street),
            escape_text(&card.address.city),
            escape_text(&card.address.state),
            escape_text(&card.address.zip),
            escape_text(&card.address.country)
        ));
    }

    for field in &card.custom_fields {
        lines.push(format!(
            "NOTE;LABEL=\"{}\":{}",
            sanitize_label(&field.label),
            escape_text(&field.value)
        ));
    }

    if !card.social.linkedin.is_empty() {
        lines.push(format!("URL;TYPE=LinkedIn:{}", card.social.linkedin));
    }
    if !card.social.instagram.is_empty() {
        lines.push(format!("URL;TYPE=Instagram:{}", card.social.instagram));
    }
    if !card.social.whatsapp.is_empty() {
        lines.push(format!(
            "URL;TYPE=WhatsApp:https://wa.me/{}",
            card.social.whatsapp
        ));
    }
    for link in &card.additional_social {
        lines.push(format!("URL;TYPE={}:{}", link.platform, link.url));
    }

    lines.push("END:VCARD".to_string());
    lines.join("\r\n")
}

/// The download filename for a card: `<firstName>_<lastName>.vcf`.
///
/// Missing name parts fall back to `contact` so the filename is never
/// empty on either side of the underscore.
#[must_use]
pub fn file_name(card: &ContactCard) -> String {
    let part = |name: &str| {
        if name.trim().is_empty() {
            "contact".to_string()
        } else {
            name.trim().replace(char::is_whitespace, "_")
        }
    };
    format!(
        "{}_{}.{}",
        part(&card.first_name),
        part(&card.last_name),
        FILE_EXTENSION
    )
}
