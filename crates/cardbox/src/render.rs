//! Preview rendering.
//!
//! Pure projections of a [`ContactCard`] into a terminal-friendly text block
//! and a minimal standalone HTML document. Empty fields are omitted; the
//! photo falls back to the contact's initials when unset.

use crate::card::ContactCard;

/// Render the card as a plain-text preview.
#[must_use]
pub fn text(card: &ContactCard) -> String {
    let mut out = String::new();

    let name = card.full_name();
    if name.is_empty() {
        out.push_str("(unnamed card)\n");
    } else {
        out.push_str(&name);
        out.push('\n');
    }
    if !card.title.is_empty() {
        out.push_str(&format!("{}\n", card.title));
    }
    if !card.organization.is_empty() {
        out.push_str(&format!("{}\n", card.organization));
    }

    let mut rows: Vec<String> = Vec::new();
    if !card.phone.is_empty() {
        rows.push(format!("Phone:    {}", card.phone));
    }
    if !card.email.is_empty() {
        rows.push(format!("Email:    {}", card.email));
    }
    if !card.website.is_empty() {
        rows.push(format!("Website:  {}", card.website));
    }
    if !card.address.is_empty() {
        rows.push(format!("Address:  {}", address_line(card)));
    }
    if !rows.is_empty() {
        out.push('\n');
        for row in rows {
            out.push_str(&row);
            out.push('\n');
        }
    }

    if !card.custom_fields.is_empty() {
        out.push_str("\nAdditional Information\n");
        for field in &card.custom_fields {
            out.push_str(&format!("  {}: {}\n", field.label, field.value));
        }
    }

    let socials = social_rows(card);
    if !socials.is_empty() {
        out.push_str("\nSocial Media\n");
        for (platform, url) in socials {
            out.push_str(&format!("  {platform}: {url}\n"));
        }
    }

    if !card.images.is_empty() {
        out.push_str(&format!("\nGallery: {} image(s)\n", card.images.len()));
    }

    out
}

/// Render the card as a minimal standalone HTML document.
///
/// Theme and brand color come from the card's display preferences. All
/// user-provided values are HTML-escaped.
#[must_use]
pub fn html(card: &ContactCard) -> String {
    let mut body = String::new();

    if card.photo.is_empty() {
        body.push_str(&format!(
            "<div class=\"avatar\">{}</div>\n",
            escape_html(&card.initials())
        ));
    } else {
        body.push_str(&format!(
            "<img class=\"avatar\" src=\"{}\" alt=\"Profile\">\n",
            escape_attr(&card.photo)
        ));
    }

    body.push_str(&format!("<h1>{}</h1>\n", escape_html(&card.full_name())));
    if !card.title.is_empty() {
        body.push_str(&format!("<p class=\"title\">{}</p>\n", escape_html(&card.title)));
    }
    if !card.organization.is_empty() {
        body.push_str(&format!(
            "<p class=\"org\">{}</p>\n",
            escape_html(&card.organization)
        ));
    }

    body.push_str("<ul class=\"contact\">\n");
    if !card.phone.is_empty() {
        body.push_str(&format!(
            "<li><a href=\"tel:{0}\">{1}</a></li>\n",
            escape_attr(&card.phone),
            escape_html(&card.phone)
        ));
    }
    if !card.email.is_empty() {
        body.push_str(&format!(
            "<li><a href=\"mailto:{0}\">{1}</a></li>\n",
            escape_attr(&card.email),
            escape_html(&card.email)
        ));
    }
    if !card.website.is_empty() {
        body.push_str(&format!(
            "<li><a href=\"{0}\">{1}</a></li>\n",
            escape_attr(&card.website),
            escape_html(&card.website)
        ));
    }
    if !card.address.is_empty() {
        body.push_str(&format!("<li>{}</li>\n", escape_html(&address_line(card))));
    }
    body.push_str("</ul>\n");

    if !card.custom_fields.is_empty() {
        body.push_str("<h2>Additional Information</h2>\n<dl>\n");
        for field in &card.custom_fields {
            body.push_str(&format!(
                "<dt>{}</dt><dd>{}</dd>\n",
                escape_html(&field.label),
                escape_html(&field.value)
            ));
        }
        body.push_str("</dl>\n");
    }

    let socials = social_rows(card);
    if !socials.is_empty() {
        body.push_str("<h2>Social Media</h2>\n<ul class=\"social\">\n");
        for (platform, url) in socials {
            body.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                escape_attr(&url),
                escape_html(&platform)
            ));
        }
        body.push_str("</ul>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>:root {{ --brand: {brand}; }}</style>\n\
         </head>\n<body class=\"{theme} {template}\">\n{body}</body>\n</html>\n",
        title = escape_html(&card.full_name()),
        brand = escape_attr(&card.brand_color),
        theme = card.theme,
        template = card.template,
        body = body
    )
}

/// One-line rendering of the postal address, skipping empty parts.
fn address_line(card: &ContactCard) -> String {
    [
        card.address.street.as_str(),
        card.address.city.as_str(),
        card.address.state.as_str(),
        card.address.zip.as_str(),
        card.address.country.as_str(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(", ")
}

/// Collect all social rows (well-known handles first, then extras).
fn social_rows(card: &ContactCard) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    if !card.social.linkedin.is_empty() {
        rows.push(("LinkedIn".to_string(), card.social.linkedin.clone()));
    }
    if !card.social.instagram.is_empty() {
        rows.push(("Instagram".to_string(), card.social.instagram.clone()));
    }
    if !card.social.whatsapp.is_empty() {
        rows.push((
            "WhatsApp".to_string(),
            format!("https://wa.me/{}", card.social.whatsapp),
        ));
    }
    for link in &card.additional_social {
        rows.push((link.platform.clone(), link.url.clone()));
    }
    rows
}

/// Escape text for HTML element content.
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for HTML attribute values.
fn escape_attr(value: &str) -> String {
    escape_html(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> ContactCard {
        let mut card = ContactCard::default();
        card.first_name = "Ada".to_string();
        card.last_name = "Lovelace".to_string();
        card.title = "Chief Analyst".to_string();
        card.email = "ada@example.com".to_string();
        card
    }

    #[test]
    fn test_text_contains_name_and_contact_rows() {
        let preview = text(&sample_card());
        assert!(preview.contains("Ada Lovelace"));
        assert!(preview.contains("Chief Analyst"));
        assert!(preview.contains("Email:    ada@example.com"));
    }

    #[test]
    fn test_text_omits_empty_fields() {
        let preview = text(&sample_card());
        assert!(!preview.contains("Phone:"));
        assert!(!preview.contains("Website:"));
        assert!(!preview.contains("Additional Information"));
        assert!(!preview.contains("Social Media"));
    }

    #[test]
    fn test_text_unnamed_card() {
        let preview = text(&ContactCard::default());
        assert!(preview.contains("(unnamed card)"));
    }

    #[test]
    fn test_text_custom_fields_section() {
        let mut card = sample_card();
        card.add_custom_field("Office", "B12", None);

        let preview = text(&card);
        assert!(preview.contains("Additional Information"));
        assert!(preview.contains("Office: B12"));
    }

    #[test]
    fn test_text_social_section_includes_whatsapp_url() {
        let mut card = sample_card();
        card.social.whatsapp = "4915123456789".to_string();

        let preview = text(&card);
        assert!(preview.contains("WhatsApp: https://wa.me/4915123456789"));
    }

    #[test]
    fn test_text_gallery_count() {
        let mut card = sample_card();
        card.add_image("https://example.com/a.png");
        card.add_image("https://example.com/b.png");

        assert!(text(&card).contains("Gallery: 2 image(s)"));
    }

    #[test]
    fn test_html_escapes_values() {
        let mut card = sample_card();
        card.organization = "Engines <& Co>".to_string();

        let doc = html(&card);
        assert!(doc.contains("Engines &lt;&amp; Co&gt;"));
        assert!(!doc.contains("<& Co>"));
    }

    #[test]
    fn test_html_uses_theme_and_brand_color() {
        let mut card = sample_card();
        card.theme = crate::card::Theme::Dark;
        card.brand_color = "#123456".to_string();

        let doc = html(&card);
        assert!(doc.contains("class=\"dark modern\""));
        assert!(doc.contains("--brand: #123456"));
    }

    #[test]
    fn test_html_initials_placeholder_without_photo() {
        let doc = html(&sample_card());
        assert!(doc.contains("<div class=\"avatar\">AL</div>"));
        assert!(!doc.contains("<img"));
    }

    #[test]
    fn test_html_uses_photo_when_present() {
        let mut card = sample_card();
        card.photo = "data:image/png;base64,AAAA".to_string();

        let doc = html(&card);
        assert!(doc.contains("<img class=\"avatar\""));
        assert!(!doc.contains("<div class=\"avatar\">"));
    }

    #[test]
    fn test_address_line_skips_empty_parts() {
        let mut card = sample_card();
        card.address.city = "London".to_string();
        card.address.country = "UK".to_string();

        assert_eq!(address_line(&card), "London, UK");
    }
}
