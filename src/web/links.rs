//! Outbound contact and share links (tel:, mailto:, WhatsApp, social share).

use serde::Serialize;

pub fn tel_href(phone: &str) -> String {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", compact)
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// WhatsApp deep link; every non-digit is stripped from the number.
pub fn whatsapp_href(number: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}", digits)
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareLinks {
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub whatsapp: String,
}

/// Share links for an absolute page URL.
pub fn share_links(page_url: &str, title: &str) -> ShareLinks {
    let url = urlencoding::encode(page_url);
    let text = urlencoding::encode(title);

    ShareLinks {
        twitter: format!("https://twitter.com/intent/tweet?url={}&text={}", url, text),
        facebook: format!("https://www.facebook.com/sharer/sharer.php?u={}", url),
        linkedin: format!("https://www.linkedin.com/sharing/share-offsite/?url={}", url),
        whatsapp: format!(
            "https://wa.me/?text={}",
            urlencoding::encode(&format!("{} {}", title, page_url))
        ),
    }
}
