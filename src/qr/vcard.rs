//! vCard rendering for business-card QR codes

use serde::{Deserialize, Serialize};

/// Contact details encoded into a business-card QR code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessCard {
    /// Full name
    pub name: String,
    /// Job title
    pub title: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    /// Full postal address, single free-form value
    pub address: String,
}

impl BusinessCard {
    /// Render the card as a vCard 3.0 document
    ///
    /// # Example
    /// ```
    /// use passqr::BusinessCard;
    ///
    /// let card = BusinessCard { name: "Ada Lovelace".to_string(), ..Default::default() };
    /// let vcard = card.to_vcard();
    /// assert!(vcard.starts_with("BEGIN:VCARD\n"));
    /// assert!(vcard.contains("\nN:Ada Lovelace\n"));
    /// ```
    pub fn to_vcard(&self) -> String {
        let lines = [
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!("N:{}", escape(&self.name)),
            format!("ORG:{}", escape(&self.company)),
            format!("TITLE:{}", escape(&self.title)),
            format!("TEL;TYPE=CELL:{}", escape(&self.phone)),
            format!("EMAIL:{}", escape(&self.email)),
            format!("URL:{}", escape(&self.website)),
            format!("ADR:{}", escape(&self.address)),
            "END:VCARD".to_string(),
        ];

        let mut vcard = lines.join("\n");
        vcard.push('\n');
        vcard
    }
}

/// Escape a vCard property value
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.trim().chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}
