//! vCard 3.0 export of a card.

use chrono::{DateTime, Utc};

use crate::snapshot::{FormSnapshot, TextField};

/// Render `snapshot` as a vCard, stamped with the current time.
pub fn to_vcard(snapshot: &FormSnapshot) -> String {
    to_vcard_at(snapshot, Utc::now())
}

/// Render `snapshot` as a vCard with an explicit `REV` timestamp.
pub fn to_vcard_at(snapshot: &FormSnapshot, rev: DateTime<Utc>) -> String {
    let fname = snapshot.text(TextField::Fname);
    let lname = snapshot.text(TextField::Lname);

    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("N:{};{};;;", escape(lname), escape(fname)),
        format!("FN:{}", escape(format!("{} {}", fname, lname).trim())),
    ];

    let optional = [
        (TextField::Biz, "ORG"),
        (TextField::Title, "TITLE"),
        (TextField::Addr, "ADR;TYPE=WORK"),
        (TextField::Desc, "NOTE"),
        (TextField::HostedUrl, "URL"),
        (TextField::Key, "KEY;TYPE=PGP"),
    ];
    for (field, property) in optional {
        let value = snapshot.text(field);
        if value.is_empty() {
            continue;
        }
        let value = if field == TextField::Addr {
            // Street goes in the third ADR component
            format!(";;{};;;;", escape(value))
        } else {
            escape(value)
        };
        lines.push(format!("{}:{}", property, value));
    }

    lines.push(format!("REV:{}", rev.format("%Y%m%dT%H%M%SZ")));
    lines.push("END:VCARD".to_string());

    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}

/// RFC 6350 text escaping.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn rev() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn minimal_card() {
        let snapshot = FormSnapshot::new()
            .with_text(TextField::Fname, "Ada")
            .with_text(TextField::Lname, "Lovelace");
        assert_eq!(
            to_vcard_at(&snapshot, rev()),
            "BEGIN:VCARD\r\nVERSION:3.0\r\nN:Lovelace;Ada;;;\r\nFN:Ada Lovelace\r\n\
             REV:20240301T120000Z\r\nEND:VCARD\r\n"
        );
    }

    #[test]
    fn optional_fields_and_escaping() {
        let snapshot = FormSnapshot::new()
            .with_text(TextField::Fname, "Ada")
            .with_text(TextField::Biz, "Babbage, Inc; Ltd")
            .with_text(TextField::Addr, "1 Engine St\r\nLondon")
            .with_text(TextField::HostedUrl, "https://cards.example/ada");
        let card = to_vcard_at(&snapshot, rev());

        assert!(card.contains("\r\nFN:Ada\r\n"));
        assert!(card.contains("\r\nORG:Babbage\\, Inc\\; Ltd\r\n"));
        assert!(card.contains("\r\nADR;TYPE=WORK:;;1 Engine St\\nLondon;;;;\r\n"));
        assert!(card.contains("\r\nURL:https://cards.example/ada\r\n"));
        assert!(!card.contains("TITLE:"));
    }
}
