use serde::{Deserialize, Serialize};

/// Contact details as captured by the form, before a prize is attached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// A captured contact tied to one play outcome, append-only. `prize_won`
/// is a denormalized copy of the winning segment's name; renaming or
/// deleting the segment later leaves the record untouched. JSON field
/// names stay camelCase so previously stored lead lists keep loading.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub prize_won: String,
    pub timestamp: String,
}

impl Lead {
    pub fn from_draft(id: String, draft: LeadDraft, prize_won: String, timestamp: String) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            email: draft.email,
            prize_won,
            timestamp,
        }
    }
}

pub const CSV_HEADER: &str = "Name,Phone,Email,Prize Won,Timestamp";

/// Renders the collected leads as a delimited document: the fixed header
/// row, then one row per lead with every field wrapped in double quotes.
/// Embedded quote characters are NOT escaped -- a known limitation kept
/// on purpose, since downstream consumers parse the exact layout of
/// earlier exports.
pub fn leads_to_csv(leads: &[Lead]) -> String {
    let mut lines = Vec::with_capacity(leads.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for lead in leads {
        lines.push(format!(
            "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"",
            lead.name, lead.phone, lead.email, lead.prize_won, lead.timestamp
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(name: &str, prize: &str) -> Lead {
        Lead {
            id: "lead-1".to_string(),
            name: name.to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "jo@example.com".to_string(),
            prize_won: prize.to_string(),
            timestamp: "2024-03-01T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_csv_layout() {
        let leads = vec![lead("Jo Smith", "Free Coffee")];
        let csv = leads_to_csv(&leads);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Name,Phone,Email,Prize Won,Timestamp"));
        assert_eq!(
            lines.next(),
            Some(
                "\"Jo Smith\",\"+1 (555) 123-4567\",\"jo@example.com\",\"Free Coffee\",\"2024-03-01T12:00:00Z\""
            )
        );
        assert_eq!(lines.next(), None);
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_csv_empty_collection_is_header_only() {
        assert_eq!(leads_to_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn test_csv_embedded_quotes_pass_through() {
        // The format contract wraps fields in quotes without escaping.
        let leads = vec![lead("Jo \"Lucky\" Smith", "10% Off")];
        let csv = leads_to_csv(&leads);
        assert!(csv.contains("\"Jo \"Lucky\" Smith\""));
    }

    #[test]
    fn test_lead_json_uses_stored_field_names() {
        let json = serde_json::to_string(&lead("Jo", "10% Off")).unwrap();
        assert!(json.contains("\"prizeWon\":\"10% Off\""));
        assert!(json.contains("\"timestamp\""));

        let parsed: Lead = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.prize_won, "10% Off");
    }
}
