//! Plain-text rendering of the key list and the details view.

use key_store::{ApiKeyRecord, KeyDetails};

pub const EMPTY_TITLE: &str = "No API keys yet";
pub const EMPTY_HINT: &str = "Create your first key to start using the API";

/// Day-first date, as the widget shows it.
const DATE_FORMAT: &str = "%d.%m.%Y";

fn status(is_active: bool) -> &'static str {
    if is_active { "Active" } else { "Inactive" }
}

pub fn render_list(records: &[ApiKeyRecord]) -> String {
    if records.is_empty() {
        return format!("{EMPTY_TITLE}\n{EMPTY_HINT}\n");
    }

    records
        .iter()
        .map(|record| {
            format!(
                "{}\n  {}\n  Created: {}  {}\n  id: {}\n",
                record.name,
                record.key,
                record.created_at.format(DATE_FORMAT),
                status(record.is_active),
                record.id,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_details(details: &KeyDetails) -> String {
    format!(
        "Name:       {}\n\
         API key:    {}\n\
         Endpoint:   {}\n\
         Network:    {}\n\
         Status:     {}\n\
         Rate limit: {}\n\
         Expires in: {}\n\
         Created:    {}\n\
         Id:         {}\n",
        details.name,
        details.key,
        details.endpoint,
        details.network_uuid,
        status(details.is_active),
        details.rate_limit,
        details.expires_in,
        details.created_at.format(DATE_FORMAT),
        details.id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, key: &str, is_active: bool) -> ApiKeyRecord {
        ApiKeyRecord {
            id: id.to_string(),
            key: key.to_string(),
            name: "Laptop".to_string(),
            network_uuid: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            created_at: "2024-05-01T10:20:30Z".parse().unwrap(),
            is_active,
            rate_limit: "1000/hour".to_string(),
            expires_in: "1 year".to_string(),
        }
    }

    #[test]
    fn test_empty_list_shows_hint() {
        let out = render_list(&[]);
        assert!(out.contains(EMPTY_TITLE));
        assert!(out.contains(EMPTY_HINT));
    }

    #[test]
    fn test_list_keeps_order_and_status() {
        let out = render_list(&[
            record("1", "LP-000000000001", true),
            record("2", "LP-000000000002", false),
        ]);

        let first = out.find("LP-000000000001").unwrap();
        let second = out.find("LP-000000000002").unwrap();
        assert!(first < second);
        assert!(out.contains("Created: 01.05.2024  Active"));
        assert!(out.contains("Inactive"));
        assert!(out.contains("id: 2"));
    }

    #[test]
    fn test_details_show_endpoint() {
        let details = KeyDetails::new(
            &record("1", "LP-0123456789ab", true),
            "https://localplayer.vercel.app/api/",
        );
        let out = render_details(&details);

        assert!(out.contains("Endpoint:   https://localplayer.vercel.app/api/LP-0123456789ab"));
        assert!(out.contains("Status:     Active"));
        assert!(out.contains("Id:         1"));
    }
}
