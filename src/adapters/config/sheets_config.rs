use crate::{
    domain::sheets::{a1_notation::A1Notation, ranges},
    ports::sheet_source::ServiceAccountCredentials,
};

/// Where the vote tallies live and how to get in.
///
/// The credentials are optional here: a server without them still starts, and every
/// snapshot request reports the configuration error instead.
#[derive(serde::Deserialize, Clone)]
pub struct SheetsConfig {
    #[serde(default)]
    pub client_email: Option<String>,
    #[serde(default)]
    pub private_key: Option<String>,
    #[serde(default)]
    pub sheet_id: Option<String>,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    #[serde(default = "default_header_range")]
    pub header_range: String,
    #[serde(default = "default_count_range")]
    pub count_range: String,
}

fn default_sheet_name() -> String {
    ranges::votes::SHEET_NAME.to_string()
}

fn default_header_range() -> String {
    ranges::votes::RO_HEADERS.to_string()
}

fn default_count_range() -> String {
    ranges::votes::RO_COUNTS.to_string()
}

impl SheetsConfig {
    /// All three credential values, or `None` if any is missing or blank.
    ///
    /// Keys pasted into env files usually carry literal `\n` sequences; they are turned
    /// back into newlines so the PEM parses.
    pub fn service_account(&self) -> Option<ServiceAccountCredentials> {
        let client_email = present(&self.client_email)?;
        let private_key = present(&self.private_key)?.replace("\\n", "\n");
        let spreadsheet_id = present(&self.sheet_id)?;

        Some(ServiceAccountCredentials {
            client_email: client_email.to_string(),
            private_key,
            spreadsheet_id: spreadsheet_id.to_string(),
        })
    }

    pub fn header_range(&self) -> A1Notation {
        A1Notation::on_sheet(&self.sheet_name, &self.header_range)
    }

    pub fn count_range(&self) -> A1Notation {
        A1Notation::on_sheet(&self.sheet_name, &self.count_range)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.trim().is_empty())
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            client_email: None,
            private_key: None,
            sheet_id: None,
            sheet_name: default_sheet_name(),
            header_range: default_header_range(),
            count_range: default_count_range(),
        }
    }
}

impl std::fmt::Debug for SheetsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsConfig")
            .field("client_email", &self.client_email)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("sheet_id", &self.sheet_id)
            .field("sheet_name", &self.sheet_name)
            .field("header_range", &self.header_range)
            .field("count_range", &self.count_range)
            .finish()
    }
}
