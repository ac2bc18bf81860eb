use std::fmt::Formatter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(String);

impl A1Notation {
    /// Qualifies a local range with the title of the sheet it lives in.
    ///
    /// # Examples
    /// ```
    /// use vote_snapshot::domain::sheets::a1_notation::A1Notation;
    /// let range = A1Notation::on_sheet("Form Responses 1", "C1:AF1");
    /// assert_eq!(range.as_ref(), "'Form Responses 1'!C1:AF1");
    /// ```
    pub fn on_sheet(sheet_title: &str, local_range: &str) -> Self {
        // Single quotes inside a sheet title are escaped by doubling them
        A1Notation(format!(
            "'{}'!{}",
            sheet_title.replace('\'', "''"),
            local_range
        ))
    }
}

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<A1Notation> for String {
    fn from(a1_notation: A1Notation) -> Self {
        a1_notation.0
    }
}

impl From<String> for A1Notation {
    fn from(s: String) -> Self {
        A1Notation(s)
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
