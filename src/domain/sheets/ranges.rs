// Default layout of the tab the voting form writes its tallies into.
// Overridable through the `sheets` section of the configuration.

pub mod votes {
    pub const SHEET_NAME: &str = "Form Responses 1";
    pub const RO_HEADERS: &str = "C1:AF1";
    pub const RO_COUNTS: &str = "C2:AF2";
}
