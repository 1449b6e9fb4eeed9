//! Per-device resolution outcomes
//!
//! Failures are values, not errors: every device in a batch gets exactly one
//! outcome, and a failed lookup never aborts the run.

/// Classified result of resolving one hostname
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// A matching asset was found; carries its internal identifier
    Found(String),
    /// The search succeeded but matched no asset
    NotFound,
    /// The network call exceeded its deadline
    Timeout,
    /// Connection or HTTP-level failure; detail is for logs only
    Transport(String),
    /// Response parsed but lacked the expected identifier shape
    MalformedResponse(String),
    /// The input row had an empty or whitespace-only hostname
    EmptyHostname,
    /// The input row lacked the hostname column entirely
    MissingColumn,
}

impl ResolutionOutcome {
    /// Render the outcome into the output-table cell: a device URL on
    /// success, a fixed greppable label otherwise.
    pub fn into_url_cell(self, base_url: &str) -> String {
        match self {
            ResolutionOutcome::Found(id) => format!("{}/assets/devices/{}", base_url, id),
            ResolutionOutcome::NotFound => "Not Found".to_string(),
            ResolutionOutcome::Timeout => "Timeout Error".to_string(),
            ResolutionOutcome::Transport(_) => "API Error".to_string(),
            ResolutionOutcome::MalformedResponse(_) => "Response Error".to_string(),
            ResolutionOutcome::EmptyHostname => "Empty Hostname".to_string(),
            ResolutionOutcome::MissingColumn => "Missing DNS Column".to_string(),
        }
    }

    /// Whether an asset was resolved
    pub fn is_found(&self) -> bool {
        matches!(self, ResolutionOutcome::Found(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_renders_device_url() {
        let cell = ResolutionOutcome::Found("abc123".to_string())
            .into_url_cell("https://ax.example.com");
        assert_eq!(cell, "https://ax.example.com/assets/devices/abc123");
    }

    #[test]
    fn failures_render_fixed_labels() {
        let base = "https://ax.example.com";
        assert_eq!(ResolutionOutcome::NotFound.into_url_cell(base), "Not Found");
        assert_eq!(
            ResolutionOutcome::Timeout.into_url_cell(base),
            "Timeout Error"
        );
        assert_eq!(
            ResolutionOutcome::Transport("boom".into()).into_url_cell(base),
            "API Error"
        );
        assert_eq!(
            ResolutionOutcome::MalformedResponse("no id".into()).into_url_cell(base),
            "Response Error"
        );
        assert_eq!(
            ResolutionOutcome::EmptyHostname.into_url_cell(base),
            "Empty Hostname"
        );
        assert_eq!(
            ResolutionOutcome::MissingColumn.into_url_cell(base),
            "Missing DNS Column"
        );
    }
}
