//! Raster transfer format negotiation.

/// Format families preferred for elevation data, most preferred first.
pub const PREFERRED_FORMATS: [&str; 2] = ["geotiff", "tiff"];

/// Pick the preferred format from what a service advertises.
///
/// Case-insensitive substring match in priority order: any entry containing
/// "geotiff", else any entry containing "tiff". Within a tier the first entry
/// in list order wins. Returns the advertised string unchanged.
pub fn find_preferred_format<S: AsRef<str>>(available: &[S]) -> Option<String> {
    negotiate(&PREFERRED_FORMATS, available)
}

/// Format selection with a configurable priority list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatNegotiator {
    priorities: Vec<String>,
}

impl FormatNegotiator {
    /// Priorities are substrings, matched case-insensitively, most preferred first.
    pub fn new<I, S>(priorities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            priorities: priorities
                .into_iter()
                .map(|p| p.into().to_lowercase())
                .collect(),
        }
    }

    pub fn priorities(&self) -> &[String] {
        &self.priorities
    }

    pub fn negotiate<S: AsRef<str>>(&self, available: &[S]) -> Option<String> {
        negotiate(&self.priorities, available)
    }
}

impl Default for FormatNegotiator {
    fn default() -> Self {
        Self::new(PREFERRED_FORMATS)
    }
}

fn negotiate<P: AsRef<str>, S: AsRef<str>>(priorities: &[P], available: &[S]) -> Option<String> {
    let lowered: Vec<String> = available
        .iter()
        .map(|f| f.as_ref().to_lowercase())
        .collect();

    priorities.iter().find_map(|wanted| {
        let wanted = wanted.as_ref().to_lowercase();
        lowered
            .iter()
            .position(|f| f.contains(&wanted))
            .map(|idx| available[idx].as_ref().to_string())
    })
}
