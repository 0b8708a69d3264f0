//! Report line classification

/// Kind of an `ibnetdiscover` report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `Switch <ports> "S-<guid>" # "<name>" ... lid <n> ...`
    SwitchHeader,
    /// `[<port>] "<peer-guid>"[<remote port>] # "<description>" lid <n> ...`
    PortEntry,
    /// Anything else. Closes the current switch block.
    Other,
}

impl LineKind {
    pub fn classify(line: &str) -> Self {
        let line = line.trim();
        if line.starts_with("Switch") {
            LineKind::SwitchHeader
        } else if line.starts_with('[') {
            LineKind::PortEntry
        } else {
            LineKind::Other
        }
    }
}
