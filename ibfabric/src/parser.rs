//! Report parser
//!
//! The report is a sequence of blocks: a `Switch` header followed by its
//! port lines, closed by any other line. Only the GUID of the switch whose
//! block is open is tracked, so a single forward pass is enough.

use tracing::{debug, trace};

use crate::error::{FabricError, Result};
use crate::grammar::{Peer, PortEntry, SwitchHeader};
use crate::line::LineKind;
use crate::topology::Topology;

/// Incremental `ibnetdiscover` report parser
#[derive(Debug, Default)]
pub struct ReportParser {
    topology: Topology,
    current: Option<String>,
    line_no: usize,
    failed: Option<FabricError>,
}

impl ReportParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next report line.
    ///
    /// Malformed header or port lines are fatal. Once a line has failed,
    /// every later call returns that same error without reading the line.
    pub fn feed(&mut self, raw: &str) -> Result<()> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }
        self.line_no += 1;
        let line = raw.trim();

        let result = match LineKind::classify(line) {
            LineKind::SwitchHeader => self.on_header(line),
            LineKind::PortEntry => self.on_port(line),
            LineKind::Other => {
                if let Some(guid) = self.current.take() {
                    trace!(guid = %guid, line_no = self.line_no, "switch block closed");
                }
                Ok(())
            }
        };
        if let Err(err) = &result {
            self.failed = Some(err.clone());
        }
        result
    }

    /// The topology built so far, possibly incomplete
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// The finished topology, or the first fatal error if any line failed
    pub fn finish(self) -> Result<Topology> {
        match self.failed {
            Some(err) => Err(err),
            None => Ok(self.topology),
        }
    }

    fn on_header(&mut self, line: &str) -> Result<()> {
        let header = SwitchHeader::parse(line).map_err(|reason| FabricError::MalformedHeader {
            line_no: self.line_no,
            line: line.to_string(),
            reason,
        })?;

        if self.topology.get(header.guid).is_some() {
            debug!(guid = header.guid, "switch listed again, keeping first record");
        } else {
            debug!(
                guid = header.guid,
                name = header.name,
                ports = header.ports,
                lid = header.lid,
                "switch"
            );
        }
        self.topology
            .register_switch(header.guid, header.name, header.lid, header.ports);
        self.current = Some(header.guid.to_string());
        Ok(())
    }

    fn on_port(&mut self, line: &str) -> Result<()> {
        let Some(current) = self.current.as_deref() else {
            trace!(line_no = self.line_no, "port entry outside a switch block");
            return Ok(());
        };

        let entry = PortEntry::parse(line).map_err(|reason| FabricError::MalformedPort {
            line_no: self.line_no,
            line: line.to_string(),
            reason,
        })?;

        // The current GUID always comes from a registered header
        let Some(switch) = self.topology.get_mut(current) else {
            return Ok(());
        };

        match entry.peer {
            Peer::Host { name, hca } => {
                let links = switch.add_host_link(entry.guid, name, hca, entry.lid);
                trace!(switch = current, port = ?entry.local_port, host = name, links, "host link");
            }
            Peer::Switch => {
                let links = switch.add_switch_link(entry.guid);
                trace!(switch = current, port = ?entry.local_port, peer = entry.guid, links, "switch link");
            }
            Peer::Unknown => {
                debug!(
                    switch = current,
                    peer = entry.guid,
                    line_no = self.line_no,
                    "skipping port entry with unknown peer type"
                );
            }
        }
        Ok(())
    }
}

/// Parses a whole report. Nothing is returned if any line is malformed.
pub fn parse_report<I, S>(lines: I) -> Result<Topology>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = ReportParser::new();
    for line in lines {
        parser.feed(line.as_ref())?;
    }
    let topology = parser.finish()?;
    debug!(switches = topology.len(), "report parsed");
    Ok(topology)
}

pub fn parse_str(report: &str) -> Result<Topology> {
    parse_report(report.lines())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;

    #[test]
    fn test_port_lines_attach_to_open_switch() {
        let topology = parse_str(
            "Switch\t8 \"S-01\"\t\t# \"leaf\" enhanced port 0 lid 1 lmc 0\n\
             [1]\t\"H-0a\"[1](0b) \t\t# \"node1 HCA-1\" lid 5 4xFDR\n\
             [2]\t\"S-02\"[1]\t\t# \"spine\" lid 2 4xFDR\n",
        )
        .unwrap();

        let leaf = topology.get("S-01").unwrap();
        assert_eq!(leaf.name, "leaf");
        assert_eq!(leaf.lid, 1);
        assert_eq!(leaf.ports, 8);
        assert_eq!(leaf.hosts()["H-0a"].name, "node1");
        assert_eq!(leaf.hosts()["H-0a"].lid, 5);
        assert_eq!(leaf.switches()["S-02"].links(), 1);
    }

    #[test]
    fn test_other_line_closes_block() {
        let topology = parse_str(
            "Switch\t8 \"S-01\"\t\t# \"leaf\" enhanced port 0 lid 1 lmc 0\n\
             \n\
             [1]\t\"H-0a\"[1](0b) \t\t# \"node1 HCA-1\" lid 5 4xFDR\n",
        )
        .unwrap();

        assert_eq!(topology.get("S-01").unwrap().host_link_total(), 0);
    }

    #[test]
    fn test_port_lines_before_any_header_are_ignored() {
        let topology = parse_str(
            "[1]\t\"H-0a\"[1](0b) \t\t# \"node1 HCA-1\" lid 5 4xFDR\n\
             [2] garbage without quotes\n",
        )
        .unwrap();

        assert!(topology.is_empty());
    }

    #[test]
    fn test_ca_port_lines_are_ignored() {
        let topology = parse_str(
            "Switch\t8 \"S-01\"\t\t# \"leaf\" enhanced port 0 lid 1 lmc 0\n\
             \n\
             Ca\t2 \"H-0a\"\t\t# \"node1 HCA-1\"\n\
             [1](0b) \t\"S-01\"[1]\t\t# lid 5 lmc 0 \"leaf\" lid 1 4xFDR\n",
        )
        .unwrap();

        assert_eq!(topology.get("S-01").unwrap().switch_link_total(), 0);
    }

    #[test]
    fn test_repeated_header_does_not_reset_links() {
        let topology = parse_str(
            "Switch\t8 \"S-01\"\t\t# \"leaf\" enhanced port 0 lid 1 lmc 0\n\
             [1]\t\"H-0a\"[1](0b) \t\t# \"node1 HCA-1\" lid 5 4xFDR\n\
             \n\
             Switch\t8 \"S-01\"\t\t# \"leaf\" enhanced port 0 lid 1 lmc 0\n\
             [2]\t\"H-0a\"[2](0c) \t\t# \"node1 HCA-1\" lid 6 4xFDR\n",
        )
        .unwrap();

        assert_eq!(topology.len(), 1);
        let leaf = topology.get("S-01").unwrap();
        assert_eq!(leaf.hosts().len(), 1);
        assert_eq!(leaf.hosts()["H-0a"].links(), 2);
    }

    #[test]
    fn test_malformed_header_reports_line() {
        let err = parse_str(
            "# header\n\
             Switch\t8 \"S-01\"\t\t# leaf enhanced port 0 lid 1 lmc 0\n",
        )
        .unwrap_err();

        assert_eq!(err.line_no(), 2);
        assert!(matches!(
            err,
            FabricError::MalformedHeader {
                reason: FieldError::MissingQuotedFields(2),
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_port_reports_line() {
        let err = parse_str(
            "Switch\t8 \"S-01\"\t\t# \"leaf\" enhanced port 0 lid 1 lmc 0\n\
             [1]\t\"H-0a\"[1](0b) \t\t# \"node1 HCA-1\" 4xFDR\n",
        )
        .unwrap_err();

        assert_eq!(
            err,
            FabricError::MalformedPort {
                line_no: 2,
                line: "[1]\t\"H-0a\"[1](0b) \t\t# \"node1 HCA-1\" 4xFDR".to_string(),
                reason: FieldError::MissingLid,
            }
        );
    }

    #[test]
    fn test_parser_stays_failed_after_error() {
        let mut parser = ReportParser::new();
        let err = parser.feed("Switch\t8 \"S-01\" leaf lid 1").unwrap_err();
        assert_eq!(err.line_no(), 1);

        let again = parser
            .feed("Switch\t8 \"S-02\"\t\t# \"leaf2\" enhanced port 0 lid 2 lmc 0")
            .unwrap_err();
        assert_eq!(again, err);
        assert!(parser.topology().is_empty());
        assert_eq!(parser.finish(), Err(err));
    }

    #[test]
    fn test_finish_after_clean_feed() {
        let mut parser = ReportParser::new();
        parser
            .feed("Switch\t8 \"S-01\"\t\t# \"leaf\" enhanced port 0 lid 1 lmc 0")
            .unwrap();
        assert_eq!(parser.finish().unwrap().len(), 1);
    }

    #[test]
    fn test_feed_exposes_partial_topology() {
        let mut parser = ReportParser::new();
        parser
            .feed("Switch\t8 \"S-01\"\t\t# \"leaf\" enhanced port 0 lid 1 lmc 0")
            .unwrap();
        assert_eq!(parser.topology().len(), 1);
    }
}
