//! In-memory transport that records every report instead of sending it

use std::cell::RefCell;

use crate::printer::ReportKind;
use crate::types::{TransportDeviceInfo, UsbId};
use crate::{Transport, TransportError};

/// A report captured by [`RecordingTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedReport {
    pub kind: ReportKind,
    pub data: Vec<u8>,
}

/// Transport with no device behind it
///
/// Used for dry runs and tests; reports are kept in send order.
pub struct RecordingTransport {
    info: TransportDeviceInfo,
    reports: RefCell<Vec<RecordedReport>>,
}

impl RecordingTransport {
    pub fn new(id: UsbId) -> Self {
        Self {
            info: TransportDeviceInfo::detached(id),
            reports: RefCell::new(Vec::new()),
        }
    }

    /// Snapshot of all reports sent so far
    pub fn reports(&self) -> Vec<RecordedReport> {
        self.reports.borrow().clone()
    }

    pub fn feature_reports(&self) -> Vec<Vec<u8>> {
        self.reports_of(ReportKind::Feature)
    }

    pub fn output_reports(&self) -> Vec<Vec<u8>> {
        self.reports_of(ReportKind::Output)
    }

    fn reports_of(&self, kind: ReportKind) -> Vec<Vec<u8>> {
        self.reports
            .borrow()
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.data.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.reports.borrow_mut().clear();
    }
}

impl Transport for RecordingTransport {
    fn send_feature_report(&self, data: &[u8]) -> Result<(), TransportError> {
        self.reports.borrow_mut().push(RecordedReport {
            kind: ReportKind::Feature,
            data: data.to_vec(),
        });
        Ok(())
    }

    fn send_output_report(&self, data: &[u8]) -> Result<(), TransportError> {
        self.reports.borrow_mut().push(RecordedReport {
            kind: ReportKind::Output,
            data: data.to_vec(),
        });
        Ok(())
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        &self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let t = RecordingTransport::new(UsbId::new(0x1038, 0x1122));
        t.send_feature_report(&[1, 2]).unwrap();
        t.send_output_report(&[9]).unwrap();
        t.send_feature_report(&[3]).unwrap();

        let all = t.reports();
        assert_eq!(all.len(), 3);
        assert_eq!(all[1].kind, ReportKind::Output);
        assert_eq!(t.feature_reports(), vec![vec![1, 2], vec![3]]);
        assert_eq!(t.output_reports(), vec![vec![9]]);

        t.clear();
        assert!(t.reports().is_empty());
    }
}
