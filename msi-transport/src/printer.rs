//! PrinterTransport middleware for monitoring transport operations
//!
//! Wraps any Transport implementation and prints every report passing
//! through it before forwarding.
//!
//! # Example
//!
//! ```ignore
//! use msi_transport::{HidTransport, PrinterConfig, PrinterTransport};
//!
//! let transport = HidTransport::open(id)?;
//! let monitored = PrinterTransport::new(transport, PrinterConfig::default());
//! ```

use std::cell::Cell;
use std::fmt::Write as _;

use crate::{Transport, TransportDeviceInfo, TransportError};

/// Which report kind a printed line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Feature,
    Output,
}

impl ReportKind {
    fn label(self) -> &'static str {
        match self {
            ReportKind::Feature => "FEATURE",
            ReportKind::Output => "OUTPUT",
        }
    }
}

/// Configuration for the PrinterTransport
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    /// Bytes per hex dump row
    pub row_width: usize,
    /// Print only the first row of each report
    pub compact: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            row_width: 16,
            compact: false,
        }
    }
}

impl PrinterConfig {
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}

/// Transport middleware that prints all reports
pub struct PrinterTransport<T> {
    inner: T,
    config: PrinterConfig,
    counter: Cell<usize>,
}

impl<T: Transport> PrinterTransport<T> {
    pub fn new(inner: T, config: PrinterConfig) -> Self {
        Self {
            inner,
            config,
            counter: Cell::new(0),
        }
    }

    /// Unwrap the inner transport
    pub fn into_inner(self) -> T {
        self.inner
    }

    fn print(&self, kind: ReportKind, data: &[u8]) {
        let n = self.counter.get();
        self.counter.set(n + 1);
        println!("{}", format_report(n, kind, data, &self.config));
    }
}

/// Render one report as a labelled hex dump
pub fn format_report(index: usize, kind: ReportKind, data: &[u8], config: &PrinterConfig) -> String {
    let mut out = format!("#{index:03} {} len={}", kind.label(), data.len());
    let width = config.row_width.max(1);
    for (row, chunk) in data.chunks(width).enumerate() {
        if config.compact && row > 0 {
            out.push_str("\n      ...");
            break;
        }
        let _ = write!(out, "\n  {:04x}:", row * width);
        for b in chunk {
            let _ = write!(out, " {b:02x}");
        }
    }
    out
}

impl<T: Transport> Transport for PrinterTransport<T> {
    fn send_feature_report(&self, data: &[u8]) -> Result<(), TransportError> {
        self.print(ReportKind::Feature, data);
        self.inner.send_feature_report(data)
    }

    fn send_output_report(&self, data: &[u8]) -> Result<(), TransportError> {
        self.print(ReportKind::Output, data);
        self.inner.send_output_report(data)
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        self.inner.device_info()
    }
}
