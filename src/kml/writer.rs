//! KML document writer.
//!
//! A [`KmlWriter`] owns its sink for one export. Sections must be written in
//! order: header (with styles), any number of placemarks, footer. Each
//! placemark is flushed as soon as it is written, so an interrupted export
//! leaves a prefix of complete placemark blocks behind.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::config::{KML_NAMESPACE, XML_DECLARATION};
use crate::error_handling::ExportError;

use super::placemark::{render_placemark, Record};
use super::style::{render_styles, StyleKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    /// Nothing written yet
    Start,
    /// Header and styles written, placemarks allowed
    Body,
    /// Footer written
    Closed,
}

/// Writes one KML document to a sink.
pub struct KmlWriter<W: Write> {
    sink: W,
    empty_label: String,
    section: Section,
    placemarks: usize,
}

impl KmlWriter<BufWriter<File>> {
    /// Creates (or truncates) the file at `path` and wraps it in a writer.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Open` if the file cannot be created.
    pub fn open(path: &Path, empty_label: &str) -> Result<Self, ExportError> {
        let file = File::create(path).map_err(|source| ExportError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Opened KML output {}", path.display());
        Ok(Self::new(BufWriter::new(file), empty_label))
    }
}

impl<W: Write> KmlWriter<W> {
    /// Wraps an already-open sink.
    ///
    /// `empty_label` is the `<name>` used for records whose label is blank.
    pub fn new(sink: W, empty_label: &str) -> Self {
        Self {
            sink,
            empty_label: empty_label.to_string(),
            section: Section::Start,
            placemarks: 0,
        }
    }

    /// Writes the XML declaration, the `<kml>` and `<Document>` openings and
    /// the three shared styles. Must be the first call.
    pub fn write_header(&mut self) -> Result<(), ExportError> {
        if self.section != Section::Start {
            return Err(ExportError::Sequence("header already written"));
        }
        let mut header = String::new();
        header.push_str(XML_DECLARATION);
        header.push('\n');
        header.push_str(&format!("<kml xmlns=\"{}\">\n", KML_NAMESPACE));
        header.push_str("  <Document>\n");
        header.push_str(&render_styles());
        self.sink.write_all(header.as_bytes())?;
        self.section = Section::Body;
        Ok(())
    }

    /// Writes one `<Placemark>` and flushes the sink.
    pub fn write_placemark(&mut self, record: &Record, style: StyleKind) -> Result<(), ExportError> {
        match self.section {
            Section::Start => return Err(ExportError::Sequence("placemark before header")),
            Section::Closed => return Err(ExportError::Sequence("placemark after footer")),
            Section::Body => {}
        }
        let markup = render_placemark(record, style, &self.empty_label);
        self.sink.write_all(markup.as_bytes())?;
        self.sink.flush()?;
        self.placemarks += 1;
        Ok(())
    }

    /// Closes `<Document>` and `<kml>` and flushes the sink.
    pub fn write_footer(&mut self) -> Result<(), ExportError> {
        match self.section {
            Section::Start => return Err(ExportError::Sequence("footer before header")),
            Section::Closed => return Err(ExportError::Sequence("footer already written")),
            Section::Body => {}
        }
        self.sink.write_all(b"  </Document>\n</kml>\n")?;
        self.sink.flush()?;
        self.section = Section::Closed;
        debug!("Closed KML document after {} placemarks", self.placemarks);
        Ok(())
    }

    /// Number of placemarks written so far.
    pub fn placemark_count(&self) -> usize {
        self.placemarks
    }

    /// Returns `true` once the footer has been written.
    pub fn is_closed(&self) -> bool {
        self.section == Section::Closed
    }

    /// Gives the sink back to the caller.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kml::placemark::Attributes;
    use std::io;

    fn record(label: &str) -> Record {
        Record {
            label: label.to_string(),
            attributes: Attributes::from(vec![("cell_signal_strength_dbm", "-91")]),
            latitude: "48.85".to_string(),
            longitude: "2.35".to_string(),
            timestamp: "2024-03-01T12:00:00.000Z".to_string(),
        }
    }

    fn output(writer: KmlWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.into_inner()).expect("output is not UTF-8")
    }

    #[test]
    fn test_header_starts_document() {
        let mut writer = KmlWriter::new(Vec::new(), "(empty)");
        writer.write_header().expect("header failed");
        let out = output(writer);
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
        assert!(out.contains("<kml xmlns=\"http://earth.google.com/kml/2.1\">\n  <Document>\n"));
        assert_eq!(out.matches("<StyleMap id=").count(), 3);
    }

    #[test]
    fn test_full_document_order() {
        let mut writer = KmlWriter::new(Vec::new(), "(empty)");
        writer.write_header().expect("header failed");
        writer
            .write_placemark(&record("a"), StyleKind::Pass)
            .expect("placemark failed");
        writer
            .write_placemark(&record("b"), StyleKind::Fail)
            .expect("placemark failed");
        writer.write_footer().expect("footer failed");
        assert_eq!(writer.placemark_count(), 2);
        assert!(writer.is_closed());

        let out = output(writer);
        let last_style = out.rfind("</Style>").expect("no styles");
        let first_placemark = out.find("<Placemark>").expect("no placemark");
        assert!(last_style < first_placemark);
        assert!(out.ends_with("  </Document>\n</kml>\n"));
        assert_eq!(out.matches("<Placemark>").count(), 2);
    }

    #[test]
    fn test_placemark_before_header_rejected() {
        let mut writer = KmlWriter::new(Vec::new(), "(empty)");
        let err = writer
            .write_placemark(&record("a"), StyleKind::Pass)
            .unwrap_err();
        assert!(matches!(err, ExportError::Sequence(_)));
        assert!(output(writer).is_empty());
    }

    #[test]
    fn test_second_header_rejected() {
        let mut writer = KmlWriter::new(Vec::new(), "(empty)");
        writer.write_header().expect("header failed");
        assert!(matches!(
            writer.write_header(),
            Err(ExportError::Sequence(_))
        ));
    }

    #[test]
    fn test_footer_before_header_rejected() {
        let mut writer = KmlWriter::new(Vec::new(), "(empty)");
        assert!(matches!(
            writer.write_footer(),
            Err(ExportError::Sequence(_))
        ));
    }

    #[test]
    fn test_nothing_after_footer() {
        let mut writer = KmlWriter::new(Vec::new(), "(empty)");
        writer.write_header().expect("header failed");
        writer.write_footer().expect("footer failed");
        assert!(matches!(
            writer.write_placemark(&record("a"), StyleKind::Pass),
            Err(ExportError::Sequence(_))
        ));
        assert!(matches!(
            writer.write_footer(),
            Err(ExportError::Sequence(_))
        ));
        assert_eq!(output(writer).matches("</kml>").count(), 1);
    }

    #[test]
    fn test_uses_configured_empty_label() {
        let mut writer = KmlWriter::new(Vec::new(), "No label");
        writer.write_header().expect("header failed");
        writer
            .write_placemark(&record(""), StyleKind::Slow)
            .expect("placemark failed");
        assert!(output(writer).contains("<name>No label</name>"));
    }

    /// Sink that counts flushes and fails writes after a byte budget.
    struct LimitedSink {
        written: Vec<u8>,
        limit: usize,
        flushes: usize,
    }

    impl Write for LimitedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.limit {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "disk full"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_placemark_flushes_each_time() {
        let sink = LimitedSink {
            written: Vec::new(),
            limit: usize::MAX,
            flushes: 0,
        };
        let mut writer = KmlWriter::new(sink, "(empty)");
        writer.write_header().expect("header failed");
        for label in ["a", "b", "c"] {
            writer
                .write_placemark(&record(label), StyleKind::Pass)
                .expect("placemark failed");
        }
        assert_eq!(writer.into_inner().flushes, 3);
    }

    #[test]
    fn test_write_failure_propagates() {
        let sink = LimitedSink {
            written: Vec::new(),
            limit: 64,
            flushes: 0,
        };
        let mut writer = KmlWriter::new(sink, "(empty)");
        let err = writer.write_header().unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }

    #[test]
    fn test_write_failure_mid_export_keeps_complete_placemarks() {
        let mut header = KmlWriter::new(Vec::new(), "(empty)");
        header.write_header().expect("header failed");
        let header_len = header.into_inner().len();
        let placemark_len = render_placemark(&record("a"), StyleKind::Pass, "(empty)").len();

        // Room for the header, one placemark and part of a second
        let sink = LimitedSink {
            written: Vec::new(),
            limit: header_len + placemark_len + placemark_len / 2,
            flushes: 0,
        };
        let mut writer = KmlWriter::new(sink, "(empty)");
        writer.write_header().expect("header failed");
        writer
            .write_placemark(&record("a"), StyleKind::Pass)
            .expect("first placemark failed");

        let err = writer
            .write_placemark(&record("b"), StyleKind::Fail)
            .unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
        assert_eq!(writer.placemark_count(), 1);
        assert!(!writer.is_closed());

        let sink = writer.into_inner();
        assert_eq!(sink.flushes, 1);
        let text = String::from_utf8(sink.written).expect("utf-8 output");
        assert!(text.ends_with("    </Placemark>\n"));
        assert!(text.contains("<name>a</name>"));
        assert!(!text.contains("<name>b</name>"));
        assert!(!text.contains("</kml>"));
    }
}
