//! Text rendering of simulation reports.

use {
    crate::Report,
    std::{fmt, io},
};

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Result for {} algorithm:", self.algorithm)?;
        writeln!(f, "Number of changes: {}", self.faults())?;
        f.write_str("Sequence of answers: ")?;
        for answer in self.answers() {
            write!(f, "{answer} ")?;
        }
        f.write_str("\n\n")
    }
}

/// Writes the reports one after another.
pub fn write_reports<W: io::Write>(mut out: W, reports: &[Report]) -> io::Result<()> {
    for report in reports {
        write!(out, "{report}")?;
    }
    out.flush()
}

/// Renders the reports into a string.
pub fn render(reports: &[Report]) -> String {
    reports.iter().map(ToString::to_string).collect()
}
