// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-run statistics rows and their CSV output.
//!
//! Every engine run maintains one [`DtpRuntimeRow`]; the centrality drivers
//! append a row per source into a [`DtpRuntimeCollection`]. Output is a
//! CSV-like stream with a fixed column order; a header line is written only
//! when the target file is newly created or empty, so repeated appends
//! produce one coherent table.
//!
//! Writing is the only fallible surface here — an unwritable CSV never
//! affects the computation that produced the rows.

use std::fmt;
use std::io::{Seek, SeekFrom, Write};
use std::ops::AddAssign;
use std::path::Path;

use crate::errors::StatisticsError;
use crate::graph::static_graph::VertexId;

/// Statistics about one execution of the DTP engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DtpRuntimeRow {
    /// The name of the problem being solved.
    pub name_of_problem: String,
    /// The name of the instance (graph).
    pub name: String,
    pub source_id: VertexId,
    pub number_of_vertices: usize,
    pub number_of_generators: usize,
    pub number_of_loads: usize,
    pub number_of_edges: usize,
    pub number_of_scanned_edges: usize,
    pub number_of_edges_producing_no_cycle: usize,
    pub number_of_relaxed_edges: usize,
    pub number_of_labels: usize,
    pub global_elapsed_milliseconds: f64,
}

impl Default for DtpRuntimeRow {
    fn default() -> Self {
        Self {
            name_of_problem: "DTP".to_string(),
            name: String::new(),
            source_id: 0,
            number_of_vertices: 0,
            number_of_generators: 0,
            number_of_loads: 0,
            number_of_edges: 0,
            number_of_scanned_edges: 0,
            number_of_edges_producing_no_cycle: 0,
            number_of_relaxed_edges: 0,
            number_of_labels: 0,
            global_elapsed_milliseconds: 0.0,
        }
    }
}

impl DtpRuntimeRow {
    /// Reset every field to its initial state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The CSV header line (without trailing newline).
    pub fn header_line() -> String {
        [
            "NameOfProblem",
            "Name",
            "SourceId",
            "NumberOfVertices",
            "NumberOfGenerators",
            "NumberOfLoads",
            "NumberOfEdges",
            "NumberOfScannedEdges",
            "NumberOfEdgesProducingNoCycle",
            "NumberOfRelaxedEdges",
            "NumberOfLabels",
            "GlobalElapsedMilliseconds",
        ]
        .join(",")
    }

    /// The CSV content line of this row (without trailing newline).
    pub fn content_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            self.name_of_problem,
            self.name,
            self.source_id,
            self.number_of_vertices,
            self.number_of_generators,
            self.number_of_loads,
            self.number_of_edges,
            self.number_of_scanned_edges,
            self.number_of_edges_producing_no_cycle,
            self.number_of_relaxed_edges,
            self.number_of_labels,
            self.global_elapsed_milliseconds,
        )
    }

    pub fn write_header(writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "{}", Self::header_line())
    }

    pub fn write_content(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "{}", self.content_line())
    }

    /// Append this row to `path`, creating the file if needed. The header
    /// is emitted first when the file is empty; with `overwrite` the file
    /// is truncated beforehand.
    pub fn write_row_to_file(
        &self,
        path: impl AsRef<Path>,
        overwrite: bool,
    ) -> Result<(), StatisticsError> {
        let mut file = open_statistics_file(path.as_ref(), overwrite)?;
        if file_is_empty(&mut file)? {
            Self::write_header(&mut file)?;
        }
        self.write_content(&mut file)?;
        Ok(())
    }
}

impl AddAssign<&DtpRuntimeRow> for DtpRuntimeRow {
    /// Accumulate the counters of `rhs`; identity fields are untouched.
    fn add_assign(&mut self, rhs: &DtpRuntimeRow) {
        self.number_of_scanned_edges += rhs.number_of_scanned_edges;
        self.number_of_edges_producing_no_cycle += rhs.number_of_edges_producing_no_cycle;
        self.number_of_relaxed_edges += rhs.number_of_relaxed_edges;
        self.number_of_labels += rhs.number_of_labels;
        self.global_elapsed_milliseconds += rhs.global_elapsed_milliseconds;
    }
}

impl fmt::Display for DtpRuntimeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content_line())
    }
}

/// An appendable, summable collection of runtime rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DtpRuntimeCollection {
    rows: Vec<DtpRuntimeRow>,
}

impl DtpRuntimeCollection {
    pub fn rows(&self) -> &[DtpRuntimeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Write header plus every row to `writer`.
    pub fn write_to(&self, writer: &mut impl Write) -> std::io::Result<()> {
        DtpRuntimeRow::write_header(writer)?;
        for row in &self.rows {
            row.write_content(writer)?;
        }
        Ok(())
    }

    /// Append all rows to `path`, creating the file (and header) if needed.
    pub fn write_to_file(
        &self,
        path: impl AsRef<Path>,
        overwrite: bool,
    ) -> Result<(), StatisticsError> {
        let mut file = open_statistics_file(path.as_ref(), overwrite)?;
        if file_is_empty(&mut file)? {
            DtpRuntimeRow::write_header(&mut file)?;
        }
        for row in &self.rows {
            row.write_content(&mut file)?;
        }
        Ok(())
    }
}

impl AddAssign<DtpRuntimeRow> for DtpRuntimeCollection {
    fn add_assign(&mut self, row: DtpRuntimeRow) {
        self.rows.push(row);
    }
}

impl AddAssign<&DtpRuntimeCollection> for DtpRuntimeCollection {
    /// Merge another collection; the reduction used after parallel runs.
    fn add_assign(&mut self, rhs: &DtpRuntimeCollection) {
        self.rows.extend(rhs.rows.iter().cloned());
    }
}

fn open_statistics_file(path: &Path, overwrite: bool) -> Result<std::fs::File, StatisticsError> {
    let mut options = std::fs::OpenOptions::new();
    options.create(true).write(true);
    if overwrite {
        options.truncate(true);
    } else {
        options.append(true);
    }
    options.open(path).map_err(|source| StatisticsError::Open {
        path: path.display().to_string(),
        source,
    })
}

fn file_is_empty(file: &mut std::fs::File) -> Result<bool, StatisticsError> {
    let end = file.seek(SeekFrom::End(0))?;
    Ok(end == 0)
}
