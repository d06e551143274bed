/*!
# IO

Utilities for reading and writing graphs as JSON.

## Formats

- [`MatrixGraph`]: an array of rows, every cell being `false` (no edge), `true` (unweighted edge)
  or a number (weighted edge), e.g. `[[false, 1], [1, false]]`.
- [`ListGraph`]: an object with the vertex labels and the edge list, e.g.
  `{"vertices": ["A", "B"], "edges": [{"from": 0, "to": 1, "weight": 3, "directed": false}]}`.
  `weight` and `directed` may be omitted; a boolean weight denotes an unweighted edge.

Reading validates exactly like the typed constructors: a ragged row is a shape error, a string
cell a type error, and so on. See [`GraphError`](crate::error::GraphError).

## Traits

- [`JsonRead`] parses a graph from a [`serde_json::Value`], a string or any [`Read`].
- [`JsonWrite`] produces a [`serde_json::Value`] or writes to any [`Write`].
*/

pub mod json;

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde_json::Value;

use crate::prelude::*;

pub use json::*;

/// Trait for graphs that can be read from JSON
pub trait JsonRead: Sized {
    /// Builds a graph from an already parsed JSON value
    ///
    /// # Errors
    /// Returns an error if the value does not describe a valid graph.
    fn try_from_json(value: &Value) -> Result<Self>;

    /// Parses a graph from a JSON string
    fn try_from_json_str(s: &str) -> Result<Self> {
        Self::try_from_json(&serde_json::from_str(s)?)
    }

    /// Reads a graph from a JSON reader
    fn try_read_json<R>(reader: R) -> Result<Self>
    where
        R: Read,
    {
        Self::try_from_json(&serde_json::from_reader(reader)?)
    }

    /// Reads a graph from a JSON file.
    /// Internally wraps the file in a buffered reader.
    fn try_read_json_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        Self::try_read_json(BufReader::new(file))
    }
}

/// Trait for graphs that can be written as JSON
pub trait JsonWrite {
    /// Returns the JSON representation of the graph
    fn to_json(&self) -> Value;

    /// Writes the JSON representation of the graph to `writer`
    fn try_write_json<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        serde_json::to_writer(writer, &self.to_json())?;
        Ok(())
    }

    /// Writes the JSON representation of the graph to a file.
    /// Internally wraps the file in a buffered writer.
    fn try_write_json_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
