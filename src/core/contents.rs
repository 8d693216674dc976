// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decoded file aggregate.

use super::column::Column;
use super::error::{CodecError, Result};
use super::FormatVersion;

/// Names, columns and target format of one AxoGraph file.
///
/// Names and columns correspond by position and always have the same length.
/// Columns cannot be edited in place; replace them wholesale with
/// [`FileContents::replace_columns`] or build a new value.
///
/// `Clone` is a full deep copy: every name and column payload is owned.
///
/// # Example
///
/// ```
/// use axocodec::{Column, FileContents, FormatVersion, LinearSequence};
///
/// let contents = FileContents::new(
///     vec!["Time (s)".to_string(), "Current (A)".to_string()],
///     vec![
///         LinearSequence::new(3, 0.0, 0.01).into(),
///         Column::from(vec![1.0e-9, 2.0e-9, 3.0e-9]),
///     ],
/// )?;
/// let bytes = contents.encode()?;
/// let decoded = axocodec::decode(&bytes)?;
/// assert_eq!(decoded.names(), contents.names());
/// assert_eq!(decoded.format_version(), FormatVersion::AxoGraphX);
/// # Ok::<(), axocodec::CodecError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FileContents {
    names: Vec<String>,
    columns: Vec<Column>,
    format: FormatVersion,
    trailer: Option<Vec<u8>>,
}

impl FileContents {
    /// Build contents targeting the newest format.
    pub fn new(names: Vec<String>, columns: Vec<Column>) -> Result<Self> {
        check_shape(&names, &columns)?;
        Ok(Self {
            names,
            columns,
            format: FormatVersion::newest(),
            trailer: None,
        })
    }

    /// Assemble decoded parts. The shape is guaranteed by the decoder.
    pub(crate) fn from_decoded(
        names: Vec<String>,
        columns: Vec<Column>,
        format: FormatVersion,
        trailer: Option<Vec<u8>>,
    ) -> Self {
        debug_assert_eq!(names.len(), columns.len());
        Self {
            names,
            columns,
            format,
            trailer,
        }
    }

    /// Decode a complete file image.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        crate::io::formats::decode(bytes)
    }

    /// Encode in this value's own format version.
    pub fn encode(&self) -> Result<Vec<u8>> {
        crate::io::formats::encode(self, self.format)
    }

    /// Encode in another format version without changing `self`.
    pub fn encode_as(&self, format: FormatVersion) -> Result<Vec<u8>> {
        crate::io::formats::encode(self, format)
    }

    /// Column names, in column order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Columns, in file order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Format version used when encoding.
    pub fn format_version(&self) -> FormatVersion {
        self.format
    }

    /// Opaque bytes that followed the last AxoGraph X column, if any.
    pub fn trailer(&self) -> Option<&[u8]> {
        self.trailer.as_deref()
    }

    /// Same contents with a different target format.
    pub fn with_format(mut self, format: FormatVersion) -> Self {
        self.format = format;
        self
    }

    /// Same contents with the trailer replaced.
    pub fn with_trailer(mut self, trailer: Option<Vec<u8>>) -> Self {
        self.trailer = trailer.filter(|t| !t.is_empty());
        self
    }

    /// Replace every name and column at once.
    pub fn replace_columns(&mut self, names: Vec<String>, columns: Vec<Column>) -> Result<()> {
        check_shape(&names, &columns)?;
        self.names = names;
        self.columns = columns;
        Ok(())
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Name and column at `index`.
    pub fn get(&self, index: usize) -> Option<(&str, &Column)> {
        Some((self.names.get(index)?.as_str(), self.columns.get(index)?))
    }

    /// Iterate over `(name, column)` pairs in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Column)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }

    /// Split into names, columns and format.
    pub fn into_parts(self) -> (Vec<String>, Vec<Column>, FormatVersion) {
        (self.names, self.columns, self.format)
    }
}

fn check_shape(names: &[String], columns: &[Column]) -> Result<()> {
    if names.len() != columns.len() {
        return Err(CodecError::invalid_column(
            names.len().min(columns.len()),
            format!(
                "{} names supplied for {} columns",
                names.len(),
                columns.len()
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::column::RawArray;

    fn sample() -> FileContents {
        FileContents::new(
            vec!["a".to_string(), String::new(), "a".to_string()],
            vec![
                Column::from(vec![1i16]),
                Column::from(vec![2i32]),
                Column::from(vec![3.0f32]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_new_defaults_to_newest_format() {
        let contents = sample();
        assert_eq!(contents.format_version(), FormatVersion::AxoGraphX);
        assert_eq!(contents.len(), 3);
        assert_eq!(contents.trailer(), None);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let err = FileContents::new(vec!["x".to_string()], vec![]).unwrap_err();
        assert!(matches!(err, CodecError::InvalidColumn { column: 0, .. }));

        let mut contents = sample();
        assert!(contents
            .replace_columns(vec![], vec![Column::from(vec![1.0f64])])
            .is_err());
        assert_eq!(contents.len(), 3);
    }

    #[test]
    fn test_duplicate_and_empty_names() {
        let contents = sample();
        assert_eq!(contents.names(), &["a", "", "a"]);
        let (name, column) = contents.get(1).unwrap();
        assert_eq!(name, "");
        assert_eq!(column.value(0).unwrap(), 2.0);
    }

    #[test]
    fn test_with_format_and_trailer() {
        let contents = sample()
            .with_format(FormatVersion::OldGraph)
            .with_trailer(Some(vec![]));
        assert_eq!(contents.format_version(), FormatVersion::OldGraph);
        assert_eq!(contents.trailer(), None);

        let contents = contents.with_trailer(Some(vec![1, 2]));
        assert_eq!(contents.trailer(), Some(&[1u8, 2][..]));
    }

    #[test]
    fn test_deep_copy() {
        let original = sample();
        let mut copy = original.clone();
        copy.replace_columns(
            vec!["b".to_string()],
            vec![Column::Raw(RawArray::Float64(vec![0.0]))],
        )
        .unwrap();
        assert_eq!(original.len(), 3);
        assert_eq!(copy.len(), 1);
    }

    #[test]
    fn test_iter_pairs() {
        let contents = sample();
        let kinds: Vec<_> = contents.iter().map(|(_, c)| c.kind()).collect();
        assert_eq!(kinds.len(), 3);
        let (names, columns, format) = contents.into_parts();
        assert_eq!(names.len(), columns.len());
        assert_eq!(format, FormatVersion::AxoGraphX);
    }
}
