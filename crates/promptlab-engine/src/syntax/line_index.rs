use super::types::Point;

/// Converts byte offsets into 1-based `(line, column)` points.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset at which each line starts. Always begins with `0`.
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(text.match_indices('\n').map(|(idx, _)| idx + 1));
        Self { starts }
    }

    /// Point for `offset`. Offsets past the last line start resolve onto the last line.
    pub fn point(&self, offset: usize) -> Point {
        let line = self.starts.partition_point(|&start| start <= offset);
        let line_start = self.starts[line - 1];
        Point {
            line,
            column: offset - line_start + 1,
        }
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}
