//! Line-level unified diffs between a document and its canonical form.
//!
//! The edit script itself is computed by [`dissimilar`]. Because that crate
//! diffs character sequences, each distinct line is first interned as a single
//! character, so the script operates on whole lines the way a unified diff
//! does. This module only adds the interning and the grouping of the script
//! into context-carrying hunks.

use std::collections::HashMap;

/// First code point handed out by the line interner, right above the
/// surrogate range so every code stays a valid `char`.
const FIRST_CODE: u32 = 0xE000;

/// How a diff line relates to the two documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Line present in both documents.
    Context,
    /// Line only present in the new document.
    Insert,
    /// Line only present in the old document.
    Delete,
}

/// A single line of a diff, still carrying its line terminator if the
/// document had one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineChange<'a> {
    pub kind: ChangeKind,
    pub text: &'a str,
}

impl LineChange<'_> {
    /// Returns `true` for lines present in both documents.
    pub fn is_context(&self) -> bool {
        self.kind == ChangeKind::Context
    }
}

/// A contiguous run of changes surrounded by up to `context` unchanged lines.
///
/// Starts are 1-based like in the unified diff format, and 0 when the
/// corresponding side of the hunk is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<'a> {
    pub old_start: usize,
    pub old_lines: usize,
    pub new_start: usize,
    pub new_lines: usize,
    pub changes: Vec<LineChange<'a>>,
}

impl Hunk<'_> {
    /// The `@@ -start,lines +start,lines @@` header of the hunk.
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_lines, self.new_start, self.new_lines
        )
    }
}

/// Computes the full line edit script between two documents.
pub fn line_changes<'a>(old: &'a str, new: &'a str) -> Vec<LineChange<'a>> {
    let mut interner = LineInterner::default();
    let old_encoded = interner.encode(old);
    let new_encoded = interner.encode(new);
    let mut changes = Vec::new();
    for chunk in dissimilar::diff(&old_encoded, &new_encoded) {
        let (kind, encoded) = match chunk {
            dissimilar::Chunk::Equal(lines) => (ChangeKind::Context, lines),
            dissimilar::Chunk::Delete(lines) => (ChangeKind::Delete, lines),
            dissimilar::Chunk::Insert(lines) => (ChangeKind::Insert, lines),
        };
        for code in encoded.chars() {
            changes.push(LineChange {
                kind,
                text: interner.line(code),
            });
        }
    }
    changes
}

/// Computes the unified diff between two documents with `context` lines of
/// context, one [`Hunk`] per group of nearby changes.
pub fn unified_diff<'a>(old: &'a str, new: &'a str, context: usize) -> Vec<Hunk<'a>> {
    let changes = line_changes(old, new);

    // lines of each document consumed before changes[i]
    let mut positions = Vec::with_capacity(changes.len());
    let (mut old_line, mut new_line) = (0usize, 0usize);
    for change in &changes {
        positions.push((old_line, new_line));
        match change.kind {
            ChangeKind::Context => {
                old_line += 1;
                new_line += 1;
            }
            ChangeKind::Delete => old_line += 1,
            ChangeKind::Insert => new_line += 1,
        }
    }

    // group changed indices whose gap fits inside shared context
    let mut groups: Vec<(usize, usize)> = Vec::new();
    for index in (0..changes.len()).filter(|&i| !changes[i].is_context()) {
        match groups.last_mut() {
            Some((_, last)) if index - *last <= 2 * context + 1 => *last = index,
            _ => groups.push((index, index)),
        }
    }

    groups
        .into_iter()
        .map(|(first, last)| {
            let start = first.saturating_sub(context);
            let end = (last + context).min(changes.len() - 1);
            let slice = &changes[start..=end];
            let old_lines = slice.iter().filter(|c| c.kind != ChangeKind::Insert).count();
            let new_lines = slice.iter().filter(|c| c.kind != ChangeKind::Delete).count();
            let (old_before, new_before) = positions[start];
            Hunk {
                old_start: if old_lines == 0 { old_before } else { old_before + 1 },
                old_lines,
                new_start: if new_lines == 0 { new_before } else { new_before + 1 },
                new_lines,
                changes: slice.to_vec(),
            }
        })
        .collect()
}

/// Interns each distinct line as one character of the private use area.
#[derive(Default)]
struct LineInterner<'a> {
    codes: HashMap<&'a str, char>,
    lines: Vec<&'a str>,
}

impl<'a> LineInterner<'a> {
    fn encode(&mut self, document: &'a str) -> String {
        document
            .split_inclusive('\n')
            .map(|line| {
                *self.codes.entry(line).or_insert_with(|| {
                    let code = u32::try_from(self.lines.len())
                        .ok()
                        .and_then(|index| char::from_u32(FIRST_CODE + index))
                        .expect("too many distinct lines to diff");
                    self.lines.push(line);
                    code
                })
            })
            .collect()
    }

    fn line(&self, code: char) -> &'a str {
        self.lines[(u32::from(code) - FIRST_CODE) as usize]
    }
}
