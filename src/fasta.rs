// Local Crate Imports
use crate::Protein;

// Constants ===========================================================================================================

const HEADER_MARKER: char = '>';
const TERMINATOR: char = '*';

// Public API ==========================================================================================================

impl Protein {
    #[must_use]
    pub fn new(header: Option<&str>, sequence: impl AsRef<str>) -> Self {
        let sequence = sequence
            .as_ref()
            .trim_end_matches(TERMINATOR)
            .to_ascii_uppercase();
        let header = header.map(ToOwned::to_owned);

        Self { header, sequence }
    }

    /// Reads every record from FASTA-formatted text
    ///
    /// Each `>` line starts a new record, and every following non-blank line is upper-cased and appended to its
    /// sequence. Any trailing `*` terminator is stripped. Sequence lines before the first header form a record of
    /// their own, without a header.
    #[must_use]
    pub fn parse_fasta(text: &str) -> Vec<Self> {
        let mut proteins = Vec::new();
        let mut header = None;
        let mut sequence = String::new();

        for line in text.lines().map(str::trim) {
            if let Some(next_header) = line.strip_prefix(HEADER_MARKER) {
                if header.is_some() || !sequence.is_empty() {
                    proteins.push(Self::new(header, &sequence));
                }
                header = Some(next_header.trim());
                sequence.clear();
            } else {
                sequence.push_str(line);
            }
        }
        if header.is_some() || !sequence.is_empty() {
            proteins.push(Self::new(header, &sequence));
        }

        proteins
    }

    #[must_use]
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }
}

// Module Tests ========================================================================================================
