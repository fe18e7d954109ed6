//! Shallow phrase chunking
//!
//! A cascade of chunk rules written as regular expressions over tags, e.g.
//! `NP: {<DT>?<JJ>*<NN.*>+}`. Rules run in grammar order; each rule scans the
//! current top-level sequence (tokens by tag, earlier chunks by label) left to
//! right and wraps every non-overlapping leftmost-longest match into a new
//! chunk. Later rules can therefore build on earlier chunks (`PP: {<IN><NP>}`).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::{FeatureError, FeatureResult};
use crate::text::tagger::TaggedSequence;

/// Production rules used for feature extraction
pub const STANDARD_GRAMMAR: &str = r"
    DTR: {<DT><DT>}
    NP: {<DT>?<JJ>*<NN.*>+}
    PP: {<IN><NP>}
    VGP: {<VBG><NP | PP>}
    VP: {<V.*><NP | PP>}
    CLAUSE: {<NP><VP>}
";

// NOTE: expect() is acceptable here: the grammar is a constant covered by tests.
static STANDARD: LazyLock<ChunkGrammar> =
    LazyLock::new(|| ChunkGrammar::parse(STANDARD_GRAMMAR).expect("Invalid standard chunk grammar"));

static RULE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z]+)\s*:\s*\{(.+)\}\s*$").expect("Invalid regex: chunk rule line")
});

/// Phrase labels produced by the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhraseLabel {
    /// Noun phrase
    Np,
    /// Prepositional phrase
    Pp,
    /// Verb phrase
    Vp,
    /// Gerund verb phrase
    Vgp,
    /// Noun phrase followed by a verb phrase
    Clause,
    /// Determiner pair
    Dtr,
}

impl PhraseLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhraseLabel::Np => "NP",
            PhraseLabel::Pp => "PP",
            PhraseLabel::Vp => "VP",
            PhraseLabel::Vgp => "VGP",
            PhraseLabel::Clause => "CLAUSE",
            PhraseLabel::Dtr => "DTR",
        }
    }
}

impl fmt::Display for PhraseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhraseLabel {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NP" => Ok(PhraseLabel::Np),
            "PP" => Ok(PhraseLabel::Pp),
            "VP" => Ok(PhraseLabel::Vp),
            "VGP" => Ok(PhraseLabel::Vgp),
            "CLAUSE" => Ok(PhraseLabel::Clause),
            "DTR" => Ok(PhraseLabel::Dtr),
            other => Err(FeatureError::Config(format!("unknown phrase label '{}'", other))),
        }
    }
}

/// One grammar production
#[derive(Debug, Clone)]
struct ChunkRule {
    label: PhraseLabel,
    pattern: Regex,
}

/// Ordered chunk rules
#[derive(Debug, Clone)]
pub struct ChunkGrammar {
    rules: Vec<ChunkRule>,
}

impl ChunkGrammar {
    /// The grammar in [`STANDARD_GRAMMAR`]
    pub fn standard() -> &'static ChunkGrammar {
        &STANDARD
    }

    /// Parse one `LABEL: {tag pattern}` rule per non-blank line.
    pub fn parse(text: &str) -> FeatureResult<Self> {
        let mut rules = Vec::new();

        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let caps = RULE_LINE
                .captures(line)
                .ok_or_else(|| FeatureError::Config(format!("malformed chunk rule '{}'", line.trim())))?;
            let label: PhraseLabel = caps[1].parse()?;
            let pattern = Regex::new(&tag_pattern_to_regex(&caps[2])?).map_err(|e| {
                FeatureError::Config(format!("invalid tag pattern in rule '{}': {}", line.trim(), e))
            })?;
            rules.push(ChunkRule { label, pattern });
        }

        if rules.is_empty() {
            return Err(FeatureError::Config("chunk grammar has no rules".to_string()));
        }
        Ok(Self { rules })
    }

    /// Labels in rule order
    pub fn labels(&self) -> Vec<PhraseLabel> {
        self.rules.iter().map(|r| r.label).collect()
    }
}

/// Translate `<DT>?<NN.*>+` into a regex over a `<TAG><TAG>...` string.
fn tag_pattern_to_regex(pattern: &str) -> FeatureResult<String> {
    let compact: String = pattern.chars().filter(|c| !c.is_whitespace()).collect();

    let mut depth = 0usize;
    for c in compact.chars() {
        match c {
            '<' if depth == 0 => depth = 1,
            '>' if depth == 1 => depth = 0,
            '<' | '>' => {
                return Err(FeatureError::Config(format!("unbalanced tag pattern '{}'", pattern)))
            }
            _ => {}
        }
    }
    if depth != 0 || !compact.contains('<') {
        return Err(FeatureError::Config(format!("unbalanced tag pattern '{}'", pattern)));
    }

    Ok(compact
        .replace('<', "(?:<(?:")
        .replace('>', ")>)")
        .replace('.', "[^{}<>]"))
}

/// A node of the chunk forest: a token index or a phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ChunkNode {
    Leaf(usize),
    Phrase(Phrase),
}

impl ChunkNode {
    fn start(&self) -> usize {
        match self {
            ChunkNode::Leaf(i) => *i,
            ChunkNode::Phrase(p) => p.start,
        }
    }

    fn end(&self) -> usize {
        match self {
            ChunkNode::Leaf(i) => i + 1,
            ChunkNode::Phrase(p) => p.end,
        }
    }
}

/// A labelled chunk covering tokens `start..end`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phrase {
    pub label: PhraseLabel,
    pub start: usize,
    pub end: usize,
    pub children: Vec<ChunkNode>,
}

/// Label plus covered token range, without structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseSpan {
    pub label: PhraseLabel,
    pub start: usize,
    pub end: usize,
}

/// Top-level phrase counts per label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseCounts {
    pub np: usize,
    pub pp: usize,
    pub vp: usize,
    pub vgp: usize,
    pub clause: usize,
    pub dtr: usize,
}

impl PhraseCounts {
    pub fn get(&self, label: PhraseLabel) -> usize {
        match label {
            PhraseLabel::Np => self.np,
            PhraseLabel::Pp => self.pp,
            PhraseLabel::Vp => self.vp,
            PhraseLabel::Vgp => self.vgp,
            PhraseLabel::Clause => self.clause,
            PhraseLabel::Dtr => self.dtr,
        }
    }

    fn bump(&mut self, label: PhraseLabel) {
        let slot = match label {
            PhraseLabel::Np => &mut self.np,
            PhraseLabel::Pp => &mut self.pp,
            PhraseLabel::Vp => &mut self.vp,
            PhraseLabel::Vgp => &mut self.vgp,
            PhraseLabel::Clause => &mut self.clause,
            PhraseLabel::Dtr => &mut self.dtr,
        };
        *slot += 1;
    }
}

/// Result of chunking one tagged sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkForest {
    nodes: Vec<ChunkNode>,
}

impl ChunkForest {
    /// Top-level nodes in token order
    pub fn nodes(&self) -> &[ChunkNode] {
        &self.nodes
    }

    /// Top-level phrases only; phrases nested inside another phrase are not included.
    pub fn top_level(&self) -> impl Iterator<Item = &Phrase> {
        self.nodes.iter().filter_map(|n| match n {
            ChunkNode::Phrase(p) => Some(p),
            ChunkNode::Leaf(_) => None,
        })
    }

    /// Counts of top-level phrases per label
    pub fn counts(&self) -> PhraseCounts {
        let mut counts = PhraseCounts::default();
        for phrase in self.top_level() {
            counts.bump(phrase.label);
        }
        counts
    }

    /// Every phrase, nested ones included, in pre-order
    pub fn spans(&self) -> Vec<PhraseSpan> {
        fn walk(nodes: &[ChunkNode], out: &mut Vec<PhraseSpan>) {
            for node in nodes {
                if let ChunkNode::Phrase(p) = node {
                    out.push(PhraseSpan {
                        label: p.label,
                        start: p.start,
                        end: p.end,
                    });
                    walk(&p.children, out);
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.nodes, &mut out);
        out
    }
}

/// Cascaded regular-expression chunker
#[derive(Debug, Clone)]
pub struct PhraseChunker {
    grammar: ChunkGrammar,
}

impl Default for PhraseChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl PhraseChunker {
    /// Chunker with the standard grammar
    pub fn new() -> Self {
        Self {
            grammar: ChunkGrammar::standard().clone(),
        }
    }

    /// Chunker with a custom grammar
    pub fn with_grammar(grammar: ChunkGrammar) -> Self {
        Self { grammar }
    }

    /// Apply every rule in order and return the resulting forest.
    pub fn chunk(&self, sequence: &TaggedSequence) -> ChunkForest {
        let mut nodes: Vec<ChunkNode> = (0..sequence.len()).map(ChunkNode::Leaf).collect();

        for rule in &self.grammar.rules {
            nodes = apply_rule(rule, nodes, sequence);
        }

        let forest = ChunkForest { nodes };
        debug!(counts = ?forest.counts(), "Chunked {} tokens", sequence.len());
        forest
    }
}

fn symbol<'a>(node: &ChunkNode, sequence: &'a TaggedSequence) -> &'a str {
    match node {
        ChunkNode::Leaf(i) => sequence.tokens()[*i].tag.as_str(),
        ChunkNode::Phrase(p) => p.label.as_str(),
    }
}

fn apply_rule(rule: &ChunkRule, nodes: Vec<ChunkNode>, sequence: &TaggedSequence) -> Vec<ChunkNode> {
    let mut encoded = String::new();
    let mut offsets = Vec::with_capacity(nodes.len());
    for node in &nodes {
        offsets.push(encoded.len());
        encoded.push('<');
        encoded.push_str(symbol(node, sequence));
        encoded.push('>');
    }

    let index_at = |offset: usize| -> Option<usize> {
        if offset == encoded.len() {
            Some(nodes.len())
        } else {
            offsets.binary_search(&offset).ok()
        }
    };

    let mut matches = Vec::new();
    for m in rule.pattern.find_iter(&encoded) {
        if let (Some(first), Some(last)) = (index_at(m.start()), index_at(m.end())) {
            if last > first {
                matches.push((first, last));
            }
        }
    }

    if matches.is_empty() {
        return nodes;
    }

    let mut result = Vec::with_capacity(nodes.len());
    let mut pending = matches.into_iter().peekable();
    let mut group: Vec<ChunkNode> = Vec::new();
    let mut group_end = 0;

    for (i, node) in nodes.into_iter().enumerate() {
        if group.is_empty() {
            if let Some(&(first, last)) = pending.peek() {
                if i == first {
                    group_end = last;
                    pending.next();
                }
            }
        }

        if i < group_end {
            group.push(node);
            if i + 1 == group_end {
                let children = std::mem::take(&mut group);
                let start = children.first().map_or(i, ChunkNode::start);
                let end = children.last().map_or(i + 1, ChunkNode::end);
                result.push(ChunkNode::Phrase(Phrase {
                    label: rule.label,
                    start,
                    end,
                    children,
                }));
                group_end = 0;
            }
        } else {
            result.push(node);
        }
    }

    result
}
