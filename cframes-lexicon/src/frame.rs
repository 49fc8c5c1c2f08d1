use serde::{Deserialize, Serialize};

/// The twelve connotation dimensions, in dataset column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    /// Perspective(writer->theme)
    WriterTheme,
    /// Perspective(writer->agent)
    WriterAgent,
    /// Perspective(agent->theme)
    AgentTheme,
    /// Effect(theme)
    EffectTheme,
    /// Effect(agent)
    EffectAgent,
    /// Value(theme)
    ValueTheme,
    /// Value(agent)
    ValueAgent,
    /// State(theme)
    StateTheme,
    /// State(agent)
    StateAgent,
    /// Perspective(reader->theme)
    ReaderTheme,
    /// Perspective(reader->agent)
    ReaderAgent,
    /// Perspective(theme->agent)
    ThemeAgent,
}

impl Dimension {
    pub const ALL: [Dimension; 12] = [
        Dimension::WriterTheme,
        Dimension::WriterAgent,
        Dimension::AgentTheme,
        Dimension::EffectTheme,
        Dimension::EffectAgent,
        Dimension::ValueTheme,
        Dimension::ValueAgent,
        Dimension::StateTheme,
        Dimension::StateAgent,
        Dimension::ReaderTheme,
        Dimension::ReaderAgent,
        Dimension::ThemeAgent,
    ];

    /// Column label as used in the dataset header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::WriterTheme => "Perspective(writer->theme)",
            Self::WriterAgent => "Perspective(writer->agent)",
            Self::AgentTheme => "Perspective(agent->theme)",
            Self::EffectTheme => "Effect(theme)",
            Self::EffectAgent => "Effect(agent)",
            Self::ValueTheme => "Value(theme)",
            Self::ValueAgent => "Value(agent)",
            Self::StateTheme => "State(theme)",
            Self::StateAgent => "State(agent)",
            Self::ReaderTheme => "Perspective(reader->theme)",
            Self::ReaderAgent => "Perspective(reader->agent)",
            Self::ThemeAgent => "Perspective(theme->agent)",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.label() == label)
    }

    fn column(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Connotation scores for one verb.
///
/// Scores missing from the source line are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnotationFrame {
    scores: [Option<f32>; 12],
}

impl ConnotationFrame {
    /// Build from scores in column order; extra values are ignored.
    pub fn from_scores(values: impl IntoIterator<Item = f32>) -> Self {
        let mut scores = [None; 12];
        for (slot, value) in scores.iter_mut().zip(values) {
            *slot = Some(value);
        }
        Self { scores }
    }

    pub fn score(&self, dimension: Dimension) -> Option<f32> {
        self.scores[dimension.column()]
    }

    pub fn set(&mut self, dimension: Dimension, value: f32) {
        self.scores[dimension.column()] = Some(value);
    }

    /// Present scores with their dimension, in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f32)> + '_ {
        Dimension::ALL
            .iter()
            .filter_map(move |&d| self.score(d).map(|score| (d, score)))
    }
}
