//! Alignment of detected subject/object spans with gold frame elements.
//!
//! The Connotation Frame roles "Agent" and "Theme" are relabelled with the
//! names of the frame elements that coincide with the logical subject and
//! object. A passive subject is the logical theme, so the two accumulators
//! swap when the detected subject is passive.

use crate::{Detections, FrameElement, RoleDetection};
use serde::{Deserialize, Serialize};

/// How a detected span is compared with a gold frame element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignPolicy {
    /// Both boundaries are equal
    Exact,
    /// Either detected offset equals either FE offset
    #[default]
    SharedBoundary,
    /// The detected span lies inside the FE span
    Contained,
    /// The FE text contains the detected head text
    Substring,
}

impl std::str::FromStr for AlignPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "exact" => Ok(Self::Exact),
            "shared_boundary" | "boundary" => Ok(Self::SharedBoundary),
            "contained" => Ok(Self::Contained),
            "substring" => Ok(Self::Substring),
            other => Err(format!("unknown align policy '{}'", other)),
        }
    }
}

/// Connotation Frame role being mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CfRole {
    Agent,
    Theme,
}

impl CfRole {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Agent => "Agent",
            Self::Theme => "Theme",
        }
    }
}

/// Frame elements mapped onto one Connotation Frame role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleMapping {
    /// Role was detected; FE names that coincided with it (may be empty)
    Mapped(Vec<String>),
    /// No syntactic role was detected
    NotPossible,
}

impl RoleMapping {
    pub fn frame_elements(&self) -> &[String] {
        match self {
            Self::Mapped(names) => names,
            Self::NotPossible => &[],
        }
    }

    pub fn is_possible(&self) -> bool {
        matches!(self, Self::Mapped(_))
    }

    /// Render with the role name, e.g. `Agent: Experiencer`.
    pub fn describe(&self, role: CfRole) -> String {
        match self {
            Self::Mapped(names) if names.is_empty() => format!("{}: -", role.name()),
            Self::Mapped(names) => format!("{}: {}", role.name(), names.join(", ")),
            Self::NotPossible => format!(
                "No {} role mapping possible.",
                role.name().to_lowercase()
            ),
        }
    }
}

/// Agent and Theme mappings for one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAlignment {
    pub agent: RoleMapping,
    pub theme: RoleMapping,
    /// True if the assignment was swapped for a passive subject
    pub passive: bool,
}

impl std::fmt::Display for RoleAlignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {}",
            self.agent.describe(CfRole::Agent),
            self.theme.describe(CfRole::Theme)
        )?;
        if self.passive {
            f.write_str(" (passive)")?;
        }
        Ok(())
    }
}

/// Aligns detections against gold frame elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanAligner {
    policy: AlignPolicy,
}

impl SpanAligner {
    pub fn new(policy: AlignPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> AlignPolicy {
        self.policy
    }

    /// Returns true if `detection` coincides with `fe` in `sentence`.
    ///
    /// An inverted frame element never coincides.
    pub fn coincides(&self, sentence: &str, detection: &RoleDetection, fe: &FrameElement) -> bool {
        if !fe.is_well_formed() {
            return false;
        }
        let fe_span = fe.span();
        match self.policy {
            AlignPolicy::Exact => detection.span == fe_span,
            AlignPolicy::SharedBoundary => detection.span.shares_boundary(&fe_span),
            AlignPolicy::Contained => fe_span.contains(&detection.span),
            AlignPolicy::Substring => fe_span.text(sentence).contains(detection.head_text.as_str()),
        }
    }

    /// Map one detection onto the frame elements it coincides with.
    pub fn map_role(
        &self,
        sentence: &str,
        detection: Option<&RoleDetection>,
        fes: &[FrameElement],
    ) -> RoleMapping {
        let detection = match detection {
            Some(detection) => detection,
            None => return RoleMapping::NotPossible,
        };
        let mut names: Vec<String> = Vec::new();
        for fe in fes {
            if self.coincides(sentence, detection, fe) && !names.contains(&fe.name) {
                names.push(fe.name.clone());
            }
        }
        RoleMapping::Mapped(names)
    }

    /// Align subject and object, swapping Agent and Theme for a passive subject.
    pub fn align(&self, sentence: &str, detections: &Detections, fes: &[FrameElement]) -> RoleAlignment {
        let subject = self.map_role(sentence, detections.subject.as_ref(), fes);
        let object = self.map_role(sentence, detections.object.as_ref(), fes);
        let passive = detections.is_passive();

        let (agent, theme) = if passive {
            (object, subject)
        } else {
            (subject, object)
        };
        tracing::debug!(policy = ?self.policy, passive, ?agent, ?theme, "aligned roles");

        RoleAlignment {
            agent,
            theme,
            passive,
        }
    }
}

