//! Organisation-chart vertex labels and the parsed input records they are built from.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

mod load;
mod placement;

pub use load::{LoadReport, Skipped, add_member, load_graph};
pub use placement::{Placement, SeedOptions, category_anchor};

pub type Graph = narwhal_graphlib::Graph<Member>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    None = 0,
    Development,
    Marketing,
    Business,
    Accounting,
    Planning,
    Design,
    QualityAssurance,
    HumanResources,
    Finance,
    Team1,
    Team2,
    Team3,
    Team4,
    Team5,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::None,
        Category::Development,
        Category::Marketing,
        Category::Business,
        Category::Accounting,
        Category::Planning,
        Category::Design,
        Category::QualityAssurance,
        Category::HumanResources,
        Category::Finance,
        Category::Team1,
        Category::Team2,
        Category::Team3,
        Category::Team4,
        Category::Team5,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|ix| Self::ALL.get(ix).copied())
    }

    pub fn code(self) -> usize {
        self as usize
    }
}

/// Secondary classifier carried for completeness; ingestion always sets [`Gender::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    None,
    Man,
    Woman,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub category: Category,
    pub gender: Gender,
}

impl Member {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            gender: Gender::None,
        }
    }
}

/// A parsed node record. Fields are optional so one malformed record can be skipped without
/// rejecting the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphNode {
    pub name: Option<String>,
    pub group: Option<i64>,
}

impl GraphNode {
    pub fn new(name: impl Into<String>, group: i64) -> Self {
        Self {
            name: Some(name.into()),
            group: Some(group),
        }
    }
}

/// A parsed link record; `source`/`target` index the accepted node list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphLink {
    pub source: Option<i64>,
    pub target: Option<i64>,
    pub value: Option<i64>,
}

impl GraphLink {
    pub fn new(source: i64, target: i64, value: i64) -> Self {
        Self {
            source: Some(source),
            target: Some(target),
            value: Some(value),
        }
    }
}

/// Viewport the layout is scaled to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
        }
    }
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(Error::InvalidCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Reference length `L0`: the longer side.
    pub fn reference_length(&self) -> f64 {
        self.width.max(self.height)
    }

    pub fn short_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_codes_round_trip_through_the_catalogue() {
        for (ix, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.code(), ix);
            assert_eq!(Category::from_code(ix as i64), Some(*c));
        }
        assert_eq!(Category::from_code(15), None);
        assert_eq!(Category::from_code(-1), None);
    }

    #[test]
    fn canvas_rejects_degenerate_sizes() {
        assert!(Canvas::default().validate().is_ok());
        assert!(Canvas::new(0.0, 10.0).validate().is_err());
        assert!(Canvas::new(10.0, f64::NAN).validate().is_err());
        assert_eq!(Canvas::new(320.0, 480.0).reference_length(), 480.0);
    }
}
