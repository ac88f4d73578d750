//! Built-in assessment tracks.
//!
//! The content lives in plain `static` tables; [`Catalog::builtin`] validates
//! them into model types once at start-up.

use serde::Serialize;
use thiserror::Error;

use crate::model::{
    AnswerOption, OptionWeight, ParseTrackIdError, Question, Track, TrackError, TrackId,
    WeightError,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no tracks")]
    Empty,
    #[error("duplicate track id {0}")]
    DuplicateTrack(TrackId),
    #[error(transparent)]
    TrackId(#[from] ParseTrackIdError),
    #[error(transparent)]
    Track(#[from] TrackError),
    #[error(transparent)]
    Weight(#[from] WeightError),
}

//
// ─── STATIC TABLES ─────────────────────────────────────────────────────────────
//

pub struct TrackSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub questions: &'static [QuestionSpec],
}

pub struct QuestionSpec {
    pub text: &'static str,
    pub options: &'static [(u8, &'static str)],
}

pub static BUILTIN_TRACKS: &[TrackSpec] = &[
    TrackSpec {
        id: "startup",
        title: "Startup Founder Assessment",
        subtitle: "Product-Market Fit & Growth",
        description: "Validate your product vision and identify UX barriers to growth",
        features: &[
            "User validation & onboarding analysis",
            "Scalable UX foundation review",
            "Growth & conversion optimization",
            "Investor credibility assessment",
        ],
        questions: &[
            QuestionSpec {
                text: "How do you currently validate product decisions with users?",
                options: &[
                    (4, "Regular user interviews, usability testing, and data analysis drive our roadmap"),
                    (3, "We collect user feedback through surveys and support channels"),
                    (2, "We occasionally talk to users but mostly rely on our product intuition"),
                    (1, "We build based on our vision and what we think users need"),
                ],
            },
            QuestionSpec {
                text: "How quickly do new users experience your product's core value?",
                options: &[
                    (4, "Most users have their 'aha moment' within the first session"),
                    (3, "Users typically see value within their first few uses"),
                    (2, "It takes users several sessions to really 'get' our product"),
                    (1, "Users often don't understand our value proposition initially"),
                ],
            },
            QuestionSpec {
                text: "What happens during your user onboarding process?",
                options: &[
                    (4, "Smooth, tested flow with high completion rates and quick value delivery"),
                    (3, "Generally effective onboarding with some optimization opportunities"),
                    (2, "Basic onboarding that gets users started but could be much better"),
                    (1, "High abandonment during signup/onboarding - we know it's problematic"),
                ],
            },
        ],
    },
    TrackSpec {
        id: "product",
        title: "Product Team Assessment",
        subtitle: "UX Integration & Workflow",
        description: "Optimize how UX integrates into your development process",
        features: &[
            "Design-dev collaboration analysis",
            "User research integration review",
            "Quality assurance & testing gaps",
            "Stakeholder alignment assessment",
        ],
        questions: &[
            QuestionSpec {
                text: "How does user research influence your product roadmap and sprint planning?",
                options: &[
                    (4, "User research is core to our planning - we validate before we build"),
                    (3, "We incorporate user feedback into planning when available"),
                    (2, "User input is considered but business requirements usually take priority"),
                    (1, "Product decisions are mainly driven by business needs and technical constraints"),
                ],
            },
            QuestionSpec {
                text: "How well do design specifications translate to the final implemented features?",
                options: &[
                    (4, "Very well - we have strong design-dev collaboration and systems"),
                    (3, "Generally well with occasional miscommunication"),
                    (2, "Often requires multiple iterations to match design intent"),
                    (1, "Frequently differs significantly from original design specifications"),
                ],
            },
            QuestionSpec {
                text: "How do you measure whether delivered features succeed with users?",
                options: &[
                    (4, "Clear success metrics with post-launch tracking and iteration"),
                    (3, "Some success measurement but could be more systematic"),
                    (2, "Limited tracking of user adoption and satisfaction"),
                    (1, "Features are considered done when development is complete"),
                ],
            },
        ],
    },
    TrackSpec {
        id: "business",
        title: "Local Business Assessment",
        subtitle: "Digital Presence & Conversion",
        description: "Transform your website into a customer-generating machine",
        features: &[
            "First impressions & trust analysis",
            "Mobile & local search optimization",
            "Conversion funnel evaluation",
            "Technical performance review",
        ],
        questions: &[
            QuestionSpec {
                text: "When potential customers visit your website, what's their first reaction?",
                options: &[
                    (4, "This business looks professional and established"),
                    (3, "This seems like a legitimate local business"),
                    (2, "I'm not sure if this business is still operating"),
                    (1, "This looks outdated or unprofessional"),
                ],
            },
            QuestionSpec {
                text: "How does your website work on smartphones?",
                options: &[
                    (4, "Perfect - customers can easily browse, call, and contact us"),
                    (3, "Works well - mostly easy to use on phones"),
                    (2, "Functional but could be easier to use on mobile"),
                    (1, "Difficult to use on phones - customers complain"),
                ],
            },
            QuestionSpec {
                text: "What happens after someone visits your website?",
                options: &[
                    (4, "They typically call, visit, or request a quote"),
                    (3, "Some contact us, but could be more"),
                    (2, "A few contact us, but many just browse and leave"),
                    (1, "Very few visitors actually become customers"),
                ],
            },
        ],
    },
];

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Immutable, ordered set of tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Builds a catalog from already validated tracks.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for no tracks and
    /// `CatalogError::DuplicateTrack` when two tracks share an id.
    pub fn new(tracks: Vec<Track>) -> Result<Self, CatalogError> {
        if tracks.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (pos, track) in tracks.iter().enumerate() {
            if tracks[..pos].iter().any(|earlier| earlier.id() == track.id()) {
                return Err(CatalogError::DuplicateTrack(track.id().clone()));
            }
        }
        Ok(Self { tracks })
    }

    /// Validates a static table into a catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for any malformed id, weight, question or track.
    pub fn from_specs(specs: &[TrackSpec]) -> Result<Self, CatalogError> {
        let tracks = specs
            .iter()
            .map(track_from_spec)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(tracks)
    }

    /// The site's three assessment tracks.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the built-in table is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_specs(BUILTIN_TRACKS)
    }

    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    #[must_use]
    pub fn get(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|track| track.id() == id)
    }

    /// Looks a track up by its raw string id; malformed ids simply miss.
    #[must_use]
    pub fn find(&self, raw: &str) -> Option<&Track> {
        self.tracks.iter().find(|track| track.id().as_str() == raw)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

fn track_from_spec(spec: &TrackSpec) -> Result<Track, CatalogError> {
    let id = TrackId::new(spec.id)?;
    let questions = spec
        .questions
        .iter()
        .map(|question| -> Result<Question, CatalogError> {
            let options = question
                .options
                .iter()
                .map(|(weight, text)| -> Result<AnswerOption, CatalogError> {
                    Ok(AnswerOption::new(*text, OptionWeight::new(*weight)?)?)
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Question::new(question.text, options)?)
        })
        .collect::<Result<Vec<_>, _>>()?;
    let features = spec.features.iter().map(|f| (*f).to_string()).collect();

    Ok(Track::new(
        id,
        spec.title,
        spec.subtitle,
        spec.description,
        features,
        questions,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<_> = catalog.tracks().iter().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, ["startup", "product", "business"]);
        for track in catalog.tracks() {
            assert_eq!(track.question_count(), 3);
            assert_eq!(track.features().len(), 4);
            for question in track.questions() {
                let weights: Vec<u8> = question.options().iter().map(|o| o.weight().value()).collect();
                assert_eq!(weights, [4, 3, 2, 1]);
            }
        }
    }

    #[test]
    fn lookup_by_id_and_raw_string() {
        let catalog = Catalog::builtin().unwrap();
        let id = TrackId::new("product").unwrap();
        assert_eq!(catalog.get(&id).unwrap().title(), "Product Team Assessment");
        assert_eq!(catalog.find("business").unwrap().subtitle(), "Digital Presence & Conversion");
        assert!(catalog.find("enterprise").is_none());
        assert!(catalog.find("Not A Slug").is_none());
    }

    #[test]
    fn rejects_bad_weight_in_table() {
        static BAD: &[TrackSpec] = &[TrackSpec {
            id: "bad",
            title: "Bad",
            subtitle: "",
            description: "",
            features: &[],
            questions: &[QuestionSpec {
                text: "Q",
                options: &[(5, "too high")],
            }],
        }];
        let err = Catalog::from_specs(BAD).unwrap_err();
        assert_eq!(err, CatalogError::Weight(WeightError::OutOfRange { got: 5 }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        static DUP: &[TrackSpec] = &[
            TrackSpec {
                id: "same",
                title: "One",
                subtitle: "",
                description: "",
                features: &[],
                questions: &[QuestionSpec {
                    text: "Q",
                    options: &[(1, "a")],
                }],
            },
            TrackSpec {
                id: "same",
                title: "Two",
                subtitle: "",
                description: "",
                features: &[],
                questions: &[QuestionSpec {
                    text: "Q",
                    options: &[(1, "a")],
                }],
            },
        ];
        let err = Catalog::from_specs(DUP).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTrack(id) if id.as_str() == "same"));
    }

    #[test]
    fn rejects_empty_table() {
        assert_eq!(Catalog::from_specs(&[]).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn serializes_as_track_list() {
        let catalog = Catalog::builtin().unwrap();
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json[0]["id"], "startup");
        assert_eq!(json[2]["questions"][1]["options"][0]["weight"], 4);
    }
}
