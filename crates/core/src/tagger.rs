use crate::model::{BioTag, CategorizedToken, Category, TaggedToken};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Single-pass BIO tagger.
///
/// Holds the only run state of the pipeline: the category of the run that is
/// currently open, if any. The state is never reset by tree structure, only
/// by an unnamed token or a category change.
#[derive(Debug, Default, Clone)]
pub struct BioTagger {
    current: Option<Category>,
}

impl BioTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Category of the open run, `None` right after an `O-other` or at start.
    pub fn current_category(&self) -> Option<Category> {
        self.current
    }

    pub fn next_tag(&mut self, token: &CategorizedToken) -> BioTag {
        if !token.is_named {
            self.current = None;
            return BioTag::Outside;
        }

        let category = token.category;
        if self.current == Some(category) {
            BioTag::Inside(category)
        } else {
            self.current = Some(category);
            BioTag::Begin(category)
        }
    }

    pub fn push(&mut self, token: CategorizedToken) -> TaggedToken {
        let tag = self.next_tag(&token);
        TaggedToken { token, tag }
    }

    pub fn tag_all(&mut self, tokens: impl IntoIterator<Item = CategorizedToken>) -> Vec<TaggedToken> {
        tokens.into_iter().map(|t| self.push(t)).collect()
    }
}

/// Tags a whole traversal with a fresh tagger.
pub fn tag(tokens: impl IntoIterator<Item = CategorizedToken>) -> Vec<TaggedToken> {
    let tagged = BioTagger::new().tag_all(tokens);
    debug!(tokens = tagged.len(), "Assigned BIO tags");
    tagged
}

/// A chunk: one `B-` tag and the `I-` tags that follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Run {
    pub category: Category,
    pub start: usize,
    pub len: usize,
}

impl Run {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Groups a tag sequence into runs. `O-other` tokens belong to none.
pub fn runs(tags: impl IntoIterator<Item = BioTag>) -> Vec<Run> {
    let mut out: Vec<Run> = Vec::new();
    let mut open = false;

    for (index, tag) in tags.into_iter().enumerate() {
        match tag {
            BioTag::Begin(category) => {
                out.push(Run {
                    category,
                    start: index,
                    len: 1,
                });
                open = true;
            }
            BioTag::Inside(category) => {
                let continues = open && out.last().is_some_and(|r| r.category == category);
                if continues {
                    if let Some(run) = out.last_mut() {
                        run.len += 1;
                    }
                } else {
                    // Orphan I- tag; treat it as the start of its own chunk.
                    out.push(Run {
                        category,
                        start: index,
                        len: 1,
                    });
                    open = true;
                }
            }
            BioTag::Outside => open = false,
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunViolation {
    #[error("token {index}: {tag} does not continue a run of the same category")]
    OrphanInside { index: usize, tag: BioTag },
    #[error("token {index}: unnamed token tagged {tag}")]
    UnnamedInRun { index: usize, tag: BioTag },
    #[error("token {index}: named token tagged O-other")]
    NamedOutside { index: usize },
    #[error("token {index}: tag {tag} disagrees with token category {category}")]
    CategoryMismatch {
        index: usize,
        tag: BioTag,
        category: Category,
    },
}

/// Checks the BIO invariants over a tagged sequence, reporting the first violation.
pub fn validate_runs(tokens: &[TaggedToken]) -> Result<(), RunViolation> {
    let mut previous: Option<BioTag> = None;

    for (index, tagged) in tokens.iter().enumerate() {
        let tag = tagged.tag;
        match (tagged.token.is_named, tag) {
            (false, BioTag::Outside) => {}
            (false, tag) => return Err(RunViolation::UnnamedInRun { index, tag }),
            (true, BioTag::Outside) => return Err(RunViolation::NamedOutside { index }),
            (true, BioTag::Begin(c) | BioTag::Inside(c)) if c != tagged.token.category => {
                return Err(RunViolation::CategoryMismatch {
                    index,
                    tag,
                    category: tagged.token.category,
                });
            }
            _ => {}
        }

        if let BioTag::Inside(c) = tag {
            let continues = previous.and_then(|p| p.category()) == Some(c);
            if !continues {
                return Err(RunViolation::OrphanInside { index, tag });
            }
        }
        previous = Some(tag);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(category: Category) -> CategorizedToken {
        CategorizedToken::named("node", "x", category)
    }

    fn unnamed() -> CategorizedToken {
        CategorizedToken::unnamed(";", ";")
    }

    fn tags_of(tokens: Vec<CategorizedToken>) -> Vec<String> {
        tag(tokens).iter().map(|t| t.tag.to_string()).collect()
    }

    #[test]
    fn same_category_continues_and_change_breaks() {
        let tags = tags_of(vec![
            named(Category::Function),
            named(Category::Function),
            named(Category::Other),
            named(Category::Loop),
            named(Category::Loop),
        ]);
        assert_eq!(
            tags,
            vec!["B-function", "I-function", "B-other", "B-loop", "I-loop"]
        );
    }

    #[test]
    fn unnamed_token_breaks_the_run() {
        let tags = tags_of(vec![
            named(Category::Function),
            unnamed(),
            named(Category::Function),
        ]);
        assert_eq!(tags, vec!["B-function", "O-other", "B-function"]);
    }

    #[test]
    fn consecutive_unnamed_tokens_are_each_outside() {
        let tags = tags_of(vec![unnamed(), unnamed(), unnamed()]);
        assert_eq!(tags, vec!["O-other", "O-other", "O-other"]);
    }

    #[test]
    fn state_survives_across_calls() {
        let mut tagger = BioTagger::new();
        assert_eq!(
            tagger.next_tag(&named(Category::Loop)),
            BioTag::Begin(Category::Loop)
        );
        assert_eq!(tagger.current_category(), Some(Category::Loop));
        assert_eq!(
            tagger.next_tag(&named(Category::Loop)),
            BioTag::Inside(Category::Loop)
        );
        tagger.next_tag(&unnamed());
        assert_eq!(tagger.current_category(), None);
    }

    #[test]
    fn runs_group_chunks() {
        let tagged = tag(vec![
            named(Category::Function),
            named(Category::Function),
            unnamed(),
            named(Category::Loop),
        ]);
        let chunks = runs(tagged.iter().map(|t| t.tag));
        assert_eq!(
            chunks,
            vec![
                Run {
                    category: Category::Function,
                    start: 0,
                    len: 2
                },
                Run {
                    category: Category::Loop,
                    start: 3,
                    len: 1
                },
            ]
        );
        assert_eq!(chunks[0].end(), 2);
    }

    #[test]
    fn validation_accepts_tagger_output() {
        let tagged = tag(vec![
            named(Category::Variable),
            named(Category::Variable),
            unnamed(),
            named(Category::Variable),
            named(Category::Condition),
        ]);
        assert_eq!(validate_runs(&tagged), Ok(()));
    }

    #[test]
    fn validation_rejects_orphan_inside() {
        let mut tagged = tag(vec![named(Category::Loop), unnamed(), named(Category::Loop)]);
        tagged[2].tag = BioTag::Inside(Category::Loop);
        assert_eq!(
            validate_runs(&tagged),
            Err(RunViolation::OrphanInside {
                index: 2,
                tag: BioTag::Inside(Category::Loop)
            })
        );
    }

    #[test]
    fn validation_rejects_tagged_unnamed_tokens() {
        let mut tagged = tag(vec![unnamed()]);
        tagged[0].tag = BioTag::Begin(Category::Other);
        assert!(matches!(
            validate_runs(&tagged),
            Err(RunViolation::UnnamedInRun { index: 0, .. })
        ));
    }
}
