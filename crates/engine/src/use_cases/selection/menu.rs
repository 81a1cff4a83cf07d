//! The shared shape of every id-based choice.
//!
//! Each feature kind builds a [`Menu`] from the hero and catalogue: the
//! eligible candidates (borrowed), the committed selection (borrowed from the
//! feature payload) and the limit that applies. The menu then renders a
//! [`SelectionView`] or validates a replacement selection. Picks are cloned
//! out of the menu, so committed data never aliases catalogue entries.

use std::collections::HashSet;

use herobldr_domain::Feature;

use super::error::SelectionError;
use super::types::{PointBudget, SelectionOption, SelectionView, SelectionWarning};

pub(crate) struct Candidate<'v, T> {
    pub option: SelectionOption,
    /// Held by another feature on the hero
    pub excluded: bool,
    pub value: &'v T,
}

impl<'v, T> Candidate<'v, T> {
    pub fn new(option: SelectionOption, value: &'v T) -> Self {
        Self {
            option,
            excluded: false,
            value,
        }
    }

    pub fn excluded(mut self, excluded: bool) -> Self {
        self.excluded = excluded;
        self
    }
}

pub(crate) struct Committed<'v, T> {
    pub id: String,
    pub name: String,
    pub value: &'v T,
}

impl<'v, T> Committed<'v, T> {
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: &'v T) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Limit {
    /// At most this many picks.
    Count(u32),
    /// Picks whose summed cost stays within the budget. The budget also
    /// caps the number of picks.
    Points(u32),
}

/// How a selected-but-excluded entry is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overlap {
    AlreadyChosen,
    HeldElsewhere,
}

pub(crate) struct Menu<'v, T> {
    pub candidates: Vec<Candidate<'v, T>>,
    pub committed: Vec<Committed<'v, T>>,
    pub limit: Limit,
    pub placeholder: String,
    pub prompt: Option<String>,
    pub overlap: Overlap,
}

impl<'v, T: Clone> Menu<'v, T> {
    pub fn new(limit: Limit, placeholder: impl Into<String>) -> Self {
        Self {
            candidates: Vec::new(),
            committed: Vec::new(),
            limit,
            placeholder: placeholder.into(),
            prompt: None,
            overlap: Overlap::HeldElsewhere,
        }
    }

    pub fn with_prompt(mut self, prompt: Option<String>) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn with_overlap(mut self, overlap: Overlap) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    fn candidate(&self, id: &str) -> Option<&Candidate<'v, T>> {
        self.candidates.iter().find(|c| c.option.id == id)
    }

    /// Cost of an id under the point budget; stale ids cost nothing.
    fn cost(&self, id: &str) -> i64 {
        self.candidate(id)
            .and_then(|c| c.option.cost)
            .map(i64::from)
            .unwrap_or(0)
    }

    fn committed_ids(&self) -> Vec<&str> {
        self.committed.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn view(&self, feature: &Feature) -> SelectionView {
        let max = match self.limit {
            Limit::Count(count) | Limit::Points(count) => count as usize,
        };
        let mut view = SelectionView::new(feature, self.placeholder.clone(), max);
        view.prompt = self.prompt.clone();
        view.selected = self.committed.iter().map(|c| c.id.clone()).collect();

        let selected = self.committed_ids();
        view.options = self
            .candidates
            .iter()
            .map(|c| {
                let mut option = c.option.clone();
                option.disabled = c.excluded;
                option
            })
            .collect();

        if let Limit::Points(total) = self.limit {
            let used = selected.iter().map(|id| self.cost(id)).sum();
            let budget = PointBudget::new(total, used);
            for option in view.options.iter_mut() {
                let cost = option.cost.map(i64::from).unwrap_or(0);
                if !selected.contains(&option.id.as_str()) && cost > budget.left {
                    option.disabled = true;
                }
            }
            view.points = Some(budget);
        }

        view.warnings = self.warnings();
        view
    }

    /// Problems with the committed selection. Nothing is removed.
    pub fn warnings(&self) -> Vec<SelectionWarning> {
        self.committed
            .iter()
            .filter_map(|c| match self.candidate(&c.id) {
                None => Some(SelectionWarning::Stale {
                    id: c.id.clone(),
                    name: c.name.clone(),
                }),
                Some(candidate) if candidate.excluded => Some(match self.overlap {
                    Overlap::AlreadyChosen => SelectionWarning::AlreadyChosen {
                        name: c.name.clone(),
                    },
                    Overlap::HeldElsewhere => SelectionWarning::HeldElsewhere {
                        id: c.id.clone(),
                        name: c.name.clone(),
                    },
                }),
                Some(_) => None,
            })
            .collect()
    }

    /// Validate a replacement selection and copy out the picked values.
    ///
    /// Ids already committed are kept as they are, even when stale or now
    /// excluded. New ids must be eligible and not excluded.
    pub fn pick(&self, ids: Vec<String>) -> Result<Vec<T>, SelectionError> {
        let mut seen = HashSet::new();
        let ids: Vec<String> = ids.into_iter().filter(|id| seen.insert(id.clone())).collect();

        let max = match self.limit {
            Limit::Count(count) | Limit::Points(count) => count as usize,
        };
        if ids.len() > max {
            return Err(SelectionError::TooManySelections {
                selected: ids.len(),
                max,
            });
        }

        let mut picked = Vec::with_capacity(ids.len());
        for id in &ids {
            if let Some(committed) = self.committed.iter().find(|c| &c.id == id) {
                picked.push(committed.value.clone());
                continue;
            }
            match self.candidate(id) {
                None => return Err(SelectionError::UnknownOption(id.clone())),
                Some(candidate) if candidate.excluded => {
                    return Err(SelectionError::OptionDisabled(id.clone()))
                }
                Some(candidate) => picked.push(candidate.value.clone()),
            }
        }

        if let Limit::Points(total) = self.limit {
            let used: i64 = ids.iter().map(|id| self.cost(id)).sum();
            if used > i64::from(total) {
                return Err(SelectionError::BudgetExceeded {
                    used,
                    total: i64::from(total),
                });
            }
        }

        Ok(picked)
    }
}
