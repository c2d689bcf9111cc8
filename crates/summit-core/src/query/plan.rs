//! Query plan composition.
//!
//! A [`QueryPlan`] is the validated execution order for one request: the
//! conjunctive predicates in client order, the designated inequality field
//! (when any), and the sort keys. The store only accepts plans, never raw
//! filters, so the single-inequality-field rule is enforced before any
//! record is touched.

use crate::error::{Error, Result};
use crate::query::filter::{FilterSpec, RawFilter};
use crate::record::{FieldName, Record};
use crate::records::ConferenceField;

/// A validated, ordered query: predicates plus sort keys.
///
/// Built once per request and discarded after execution.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan<F> {
    filters: Vec<FilterSpec<F>>,
    inequality_field: Option<F>,
    sort: Vec<F>,
}

impl<F: FieldName> QueryPlan<F> {
    /// Composes a plan from validated filters.
    ///
    /// Scans the filters in input order: the first non-equality filter
    /// designates the inequality field, and any later non-equality filter
    /// on a different field fails with
    /// [`Error::MultipleInequalityFields`]. The sort order starts with the
    /// inequality field when one exists, followed by `tiebreak` as the
    /// stable secondary key.
    pub fn compose(filters: Vec<FilterSpec<F>>, tiebreak: F) -> Result<Self> {
        let mut inequality_field: Option<F> = None;
        for spec in &filters {
            if spec.op().is_equality() {
                continue;
            }
            match inequality_field {
                Some(designated) if designated != spec.field() => {
                    return Err(Error::MultipleInequalityFields);
                }
                _ => inequality_field = Some(spec.field()),
            }
        }

        let mut sort = Vec::with_capacity(2);
        if let Some(field) = inequality_field {
            sort.push(field);
        }
        if inequality_field != Some(tiebreak) {
            sort.push(tiebreak);
        }

        Ok(QueryPlan {
            filters,
            inequality_field,
            sort,
        })
    }

    /// A plan with no predicates, sorted by `tiebreak`.
    pub fn unfiltered(tiebreak: F) -> Self {
        QueryPlan {
            filters: Vec::new(),
            inequality_field: None,
            sort: vec![tiebreak],
        }
    }

    /// A plan with no predicates, sorted by `primary` then `tiebreak`.
    ///
    /// Used by range endpoints that keep their field ordering even when
    /// no bound was supplied.
    pub fn sorted_by(primary: F, tiebreak: F) -> Self {
        let mut sort = vec![primary];
        if primary != tiebreak {
            sort.push(tiebreak);
        }
        QueryPlan {
            filters: Vec::new(),
            inequality_field: None,
            sort,
        }
    }

    /// The plan's predicates, in client order.
    pub fn filters(&self) -> &[FilterSpec<F>] {
        &self.filters
    }

    /// The field designated to carry inequality operators, if any.
    pub fn inequality_field(&self) -> Option<F> {
        self.inequality_field
    }

    /// The sort keys, most significant first.
    pub fn sort(&self) -> &[F] {
        &self.sort
    }

    /// True when the record satisfies every predicate.
    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Record<Field = F>,
    {
        self.filters
            .iter()
            .all(|spec| spec.matches(&record.field(spec.field())))
    }
}

impl QueryPlan<ConferenceField> {
    /// Validates and composes a client conference query.
    ///
    /// This is the public filter surface: each raw filter resolves through
    /// the fixed field/operator tables, then the plan composes with the
    /// conference name as the stable secondary sort key.
    pub fn for_conferences(raw: &[RawFilter]) -> Result<Self> {
        let filters = raw
            .iter()
            .map(FilterSpec::from_raw)
            .collect::<Result<Vec<_>>>()?;
        Self::compose(filters, ConferenceField::Name)
    }
}
